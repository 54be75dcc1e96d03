use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::mood::Mood;

/// A logged mood check with the tip that was handed back
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodRecord {
    pub text: String,
    pub mood: Mood,
    pub tip: String,
    pub created_at: DateTime<Utc>,
}

/// Request to analyze and log a mood
#[derive(Debug, Clone, Deserialize)]
pub struct MoodCheckRequest {
    pub text: String,
}
