use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Subject;

/// A recorded study session. `completed_goals` is stored as submitted; it is
/// not checked against `goals`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySessionRecord {
    pub subject: Subject,
    pub duration_minutes: u32,
    pub goals: Vec<String>,
    pub completed_goals: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// Request to record a study session
#[derive(Debug, Clone, Deserialize)]
pub struct StudySessionRequest {
    pub subject: String,
    pub duration: i64,
    pub goals: Vec<String>,
    #[serde(default)]
    pub completed_goals: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_goals_default_empty() {
        let req: StudySessionRequest = serde_json::from_str(
            r#"{"subject": "Biology", "duration": 45, "goals": ["read chapter 3"]}"#,
        )
        .unwrap();
        assert!(req.completed_goals.is_empty());
    }
}
