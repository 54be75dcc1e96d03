//! Mood classification from a sentiment score plus substring checks on the
//! raw text. Thresholds are strict: polarity exactly at 0.2 or -0.2 (and
//! subjectivity exactly at 0.5) falls through to the else branch.

use serde::{Deserialize, Serialize};

use crate::sentiment::SentimentScore;
use crate::tips::{FOCUS_TIPS, MEMORY_TIPS, MOTIVATION_TIPS};

/// Detected mood, serialized with its display label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mood {
    #[serde(rename = "😊 Happy")]
    Happy,
    #[serde(rename = "😞 Sad")]
    Sad,
    #[serde(rename = "😐 Neutral")]
    Neutral,
}

impl Mood {
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "😊 Happy",
            Mood::Sad => "😞 Sad",
            Mood::Neutral => "😐 Neutral",
        }
    }
}

/// Classify a mood and pick a matching study tip.
pub fn classify(score: SentimentScore, text: &str) -> (Mood, String) {
    if score.polarity > 0.2 {
        let tip = if score.subjectivity > 0.5 {
            format!("Great mood! {}", FOCUS_TIPS[0])
        } else {
            format!("Excellent! {}", MOTIVATION_TIPS[2])
        };
        (Mood::Happy, tip)
    } else if score.polarity < -0.2 {
        let lower = text.to_lowercase();
        let tip = if lower.contains("tired") || lower.contains("exhausted") {
            format!("Take a refreshing break! {}", FOCUS_TIPS[3])
        } else {
            format!("It's okay to feel down. {}", MOTIVATION_TIPS[1])
        };
        (Mood::Sad, tip)
    } else {
        (Mood::Neutral, format!("Stay focused! {}", MEMORY_TIPS[0]))
    }
}
