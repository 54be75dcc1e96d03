use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::NoteCategory;

/// A stored note with its derived keywords
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteRecord {
    pub text: String,
    pub keywords: Vec<String>,
    pub category: NoteCategory,
    pub priority: u8,
    pub created_at: DateTime<Utc>,
}

/// Request to add a note
#[derive(Debug, Clone, Deserialize)]
pub struct AddNoteRequest {
    pub text: String,
    pub category: String,
    #[serde(default = "default_priority")]
    pub priority: u8,
}

fn default_priority() -> u8 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_defaults_to_one() {
        let req: AddNoteRequest =
            serde_json::from_str(r#"{"text": "review notes", "category": "Homework"}"#).unwrap();
        assert_eq!(req.priority, 1);
    }
}
