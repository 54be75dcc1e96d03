//! Fixed reference enumerations: study subjects, note categories, and task
//! status. Wire strings are part of the API contract and must not drift.

use serde::{Deserialize, Serialize};

/// Study subject a task or session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Subject {
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    History,
    Literature,
    #[serde(rename = "Computer Science")]
    ComputerScience,
    Economics,
    Languages,
    Other,
}

impl Subject {
    pub const ALL: [Subject; 10] = [
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::History,
        Subject::Literature,
        Subject::ComputerScience,
        Subject::Economics,
        Subject::Languages,
        Subject::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::History => "History",
            Subject::Literature => "Literature",
            Subject::ComputerScience => "Computer Science",
            Subject::Economics => "Economics",
            Subject::Languages => "Languages",
            Subject::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    /// Comma-joined list of valid subjects, for validation messages
    pub fn allowed() -> String {
        Self::ALL.map(|v| v.as_str()).join(", ")
    }
}

/// Category a note is filed under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoteCategory {
    #[serde(rename = "Lecture Notes")]
    LectureNotes,
    #[serde(rename = "Study Tips")]
    StudyTips,
    #[serde(rename = "Research Ideas")]
    ResearchIdeas,
    Questions,
    Homework,
    #[serde(rename = "Project Ideas")]
    ProjectIdeas,
    Other,
}

impl NoteCategory {
    pub const ALL: [NoteCategory; 7] = [
        NoteCategory::LectureNotes,
        NoteCategory::StudyTips,
        NoteCategory::ResearchIdeas,
        NoteCategory::Questions,
        NoteCategory::Homework,
        NoteCategory::ProjectIdeas,
        NoteCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteCategory::LectureNotes => "Lecture Notes",
            NoteCategory::StudyTips => "Study Tips",
            NoteCategory::ResearchIdeas => "Research Ideas",
            NoteCategory::Questions => "Questions",
            NoteCategory::Homework => "Homework",
            NoteCategory::ProjectIdeas => "Project Ideas",
            NoteCategory::Other => "Other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|v| v.as_str() == s)
    }

    pub fn allowed() -> String {
        Self::ALL.map(|v| v.as_str()).join(", ")
    }
}

/// Task lifecycle status. Transitions only happen via an explicit update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "completed")]
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(TaskStatus::Pending),
            "in-progress" => Some(TaskStatus::InProgress),
            "completed" => Some(TaskStatus::Completed),
            _ => None,
        }
    }
}
