//! In-memory record stores. Four independent append-only collections, one
//! RwLock each so actix worker threads can mutate them safely. Records are
//! never deleted or reordered; the only in-place mutation is a task's status.

use std::collections::BTreeMap;

use chrono::Utc;
use parking_lot::RwLock;
use serde::Serialize;

use crate::domain::TaskStatus;
use crate::models::mood::MoodRecord;
use crate::models::note::NoteRecord;
use crate::models::study_session::StudySessionRecord;
use crate::models::task::{TaskDraft, TaskRecord};
use crate::mood::Mood;

/// Aggregate statistics computed by scanning the stores
#[derive(Debug, Clone, Serialize)]
pub struct StudyStats {
    pub total_study_time_minutes: u64,
    pub subjects_breakdown: BTreeMap<String, u64>,
    pub task_completion_rate: f64,
    pub total_notes: usize,
    pub mood_tracking: MoodTally,
}

#[derive(Debug, Clone, Serialize)]
pub struct MoodTally {
    pub positive: usize,
    pub neutral: usize,
    pub negative: usize,
}

#[derive(Default)]
pub struct CompanionStore {
    notes: RwLock<Vec<NoteRecord>>,
    moods: RwLock<Vec<MoodRecord>>,
    tasks: RwLock<Vec<TaskRecord>>,
    sessions: RwLock<Vec<StudySessionRecord>>,
}

impl CompanionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_note(&self, record: NoteRecord) {
        self.notes.write().push(record);
    }

    pub fn append_mood(&self, record: MoodRecord) {
        self.moods.write().push(record);
    }

    pub fn append_session(&self, record: StudySessionRecord) {
        self.sessions.write().push(record);
    }

    /// Append a task, assigning its id from the store size. The write lock
    /// is held across the size read and the push so ids cannot collide
    /// under concurrent requests.
    pub fn add_task(&self, draft: TaskDraft) -> TaskRecord {
        let mut tasks = self.tasks.write();
        let record = TaskRecord {
            id: (tasks.len() + 1).to_string(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            subject: draft.subject,
            priority: draft.priority,
            status: draft.status,
            created_at: Utc::now(),
        };
        tasks.push(record.clone());
        record
    }

    /// Update the status of the first task matching `id` in place.
    /// Returns the updated task, or None when the id is unknown.
    pub fn update_task_status(&self, id: &str, status: TaskStatus) -> Option<TaskRecord> {
        let mut tasks = self.tasks.write();
        let task = tasks.iter_mut().find(|t| t.id == id)?;
        task.status = status;
        Some(task.clone())
    }

    pub fn notes(&self) -> Vec<NoteRecord> {
        self.notes.read().clone()
    }

    pub fn moods(&self) -> Vec<MoodRecord> {
        self.moods.read().clone()
    }

    pub fn tasks(&self) -> Vec<TaskRecord> {
        self.tasks.read().clone()
    }

    pub fn sessions(&self) -> Vec<StudySessionRecord> {
        self.sessions.read().clone()
    }

    /// Scan every store and compute the aggregate statistics. Read-only.
    pub fn stats(&self) -> StudyStats {
        let sessions = self.sessions.read();
        let tasks = self.tasks.read();
        let notes = self.notes.read();
        let moods = self.moods.read();

        let total_study_time_minutes: u64 =
            sessions.iter().map(|s| s.duration_minutes as u64).sum();

        let mut subjects_breakdown: BTreeMap<String, u64> = BTreeMap::new();
        for session in sessions.iter() {
            *subjects_breakdown
                .entry(session.subject.as_str().to_string())
                .or_insert(0) += session.duration_minutes as u64;
        }

        let completed = tasks.iter().filter(|t| t.status == TaskStatus::Completed).count();
        let task_completion_rate = if tasks.is_empty() {
            0.0
        } else {
            let rate = completed as f64 / tasks.len() as f64 * 100.0;
            (rate * 100.0).round() / 100.0
        };

        let mut tally = MoodTally { positive: 0, neutral: 0, negative: 0 };
        for record in moods.iter() {
            match record.mood {
                Mood::Happy => tally.positive += 1,
                Mood::Neutral => tally.neutral += 1,
                Mood::Sad => tally.negative += 1,
            }
        }

        StudyStats {
            total_study_time_minutes,
            subjects_breakdown,
            task_completion_rate,
            total_notes: notes.len(),
            mood_tracking: tally,
        }
    }
}
