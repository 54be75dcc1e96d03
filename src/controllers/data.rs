//! Full data dump: every store plus the reference enumerations.

use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;

use crate::AppState;
use crate::domain::{NoteCategory, Subject};
use crate::models::mood::MoodRecord;
use crate::models::note::NoteRecord;
use crate::models::study_session::StudySessionRecord;
use crate::models::task::TaskRecord;

#[derive(Debug, Serialize)]
struct AllDataResponse {
    reminders: Vec<NoteRecord>,
    mood_logs: Vec<MoodRecord>,
    tasks: Vec<TaskRecord>,
    study_sessions: Vec<StudySessionRecord>,
    available_subjects: Vec<&'static str>,
    note_categories: Vec<&'static str>,
}

async fn all_data(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(AllDataResponse {
        reminders: data.store.notes(),
        mood_logs: data.store.moods(),
        tasks: data.store.tasks(),
        study_sessions: data.store.sessions(),
        available_subjects: Subject::ALL.map(|s| s.as_str()).to_vec(),
        note_categories: NoteCategory::ALL.map(|c| c.as_str()).to_vec(),
    })
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/all_data/").route(web::get().to(all_data)));
}
