//! Note endpoint: validates text and category, derives keywords, appends.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::AppState;
use crate::domain::NoteCategory;
use crate::error::ApiError;
use crate::keywords::extract_keywords;
use crate::models::note::{AddNoteRequest, NoteRecord};

async fn add_note(
    data: web::Data<AppState>,
    body: web::Json<AddNoteRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    if req.text.trim().is_empty() {
        log::debug!("[Notes] Rejected empty note text");
        return Err(ApiError::validation("Note cannot be empty"));
    }

    let category = NoteCategory::from_str(&req.category).ok_or_else(|| {
        log::debug!("[Notes] Rejected unknown category {:?}", req.category);
        ApiError::validation(format!(
            "Invalid category. Choose from: {}",
            NoteCategory::allowed()
        ))
    })?;

    let record = NoteRecord {
        keywords: extract_keywords(&req.text),
        text: req.text,
        category,
        priority: req.priority,
        created_at: Utc::now(),
    };
    data.store.append_note(record.clone());

    log::info!("[Notes] Added {} note ({} keywords)", category.as_str(), record.keywords.len());

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "Note added ✅",
        "keywords": record.keywords,
        "text": record.text,
        "category": record.category,
        "priority": record.priority,
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/add_note/").route(web::post().to(add_note)));
}
