//! Task endpoints: creation with store-assigned ids, and status updates.

use actix_web::{HttpResponse, web};

use crate::AppState;
use crate::domain::{Subject, TaskStatus};
use crate::error::ApiError;
use crate::models::task::{AddTaskRequest, TaskDraft, UpdateTaskRequest};

async fn add_task(
    data: web::Data<AppState>,
    body: web::Json<AddTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    let subject = Subject::from_str(&req.subject).ok_or_else(|| {
        log::debug!("[Tasks] Rejected unknown subject {:?}", req.subject);
        ApiError::validation(format!("Invalid subject. Choose from: {}", Subject::allowed()))
    })?;

    let record = data.store.add_task(TaskDraft {
        title: req.title,
        description: req.description,
        due_date: req.due_date,
        subject,
        priority: req.priority,
        status: req.status,
    });

    log::info!("[Tasks] Added task {} for {}", record.id, subject.as_str());

    // The task carries its own lifecycle `status` field, so the stored
    // record is nested rather than flattened next to the confirmation.
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "Task added ✅",
        "task": record,
    })))
}

async fn update_task_status(
    data: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateTaskRequest>,
) -> Result<HttpResponse, ApiError> {
    let task_id = path.into_inner();

    let status = TaskStatus::from_str(&body.status).ok_or_else(|| {
        log::debug!("[Tasks] Rejected unknown status {:?}", body.status);
        ApiError::validation("Invalid status")
    })?;

    let task = data
        .store
        .update_task_status(&task_id, status)
        .ok_or_else(|| {
            log::warn!("[Tasks] Update for unknown task id {}", task_id);
            ApiError::not_found("Task not found")
        })?;

    log::info!("[Tasks] Task {} moved to {}", task.id, status.as_str());

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Task status updated",
        "task": task,
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/add_task/").route(web::post().to(add_task)));
    cfg.service(
        web::resource("/update_task_status/{task_id}").route(web::put().to(update_task_status)),
    );
}
