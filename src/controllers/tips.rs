//! Study-tip catalog endpoint.

use actix_web::{HttpResponse, web};

use crate::error::ApiError;
use crate::tips::TipCategory;

async fn get_study_tips(path: web::Path<String>) -> Result<HttpResponse, ApiError> {
    let raw = path.into_inner();

    let category = TipCategory::from_str(&raw).ok_or_else(|| {
        log::debug!("[Tips] Rejected unknown tip category {:?}", raw);
        ApiError::validation(format!(
            "Invalid category. Choose from: {}",
            TipCategory::allowed()
        ))
    })?;

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "category": category.as_str(),
        "tips": category.tips(),
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/study_tips/{category}").route(web::get().to(get_study_tips)));
}
