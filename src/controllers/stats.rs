//! Aggregate statistics endpoint. Read-only scan of every store.

use actix_web::{HttpResponse, Responder, web};

use crate::AppState;

async fn get_study_stats(data: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(data.store.stats())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/study_stats/").route(web::get().to(get_study_stats)));
}
