//! Study session endpoint: validates subject and duration, appends the
//! session, and hands back a tip.

use actix_web::{HttpResponse, web};
use chrono::Utc;
use serde::Serialize;

use crate::AppState;
use crate::domain::Subject;
use crate::error::ApiError;
use crate::models::study_session::{StudySessionRecord, StudySessionRequest};
use crate::tips;

const MIN_DURATION_MINUTES: i64 = 5;
const MAX_DURATION_MINUTES: i64 = 480;

#[derive(Debug, Serialize)]
struct SessionResponse {
    status: &'static str,
    tip: &'static str,
    #[serde(flatten)]
    session: StudySessionRecord,
}

async fn record_study_session(
    data: web::Data<AppState>,
    body: web::Json<StudySessionRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    let subject = Subject::from_str(&req.subject).ok_or_else(|| {
        log::debug!("[Sessions] Rejected unknown subject {:?}", req.subject);
        ApiError::validation(format!("Invalid subject. Choose from: {}", Subject::allowed()))
    })?;

    if !(MIN_DURATION_MINUTES..=MAX_DURATION_MINUTES).contains(&req.duration) {
        log::debug!("[Sessions] Rejected out-of-range duration {}", req.duration);
        return Err(ApiError::validation("Duration must be between 5 and 480 minutes"));
    }

    let record = StudySessionRecord {
        subject,
        duration_minutes: req.duration as u32,
        goals: req.goals,
        completed_goals: req.completed_goals,
        created_at: Utc::now(),
    };
    data.store.append_session(record.clone());

    let tip = tips::session_tip(record.duration_minutes, &mut rand::thread_rng());

    log::info!(
        "[Sessions] Recorded {} min of {}",
        record.duration_minutes,
        subject.as_str()
    );

    Ok(HttpResponse::Ok().json(SessionResponse {
        status: "Study session recorded ✅",
        tip,
        session: record,
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/study_session/").route(web::post().to(record_study_session)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::LexiconAnalyzer;
    use crate::store::CompanionStore;
    use crate::tips::{FOCUS_TIPS, MEMORY_TIPS};
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::sync::Arc;

    fn state() -> AppState {
        AppState {
            store: Arc::new(CompanionStore::new()),
            sentiment: Arc::new(LexiconAnalyzer::new()),
        }
    }

    fn session_body(subject: &str, duration: i64) -> serde_json::Value {
        serde_json::json!({
            "subject": subject,
            "duration": duration,
            "goals": ["finish worksheet"]
        })
    }

    #[actix_web::test]
    async fn test_long_session_gets_pomodoro_tip() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state())).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/study_session/")
            .set_json(session_body("Chemistry", 150))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "Study session recorded ✅");
        assert_eq!(body["tip"], FOCUS_TIPS[1]);
        assert_eq!(body["duration_minutes"], 150);
        assert_eq!(body["completed_goals"], serde_json::json!([]));
    }

    #[actix_web::test]
    async fn test_short_session_gets_a_memory_tip() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state())).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/study_session/")
            .set_json(session_body("Chemistry", 60))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        let tip = body["tip"].as_str().unwrap();
        assert!(MEMORY_TIPS.contains(&tip), "unexpected tip: {tip}");
    }

    #[actix_web::test]
    async fn test_duration_bounds_are_inclusive() {
        let app = test::init_service(
            App::new().app_data(web::Data::new(state())).configure(config),
        )
        .await;

        for duration in [5, 480] {
            let req = test::TestRequest::post()
                .uri("/study_session/")
                .set_json(session_body("History", duration))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::OK, "duration {duration} should be accepted");
        }

        for duration in [4, 481, 0, -10] {
            let req = test::TestRequest::post()
                .uri("/study_session/")
                .set_json(session_body("History", duration))
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "duration {duration} should be rejected");

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Duration must be between 5 and 480 minutes");
        }
    }

    #[actix_web::test]
    async fn test_invalid_subject_rejected_before_append() {
        let state = state();
        let store = Arc::clone(&state.store);
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/study_session/")
            .set_json(session_body("Alchemy", 60))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert!(store.sessions().is_empty());
    }
}
