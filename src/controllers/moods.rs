//! Mood endpoint: scores the text, classifies it, logs the entry.

use actix_web::{HttpResponse, web};
use chrono::Utc;

use crate::AppState;
use crate::error::ApiError;
use crate::models::mood::{MoodCheckRequest, MoodRecord};
use crate::mood;

async fn mood_check(
    data: web::Data<AppState>,
    body: web::Json<MoodCheckRequest>,
) -> Result<HttpResponse, ApiError> {
    let req = body.into_inner();

    if req.text.trim().is_empty() {
        log::debug!("[Moods] Rejected empty mood text");
        return Err(ApiError::validation("Text cannot be empty"));
    }

    let score = data.sentiment.analyze(&req.text);
    let (detected, tip) = mood::classify(score, &req.text);

    let record = MoodRecord {
        text: req.text,
        mood: detected,
        tip,
        created_at: Utc::now(),
    };
    data.store.append_mood(record.clone());

    log::info!("[Moods] Logged {} (polarity {:.2})", detected.label(), score.polarity);

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "mood": record.mood,
        "tip": record.tip,
        "text": record.text,
    })))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/mood_check/").route(web::post().to(mood_check)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentiment::{SentimentAnalyzer, SentimentScore};
    use crate::store::CompanionStore;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use std::sync::Arc;

    /// Analyzer stub returning a fixed score, for exercising exact
    /// classification boundaries through the endpoint
    struct FixedScore(SentimentScore);

    impl SentimentAnalyzer for FixedScore {
        fn analyze(&self, _text: &str) -> SentimentScore {
            self.0
        }
    }

    fn state_with(polarity: f64, subjectivity: f64) -> AppState {
        AppState {
            store: Arc::new(CompanionStore::new()),
            sentiment: Arc::new(FixedScore(SentimentScore { polarity, subjectivity })),
        }
    }

    #[actix_web::test]
    async fn test_polarity_at_boundary_is_neutral() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state_with(0.2, 0.9)))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/mood_check/")
            .set_json(serde_json::json!({ "text": "on the fence today" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["mood"], "😐 Neutral");
        assert_eq!(body["text"], "on the fence today");
    }

    #[actix_web::test]
    async fn test_happy_mood_is_logged() {
        let state = state_with(0.8, 0.9);
        let store = Arc::clone(&state.store);
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/mood_check/")
            .set_json(serde_json::json!({ "text": "aced the midterm" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["mood"], "😊 Happy");

        let moods = store.moods();
        assert_eq!(moods.len(), 1);
        assert_eq!(moods[0].tip, body["tip"].as_str().unwrap());
    }

    #[actix_web::test]
    async fn test_empty_text_is_rejected_before_logging() {
        let state = state_with(0.8, 0.9);
        let store = Arc::clone(&state.store);
        let app = test::init_service(
            App::new().app_data(web::Data::new(state)).configure(config),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/mood_check/")
            .set_json(serde_json::json!({ "text": "" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Text cannot be empty");
        assert!(store.moods().is_empty());
    }
}
