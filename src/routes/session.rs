use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::models::{DraftRequest, ErrorResponse, GestureRequest, HealthResponse, MessagesResponse};
use crate::services::SessionRuntime;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub runtime: SessionRuntime,
}

/// Configure all review-session routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/profiles", web::get().to(list_profiles))
        .route("/session", web::get().to(get_session))
        .route("/session/gesture/start", web::post().to(gesture_start))
        .route("/session/gesture/move", web::post().to(gesture_move))
        .route("/session/gesture/end", web::post().to(gesture_end))
        .route("/session/select", web::post().to(select))
        .route("/session/reject", web::post().to(reject))
        .route("/session/undo", web::post().to(undo))
        .route("/session/reset", web::post().to(reset))
        .route("/session/message/open", web::post().to(message_open))
        .route("/session/message/draft", web::put().to(message_draft))
        .route("/session/message/send", web::post().to(message_send))
        .route("/session/message/close", web::post().to(message_close))
        .route("/session/messages", web::get().to(list_messages));
}

fn validation_error(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let profiles = state.runtime.profiles().await.len();

    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        profiles,
        timestamp: chrono::Utc::now(),
    })
}

/// GET /api/v1/profiles
async fn list_profiles(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.profiles().await)
}

/// GET /api/v1/session
async fn get_session(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.snapshot().await)
}

/// Pointer or touch down
///
/// POST /api/v1/session/gesture/start
///
/// Request body:
/// ```json
/// { "x": 240.0 }
/// ```
async fn gesture_start(
    state: web::Data<AppState>,
    req: web::Json<GestureRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }
    HttpResponse::Ok().json(state.runtime.start_gesture(req.x).await)
}

/// POST /api/v1/session/gesture/move
async fn gesture_move(
    state: web::Data<AppState>,
    req: web::Json<GestureRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }
    HttpResponse::Ok().json(state.runtime.move_gesture(req.x).await)
}

/// Pointer or touch up, also sent when the pointer leaves the card
///
/// POST /api/v1/session/gesture/end
async fn gesture_end(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.end_gesture().await)
}

async fn select(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.select().await)
}

async fn reject(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.reject().await)
}

async fn undo(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.undo().await)
}

/// Start over: clears decisions and history, keeps sent messages
///
/// POST /api/v1/session/reset
async fn reset(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.reset().await)
}

async fn message_open(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.open_message().await)
}

/// Replace the message draft
///
/// PUT /api/v1/session/message/draft
///
/// Request body:
/// ```json
/// { "text": "Hi, are you open to a chat?" }
/// ```
async fn message_draft(
    state: web::Data<AppState>,
    req: web::Json<DraftRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_error(errors);
    }
    let text = req.into_inner().text;
    HttpResponse::Ok().json(state.runtime.update_draft(text).await)
}

async fn message_send(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.send_message().await)
}

async fn message_close(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.runtime.close_message().await)
}

/// GET /api/v1/session/messages
async fn list_messages(state: web::Data<AppState>) -> impl Responder {
    let messages = state.runtime.messages().await;
    HttpResponse::Ok().json(MessagesResponse {
        count: messages.len(),
        messages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ReviewSession;
    use crate::models::SessionSnapshot;
    use crate::services::{sample_profiles, Timing};
    use actix_web::{test, App};

    fn state() -> web::Data<AppState> {
        web::Data::new(AppState {
            runtime: SessionRuntime::new(ReviewSession::new(sample_profiles()), Timing::immediate()),
        })
    }

    #[actix_web::test]
    async fn test_swipe_right_selects() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::post()
            .uri("/session/gesture/start")
            .set_json(serde_json::json!({ "x": 100.0 }))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::post()
            .uri("/session/gesture/move")
            .set_json(serde_json::json!({ "x": 260.0 }))
            .to_request();
        let snap: SessionSnapshot = test::call_and_read_body_json(&app, req).await;
        assert!(snap.gesture.dragging);
        assert_eq!(snap.gesture.offset, 160.0);

        let req = test::TestRequest::post().uri("/session/gesture/end").to_request();
        let snap: SessionSnapshot = test::call_and_read_body_json(&app, req).await;
        assert_eq!(snap.selected, vec![1]);
        assert_eq!(snap.cursor, 1);
    }

    #[actix_web::test]
    async fn test_oversized_draft_rejected() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::put()
            .uri("/session/message/draft")
            .set_json(serde_json::json!({ "text": "x".repeat(2001) }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_health_reports_deck_size() {
        let app = test::init_service(App::new().app_data(state()).configure(configure)).await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let health: HealthResponse = test::call_and_read_body_json(&app, req).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.profiles, 5);
    }
}
