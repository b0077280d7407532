use super::types::{ErrorResponse, FeedbackRequest, SessionResponse, SetPreferenceRequest};
use crate::session::RecipeSession;
use axum::{extract::State, http::StatusCode, response::Json};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Mutex<RecipeSession>>,
}

pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.session.lock().await;
    Json(SessionResponse::new(session.state(), session.preferences()))
}

pub async fn set_preference(
    State(state): State<AppState>,
    Json(request): Json<SetPreferenceRequest>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    if !request.field.is_allowed(&request.value) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: format!(
                    "Invalid value '{}' for field '{}'",
                    request.value,
                    request.field.name()
                ),
            }),
        ));
    }

    let mut session = state.session.lock().await;
    session.set_preference(request.field, request.value);

    Ok(Json(SessionResponse::new(
        session.state(),
        session.preferences(),
    )))
}

pub async fn generate(
    State(state): State<AppState>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received recipe generation request");

    let mut session = state.session.lock().await;
    if let Err(e) = session.generate().await {
        error!("Failed to drive generation: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Processing error: {}", e),
            }),
        ));
    }

    Ok(Json(SessionResponse::new(
        session.state(),
        session.preferences(),
    )))
}

pub async fn feedback(
    State(state): State<AppState>,
    Json(request): Json<FeedbackRequest>,
) -> Result<Json<SessionResponse>, (StatusCode, Json<ErrorResponse>)> {
    info!("Received feedback: {:?}", request.intent);

    let mut session = state.session.lock().await;
    if let Err(e) = session.send_feedback(request.intent).await {
        error!("Failed to drive feedback regeneration: {}", e);
        return Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: format!("Processing error: {}", e),
            }),
        ));
    }

    Ok(Json(SessionResponse::new(
        session.state(),
        session.preferences(),
    )))
}
