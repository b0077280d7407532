use crate::{
    preferences::{PreferenceField, Preferences},
    prompt::FeedbackIntent,
    session::SessionState,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct SetPreferenceRequest {
    pub field: PreferenceField,
    pub value: String,
}

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub intent: FeedbackIntent,
}

/// Snapshot of the live session as seen by the UI. `recipe` is present
/// only in success, `error` only in error.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipe: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub preferences: Preferences,
}

impl SessionResponse {
    pub fn new(state: &SessionState, preferences: &Preferences) -> Self {
        let (recipe, error) = match state {
            SessionState::Success(text) => (Some(text.clone()), None),
            SessionState::Error(message) => (None, Some(message.clone())),
            SessionState::Idle | SessionState::Loading(_) => (None, None),
        };

        Self {
            status: state.name(),
            recipe,
            error,
            preferences: preferences.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
