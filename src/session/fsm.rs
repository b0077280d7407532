use crate::{Error, Result, prompt::FeedbackIntent};
use tracing::{debug, info, warn};

/// Which kind of request is in flight. The feedback path reports failure
/// with a different user-facing message than the initial path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Initial,
    Feedback,
}

impl RequestKind {
    pub fn failure_message(&self) -> &'static str {
        match self {
            Self::Initial => "Failed to generate recipe. Please try again.",
            Self::Feedback => "Failed to generate new recipe.",
        }
    }
}

// Session states. Result text lives only in Success and the user-facing
// message only in Error, so entering Loading discards both by construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Loading(RequestKind),
    Success(String),
    Error(String),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading(_) => "loading",
            Self::Success(_) => "success",
            Self::Error(_) => "error",
        }
    }
}

// Session events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    Generate,
    Feedback(FeedbackIntent),
    CompletionSucceeded(String),
    CompletionFailed,
}

impl SessionEvent {
    fn name(&self) -> &'static str {
        match self {
            Self::Generate => "generate",
            Self::Feedback(_) => "feedback",
            Self::CompletionSucceeded(_) => "completion_succeeded",
            Self::CompletionFailed => "completion_failed",
        }
    }
}

pub struct SessionMachine {
    state: SessionState,
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionMachine {
    pub fn new() -> Self {
        Self {
            state: SessionState::Idle,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, SessionState::Loading(_))
    }

    pub fn transition(&mut self, event: SessionEvent) -> Result<()> {
        debug!(
            "🔄 Session processing event {} in state {}",
            event.name(),
            self.state.name()
        );

        let new_state = match (&self.state, &event) {
            (
                SessionState::Idle | SessionState::Success(_) | SessionState::Error(_),
                SessionEvent::Generate,
            ) => SessionState::Loading(RequestKind::Initial),
            (SessionState::Success(_), SessionEvent::Feedback(_)) => {
                SessionState::Loading(RequestKind::Feedback)
            }
            (SessionState::Loading(_), SessionEvent::CompletionSucceeded(text)) => {
                SessionState::Success(text.clone())
            }
            (SessionState::Loading(kind), SessionEvent::CompletionFailed) => {
                SessionState::Error(kind.failure_message().to_string())
            }
            _ => {
                warn!(
                    "❌ Invalid session transition from {} with event {}",
                    self.state.name(),
                    event.name()
                );
                return Err(Error::InvalidTransition {
                    current: self.state.name().to_string(),
                    requested: event.name().to_string(),
                });
            }
        };

        info!(
            "🎯 Session state transition: {} -> {} (event: {})",
            self.state.name(),
            new_state.name(),
            event.name()
        );

        self.state = new_state;
        Ok(())
    }
}
