use super::fsm::{SessionEvent, SessionMachine, SessionState};
use crate::{
    Result,
    config::LlmConfig,
    llm::{LlmClient, OpenAiClient},
    preferences::{PreferenceField, Preferences},
    prompt::{FeedbackIntent, SYSTEM_PROMPT, build_prompt},
};
use tracing::{debug, error, info};

/// Owns the preferences, the session state machine and the completion
/// client. Exclusive access (`&mut self`) plus the machine's transition
/// table keeps at most one completion call in flight.
pub struct RecipeSession {
    llm_client: Box<dyn LlmClient>,
    machine: SessionMachine,
    preferences: Preferences,
}

impl RecipeSession {
    pub fn new(llm_config: LlmConfig) -> Self {
        Self::with_client(Box::new(OpenAiClient::new(llm_config)))
    }

    pub fn with_client(llm_client: Box<dyn LlmClient>) -> Self {
        Self {
            llm_client,
            machine: SessionMachine::new(),
            preferences: Preferences::new(),
        }
    }

    pub fn state(&self) -> &SessionState {
        self.machine.state()
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Updates one preference field. Never dispatches a request.
    pub fn set_preference(&mut self, field: PreferenceField, value: impl Into<String>) {
        let value = value.into();
        debug!("Setting preference {} = {:?}", field.name(), value);
        self.preferences.set_field(field, value);
    }

    /// Requests a fresh recipe for the current preferences. Allowed from
    /// idle, success and error; ignored while a request is in flight.
    pub async fn generate(&mut self) -> Result<()> {
        if self.machine.is_loading() {
            debug!("generate ignored: a completion request is already in flight");
            return Ok(());
        }

        self.run_request(SessionEvent::Generate, None).await
    }

    /// Requests a replacement recipe carrying the feedback clause. Only
    /// reachable from success; ignored in every other state.
    pub async fn send_feedback(&mut self, intent: FeedbackIntent) -> Result<()> {
        if !matches!(self.machine.state(), SessionState::Success(_)) {
            debug!("feedback ignored in state {}", self.machine.state().name());
            return Ok(());
        }

        self.run_request(SessionEvent::Feedback(intent), Some(intent))
            .await
    }

    async fn run_request(
        &mut self,
        event: SessionEvent,
        feedback: Option<FeedbackIntent>,
    ) -> Result<()> {
        self.machine.transition(event)?;

        let prompt = build_prompt(&self.preferences, feedback);
        debug!("Requesting completion for prompt: {}", prompt);

        match self.llm_client.complete_chat(SYSTEM_PROMPT, &prompt).await {
            Ok(text) => {
                info!("✅ Completion succeeded ({} bytes)", text.len());
                self.machine
                    .transition(SessionEvent::CompletionSucceeded(text))?;
            }
            Err(e) => {
                // The cause stays in the log; the user sees a fixed message.
                error!("❌ Completion request failed: {}", e);
                self.machine.transition(SessionEvent::CompletionFailed)?;
            }
        }

        Ok(())
    }
}
