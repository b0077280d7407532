use async_trait::async_trait;
use souschef::{Error, Result, llm::LlmClient};
use std::sync::{Arc, Mutex};

/// Mock LLM client for testing.
///
/// Responses are consumed in order; recorded requests are shared through
/// `Arc` so tests can keep a handle after boxing the mock.
#[derive(Debug)]
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<String>>>,
    pub requests: Arc<Mutex<Vec<(String, String)>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_responses(self, responses: Vec<&str>) -> Self {
        *self.responses.lock().unwrap() = responses.into_iter().map(String::from).collect();
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    /// Handle onto the recorded (system, user) prompt pairs.
    pub fn request_log(&self) -> Arc<Mutex<Vec<(String, String)>>> {
        self.requests.clone()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete_chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        self.requests
            .lock()
            .unwrap()
            .push((system_prompt.to_string(), user_prompt.to_string()));

        if let Some(ref error) = self.error {
            return Err(Error::request(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::request("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}
