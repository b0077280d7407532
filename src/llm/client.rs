use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, CreateChatCompletionRequestArgs,
    },
};
use async_trait::async_trait;
use tracing::debug;

/// The one external operation the session controller depends on: turn a
/// system+user prompt pair into generated text. Transport, provider and
/// model are implementation details behind this trait.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete_chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: LlmConfig) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(config.api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete_chat(&self, system_prompt: &str, user_prompt: &str) -> Result<String> {
        debug!("Creating chat completion with model {}", self.model);

        let messages: Vec<ChatCompletionRequestMessage> = vec![
            ChatCompletionRequestSystemMessageArgs::default()
                .content(ChatCompletionRequestSystemMessageContent::Text(
                    system_prompt.to_string(),
                ))
                .build()?
                .into(),
            ChatCompletionRequestUserMessageArgs::default()
                .content(ChatCompletionRequestUserMessageContent::Text(
                    user_prompt.to_string(),
                ))
                .build()?
                .into(),
        ];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .build()?;

        let response = self.client.chat().create(request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::request("completion response contained no choices"))?;

        choice
            .message
            .content
            .ok_or_else(|| Error::request("completion response contained no content"))
    }
}
