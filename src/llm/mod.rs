mod client;

pub use client::{LlmClient, OpenAiClient};
