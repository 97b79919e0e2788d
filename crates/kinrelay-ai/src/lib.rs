//! AI-assisted record organizing
//!
//! Sends the raw record to a text-generation API and returns
//! pre-formatted body text. Any failure - missing credentials, transport
//! errors, timeouts, malformed responses - degrades to "unavailable"
//! so the caller can fall back to the deterministic path.

mod claude;
mod error;
mod openai;
pub mod prompt;
pub mod provider;

pub use error::{AiError, Result};
pub use prompt::{build_prompt, SYSTEM_PROMPT};
pub use provider::AiProvider;

use async_trait::async_trait;
use kinrelay_core::{AiConfig, Record};
use kinrelay_format::Organizer;
use tracing::{error, info};

use claude::ClaudeClient;
use openai::OpenAiClient;

/// Heading placed above AI-organized output in the final message
pub const AI_SECTION_HEADING: &str = "【AIで整理されたデータ】";

enum Backend {
    OpenAi(OpenAiClient),
    Claude(ClaudeClient),
}

/// Organizer backed by an external text-generation API.
///
/// Built without credentials it stays permanently unavailable; every
/// [`Organizer::organize`] call then returns `None`.
pub struct AiOrganizer {
    backend: Option<Backend>,
    provider: AiProvider,
}

impl AiOrganizer {
    /// Build from configuration. A missing API key for the selected
    /// provider disables the organizer instead of failing.
    pub fn from_config(config: &AiConfig) -> Self {
        let provider = AiProvider::from_config(&config.provider);
        let backend = config.selected_key().map(|key| match provider {
            AiProvider::OpenAi => Backend::OpenAi(OpenAiClient::new(key.to_string())),
            AiProvider::Claude => Backend::Claude(ClaudeClient::new(key.to_string())),
        });

        if backend.is_none() {
            info!(
                "No API key configured for AI provider {}, AI organizing disabled",
                provider
            );
        }

        Self { backend, provider }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub fn provider(&self) -> AiProvider {
        self.provider
    }
}

#[async_trait]
impl Organizer for AiOrganizer {
    async fn organize(&self, record: &Record) -> Option<String> {
        let backend = self.backend.as_ref()?;
        let user_prompt = build_prompt(record);

        let result = match backend {
            Backend::OpenAi(client) => client.chat(SYSTEM_PROMPT, &user_prompt).await,
            Backend::Claude(client) => client.chat(SYSTEM_PROMPT, &user_prompt).await,
        };

        match result {
            Ok(text) if !text.trim().is_empty() => {
                let mut body = format!("{}\n{}", AI_SECTION_HEADING, text);
                if !body.ends_with('\n') {
                    body.push('\n');
                }
                Some(body)
            }
            Ok(_) => {
                error!("{} returned an empty organize response", self.provider);
                None
            }
            Err(e) => {
                error!("AI organize via {} failed: {}", self.provider, e);
                None
            }
        }
    }
}
