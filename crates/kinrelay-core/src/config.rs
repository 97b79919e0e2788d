//! Environment configuration
//!
//! All configuration is read once at startup into a [`Config`] that is
//! passed to the components needing it. Core logic never reads the
//! environment on its own.

use crate::error::{Error, Result};

/// Default HTTP listen port
pub const DEFAULT_PORT: u16 = 3000;

/// Default AI provider name
pub const DEFAULT_AI_PROVIDER: &str = "openai";

/// Process configuration assembled from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP listen port (PORT, default 3000)
    pub port: u16,
    /// Chatwork delivery credentials (required)
    pub chatwork: ChatworkConfig,
    /// AI organizer settings (optional feature)
    pub ai: AiConfig,
}

/// Chatwork API credentials
#[derive(Debug, Clone)]
pub struct ChatworkConfig {
    /// API token (CHATWORK_API_TOKEN)
    pub api_token: String,
    /// Destination room id (CHATWORK_ROOM_ID)
    pub room_id: String,
}

/// AI organizer configuration. Missing keys disable the feature instead
/// of failing startup.
#[derive(Debug, Clone, Default)]
pub struct AiConfig {
    /// Provider selector (AI_PROVIDER): "claude" or "openai"
    pub provider: String,
    /// OpenAI API key (OPENAI_API_KEY)
    pub openai_api_key: Option<String>,
    /// Claude API key (CLAUDE_API_KEY)
    pub claude_api_key: Option<String>,
}

impl AiConfig {
    /// API key for the selected provider, if one is set. "claude" selects
    /// the Claude key; any other provider name selects the OpenAI key.
    pub fn selected_key(&self) -> Option<&str> {
        let key = if self.provider.eq_ignore_ascii_case("claude") {
            self.claude_api_key.as_deref()
        } else {
            self.openai_api_key.as_deref()
        };
        key.filter(|k| !k.is_empty())
    }
}

impl Config {
    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through a variable lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let api_token = require(&lookup, "CHATWORK_API_TOKEN", &mut missing);
        let room_id = require(&lookup, "CHATWORK_ROOM_ID", &mut missing);

        if !missing.is_empty() {
            return Err(Error::MissingEnv(missing.join(", ")));
        }

        let port = match lookup("PORT").filter(|v| !v.is_empty()) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| Error::config(format!("Invalid PORT value: {}", value)))?,
            None => DEFAULT_PORT,
        };

        let ai = AiConfig {
            provider: lookup("AI_PROVIDER")
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_AI_PROVIDER.to_string()),
            openai_api_key: lookup("OPENAI_API_KEY").filter(|v| !v.is_empty()),
            claude_api_key: lookup("CLAUDE_API_KEY").filter(|v| !v.is_empty()),
        };

        Ok(Self {
            port,
            chatwork: ChatworkConfig { api_token, room_id },
            ai,
        })
    }
}

fn require<F>(lookup: &F, name: &'static str, missing: &mut Vec<&'static str>) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name).filter(|v| !v.is_empty()) {
        Some(value) => value,
        None => {
            missing.push(name);
            String::new()
        }
    }
}
