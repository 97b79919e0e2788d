//! Chatwork notification backend

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ChatError, Result};
use crate::Notifier;

const API_BASE: &str = "https://api.chatwork.com/v2";

/// Chatwork responds fast or not at all; cap the wait
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response body of a successful message post
#[derive(Debug, Deserialize)]
struct PostMessageResponse {
    message_id: String,
}

/// Chatwork notification backend
pub struct ChatworkNotifier {
    api_token: String,
    room_id: String,
    client: reqwest::Client,
}

impl ChatworkNotifier {
    /// Create a new Chatwork notifier
    pub fn new(api_token: String, room_id: String) -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self {
            api_token,
            room_id,
            client,
        }
    }

    /// Create with a custom HTTP client (useful for testing)
    pub fn with_client(api_token: String, room_id: String, client: reqwest::Client) -> Self {
        Self {
            api_token,
            room_id,
            client,
        }
    }

    /// Message-post URL for the configured room
    fn api_url(&self) -> String {
        format!("{}/rooms/{}/messages", API_BASE, self.room_id)
    }

    /// Verify the API token by fetching the authenticated account
    pub async fn test_connection(&self) -> Result<()> {
        if !self.is_configured() {
            return Err(ChatError::NotConfigured);
        }

        let response = self
            .client
            .get(format!("{}/me", API_BASE))
            .header("X-ChatWorkToken", &self.api_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        debug!("Chatwork connection test succeeded");
        Ok(())
    }

    async fn post_message(&self, message: &str) -> Result<String> {
        if !self.is_configured() {
            return Err(ChatError::NotConfigured);
        }

        debug!("Posting message to Chatwork room {}", self.room_id);

        let response = self
            .client
            .post(self.api_url())
            .header("X-ChatWorkToken", &self.api_token)
            .form(&[("body", message)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ChatError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body: PostMessageResponse = response.json().await?;
        info!(
            "Chatwork message {} posted to room {}",
            body.message_id, self.room_id
        );
        Ok(body.message_id)
    }
}

#[async_trait]
impl Notifier for ChatworkNotifier {
    async fn send(&self, message: &str) -> Result<String> {
        self.post_message(message).await
    }

    fn is_configured(&self) -> bool {
        !self.api_token.is_empty() && !self.room_id.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notifier_not_configured_empty_token() {
        let notifier = ChatworkNotifier::new(String::new(), "123456".to_string());
        assert!(!notifier.is_configured());
    }

    #[test]
    fn test_notifier_not_configured_empty_room() {
        let notifier = ChatworkNotifier::new("token".to_string(), String::new());
        assert!(!notifier.is_configured());
    }

    #[test]
    fn test_notifier_configured() {
        let notifier = ChatworkNotifier::new("token".to_string(), "123456".to_string());
        assert!(notifier.is_configured());
    }

    #[test]
    fn test_api_url() {
        let notifier = ChatworkNotifier::new("token".to_string(), "123456".to_string());
        assert_eq!(
            notifier.api_url(),
            "https://api.chatwork.com/v2/rooms/123456/messages"
        );
    }

    #[tokio::test]
    async fn test_send_not_configured() {
        let notifier = ChatworkNotifier::new(String::new(), String::new());
        let result = notifier.send("test").await;
        assert!(matches!(result, Err(ChatError::NotConfigured)));
    }

    #[tokio::test]
    async fn test_connection_not_configured() {
        let notifier = ChatworkNotifier::new(String::new(), "123456".to_string());
        let result = notifier.test_connection().await;
        assert!(matches!(result, Err(ChatError::NotConfigured)));
    }
}
