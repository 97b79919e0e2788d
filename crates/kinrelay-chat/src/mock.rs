//! Mock implementations for testing

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::error::{ChatError, Result};
use crate::Notifier;

/// A mock notifier that records every sent message
#[derive(Default)]
pub struct MockNotifier {
    /// Messages that have been sent
    messages: Arc<Mutex<Vec<String>>>,
    /// Number of send calls
    call_count: AtomicUsize,
    /// Whether to simulate failures
    should_fail: bool,
}

impl MockNotifier {
    /// Create a new mock notifier
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock notifier that always fails
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Default::default()
        }
    }

    /// Get the number of times send was called
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Get all sent messages
    pub async fn messages(&self) -> Vec<String> {
        self.messages.lock().await.clone()
    }

    /// Check if a sent message contains the given text
    pub async fn was_message_sent(&self, text: &str) -> bool {
        self.messages.lock().await.iter().any(|m| m.contains(text))
    }
}

#[async_trait]
impl Notifier for MockNotifier {
    async fn send(&self, message: &str) -> Result<String> {
        let call = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;

        if self.should_fail {
            return Err(ChatError::ApiError {
                status: 500,
                body: "Mock failure".to_string(),
            });
        }

        self.messages.lock().await.push(message.to_string());
        Ok(call.to_string())
    }

    fn is_configured(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_notifier_records_messages() {
        let notifier = MockNotifier::new();
        notifier.send("Hello, world!").await.unwrap();
        notifier.send("Another message").await.unwrap();

        assert_eq!(notifier.call_count(), 2);
        let messages = notifier.messages().await;
        assert_eq!(messages.len(), 2);
        assert!(notifier.was_message_sent("Hello").await);
    }

    #[tokio::test]
    async fn test_mock_notifier_returns_message_ids() {
        let notifier = MockNotifier::new();
        assert_eq!(notifier.send("first").await.unwrap(), "1");
        assert_eq!(notifier.send("second").await.unwrap(), "2");
    }

    #[tokio::test]
    async fn test_mock_notifier_fails_when_configured() {
        let notifier = MockNotifier::failing();
        let result = notifier.send("test").await;
        assert!(matches!(result, Err(ChatError::ApiError { status: 500, .. })));
        assert_eq!(notifier.call_count(), 1);
    }
}
