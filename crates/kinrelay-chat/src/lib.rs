//! kinrelay chat delivery
//!
//! Posts composed notifications to Chatwork. Other chat backends can be
//! added by implementing [`Notifier`].

mod chatwork;
mod error;
#[cfg(test)]
pub mod mock;

pub use chatwork::ChatworkNotifier;
pub use error::{ChatError, Result};

use async_trait::async_trait;

/// Trait for chat delivery backends
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Post a message, returning the backend's message identifier
    async fn send(&self, message: &str) -> Result<String>;

    /// Check if the notifier has the credentials it needs to deliver
    fn is_configured(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockNotifier;

    #[tokio::test]
    async fn test_notifier_trait_object() {
        let notifier: Box<dyn Notifier> = Box::new(MockNotifier::new());
        let id = notifier.send("hello").await.unwrap();
        assert!(!id.is_empty());
        assert!(notifier.is_configured());
    }
}
