//! Best-effort notification delivery.

use crate::telegram::{ChatSender, DeliveryError};
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{debug, error};

/// Notifier that forwards messages to a chat and never fails.
///
/// Delivery errors are logged and dropped here so that a chat outage cannot
/// stop the poll loop. No other component swallows errors.
#[derive(Clone)]
pub struct Notifier {
    sender: Arc<dyn ChatSender>,
}

impl Notifier {
    /// Create a new notifier.
    pub fn new(sender: Arc<dyn ChatSender>) -> Self {
        Self { sender }
    }

    /// Send a message. Returns whether it was delivered.
    pub async fn notify(&self, message: &str) -> bool {
        match self.sender.send_message(message).await {
            Ok(()) => {
                debug!("Удачная отправка сообщения в Telegram: {}", message);
                true
            }
            Err(e) => {
                error!("Ошибка при отправке сообщения в Telegram: {}", e);
                false
            }
        }
    }
}

/// In-memory chat sender that records every attempt.
#[derive(Default)]
pub struct MockChatSender {
    sent: Mutex<Vec<String>>,
    should_fail: AtomicBool,
}

impl MockChatSender {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sender whose every delivery fails.
    pub fn failing() -> Self {
        let sender = Self::default();
        sender.set_should_fail(true);
        sender
    }

    pub fn set_should_fail(&self, should_fail: bool) {
        self.should_fail.store(should_fail, Ordering::SeqCst);
    }

    /// Messages passed to `send_message`, including failed attempts.
    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl ChatSender for MockChatSender {
    async fn send_message(&self, text: &str) -> Result<(), DeliveryError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(text.to_string());
        }

        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DeliveryError::Other("Mock failure".to_string()));
        }
        Ok(())
    }
}
