//! Telegram delivery of chat messages.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::types::Recipient;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeliveryError {
    #[error("Telegram API error: {0}")]
    Api(#[from] teloxide::RequestError),
    #[error("Delivery failed: {0}")]
    Other(String),
}

/// Trait for chat clients that deliver plain-text messages to a fixed chat.
#[async_trait]
pub trait ChatSender: Send + Sync {
    /// Send a message to the configured chat.
    async fn send_message(&self, text: &str) -> Result<(), DeliveryError>;
}

/// Telegram bot bound to a single chat.
pub struct TelegramBot {
    bot: Bot,
    chat: Recipient,
}

impl TelegramBot {
    /// Create a new bot with the given token and target chat.
    pub fn new(token: &str, chat_id: &str) -> Self {
        Self {
            bot: Bot::new(token),
            chat: parse_recipient(chat_id),
        }
    }

    pub fn chat(&self) -> &Recipient {
        &self.chat
    }
}

#[async_trait]
impl ChatSender for TelegramBot {
    async fn send_message(&self, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(self.chat.clone(), text).await?;
        Ok(())
    }
}

/// Numeric ids address a chat directly; anything else is a `@channel` name.
pub fn parse_recipient(chat_id: &str) -> Recipient {
    let chat_id = chat_id.trim();
    match chat_id.parse::<i64>() {
        Ok(id) => Recipient::Id(ChatId(id)),
        Err(_) => Recipient::ChannelUsername(chat_id.to_string()),
    }
}
