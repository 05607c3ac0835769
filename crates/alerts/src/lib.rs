//! Telegram notifications for homework status changes.
//!
//! This crate provides:
//! - The `ChatSender` seam and its Telegram bot implementation
//! - A notifier that contains delivery failures

pub mod notifier;
pub mod telegram;

pub use notifier::{MockChatSender, Notifier};
pub use telegram::{ChatSender, DeliveryError, TelegramBot};
