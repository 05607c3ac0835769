//! Core types for the homework status bot.
//!
//! This crate provides:
//! - The verdict table for review statuses
//! - Shape validation of the API answer
//! - Mapping of homework records to chat messages
//! - The rolling fetch cursor

pub mod cursor;
pub mod error;
pub mod homework;
pub mod status;
pub mod validate;

pub use cursor::*;
pub use error::*;
pub use homework::*;
pub use status::*;
pub use validate::*;
