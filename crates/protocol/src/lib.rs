//! Wire types for web2md.
//!
//! This crate contains the serde-serializable shapes web2md exchanges with
//! other programs:
//!
//! * [`chat`]: the chat-completions request and response used by the refine
//!   step, plus the error body providers return on failure.
//! * [`message`]: the extraction message envelope a page agent answers with
//!   (`{"action": "extractContent"}` in, `{"success": .., "data": ..}` out).
//!
//! Types here are pure data and change only when a wire format changes.

pub mod chat;
pub mod message;

pub use chat::*;
pub use message::*;
