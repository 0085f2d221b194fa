//! Core logic of a chat session: the bounded transcript, the completion
//! client, and the session object tying them together.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod completion_client;
mod session;
pub mod transcript;

pub use completion_client::CompletionClient;
pub use session::{ChatSession, ChatSessionBuilder, TurnOutcome};
pub use transcript::{MAX_MESSAGES, Transcript};
