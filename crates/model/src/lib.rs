//! An abstraction layer for chat-completion providers.
//!
//! This crate establishes a unified protocol between the chat session and
//! the remote completion services it talks to, so that the session logic
//! doesn't depend on any particular HTTP API.
//!
//! Types in this crate don't define any behavior, instead they are the
//! constraints that the implementors should adhere to.

#![deny(missing_docs)]

mod error;
mod provider;
mod request;
mod response;

pub use error::*;
pub use provider::*;
pub use request::*;
pub use response::*;
