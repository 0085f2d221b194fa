//! SeoulEats, an AI food guide for Seoul backed by a LaaS prompt preset.
//!
//! The crate includes a CLI tool for chatting in the terminal. You can also
//! use it as a library to bring the same session into your own front end.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

pub mod config;

use seoul_eats_core::{ChatSession, ChatSessionBuilder};
use seoul_eats_laas_model::{LaasConfig, LaasProvider};

/// Creates a new chat session talking to the LaaS endpoint described by
/// `config`.
///
/// Every session owns its own transcript. Create one per user and drop it
/// when the user leaves.
pub fn new_session(config: LaasConfig) -> ChatSession {
    let provider = LaasProvider::new(config);
    ChatSessionBuilder::with_model_provider(provider).build()
}

/// Re-exports of [`seoul_eats_core`] crate.
pub mod core {
    pub use seoul_eats_core::*;
}

/// Re-exports of [`seoul_eats_model`] crate.
pub mod model {
    pub use seoul_eats_model::*;
}
