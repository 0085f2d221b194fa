use seoul_eats_model::ModelProvider;

use super::ChatSession;
use crate::completion_client::CompletionClient;
use crate::transcript::MAX_MESSAGES;

/// [`ChatSession`] builder.
pub struct ChatSessionBuilder {
    pub(crate) client: CompletionClient,
    pub(crate) max_messages: usize,
}

impl ChatSessionBuilder {
    /// Creates a new builder with the specified model provider.
    #[inline]
    pub fn with_model_provider<P: ModelProvider + 'static>(
        provider: P,
    ) -> Self {
        Self {
            client: CompletionClient::new(provider),
            max_messages: MAX_MESSAGES,
        }
    }

    /// Sets how many messages the transcript keeps. Defaults to
    /// [`MAX_MESSAGES`].
    #[inline]
    pub fn with_max_messages(mut self, max_messages: usize) -> Self {
        self.max_messages = max_messages;
        self
    }

    /// Builds the session with an empty transcript.
    #[inline]
    pub fn build(self) -> ChatSession {
        ChatSession::from_builder(self)
    }
}
