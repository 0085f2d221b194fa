mod builder;

use seoul_eats_model::Role;

use crate::completion_client::CompletionClient;
use crate::transcript::Transcript;
pub use builder::ChatSessionBuilder;

/// The result of a single turn.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TurnOutcome {
    /// The model answered, the answer is now the last transcript entry.
    Answered(String),
    /// The completion call failed. The transcript holds the user message
    /// but no answer for it.
    Failed,
}

/// A chat session, owning the transcript of one user and the client used
/// to get answers for it.
///
/// Every turn runs the same fixed sequence: append the user message, ask
/// for a completion with the whole transcript, and append the answer only
/// if the call succeeded. A failed turn never ends the session.
pub struct ChatSession {
    client: CompletionClient,
    transcript: Transcript,
}

impl ChatSession {
    /// Returns the transcript for rendering.
    #[inline]
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Sends a user message and waits for the answer.
    pub async fn send_message<S: Into<String>>(
        &mut self,
        input: S,
    ) -> TurnOutcome {
        self.transcript.append(Role::User, input);

        let Some(answer) =
            self.client.request_completion(&self.transcript).await
        else {
            return TurnOutcome::Failed;
        };

        self.transcript.append(Role::Assistant, answer.clone());
        TurnOutcome::Answered(answer)
    }
}

impl ChatSession {
    fn from_builder(builder: ChatSessionBuilder) -> Self {
        let ChatSessionBuilder {
            client,
            max_messages,
        } = builder;

        Self {
            client,
            transcript: Transcript::with_max_messages(max_messages),
        }
    }
}
