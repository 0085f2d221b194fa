use seoul_eats_model::ErrorKind;
use serde::{Deserialize, Serialize};

/// How the test model answers one request.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum PresetReply {
    /// Answer with the given text, verbatim.
    #[serde(rename = "answer")]
    Answer(String),
    /// Fail with the given kind of error.
    #[serde(rename = "failure")]
    Failure(PresetFailure),
}

impl PresetReply {
    /// Creates an answer reply.
    #[inline]
    pub fn answer<S: Into<String>>(text: S) -> Self {
        Self::Answer(text.into())
    }
}

/// Mirrors [`ErrorKind`] so that scripts can be written in JSON.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetFailure {
    /// See [`ErrorKind::Transport`].
    Transport,
    /// See [`ErrorKind::Status`].
    Status,
    /// See [`ErrorKind::MalformedBody`].
    MalformedBody,
}

impl From<PresetFailure> for ErrorKind {
    fn from(value: PresetFailure) -> Self {
        match value {
            PresetFailure::Transport => ErrorKind::Transport,
            PresetFailure::Status => ErrorKind::Status,
            PresetFailure::MalformedBody => ErrorKind::MalformedBody,
        }
    }
}
