/// A complete answer from the model provider.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModelResponse {
    /// The text of the answer, exactly as the provider returned it.
    pub content: String,
}

impl ModelResponse {
    /// Creates a response with the given content.
    #[inline]
    pub fn new<S: Into<String>>(content: S) -> Self {
        Self {
            content: content.into(),
        }
    }
}
