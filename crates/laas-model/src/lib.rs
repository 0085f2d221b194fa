//! A model provider for the LaaS preset chat-completions API.

#[macro_use]
extern crate tracing;

mod config;
mod proto;

use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::sync::Arc;

use reqwest::{Client, header};
use seoul_eats_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};

pub use config::{
    DEFAULT_API_URL, DEFAULT_HASH, DEFAULT_PROJECT, LaasConfig,
    LaasConfigBuilder,
};

const PROJECT_HEADER: &str = "project";
const API_KEY_HEADER: &str = "apikey";

/// Error type for [`LaasProvider`].
#[derive(Debug)]
pub struct Error {
    message: String,
    kind: ErrorKind,
}

impl Error {
    fn new(message: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }

    /// Returns the error message.
    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

/// LaaS chat-completions provider.
///
/// The underlying HTTP client has no request timeout, a hung call keeps
/// the turn waiting until the connection is closed.
#[derive(Clone, Debug)]
pub struct LaasProvider {
    client: Client,
    config: Arc<LaasConfig>,
}

impl LaasProvider {
    /// Creates a new `LaasProvider` with the given configuration.
    #[inline]
    pub fn new(config: LaasConfig) -> Self {
        Self {
            client: Client::new(),
            config: Arc::new(config),
        }
    }
}

impl ModelProvider for LaasProvider {
    type Error = Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let laas_req = proto::create_request(req, &self.config);
        let resp_fut = self
            .client
            .post(&self.config.api_url)
            .header(PROJECT_HEADER, &self.config.project)
            .header(API_KEY_HEADER, &self.config.api_key)
            .header(header::ACCEPT, "application/json")
            .json(&laas_req)
            .send();

        async move {
            let resp = resp_fut.await.map_err(|err| {
                Error::new(format!("{err}"), ErrorKind::Transport)
            })?;

            let status = resp.status();
            if !status.is_success() {
                return Err(Error::new(
                    format!("Unexpected status: {status}"),
                    ErrorKind::Status,
                ));
            }

            let body = resp.text().await.map_err(|err| {
                Error::new(format!("{err}"), ErrorKind::Transport)
            })?;
            trace!("got response body: {body}");

            let content = proto::parse_answer(&body)?;
            Ok(ModelResponse { content })
        }
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;
    use seoul_eats_model::Message;
    use serde_json::json;

    use super::*;

    const PATH: &str = "/api/preset/v2/chat/completions";

    fn provider_for(url: &str) -> LaasProvider {
        let config = LaasConfigBuilder::with_api_key("test-key")
            .with_api_url(format!("{url}{PATH}"))
            .build();
        LaasProvider::new(config)
    }

    fn first_turn() -> ModelRequest {
        ModelRequest {
            messages: vec![Message::user("What should I eat today?")],
        }
    }

    #[tokio::test]
    async fn test_send_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .match_header("project", DEFAULT_PROJECT)
            .match_header("apikey", "test-key")
            .match_body(Matcher::Json(json!({
                "hash": DEFAULT_HASH,
                "params": {},
                "messages": [
                    { "role": "user", "content": "What should I eat today?" }
                ]
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices":[{"message":{"content":" Try Gwangjang Market "}}]}"#,
            )
            .create_async()
            .await;

        let provider = provider_for(&server.url());
        let resp = provider.send_request(&first_turn()).await.unwrap();

        mock.assert_async().await;
        assert_eq!(resp.content, " Try Gwangjang Market ");
    }

    #[tokio::test]
    async fn test_error_status() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(500)
            .with_body(r#"{"choices":[{"message":{"content":"ignored"}}]}"#)
            .create_async()
            .await;

        let provider = provider_for(&server.url());
        let err = provider.send_request(&first_turn()).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind(), ErrorKind::Status);
        assert!(err.message().contains("500"));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices":[]}"#)
            .create_async()
            .await;

        let provider = provider_for(&server.url());
        let err = provider.send_request(&first_turn()).await.unwrap_err();

        mock.assert_async().await;
        assert_eq!(err.kind(), ErrorKind::MalformedBody);
    }

    #[tokio::test]
    async fn test_transport_error() {
        // Nothing listens on port 1.
        let provider = provider_for("http://127.0.0.1:1");
        let err = provider.send_request(&first_turn()).await.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Transport);
    }
}
