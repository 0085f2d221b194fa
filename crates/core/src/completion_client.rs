use std::pin::Pin;
use std::sync::Arc;

use seoul_eats_model::{
    ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};
use tracing::Instrument;

use crate::transcript::Transcript;

type SendRequestResult = Result<ModelResponse, Box<dyn ModelProviderError>>;
type BoxedSendRequestFuture =
    Pin<Box<dyn Future<Output = SendRequestResult> + Send>>;
type HandlerFn =
    Arc<dyn Fn(ModelRequest) -> BoxedSendRequestFuture + Send + Sync>;

/// A wrapper around a model provider that turns a transcript into a single
/// completion call, and provides a type-erased interface for the session.
#[derive(Clone)]
pub struct CompletionClient {
    handler_fn: HandlerFn,
}

impl CompletionClient {
    /// Creates a client that sends requests through `provider`.
    #[inline]
    pub fn new<P: ModelProvider + 'static>(provider: P) -> Self {
        // We have to erase the type `P`, since `CompletionClient` doesn't
        // have a generic parameter and we don't want it either.
        let handler_fn: HandlerFn = Arc::new(
            move |req: ModelRequest| -> BoxedSendRequestFuture {
                let fut = provider.send_request(&req);
                Box::pin(
                    async move {
                        trace!("got a request: {:?}", req);
                        fut.await.map_err(|err| {
                            Box::new(err) as Box<dyn ModelProviderError>
                        })
                    }
                    .instrument(trace_span!("completion request")),
                )
            },
        );
        Self { handler_fn }
    }

    /// Requests an answer for the whole transcript.
    ///
    /// Returns the trimmed answer text, or `None` if the call failed for
    /// whatever reason. Failures are logged here, callers only need to tell
    /// the user. A blank answer counts as a failure.
    ///
    /// This makes exactly one attempt and waits for the full round trip.
    pub async fn request_completion(
        &self,
        transcript: &Transcript,
    ) -> Option<String> {
        let req = transcript.to_request();
        let resp = match (self.handler_fn)(req).await {
            Ok(resp) => resp,
            Err(err) => {
                error!("completion failed ({:?}): {err}", err.kind());
                return None;
            }
        };

        let answer = resp.content.trim();
        if answer.is_empty() {
            error!("completion failed: got a blank answer");
            return None;
        }

        trace!("finished a request");
        Some(answer.to_owned())
    }
}
