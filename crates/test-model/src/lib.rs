//! A local fake model for testing purpose.

mod preset;

use std::collections::VecDeque;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use seoul_eats_model::{
    ErrorKind, ModelProvider, ModelProviderError, ModelRequest, ModelResponse,
};
use tokio::time::sleep;

pub use preset::*;

#[derive(Debug)]
pub struct Error {
    #[allow(dead_code)]
    message: &'static str,
    kind: ErrorKind,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self, f)
    }
}

impl StdError for Error {}

impl ModelProviderError for Error {
    #[inline]
    fn kind(&self) -> ErrorKind {
        self.kind
    }
}

#[derive(Default)]
struct Script {
    replies: VecDeque<PresetReply>,
    requests: Vec<ModelRequest>,
}

/// A local fake model for testing purpose.
///
/// Before sending requests, you need to queue up the replies, which is how
/// the model should respond to each request, in order. Every request pops
/// one reply. If the script runs out, the request fails with
/// [`ErrorKind::Status`].
///
/// Clones share the same script, so a test can keep a handle to inspect
/// the recorded requests after moving the provider into a session.
///
/// # Note
///
/// This type is not optimized for production use, every request is
/// copied. You should only use it for testing.
#[derive(Clone, Default)]
pub struct TestModelProvider {
    script: Arc<Mutex<Script>>,
    delay: Option<Duration>,
}

impl TestModelProvider {
    #[inline]
    pub fn add_reply(&mut self, reply: PresetReply) {
        self.lock_script().replies.push_back(reply);
    }

    #[inline]
    pub fn add_answer<S: Into<String>>(&mut self, text: S) {
        self.add_reply(PresetReply::answer(text));
    }

    #[inline]
    pub fn add_failure(&mut self, failure: PresetFailure) {
        self.add_reply(PresetReply::Failure(failure));
    }

    #[inline]
    pub fn set_delay(&mut self, duration: Duration) {
        self.delay = Some(duration);
    }

    /// Returns all requests received so far.
    pub fn requests(&self) -> Vec<ModelRequest> {
        self.lock_script().requests.clone()
    }

    fn lock_script(&self) -> std::sync::MutexGuard<'_, Script> {
        // A panicking test thread may poison the lock, the script itself is
        // still usable.
        self.script.lock().unwrap_or_else(|err| err.into_inner())
    }
}

impl ModelProvider for TestModelProvider {
    type Error = crate::Error;

    fn send_request(
        &self,
        req: &ModelRequest,
    ) -> impl Future<Output = Result<ModelResponse, Self::Error>> + Send + 'static
    {
        let reply = {
            let mut script = self.lock_script();
            script.requests.push(req.clone());
            script.replies.pop_front()
        };
        let delay = self.delay.unwrap_or(Duration::from_millis(1));

        async move {
            sleep(delay).await;
            match reply {
                Some(PresetReply::Answer(text)) => Ok(ModelResponse::new(text)),
                Some(PresetReply::Failure(failure)) => Err(Error {
                    message: "preset failure",
                    kind: failure.into(),
                }),
                None => Err(Error {
                    message: "no enough replies",
                    kind: ErrorKind::Status,
                }),
            }
        }
    }
}
