//! The bounded message history of a session.

use std::collections::VecDeque;
use std::collections::vec_deque::Iter;

use seoul_eats_model::{Message, ModelRequest, Role};

/// Default capacity of a [`Transcript`].
pub const MAX_MESSAGES: usize = 100;

/// An ordered, bounded history of messages, oldest first.
///
/// The transcript never holds more than [`max_messages`] entries. When an
/// append goes over the limit, the oldest entries are dropped and the
/// rest keep their relative order. Apart from that eviction, messages are
/// never edited or removed.
///
/// [`max_messages`]: Transcript::max_messages
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transcript {
    messages: VecDeque<Message>,
    max_messages: usize,
}

impl Default for Transcript {
    #[inline]
    fn default() -> Self {
        Self::with_max_messages(MAX_MESSAGES)
    }
}

impl Transcript {
    /// Creates an empty transcript holding at most [`MAX_MESSAGES`].
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty transcript with a custom capacity.
    ///
    /// The capacity is at least 1, so the latest message always survives.
    #[inline]
    pub fn with_max_messages(max_messages: usize) -> Self {
        Self {
            messages: VecDeque::new(),
            max_messages: max_messages.max(1),
        }
    }

    /// Appends a message, dropping the oldest one if the transcript is full.
    pub fn append<S: Into<String>>(&mut self, role: Role, content: S) {
        self.messages.push_back(Message::new(role, content));
        if self.messages.len() > self.max_messages {
            let evicted = self.messages.pop_front();
            debug!(
                "transcript is full, evicted the oldest message: {:?}",
                evicted.map(|msg| msg.role)
            );
        }
    }

    /// Appends several messages at once.
    ///
    /// The result is the same as appending them one by one: only the
    /// latest [`max_messages`] survive.
    ///
    /// [`max_messages`]: Transcript::max_messages
    pub fn extend<I: IntoIterator<Item = Message>>(&mut self, messages: I) {
        self.messages.extend(messages);
        let overflow = self.messages.len().saturating_sub(self.max_messages);
        if overflow > 0 {
            self.messages.drain(..overflow);
            debug!("transcript is full, evicted {overflow} messages");
        }
    }

    /// Returns the maximum number of messages kept.
    #[inline]
    pub fn max_messages(&self) -> usize {
        self.max_messages
    }

    /// Returns the number of messages.
    #[inline]
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Returns `true` if there are no messages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Returns the most recent message.
    #[inline]
    pub fn last(&self) -> Option<&Message> {
        self.messages.back()
    }

    /// Iterates over the messages, oldest first.
    #[inline]
    pub fn iter(&self) -> Iter<'_, Message> {
        self.messages.iter()
    }

    /// Builds a model request carrying the whole history.
    pub fn to_request(&self) -> ModelRequest {
        ModelRequest {
            messages: self.messages.iter().cloned().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = Iter<'a, Message>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(i: usize) -> Message {
        let role = if i % 2 == 0 { Role::User } else { Role::Assistant };
        Message::new(role, format!("message #{i}"))
    }

    #[test]
    fn test_append_within_capacity() {
        for n in [0, 1, 2, 57, 99, 100] {
            let mut transcript = Transcript::new();
            for i in 0..n {
                let msg = numbered(i);
                transcript.append(msg.role, msg.content);
            }
            assert_eq!(transcript.len(), n);
            let expected: Vec<_> = (0..n).map(numbered).collect();
            assert!(transcript.iter().eq(expected.iter()), "n = {n}");
        }
    }

    #[test]
    fn test_append_over_capacity() {
        for n in [101, 102, 200, 345] {
            let mut transcript = Transcript::new();
            for i in 0..n {
                let msg = numbered(i);
                transcript.append(msg.role, msg.content);
            }
            assert_eq!(transcript.len(), MAX_MESSAGES);
            let expected: Vec<_> =
                (n - MAX_MESSAGES..n).map(numbered).collect();
            assert!(transcript.iter().eq(expected.iter()), "n = {n}");
        }
    }

    #[test]
    fn test_extend_trims_to_capacity() {
        let mut transcript = Transcript::with_max_messages(5);
        transcript.extend((0..3).map(numbered));
        assert_eq!(transcript.len(), 3);

        transcript.extend((3..12).map(numbered));
        assert_eq!(transcript.len(), 5);
        let expected: Vec<_> = (7..12).map(numbered).collect();
        assert!(transcript.iter().eq(expected.iter()));

        let mut appended = Transcript::with_max_messages(5);
        for msg in (0..12).map(numbered) {
            appended.append(msg.role, msg.content);
        }
        assert_eq!(appended, transcript);
    }

    #[test]
    fn test_zero_capacity_keeps_latest() {
        let mut transcript = Transcript::with_max_messages(0);
        assert_eq!(transcript.max_messages(), 1);
        transcript.append(Role::User, "first");
        transcript.append(Role::User, "second");
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.last(), Some(&Message::user("second")));
    }

    #[test]
    fn test_to_request() {
        let mut transcript = Transcript::new();
        assert!(transcript.to_request().messages.is_empty());

        transcript.append(Role::User, "What should I eat today?");
        transcript.append(Role::Assistant, "How about samgyetang?");
        let req = transcript.to_request();
        assert_eq!(
            req.messages,
            vec![
                Message::user("What should I eat today?"),
                Message::assistant("How about samgyetang?"),
            ]
        );
    }
}
