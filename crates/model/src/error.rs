/// The kind of error that occurred.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request never produced a response (connection refused, DNS,
    /// reset, etc).
    Transport,
    /// The server responded with a non-success status.
    Status,
    /// The response body is not in the expected shape.
    MalformedBody,
}
