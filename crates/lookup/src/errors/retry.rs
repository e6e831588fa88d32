/// Classification for retry policy.
///
/// The resolver itself never retries. Callers use this to decide whether
/// re-issuing a lookup can change the outcome.
///
/// | Class | Retry? | Typical caller reaction |
/// |-------|--------|-------------------------|
/// | `Never` | No | Show the reason, allow manual entry |
/// | `WithBackoff` | Yes | Offer "try again" after a short delay |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// Never retry - invalid query or no data found.
    /// Re-issuing the same lookup returns the same answer.
    Never,

    /// Transient I/O failure (unreachable host, timeout, garbled body).
    /// The same lookup may succeed later.
    WithBackoff,
}
