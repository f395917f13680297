/// Errors returned by [`Graph`](crate::Graph) and
/// [`PriorityQueue`](crate::PriorityQueue) operations.
///
/// Every check that can produce one of these runs before any structural
/// change, so a failed operation leaves its container untouched.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A vertex index was outside `0..len`.
    #[error("index {index} out of range for graph with {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
    /// No vertex compared equal to the requested value.
    #[error("no vertex matches the given value")]
    NotFound,
    /// `pop` or `peek` was called on an empty priority queue.
    #[error("priority queue is empty")]
    EmptyContainer,
}

pub type Result<T> = std::result::Result<T, Error>;
