#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("vertex {index} out of range for graph with {len} vertices")]
    OutOfRange { index: usize, len: usize },

    #[error("extract-min on an empty heap")]
    EmptyHeap,

    #[error("vertex {index} is not in the heap")]
    NotInHeap { index: usize },
}

impl Error {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
