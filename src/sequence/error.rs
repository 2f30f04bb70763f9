//! Error types for sequence operations.

/// Represents a rejected chunk size.
///
/// Chunking into groups of zero elements has no meaning, so
/// [`SequenceExt::try_chunk`](super::SequenceExt::try_chunk) returns this
/// error instead of looping or panicking.
///
/// # Examples
///
/// ```rust
/// use oriole::sequence::ChunkSizeError;
///
/// let error = ChunkSizeError { requested: 0 };
/// assert_eq!(
///     format!("{}", error),
///     "chunk size must be positive, got 0"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSizeError {
    /// The chunk size the caller asked for.
    pub requested: usize,
}

impl std::fmt::Display for ChunkSizeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "chunk size must be positive, got {}",
            self.requested
        )
    }
}

impl std::error::Error for ChunkSizeError {}

static_assertions::assert_impl_all!(ChunkSizeError: Send, Sync, std::error::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chunk_size_error_display() {
        let error = ChunkSizeError { requested: 0 };
        assert_eq!(format!("{error}"), "chunk size must be positive, got 0");
    }

    #[test]
    fn test_chunk_size_error_equality() {
        assert_eq!(
            ChunkSizeError { requested: 0 },
            ChunkSizeError { requested: 0 }
        );
        assert_ne!(
            ChunkSizeError { requested: 0 },
            ChunkSizeError { requested: 1 }
        );
    }

    #[test]
    fn test_chunk_size_error_as_dyn_error() {
        let error: Box<dyn std::error::Error> = Box::new(ChunkSizeError { requested: 0 });
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "chunk size must be positive, got 0");
    }
}
