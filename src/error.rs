use thiserror::Error;

/// Error type for bprom2gff operations.
#[derive(Debug, Error)]
pub enum Bprom2GffError {
    /// The input text contains no `>` block markers at all.
    #[error("malformed input: no '>' block markers found")]
    MalformedInput,
    /// A required anchor pattern was not found in a block.
    #[error("block {block_index}: missing {field}")]
    Extraction {
        field: &'static str,
        block_index: usize,
    },
    /// An anchored field was present but its integer payload did not parse.
    #[error("block {block_index}: malformed integer in {field}: {source}")]
    InvalidInteger {
        field: &'static str,
        block_index: usize,
        source: std::num::ParseIntError,
    },
    /// The strand character is neither `+` nor `-`.
    #[error("block {block_index}: invalid strand '{found}'")]
    InvalidStrand { found: String, block_index: usize },
    /// Failed to build a Rayon thread pool.
    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    /// Wraps standard I/O errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for bprom2gff operations.
pub type Result<T> = std::result::Result<T, Bprom2GffError>;
