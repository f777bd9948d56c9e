use thiserror::Error;

/// Errors raised while building, loading or querying a maze.
#[derive(Error, Debug)]
pub enum MazeError {
    /// The grid or its starting point cannot be searched.
    #[error("invalid maze configuration: {0}")]
    InvalidConfiguration(String),

    /// No search has found a path yet.
    #[error("maze has not been searched")]
    NotSearched,

    /// The text description is malformed. `line` is 1-based.
    #[error("maze description, line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("failed to read maze file: {0}")]
    Io(#[from] std::io::Error),
}
