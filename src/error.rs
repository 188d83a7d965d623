/// Error types for boardwise
///
/// The recommendation engine itself never fails on a well-formed snapshot.
/// Everything here belongs to the layers around it: loading snapshots,
/// reading configuration, and resolving a board for a user.

use thiserror::Error;

/// Main error type for boardwise operations
#[derive(Error, Debug)]
pub enum BoardwiseError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O errors (file operations, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Config file could not be parsed
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// A configured or built-in pattern failed to compile
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Board does not exist
    #[error("Board not found: {0}")]
    BoardNotFound(String),

    /// User is neither owner nor member of the board
    #[error("Access denied to board: {0}")]
    AccessDenied(String),

    /// Snapshot is missing something the caller needs
    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    /// Stored timestamp is not RFC 3339
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    /// Analysis took longer than the configured limit
    #[error("Analysis exceeded {0} ms")]
    AnalysisTimeout(u64),

    /// Generic error with message
    #[error("{0}")]
    Generic(String),
}

/// Result type alias for boardwise operations
pub type Result<T> = std::result::Result<T, BoardwiseError>;

impl BoardwiseError {
    /// Convert to a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            BoardwiseError::Database(e) => {
                format!("Database error occurred. Please try again. Details: {}", e)
            }
            BoardwiseError::Io(e) => {
                format!("File system error. Check permissions. Details: {}", e)
            }
            BoardwiseError::Serialization(e) => format!("Data format error: {}", e),
            BoardwiseError::ConfigParse(e) => format!("Config file is not valid TOML: {}", e),
            BoardwiseError::Pattern(e) => format!("Pattern failed to compile: {}", e),
            BoardwiseError::Config(msg) => format!("Configuration issue: {}", msg),
            BoardwiseError::BoardNotFound(_) => "Board not found".to_string(),
            BoardwiseError::AccessDenied(_) => "You do not have access to this board".to_string(),
            BoardwiseError::InvalidSnapshot(msg) => format!("Invalid board snapshot: {}", msg),
            BoardwiseError::InvalidTimestamp(value) => {
                format!("Stored timestamp '{}' could not be read", value)
            }
            BoardwiseError::AnalysisTimeout(ms) => {
                format!("Board is too large to analyze within {} ms", ms)
            }
            BoardwiseError::Generic(msg) => msg.clone(),
        }
    }

    /// HTTP status an API layer should answer with
    pub fn status_code(&self) -> u16 {
        match self {
            BoardwiseError::BoardNotFound(_) => 404,
            BoardwiseError::AccessDenied(_) => 403,
            _ => 500,
        }
    }
}
