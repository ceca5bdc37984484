use miette::Diagnostic;
use thiserror::Error;

/// Main error type for blockforge operations
#[derive(Error, Diagnostic, Debug)]
pub enum ForgeError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(blockforge::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(blockforge::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Raised before any drawing begins. The caller has to fix the input.
    #[error("Invalid config: {message}")]
    #[diagnostic(code(blockforge::config))]
    InvalidConfig {
        message: String,
        #[help]
        help: Option<String>,
    },

    /// Raised after drawing, when the surface could not be serialized.
    #[error("Encode error: {message}")]
    #[diagnostic(code(blockforge::encode))]
    Encode { message: String },
}

impl ForgeError {
    /// Whether re-running the whole pipeline could succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ForgeError::Encode { .. } | ForgeError::Io { .. })
    }
}

pub type Result<T> = std::result::Result<T, ForgeError>;
