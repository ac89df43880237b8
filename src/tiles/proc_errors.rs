/// Tile generation error type.
#[derive(Debug)]
pub enum TileError {
    /// IO error (file creation and STL output).
    IoError(crate::io::IoError),
    /// Write error on the output stream.
    StreamError(std::io::Error),
    /// Serde JSON error.
    SerdeJsonError(serde_json::Error),
    /// StringOnly error.
    StringOnly(String),
}
impl std::fmt::Display for TileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileError::IoError(error) => write!(f, "- IO Error:\n{}", error),
            TileError::StreamError(error) => write!(f, "- Output Stream Error:\n{}", error),
            TileError::SerdeJsonError(error) => write!(f, "- JSON Serialization Error:\n{}", error),
            TileError::StringOnly(error) => write!(f, "- {}", error),
        }
    }
}
impl From<crate::io::IoError> for TileError {
    fn from(error: crate::io::IoError) -> Self {
        TileError::IoError(error)
    }
}
impl From<std::io::Error> for TileError {
    fn from(error: std::io::Error) -> Self {
        TileError::StreamError(error)
    }
}
impl From<serde_json::Error> for TileError {
    fn from(error: serde_json::Error) -> Self {
        TileError::SerdeJsonError(error)
    }
}
impl From<String> for TileError {
    fn from(error: String) -> Self {
        TileError::StringOnly(error)
    }
}

/// Result type for the `tiles` module.
pub type ProcResult<T> = std::result::Result<T, TileError>;

/// Create a `TileError::StringOnly` from a string.
pub fn err_str<T>(error_str: &str) -> ProcResult<T> {
    Err(TileError::StringOnly(error_str.to_string()))
}
