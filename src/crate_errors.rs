use crate::{
    args,
    tiles,
};

/// Error-type enum for the `tilegen` crate.
/// Wraps the argument and tile generation errors.
#[derive(Debug)]
pub enum TileGenError {
    ArgError(args::ArgError),
    TileError(tiles::TileError),
    StringOnly(String),
}
impl std::fmt::Display for TileGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileGenError::ArgError(error) => write!(f, "! ARGUMENT ERROR:\n{}", error),
            TileGenError::TileError(error) => write!(f, "! TILE GENERATION ERROR:\n{}", error),
            TileGenError::StringOnly(error) => write!(f, "! TILEGEN ERROR:\n- {}", error),
        }
    }
}
impl From<String> for TileGenError {
    fn from(error: String) -> Self {
        TileGenError::StringOnly(error)
    }
}
impl From<args::ArgError> for TileGenError {
    fn from(error: args::ArgError) -> Self {
        TileGenError::ArgError(error)
    }
}
impl From<tiles::TileError> for TileGenError {
    fn from(error: tiles::TileError) -> Self {
        TileGenError::TileError(error)
    }
}

/// Result type for the `tilegen` crate.
pub type TileGenResult<T> = std::result::Result<T, TileGenError>;

/// Create a `TileGenResult` with an `Err` from a string.
/// Shorthand to avoid writing `Err(crate::TileGenError::StringOnly(error_str))`.
pub fn err_str<T>(error_str: &str) -> TileGenResult<T> {
    Err(TileGenError::StringOnly(error_str.to_string()))
}
