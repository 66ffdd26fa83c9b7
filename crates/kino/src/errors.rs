use thiserror::Error;

/// Result type alias using KinoError
pub type Result<T> = std::result::Result<T, KinoError>;

/// Errors the facade itself can produce
///
/// The facade is fire-and-forget towards its sinks and the error tracker;
/// the only failures it reports are lifecycle misuse of the global handle.
/// Each variant maps to a stable error code for programmatic handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum KinoError {
    /// A global-form call was made before `init` completed
    #[error("kino is not initialized; call kino::init first")]
    Uninitialized,
    /// `init` was called a second time in the same process
    #[error("kino is already initialized")]
    AlreadyInitialized,
}

impl KinoError {
    /// Get the stable error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            KinoError::Uninitialized => "ERR_UNINITIALIZED",
            KinoError::AlreadyInitialized => "ERR_ALREADY_INITIALIZED",
        }
    }
}
