/// Error type for form sessions.
///
/// Input mistakes are never errors here; they are reported through
/// [`crate::ValidationFailure`] and shown in a dialog.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    /// Backend-specific failure (I/O, UI framework crash, etc.)
    #[error("Backend error: {0}")]
    Backend(#[from] anyhow::Error),
}

impl FormError {
    /// Create a backend error from any error type.
    pub fn backend(err: impl Into<anyhow::Error>) -> Self {
        Self::Backend(err.into())
    }
}
