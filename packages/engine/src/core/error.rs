use thiserror::Error;

/// Errors raised while configuring or hosting the rain.
///
/// Ticking itself never fails; these come from bad configuration or from the host
/// (DOM, timers) refusing an operation.
#[derive(Debug, Error)]
pub enum RainError {
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("invalid glyph range {start:#x}..={end:#x}: {reason}")]
    InvalidGlyphRange { start: u32, end: u32, reason: &'static str },

    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("host error: {0}")]
    Host(String),
}

impl RainError {
    /// Wrap a JS exception (or any debuggable host failure) as text.
    pub fn host(err: impl std::fmt::Debug) -> Self {
        RainError::Host(format!("{:?}", err))
    }
}

pub type Result<T> = std::result::Result<T, RainError>;
