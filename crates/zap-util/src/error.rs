use thiserror::Error;

/// Invalid numeric range passed to a random draw or remap.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum RangeError {
    #[error("empty range: min {min} must be less than max {max}")]
    Empty { min: i32, max: i32 },

    #[error("zero-width input range at {at}")]
    ZeroWidth { at: f32 },
}

/// Failure to load [`LerpSettings`](crate::api::config::LerpSettings).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid settings JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("rate must be finite and positive, got {0}")]
    InvalidRate(f32),
}
