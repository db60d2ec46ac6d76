/// Convenience result type used across zombiegrid.
pub type ZombieResult<T> = Result<T, ZombieError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum ZombieError {
    /// Malformed grid input: bad dimensions, out-of-bounds or duplicate cells.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// Errors while fetching or decoding contribution data.
    #[error("source error: {0}")]
    Source(String),

    /// Errors while emitting SVG markup.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ZombieError {
    /// Build a [`ZombieError::InvalidGrid`] value.
    pub fn invalid_grid(msg: impl Into<String>) -> Self {
        Self::InvalidGrid(msg.into())
    }

    /// Build a [`ZombieError::Source`] value.
    pub fn source(msg: impl Into<String>) -> Self {
        Self::Source(msg.into())
    }

    /// Build a [`ZombieError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ZombieError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
