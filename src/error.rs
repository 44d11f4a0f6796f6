//! Structured error types for gridshift.
//!
//! The reordering core never fails: invalid requests degrade to no-ops.
//! These errors only cover the outer surfaces (config, export, canvas/DOM).

/// All errors that can occur at the edges of the grid widget.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    /// Rejected configuration value.
    #[error("Invalid config: {0}")]
    Config(String),

    /// JSON serialization error.
    #[error("Serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Missing or unusable DOM element.
    #[error("DOM error: {0}")]
    Dom(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GridError>;

#[cfg(target_arch = "wasm32")]
impl From<GridError> for wasm_bindgen::JsValue {
    fn from(e: GridError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
