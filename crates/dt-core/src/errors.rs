//! Cross-cutting error types.
//!
//! Crate-specific errors (`AuthError`, `ClientError`, ...) live in their
//! own crates; `dt-cli` converges them through `anyhow`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (unknown enum name, malformed timestamp).
    #[error("Validation error: {0}")]
    Validation(String),
}
