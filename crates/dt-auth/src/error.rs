use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("malformed token: {0}")]
    MalformedToken(String),

    #[error("session store error: {0}")]
    StoreError(String),
}
