use dt_auth::AuthError;
use dt_client::ClientError;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("session storage: {0}")]
    Session(#[from] AuthError),
}

impl DashboardError {
    /// Raw backend response body, when the failure came from the server.
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        match self {
            Self::Client(error) => error.response_text(),
            Self::Session(_) => None,
        }
    }
}
