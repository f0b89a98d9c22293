//! Shared HTTP helpers.
//!
//! Centralizes the status check (non-success → [`ClientError::Api`] with the
//! response body) and form encoding so endpoint modules stay focused on
//! request construction and response mapping.

use crate::error::ClientError;

/// Return the response unchanged on success, else [`ClientError::Api`]
/// carrying the status and the body text.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let message = resp.text().await.unwrap_or_default();
        tracing::debug!(status, %message, "backend returned an error status");
        return Err(ClientError::Api { status, message });
    }
    Ok(resp)
}

/// `application/x-www-form-urlencoded` body from ordered pairs.
pub fn form_body(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn check_response_success() {
        let resp = mock_response(200, "ok");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn check_response_carries_body() {
        let resp = mock_response(401, "SUSPENDED");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(
            &err,
            ClientError::Api { status: 401, message } if message == "SUSPENDED"
        ));
        assert!(err.is_unauthorized());
    }

    #[tokio::test]
    async fn check_response_server_error() {
        let resp = mock_response(500, "");
        let err = check_response(resp).await.unwrap_err();
        assert!(matches!(err, ClientError::Api { status: 500, .. }));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn form_body_encodes_values() {
        assert_eq!(
            form_body(&[("username", "jane doe"), ("password", "p&ss=word")]),
            "username=jane%20doe&password=p%26ss%3Dword"
        );
    }
}
