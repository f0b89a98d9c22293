//! Credential endpoints. Both are form-encoded and unauthenticated.

use crate::http::{FORM_CONTENT_TYPE, check_response, form_body};
use crate::{ClientError, DtClient};

impl DtClient {
    /// `POST /api/v1/user/login`. The response body is the bearer token.
    pub(crate) async fn post_login(
        &self,
        username: &str,
        password: &str,
    ) -> Result<String, ClientError> {
        let body = form_body(&[("username", username), ("password", password)]);
        let resp = self
            .http
            .post(self.url("/api/v1/user/login"))
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        let token = check_response(resp).await?.text().await?;
        Ok(token.trim().to_string())
    }

    /// `POST /api/v1/user/forceChangePassword`.
    pub(crate) async fn post_force_change_password(
        &self,
        username: &str,
        password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ClientError> {
        let body = form_body(&[
            ("username", username),
            ("password", password),
            ("newPassword", new_password),
            ("confirmPassword", confirm_password),
        ]);
        let resp = self
            .http
            .post(self.url("/api/v1/user/forceChangePassword"))
            .header(reqwest::header::CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
