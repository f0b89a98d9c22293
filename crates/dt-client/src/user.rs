//! The logged-in principal.

use dt_core::Principal;
use serde::Serialize;

use crate::http::check_response;
use crate::{ClientError, DtClient};

/// Body of `POST /api/v1/user/self`.
///
/// Password fields are sent only when a new password was entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub fullname: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm_password: Option<String>,
}

impl DtClient {
    pub(crate) async fn fetch_self(&self, token: Option<&str>) -> Result<Principal, ClientError> {
        let token = Self::require_token(token)?;
        let resp = self
            .http
            .get(self.url("/api/v1/user/self"))
            .bearer_auth(token)
            .send()
            .await?;
        parse_principal(&check_response(resp).await?.text().await?)
    }

    pub(crate) async fn post_self(
        &self,
        token: Option<&str>,
        update: &ProfileUpdate,
    ) -> Result<Principal, ClientError> {
        let token = Self::require_token(token)?;
        let resp = self
            .http
            .post(self.url("/api/v1/user/self"))
            .bearer_auth(token)
            .json(update)
            .send()
            .await?;
        parse_principal(&check_response(resp).await?.text().await?)
    }
}

fn parse_principal(body: &str) -> Result<Principal, ClientError> {
    serde_json::from_str(body).map_err(|e| ClientError::Parse(format!("principal: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_self_response() {
        let principal = parse_principal(
            r#"{"username":"admin","fullname":"Ada Admin","email":"ada@example.com","teams":[]}"#,
        )
        .unwrap();
        assert_eq!(principal.username, "admin");
        assert_eq!(principal.fullname.as_deref(), Some("Ada Admin"));
    }

    #[test]
    fn update_omits_unset_passwords() {
        let update = ProfileUpdate {
            fullname: "Ada".into(),
            email: "ada@example.com".into(),
            ..ProfileUpdate::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            serde_json::json!({ "fullname": "Ada", "email": "ada@example.com" })
        );
    }

    #[test]
    fn update_sends_password_pair() {
        let update = ProfileUpdate {
            fullname: "Ada".into(),
            email: String::new(),
            new_password: Some("n3w".into()),
            confirm_password: Some("n3w".into()),
        };
        let value = serde_json::to_value(&update).unwrap();
        assert_eq!(value["newPassword"], "n3w");
        assert_eq!(value["confirmPassword"], "n3w");
    }

    #[tokio::test]
    async fn missing_token_is_rejected_locally() {
        let client =
            DtClient::new("http://127.0.0.1:9", std::time::Duration::from_secs(1)).unwrap();
        let err = client.fetch_self(None).await.unwrap_err();
        assert!(matches!(err, ClientError::NotAuthenticated));
        assert!(err.is_unauthorized());
    }
}
