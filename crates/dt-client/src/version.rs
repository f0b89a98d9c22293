//! Server build information.

use dt_core::VersionInfo;

use crate::http::check_response;
use crate::{ClientError, DtClient};

impl DtClient {
    /// `GET /api/version`. Unauthenticated.
    pub(crate) async fn fetch_version(&self) -> Result<VersionInfo, ClientError> {
        let resp = self.http.get(self.url("/api/version")).send().await?;
        let body = check_response(resp).await?.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::Parse(format!("version: {e}")))
    }
}
