//! Smart search. One request per [`SearchKind`]; hits live under
//! `results.<kind>` in the response.

use dt_core::SearchKind;
use serde::de::DeserializeOwned;

use crate::http::check_response;
use crate::{ClientError, DtClient};

impl DtClient {
    /// `GET /api/v1/search/{kind}?query=…`.
    ///
    /// The token is attached when present; the backend decides whether an
    /// anonymous search is allowed.
    pub(crate) async fn search<T: DeserializeOwned>(
        &self,
        kind: SearchKind,
        token: Option<&str>,
        query: &str,
    ) -> Result<Vec<T>, ClientError> {
        let url = self.url(&format!(
            "/api/v1/search/{kind}?query={}",
            urlencoding::encode(query)
        ));
        let mut request = self.http.get(url);
        if let Some(token) = token.filter(|t| !t.trim().is_empty()) {
            request = request.bearer_auth(token);
        }
        let body = check_response(request.send().await?).await?.text().await?;
        extract_results(kind, &body)
    }
}

/// Pull `results.<kind>` out of a search response. A missing or null list
/// means no hits.
fn extract_results<T: DeserializeOwned>(kind: SearchKind, body: &str) -> Result<Vec<T>, ClientError> {
    let mut value: serde_json::Value =
        serde_json::from_str(body).map_err(|e| ClientError::Parse(format!("{kind} search: {e}")))?;
    let hits = value
        .get_mut("results")
        .and_then(|results| results.get_mut(kind.as_str()))
        .map(serde_json::Value::take)
        .filter(|hits| !hits.is_null());
    match hits {
        None => Ok(Vec::new()),
        Some(hits) => serde_json::from_value(hits)
            .map_err(|e| ClientError::Parse(format!("{kind} search: {e}"))),
    }
}
