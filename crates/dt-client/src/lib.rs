//! # dt-client
//!
//! REST client for the dashboard backend.
//!
//! [`DashboardApi`] is the seam the dashboard flows are written against;
//! [`DtClient`] implements it over `reqwest`. Each call is one best-effort
//! request bounded by the configured timeout; nothing is retried.

mod auth;
mod error;
mod http;
mod search;
mod user;
mod version;

pub use error::ClientError;
pub use user::ProfileUpdate;

use std::future::Future;
use std::time::Duration;

use dt_core::{ComponentHit, LicenseHit, Principal, ProjectHit, VersionInfo, VulnerabilityHit};

/// Backend operations used by the dashboard.
///
/// Authenticated calls take the bearer token explicitly; callers own the
/// session state.
pub trait DashboardApi {
    /// Exchange credentials for a token.
    fn login(
        &self,
        username: &str,
        password: &str,
    ) -> impl Future<Output = Result<String, ClientError>> + Send;

    /// Change an expired or administrator-reset password without a session.
    fn force_change_password(
        &self,
        username: &str,
        password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> impl Future<Output = Result<(), ClientError>> + Send;

    fn get_principal_self(
        &self,
        token: Option<&str>,
    ) -> impl Future<Output = Result<Principal, ClientError>> + Send;

    fn update_principal_self(
        &self,
        token: Option<&str>,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<Principal, ClientError>> + Send;

    fn get_version(&self) -> impl Future<Output = Result<VersionInfo, ClientError>> + Send;

    fn smart_search_project(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> impl Future<Output = Result<Vec<ProjectHit>, ClientError>> + Send;

    fn smart_search_component(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> impl Future<Output = Result<Vec<ComponentHit>, ClientError>> + Send;

    fn smart_search_vulnerability(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> impl Future<Output = Result<Vec<VulnerabilityHit>, ClientError>> + Send;

    fn smart_search_license(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> impl Future<Output = Result<Vec<LicenseHit>, ClientError>> + Send;
}

/// HTTP implementation of [`DashboardApi`].
#[derive(Debug, Clone)]
pub struct DtClient {
    http: reqwest::Client,
    base_url: String,
}

impl DtClient {
    /// Build a client for `base_url` (scheme, host and context path).
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built (e.g. TLS backend initialisation fails).
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("dtc/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Bearer header for endpoints that must not be called anonymously.
    fn require_token(token: Option<&str>) -> Result<&str, ClientError> {
        token
            .filter(|t| !t.trim().is_empty())
            .ok_or(ClientError::NotAuthenticated)
    }
}

impl DashboardApi for DtClient {
    async fn login(&self, username: &str, password: &str) -> Result<String, ClientError> {
        self.post_login(username, password).await
    }

    async fn force_change_password(
        &self,
        username: &str,
        password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> Result<(), ClientError> {
        self.post_force_change_password(username, password, new_password, confirm_password)
            .await
    }

    async fn get_principal_self(&self, token: Option<&str>) -> Result<Principal, ClientError> {
        self.fetch_self(token).await
    }

    async fn update_principal_self(
        &self,
        token: Option<&str>,
        update: &ProfileUpdate,
    ) -> Result<Principal, ClientError> {
        self.post_self(token, update).await
    }

    async fn get_version(&self) -> Result<VersionInfo, ClientError> {
        self.fetch_version().await
    }

    async fn smart_search_project(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> Result<Vec<ProjectHit>, ClientError> {
        self.search(dt_core::SearchKind::Project, token, query).await
    }

    async fn smart_search_component(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> Result<Vec<ComponentHit>, ClientError> {
        self.search(dt_core::SearchKind::Component, token, query).await
    }

    async fn smart_search_vulnerability(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> Result<Vec<VulnerabilityHit>, ClientError> {
        self.search(dt_core::SearchKind::Vulnerability, token, query)
            .await
    }

    async fn smart_search_license(
        &self,
        token: Option<&str>,
        query: &str,
    ) -> Result<Vec<LicenseHit>, ClientError> {
        self.search(dt_core::SearchKind::License, token, query).await
    }
}
