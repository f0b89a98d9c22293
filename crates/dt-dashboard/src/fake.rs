//! Scripted [`DashboardApi`] for flow tests.

use std::sync::Mutex;

use base64::Engine as _;
use dt_client::{ClientError, DashboardApi, ProfileUpdate};
use dt_core::{
    BuildTimestamp, ComponentHit, FrameworkInfo, LicenseHit, Permission, Principal, ProjectHit,
    VersionInfo, VulnerabilityHit,
};

/// `Err((status, body))` becomes [`ClientError::Api`]; status 0 stands for a
/// response that could not be parsed.
pub type Reply<T> = Result<T, (u16, &'static str)>;

pub struct FakeApi {
    pub login: Reply<String>,
    pub force_change: Reply<()>,
    pub principal: Reply<Principal>,
    pub version: Reply<VersionInfo>,
    pub projects: Reply<Vec<ProjectHit>>,
    pub components: Reply<Vec<ComponentHit>>,
    pub vulnerabilities: Reply<Vec<VulnerabilityHit>>,
    pub licenses: Reply<Vec<LicenseHit>>,
    pub calls: Mutex<Vec<String>>,
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            login: Ok(token_with(&[Permission::ViewPortfolio])),
            force_change: Ok(()),
            principal: Ok(Principal {
                username: "admin".into(),
                fullname: Some("Ada Admin".into()),
                email: Some("ada@example.com".into()),
            }),
            version: Ok(version("4.1.0")),
            projects: Ok(Vec::new()),
            components: Ok(Vec::new()),
            vulnerabilities: Ok(Vec::new()),
            licenses: Ok(Vec::new()),
            calls: Mutex::new(Vec::new()),
        }
    }
}

impl FakeApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

fn reply<T: Clone>(reply: &Reply<T>) -> Result<T, ClientError> {
    match reply {
        Ok(value) => Ok(value.clone()),
        Err((0, body)) => Err(ClientError::Parse((*body).to_string())),
        Err((status, body)) => Err(ClientError::Api {
            status: *status,
            message: (*body).to_string(),
        }),
    }
}

impl DashboardApi for FakeApi {
    async fn login(&self, username: &str, _password: &str) -> Result<String, ClientError> {
        self.record(format!("login {username}"));
        reply(&self.login)
    }

    async fn force_change_password(
        &self,
        username: &str,
        _password: &str,
        _new_password: &str,
        _confirm_password: &str,
    ) -> Result<(), ClientError> {
        self.record(format!("force_change_password {username}"));
        reply(&self.force_change)
    }

    async fn get_principal_self(&self, token: Option<&str>) -> Result<Principal, ClientError> {
        self.record("get_principal_self");
        if token.is_none() {
            return Err(ClientError::NotAuthenticated);
        }
        reply(&self.principal)
    }

    async fn update_principal_self(
        &self,
        _token: Option<&str>,
        update: &ProfileUpdate,
    ) -> Result<Principal, ClientError> {
        self.record("update_principal_self");
        let current = reply(&self.principal)?;
        Ok(Principal {
            username: current.username,
            fullname: Some(update.fullname.clone()),
            email: Some(update.email.clone()),
        })
    }

    async fn get_version(&self) -> Result<VersionInfo, ClientError> {
        self.record("get_version");
        reply(&self.version)
    }

    async fn smart_search_project(
        &self,
        _token: Option<&str>,
        query: &str,
    ) -> Result<Vec<ProjectHit>, ClientError> {
        self.record(format!("search project {query}"));
        reply(&self.projects)
    }

    async fn smart_search_component(
        &self,
        _token: Option<&str>,
        query: &str,
    ) -> Result<Vec<ComponentHit>, ClientError> {
        self.record(format!("search component {query}"));
        reply(&self.components)
    }

    async fn smart_search_vulnerability(
        &self,
        _token: Option<&str>,
        query: &str,
    ) -> Result<Vec<VulnerabilityHit>, ClientError> {
        self.record(format!("search vulnerability {query}"));
        reply(&self.vulnerabilities)
    }

    async fn smart_search_license(
        &self,
        _token: Option<&str>,
        query: &str,
    ) -> Result<Vec<LicenseHit>, ClientError> {
        self.record(format!("search license {query}"));
        reply(&self.licenses)
    }
}

/// Unsigned token carrying `permissions`.
pub fn token_with(permissions: &[Permission]) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let names: Vec<&str> = permissions.iter().map(|p| p.as_str()).collect();
    let payload = serde_json::json!({ "sub": "admin", "permissions": names });
    format!(
        "{}.{}.{}",
        engine.encode(r#"{"alg":"HS256","typ":"JWT"}"#),
        engine.encode(payload.to_string()),
        engine.encode("signature")
    )
}

/// 15 Jan 2017 09:05:03 UTC.
pub const BUILT_AT: i64 = 1_484_471_103_000;

pub fn version(version: &str) -> VersionInfo {
    VersionInfo {
        application: "Dependency-Track".into(),
        version: version.into(),
        timestamp: BuildTimestamp(BUILT_AT),
        uuid: "7fc2c7a3-8a3f-4d9e-a0d4-8f0f5a7c2b11".into(),
        framework: FrameworkInfo {
            name: "Alpine".into(),
            version: "1.9.0".into(),
            timestamp: BuildTimestamp(BUILT_AT),
            uuid: "0d3a4b5c-6e7f-4a8b-9c0d-1e2f3a4b5c6d".into(),
        },
    }
}
