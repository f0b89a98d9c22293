//! Start-up sequence.
//!
//! 1. Fetch the current principal with the session token. A rejection ends
//!    here with [`Bootstrap::LoginRequired`].
//! 2. Populate the profile form and evaluate region visibility from the
//!    token's permissions.
//! 3. Fetch the server version for the system-information panel. Failure
//!    is logged and leaves the panel empty.
//! 4. Announce a snapshot build once per session.

use chrono::{Local, TimeZone};
use dt_auth::SessionContext;
use dt_client::{DashboardApi, ProfileUpdate};
use dt_core::VersionInfo;
use dt_format::format_timestamp_in;
use serde::Serialize;

use crate::error::DashboardError;
use crate::modal::{Modal, ModalEvent};
use crate::session::{ProfileForm, UiVisibility};

/// Contents of the system-information panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SystemInfo {
    pub application: String,
    pub version: String,
    pub built_on: String,
    pub build_id: String,
    pub framework_name: String,
    pub framework_version: String,
    pub framework_built_on: String,
    pub framework_build_id: String,
}

impl SystemInfo {
    /// Build dates rendered in local time.
    #[must_use]
    pub fn from_version(info: &VersionInfo) -> Self {
        Self::from_version_in(info, &Local)
    }

    #[must_use]
    pub fn from_version_in<Tz: TimeZone>(info: &VersionInfo, tz: &Tz) -> Self {
        let built_on =
            |millis| format_timestamp_in(millis, true, tz).unwrap_or_default();
        Self {
            application: info.application.clone(),
            version: info.version.clone(),
            built_on: built_on(info.timestamp.millis()),
            build_id: info.uuid.clone(),
            framework_name: info.framework.name.clone(),
            framework_version: info.framework.version.clone(),
            framework_built_on: built_on(info.framework.timestamp.millis()),
            framework_build_id: info.framework.uuid.clone(),
        }
    }
}

/// An authenticated dashboard, ready to present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub profile: ProfileForm,
    pub visibility: UiVisibility,
    /// `None` when the version request failed.
    pub system: Option<SystemInfo>,
    pub modals: Vec<ModalEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Bootstrap {
    Ready(Box<Dashboard>),
    /// The session is missing or was rejected; show the login dialog.
    LoginRequired,
}

impl Bootstrap {
    /// Modals to show for this outcome.
    #[must_use]
    pub fn modals(&self) -> Vec<ModalEvent> {
        match self {
            Self::Ready(dashboard) => dashboard.modals.clone(),
            Self::LoginRequired => vec![ModalEvent::show(Modal::Login)],
        }
    }
}

/// Run the start-up sequence against `api` for the session in `ctx`.
///
/// # Errors
///
/// Returns [`DashboardError::Client`] if the principal request fails for a
/// reason other than authorization, and [`DashboardError::Session`] if the
/// snapshot flag cannot be stored.
pub async fn bootstrap<A: DashboardApi>(
    api: &A,
    ctx: &mut SessionContext,
) -> Result<Bootstrap, DashboardError> {
    let token = ctx.token();
    let principal = match api.get_principal_self(token.as_deref()).await {
        Ok(principal) => principal,
        Err(error) if error.is_unauthorized() => {
            tracing::debug!(%error, "session not authenticated");
            return Ok(Bootstrap::LoginRequired);
        }
        Err(error) => return Err(error.into()),
    };

    let profile = ProfileForm::from(&principal);
    let visibility = UiVisibility::for_session(ctx);
    let mut modals = Vec::new();

    let system = match api.get_version().await {
        Ok(version) => {
            if version.is_snapshot() && !ctx.snapshot_acknowledged() {
                modals.push(ModalEvent::show(Modal::SnapshotNotification));
                ctx.acknowledge_snapshot()?;
            }
            Some(SystemInfo::from_version(&version))
        }
        Err(error) => {
            tracing::warn!(%error, "could not load server version");
            None
        }
    };

    Ok(Bootstrap::Ready(Box::new(Dashboard {
        profile,
        visibility,
        system,
        modals,
    })))
}

/// Save the profile and return the form as the server now has it.
///
/// # Errors
///
/// Returns [`DashboardError::Client`] if the update is rejected.
pub async fn update_profile<A: DashboardApi>(
    api: &A,
    ctx: &SessionContext,
    update: ProfileUpdate,
) -> Result<ProfileForm, DashboardError> {
    let token = ctx.token();
    let principal = api
        .update_principal_self(token.as_deref(), &update)
        .await?;
    Ok(ProfileForm::from(&principal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeApi, token_with, version};
    use chrono::Utc;
    use dt_client::ClientError;
    use dt_core::Permission;
    use pretty_assertions::assert_eq;

    fn session(permissions: &[Permission]) -> SessionContext {
        let mut ctx = SessionContext::in_memory();
        ctx.store_token(&token_with(permissions)).unwrap();
        ctx
    }

    fn ready(outcome: Bootstrap) -> Dashboard {
        match outcome {
            Bootstrap::Ready(dashboard) => *dashboard,
            Bootstrap::LoginRequired => panic!("expected a dashboard"),
        }
    }

    #[tokio::test]
    async fn no_token_requires_login() {
        let api = FakeApi::default();
        let mut ctx = SessionContext::in_memory();
        let outcome = bootstrap(&api, &mut ctx).await.unwrap();
        assert_eq!(outcome, Bootstrap::LoginRequired);
        assert_eq!(outcome.modals(), vec![ModalEvent::show(Modal::Login)]);
        assert_eq!(api.calls(), vec!["get_principal_self"]);
    }

    #[tokio::test]
    async fn rejected_token_requires_login() {
        let api = FakeApi {
            principal: Err((401, "")),
            ..FakeApi::default()
        };
        let mut ctx = session(&[Permission::ViewPortfolio]);
        assert_eq!(
            bootstrap(&api, &mut ctx).await.unwrap(),
            Bootstrap::LoginRequired
        );
    }

    #[tokio::test]
    async fn server_error_is_propagated() {
        let api = FakeApi {
            principal: Err((500, "boom")),
            ..FakeApi::default()
        };
        let mut ctx = session(&[]);
        let err = bootstrap(&api, &mut ctx).await.unwrap_err();
        assert!(matches!(
            err,
            DashboardError::Client(ClientError::Api { status: 500, .. })
        ));
    }

    #[tokio::test]
    async fn populates_profile_visibility_and_system_panel() {
        let api = FakeApi::default();
        let mut ctx = session(&[Permission::ViewPortfolio, Permission::AccessManagement]);
        let dashboard = ready(bootstrap(&api, &mut ctx).await.unwrap());

        assert_eq!(dashboard.profile.fullname, "Ada Admin");
        assert!(dashboard.visibility.content);
        assert!(dashboard.visibility.admin_sidebar);
        assert!(!dashboard.visibility.system_configuration);
        assert!(dashboard.visibility.logout);

        let system = dashboard.system.expect("system info");
        assert_eq!(system.application, "Dependency-Track");
        assert_eq!(system.framework_name, "Alpine");
        assert!(dashboard.modals.is_empty());
    }

    #[tokio::test]
    async fn version_failure_leaves_panel_empty() {
        let api = FakeApi {
            version: Err((503, "")),
            ..FakeApi::default()
        };
        let mut ctx = session(&[Permission::ViewPortfolio]);
        let dashboard = ready(bootstrap(&api, &mut ctx).await.unwrap());
        assert!(dashboard.system.is_none());
        assert!(dashboard.visibility.content);
    }

    #[tokio::test]
    async fn snapshot_notice_shown_once_per_session() {
        let api = FakeApi {
            version: Ok(version("4.2.0-SNAPSHOT")),
            ..FakeApi::default()
        };
        let mut ctx = session(&[]);

        let first = ready(bootstrap(&api, &mut ctx).await.unwrap());
        assert_eq!(
            first.modals,
            vec![ModalEvent::show(Modal::SnapshotNotification)]
        );
        assert!(ctx.snapshot_acknowledged());

        let second = ready(bootstrap(&api, &mut ctx).await.unwrap());
        assert!(second.modals.is_empty());
    }

    #[test]
    fn system_info_formats_build_dates() {
        let info = SystemInfo::from_version_in(&version("4.1.0"), &Utc);
        assert_eq!(info.built_on, "15 Jan 2017 at 09:05:03");
        assert_eq!(info.framework_built_on, "15 Jan 2017 at 09:05:03");
        assert_eq!(info.build_id, "7fc2c7a3-8a3f-4d9e-a0d4-8f0f5a7c2b11");
    }

    #[tokio::test]
    async fn update_profile_repopulates_form() {
        let api = FakeApi::default();
        let ctx = session(&[]);
        let form = update_profile(
            &api,
            &ctx,
            ProfileUpdate {
                fullname: "Ada Lovelace".into(),
                email: "ada@example.org".into(),
                new_password: Some("n3w".into()),
                confirm_password: Some("n3w".into()),
            },
        )
        .await
        .unwrap();
        assert_eq!(form.fullname, "Ada Lovelace");
        assert_eq!(form.email, "ada@example.org");
        assert!(form.new_password.is_empty());
        assert_eq!(api.calls(), vec!["update_principal_self"]);
    }
}
