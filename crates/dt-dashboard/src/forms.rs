//! Login and forced password change.
//!
//! Forms are taken by value: submitting consumes the entered credentials,
//! which is all "clearing the fields" amounts to without a page.

use dt_auth::SessionContext;
use dt_client::{ClientError, DashboardApi};
use dt_format::is_blank;
use serde::Serialize;

use crate::error::DashboardError;
use crate::modal::{Modal, ModalEvent, ModalKind};

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default)]
pub struct PasswordChangeForm {
    pub username: String,
    pub password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Reason codes the backend sends as the body of a rejected login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoginFailure {
    InvalidCredentials,
    ExpiredCredentials,
    ForcePasswordChange,
    Suspended,
    UnmappedAccount,
    /// Anything else, including transport failures with no body.
    Unexpected,
}

impl LoginFailure {
    /// Map a response body to its reason. Matching is exact.
    #[must_use]
    pub fn from_response(body: Option<&str>) -> Self {
        match body {
            Some("INVALID_CREDENTIALS") => Self::InvalidCredentials,
            Some("EXPIRED_CREDENTIALS") => Self::ExpiredCredentials,
            Some("FORCE_PASSWORD_CHANGE") => Self::ForcePasswordChange,
            Some("SUSPENDED") => Self::Suspended,
            Some("UNMAPPED_ACCOUNT") => Self::UnmappedAccount,
            _ => Self::Unexpected,
        }
    }

    /// User-facing text. `None` for the forced change, which switches dialogs
    /// instead of explaining anything.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::InvalidCredentials => Some("Invalid username or password"),
            Self::ExpiredCredentials => Some("The supplied credential have expired"),
            Self::ForcePasswordChange => None,
            Self::Suspended => Some("This account has been suspended and is no longer active"),
            Self::UnmappedAccount => Some("This account does not have access to Dependency-Track"),
            Self::Unexpected => {
                Some("Unable to authenticate. Contact your Dependency-Track administrator")
            }
        }
    }

    #[must_use]
    pub fn modal_events(self) -> Vec<ModalEvent> {
        self.message().map_or_else(
            || {
                vec![
                    ModalEvent::hide(ModalKind::Login),
                    ModalEvent::show(Modal::ForcePasswordChange),
                ]
            },
            |message| vec![ModalEvent::info(message)],
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Token stored; start over from the bootstrap.
    Reload,
    Rejected {
        failure: LoginFailure,
        modals: Vec<ModalEvent>,
    },
}

/// Submit the login form.
///
/// # Errors
///
/// Only a failure to store the issued token is an error; every rejection,
/// including transport failures, is a [`LoginOutcome::Rejected`].
pub async fn submit_login<A: DashboardApi>(
    api: &A,
    ctx: &mut SessionContext,
    form: LoginForm,
) -> Result<LoginOutcome, DashboardError> {
    match api.login(&form.username, &form.password).await {
        Ok(token) => {
            ctx.store_token(&token)?;
            tracing::info!(username = %form.username, "logged in");
            Ok(LoginOutcome::Reload)
        }
        Err(error) => {
            let failure = LoginFailure::from_response(error.response_text());
            tracing::debug!(%error, ?failure, "login rejected");
            Ok(LoginOutcome::Rejected {
                failure,
                modals: failure.modal_events(),
            })
        }
    }
}

/// Submit the forced password change.
///
/// The change dialog is hidden first. On success the user is told and sent
/// back to the login dialog; on failure the change dialog comes back with
/// the server's message.
pub async fn submit_password_change<A: DashboardApi>(
    api: &A,
    form: PasswordChangeForm,
) -> Vec<ModalEvent> {
    let mut events = vec![ModalEvent::hide(ModalKind::ForcePasswordChange)];
    match api
        .force_change_password(
            &form.username,
            &form.password,
            &form.new_password,
            &form.confirm_password,
        )
        .await
    {
        Ok(()) => events.extend([
            ModalEvent::info("Password successfully changed"),
            ModalEvent::hide(ModalKind::ForcePasswordChange),
            ModalEvent::show(Modal::Login),
        ]),
        Err(error) => {
            tracing::debug!(%error, "password change rejected");
            events.extend([
                ModalEvent::show(Modal::ForcePasswordChange),
                ModalEvent::info(raw_message(&error)),
            ]);
        }
    }
    events
}

fn raw_message(error: &ClientError) -> String {
    error
        .response_text()
        .map_or_else(|| error.to_string(), str::to_string)
}

/// Generic error dialog: the trimmed response body if it has any text,
/// otherwise `fallback`.
#[must_use]
pub fn error_modal(body: Option<&str>, fallback: &str) -> Modal {
    let message = body
        .filter(|text| !is_blank(text))
        .map_or(fallback, str::trim);
    Modal::GenericError(message.to_string())
}
