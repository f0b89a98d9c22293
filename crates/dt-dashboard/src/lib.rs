//! # dt-dashboard
//!
//! The dashboard's behaviour with the page taken away.
//!
//! Every flow takes the REST collaborator ([`dt_client::DashboardApi`]) and
//! the caller-owned [`dt_auth::SessionContext`] explicitly and returns plain
//! values: which regions are visible, what the forms contain, which modals
//! to show or hide. A front end (the `dtc` binary, or anything else) decides
//! how to present them.
//!
//! - [`bootstrap`]: start-up sequence, system information, profile update
//! - [`session`]: permission-driven visibility, profile form, logout
//! - [`forms`]: login and forced password change
//! - [`search`]: the four-source smart search
//! - [`modal`]: modal dialogs as values

pub mod bootstrap;
pub mod error;
pub mod forms;
pub mod modal;
pub mod search;
pub mod session;

#[cfg(test)]
mod fake;

pub use bootstrap::{Bootstrap, Dashboard, SystemInfo, bootstrap, update_profile};
pub use error::DashboardError;
pub use forms::{
    LoginFailure, LoginForm, LoginOutcome, PasswordChangeForm, error_modal, submit_login,
    submit_password_change,
};
pub use modal::{Modal, ModalEvent, ModalKind};
pub use search::{SearchSection, Suggestion, smart_search};
pub use session::{ProfileForm, UiVisibility, logout};
