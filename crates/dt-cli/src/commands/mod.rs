mod change_password;
mod login;
mod logout;
mod profile;
pub mod render;
mod search;
mod status;
mod version;

use dt_dashboard::{ModalEvent, error_modal};

use crate::cli::{Commands, GlobalFlags};
use crate::context::AppContext;
use crate::output::output;

/// Route a server-facing command to its handler.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Login(args) => login::handle(args, ctx, flags).await,
        Commands::ChangePassword(args) => change_password::handle(args, ctx, flags).await,
        Commands::Logout => logout::handle(ctx, flags),
        Commands::Status => status::handle(ctx, flags).await,
        Commands::Profile(args) => profile::handle(args, ctx, flags).await,
        Commands::Version => version::handle(ctx, flags).await,
        Commands::Search(args) => search::handle(&args, ctx, flags).await,
        Commands::Render { action } => render::handle(&action, flags),
    }
}

/// Generic error dialog for a failed request and the message the command
/// exits with.
fn failure_event(body: Option<&str>, fallback: &str) -> (ModalEvent, String) {
    let modal = error_modal(body, fallback);
    let message = modal.message().unwrap_or(fallback).to_string();
    (ModalEvent::show(modal), message)
}

/// Print the error dialog for a failed request and return the command's error.
fn request_failed(body: Option<&str>, fallback: &str, flags: &GlobalFlags) -> anyhow::Error {
    let (event, message) = failure_event(body, fallback);
    if let Err(error) = output(&event, flags.format) {
        return error;
    }
    anyhow::anyhow!(message)
}
