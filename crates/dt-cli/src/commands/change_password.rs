use dt_dashboard::{ModalEvent, ModalKind, PasswordChangeForm, submit_password_change};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ChangePasswordArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct ChangePasswordResponse {
    changed: bool,
    modals: Vec<ModalEvent>,
}

pub async fn handle(
    args: ChangePasswordArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let confirm_password = args
        .confirm_password
        .unwrap_or_else(|| args.new_password.clone());
    let form = PasswordChangeForm {
        username: args.username,
        password: args.password,
        new_password: args.new_password,
        confirm_password,
    };

    let spinner = Progress::spinner("Changing password...");
    let modals = submit_password_change(&ctx.client, form).await;
    drop(spinner);

    // Success ends on the login dialog; failure ends on the change dialog.
    let changed = matches!(
        modals.last(),
        Some(ModalEvent::Show { modal }) if modal.kind() == ModalKind::Login
    );
    output(&ChangePasswordResponse { changed, modals }, flags.format)?;
    if !changed {
        anyhow::bail!("password change rejected");
    }
    Ok(())
}
