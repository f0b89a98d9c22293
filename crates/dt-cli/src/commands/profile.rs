use dt_client::ProfileUpdate;
use dt_dashboard::update_profile;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ProfileArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: ProfileArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let confirm_password = args
        .confirm_password
        .or_else(|| args.new_password.clone());
    let update = ProfileUpdate {
        fullname: args.fullname,
        email: args.email,
        new_password: args.new_password,
        confirm_password,
    };

    let spinner = Progress::spinner("Saving profile...");
    let result = update_profile(&ctx.client, &ctx.session, update).await;
    drop(spinner);

    let form = result.map_err(|error| {
        tracing::debug!(%error, "profile update failed");
        match error.response_text() {
            Some(body) => super::request_failed(Some(body), "Unable to update profile", flags),
            None => error.into(),
        }
    })?;

    output(&form, flags.format)
}
