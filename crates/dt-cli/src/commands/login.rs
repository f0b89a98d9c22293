use std::io::BufRead as _;

use anyhow::Context;
use dt_dashboard::{LoginFailure, LoginForm, LoginOutcome, ModalEvent, submit_login};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LoginArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct LoginRejectedResponse {
    authenticated: bool,
    reason: LoginFailure,
    modals: Vec<ModalEvent>,
}

pub async fn handle(
    args: LoginArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let password = match args.password {
        Some(password) => password,
        None => read_password_line()?,
    };
    let form = LoginForm {
        username: args.username,
        password,
    };

    let spinner = Progress::spinner("Logging in...");
    let outcome = submit_login(&ctx.client, &mut ctx.session, form).await?;
    drop(spinner);

    match outcome {
        // Same as reloading the page: show what the new session sees.
        LoginOutcome::Reload => super::status::handle(ctx, flags).await,
        LoginOutcome::Rejected { failure, modals } => {
            output(
                &LoginRejectedResponse {
                    authenticated: false,
                    reason: failure,
                    modals,
                },
                flags.format,
            )?;
            if failure == LoginFailure::ForcePasswordChange {
                anyhow::bail!("password change required; run `dtc change-password`");
            }
            anyhow::bail!(
                "{}",
                failure.message().unwrap_or("authentication failed")
            )
        }
    }
}

fn read_password_line() -> anyhow::Result<String> {
    let mut line = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read password from stdin")?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
