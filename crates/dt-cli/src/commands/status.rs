use dt_auth::TokenSource;
use dt_dashboard::{Bootstrap, bootstrap};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Serialize)]
struct StatusResponse {
    token_source: Option<TokenSource>,
    /// RFC 3339 expiry of the active token, when it carries one.
    expires_at: Option<String>,
    dashboard: Bootstrap,
}

pub async fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Loading dashboard...");
    let dashboard = bootstrap(&ctx.client, &mut ctx.session).await?;
    drop(spinner);

    let expires_at = ctx
        .session
        .decoded_token()
        .and_then(|token| token.expires_at)
        .map(|at| at.to_rfc3339());

    output(
        &StatusResponse {
            token_source: ctx.session.token_source(),
            expires_at,
            dashboard,
        },
        flags.format,
    )
}
