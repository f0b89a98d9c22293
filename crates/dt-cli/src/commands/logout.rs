use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct LogoutResponse {
    cleared: bool,
}

pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    dt_dashboard::logout(&mut ctx.session)?;
    output(&LogoutResponse { cleared: true }, flags.format)
}
