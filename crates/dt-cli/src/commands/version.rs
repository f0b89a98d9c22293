use dt_client::DashboardApi as _;
use dt_dashboard::SystemInfo;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Fetching server version...");
    let result = ctx.client.get_version().await;
    drop(spinner);

    let version = result.map_err(|error| {
        tracing::debug!(%error, "version request failed");
        match error.response_text() {
            Some(body) => {
                super::request_failed(Some(body), "Unable to retrieve server version", flags)
            }
            None => error.into(),
        }
    })?;

    output(&SystemInfo::from_version(&version), flags.format)
}
