use std::time::Duration;

use anyhow::Context;
use dt_auth::SessionContext;
use dt_client::DtClient;
use dt_config::DtConfig;

use crate::cli::GlobalFlags;

/// Everything a server-facing command needs.
pub struct AppContext {
    pub client: DtClient,
    pub session: SessionContext,
    /// Context path links are rooted at, always ending in `/`.
    pub context_path: String,
}

impl AppContext {
    pub fn init(mut config: DtConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        if let Some(server) = &flags.server {
            config.server.url.clone_from(server);
        }

        let base_url = config.server.base_url()?;
        let client = DtClient::new(&base_url, Duration::from_secs(config.server.timeout_secs))
            .context("failed to build HTTP client")?;

        let dir = config
            .session
            .resolve_dir()
            .context("cannot determine session directory; set DTRACK_SESSION__DIR")?;
        tracing::debug!(server = %base_url, session = %dir.display(), "context ready");

        Ok(Self {
            client,
            session: SessionContext::open(&dir),
            context_path: config.server.normalized_context_path(),
        })
    }
}
