//! Where session state is kept on disk.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Directory for the session and shared stores. Empty means `~/.dtrack`.
    #[serde(default)]
    pub dir: String,
}

impl SessionConfig {
    /// Resolve the storage directory, falling back to `~/.dtrack`.
    #[must_use]
    pub fn resolve_dir(&self) -> Option<PathBuf> {
        if self.dir.trim().is_empty() {
            return dirs::home_dir().map(|home| home.join(".dtrack"));
        }
        Some(PathBuf::from(self.dir.trim()))
    }
}
