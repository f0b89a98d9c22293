//! # dt-core
//!
//! Shared types for the dtrack console crates.
//!
//! - Capability and severity enums ([`enums`])
//! - Data exchanged with the REST backend: principals, version info and
//!   smart-search hits ([`entities`])
//! - Cross-cutting error types ([`errors`])

pub mod entities;
pub mod enums;
pub mod errors;

pub use entities::{
    BuildTimestamp, ComponentHit, FrameworkInfo, LicenseHit, Principal, ProjectHit, VersionInfo,
    VulnerabilityHit,
};
pub use enums::{Permission, SearchKind, Severity};
pub use errors::CoreError;
