//! # dt-auth
//!
//! Client-side view of the backend's auth token.
//!
//! Decodes the token payload to read permission flags (no signature check:
//! the backend enforces access, the client only decides what to show),
//! and keeps the session keys (`token`, `snapshot`, `sessionInvalidate`)
//! in an explicit [`SessionContext`] instead of ambient global storage.

pub mod claims;
pub mod error;
pub mod session;
pub mod store;

pub use claims::{DecodedToken, decode_token, has_permission};
pub use error::AuthError;
pub use session::{SessionContext, TokenSource};
pub use store::{FileStore, KeyValueStore, MemoryStore};
