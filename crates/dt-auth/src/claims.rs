use std::collections::BTreeSet;

use base64::Engine as _;
use chrono::{DateTime, Utc};
use dt_core::Permission;
use serde_json::Value;

use crate::error::AuthError;

/// Claims read from an auth token payload.
///
/// Produced by [`decode_token`]; the signature is NOT verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedToken {
    /// Raw token string, sent back as the bearer credential.
    pub raw: String,
    /// `sub` claim (the username).
    pub subject: Option<String>,
    /// `iss` claim.
    pub issuer: Option<String>,
    /// `exp` claim, if present.
    pub expires_at: Option<DateTime<Utc>>,
    /// Recognised permission names; unknown names are dropped.
    pub permissions: BTreeSet<Permission>,
}

impl DecodedToken {
    #[must_use]
    pub fn has(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}

/// `permission` is granted by `token`; no token grants nothing.
#[must_use]
pub fn has_permission(permission: Permission, token: Option<&DecodedToken>) -> bool {
    token.is_some_and(|t| t.has(permission))
}

/// Decode the payload segment of a `header.payload.signature` token.
///
/// The `permissions` claim is accepted as an array of names, an array of
/// `{"name": ...}` objects, or a comma-separated string.
///
/// # Errors
///
/// Returns [`AuthError::MalformedToken`] if the token does not have three
/// segments, the payload is not base64url, or it is not a JSON object.
pub fn decode_token(token: &str) -> Result<DecodedToken, AuthError> {
    let parts: Vec<&str> = token.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(AuthError::MalformedToken("invalid JWT format".into()));
    }
    let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(parts[1].trim_end_matches('='))
        .map_err(|e| AuthError::MalformedToken(format!("base64 decode failed: {e}")))?;
    let value: Value = serde_json::from_slice(&payload)
        .map_err(|e| AuthError::MalformedToken(format!("JSON parse failed: {e}")))?;
    if !value.is_object() {
        return Err(AuthError::MalformedToken("payload is not an object".into()));
    }

    let expires_at = value["exp"]
        .as_i64()
        .and_then(|exp| DateTime::from_timestamp(exp, 0));

    Ok(DecodedToken {
        raw: token.trim().to_string(),
        subject: value["sub"].as_str().map(str::to_string),
        issuer: value["iss"].as_str().map(str::to_string),
        expires_at,
        permissions: permission_names(&value["permissions"])
            .into_iter()
            .filter_map(|name| match name.parse::<Permission>() {
                Ok(permission) => Some(permission),
                Err(_) => {
                    tracing::debug!(%name, "ignoring unknown permission in token");
                    None
                }
            })
            .collect(),
    })
}

fn permission_names(claim: &Value) -> Vec<String> {
    match claim {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::String(name) => Some(name.clone()),
                Value::Object(map) => map.get("name").and_then(Value::as_str).map(str::to_string),
                _ => None,
            })
            .collect(),
        Value::String(csv) => csv
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
