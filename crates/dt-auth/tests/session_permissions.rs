//! A stored token's permissions are readable through a file-backed session.

use base64::Engine as _;
use dt_auth::{SessionContext, has_permission};
use dt_core::Permission;

fn token_with(permissions: &[&str]) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let payload = serde_json::json!({ "sub": "analyst", "permissions": permissions });
    format!(
        "{}.{}.{}",
        engine.encode(r#"{"alg":"HS256"}"#),
        engine.encode(payload.to_string()),
        engine.encode("sig")
    )
}

#[test]
fn stored_token_permissions_survive_reopen() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    {
        let mut ctx = SessionContext::open(tmp.path());
        ctx.store_token(&token_with(&["VIEW_PORTFOLIO", "VULNERABILITY_ANALYSIS"]))
            .expect("store");
    }

    let ctx = SessionContext::open(tmp.path());
    assert!(ctx.has_stored_token());

    // DTRACK_TOKEN may be set in the environment running the tests; only the
    // stored token is checked here.
    if ctx.token_source() == Some(dt_auth::TokenSource::Session) {
        let decoded = ctx.decoded_token();
        assert!(has_permission(Permission::ViewPortfolio, decoded.as_ref()));
        assert!(has_permission(Permission::VulnerabilityAnalysis, decoded.as_ref()));
        assert!(!has_permission(Permission::AccessManagement, decoded.as_ref()));
    }
}

#[test]
fn logout_removes_token_from_disk() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let mut ctx = SessionContext::open(tmp.path());
    ctx.store_token(&token_with(&[])).expect("store");
    ctx.logout().expect("logout");

    assert!(!SessionContext::open(tmp.path()).has_stored_token());
    assert!(tmp.path().join("shared.json").exists());
}
