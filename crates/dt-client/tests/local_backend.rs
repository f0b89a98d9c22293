//! Client calls against a scripted local backend.

use std::io::Read as _;
use std::thread::JoinHandle;
use std::time::Duration;

use dt_client::{ClientError, DashboardApi, DtClient, ProfileUpdate};
use pretty_assertions::assert_eq;

#[derive(Debug)]
struct Seen {
    method: String,
    url: String,
    authorization: Option<String>,
    content_type: Option<String>,
    body: String,
}

/// Answer each incoming request with the next scripted `(status, body)`.
fn serve(script: Vec<(u16, &'static str)>) -> (String, JoinHandle<Vec<Seen>>) {
    let server = tiny_http::Server::http("127.0.0.1:0").expect("bind");
    let port = server.server_addr().to_ip().expect("ip addr").port();
    let handle = std::thread::spawn(move || {
        let mut seen = Vec::new();
        for (status, body) in script {
            let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(5)) else {
                break;
            };
            let header = |name: &'static str| {
                request
                    .headers()
                    .iter()
                    .find(|h| h.field.equiv(name))
                    .map(|h| h.value.as_str().to_string())
            };
            let authorization = header("Authorization");
            let content_type = header("Content-Type");
            let mut received = String::new();
            request.as_reader().read_to_string(&mut received).expect("body");
            seen.push(Seen {
                method: request.method().to_string(),
                url: request.url().to_string(),
                authorization,
                content_type,
                body: received,
            });
            request
                .respond(tiny_http::Response::from_string(body).with_status_code(status))
                .expect("respond");
        }
        seen
    });
    (format!("http://127.0.0.1:{port}/dtrack"), handle)
}

fn client(base: &str) -> DtClient {
    DtClient::new(base, Duration::from_secs(5)).expect("client")
}

#[tokio::test]
async fn login_posts_form_and_returns_token() {
    let (base, server) = serve(vec![(200, "  header.payload.sig\n")]);
    let token = client(&base).login("admin", "s3cr&t").await.unwrap();
    assert_eq!(token, "header.payload.sig");

    let seen = server.join().unwrap();
    assert_eq!(seen[0].method, "POST");
    assert_eq!(seen[0].url, "/dtrack/api/v1/user/login");
    assert_eq!(
        seen[0].content_type.as_deref(),
        Some("application/x-www-form-urlencoded")
    );
    assert_eq!(seen[0].body, "username=admin&password=s3cr%26t");
}

#[tokio::test]
async fn login_failure_carries_reason_code() {
    let (base, server) = serve(vec![(401, "FORCE_PASSWORD_CHANGE")]);
    let err = client(&base).login("admin", "old").await.unwrap_err();
    assert_eq!(err.response_text(), Some("FORCE_PASSWORD_CHANGE"));
    assert!(err.is_unauthorized());
    server.join().unwrap();
}

#[tokio::test]
async fn force_change_password_sends_all_fields() {
    let (base, server) = serve(vec![(200, "")]);
    client(&base)
        .force_change_password("admin", "old", "new", "new")
        .await
        .unwrap();

    let seen = server.join().unwrap();
    assert_eq!(seen[0].url, "/dtrack/api/v1/user/forceChangePassword");
    assert_eq!(
        seen[0].body,
        "username=admin&password=old&newPassword=new&confirmPassword=new"
    );
}

#[tokio::test]
async fn principal_requests_use_bearer_token() {
    let (base, server) = serve(vec![
        (200, r#"{"username":"admin","fullname":"Ada"}"#),
        (200, r#"{"username":"admin","fullname":"Ada L","email":"ada@example.com"}"#),
    ]);
    let api = client(&base);
    let principal = api.get_principal_self(Some("tok")).await.unwrap();
    assert_eq!(principal.fullname.as_deref(), Some("Ada"));

    let update = ProfileUpdate {
        fullname: "Ada L".into(),
        email: "ada@example.com".into(),
        ..ProfileUpdate::default()
    };
    let updated = api.update_principal_self(Some("tok"), &update).await.unwrap();
    assert_eq!(updated.email.as_deref(), Some("ada@example.com"));

    let seen = server.join().unwrap();
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer tok"));
    assert_eq!(seen[1].method, "POST");
    assert_eq!(seen[1].url, "/dtrack/api/v1/user/self");
    let sent: serde_json::Value = serde_json::from_str(&seen[1].body).unwrap();
    assert_eq!(sent["fullname"], "Ada L");
}

#[tokio::test]
async fn expired_session_is_unauthorized() {
    let (base, server) = serve(vec![(401, "")]);
    let err = client(&base).get_principal_self(Some("stale")).await.unwrap_err();
    assert!(err.is_unauthorized());
    server.join().unwrap();
}

#[tokio::test]
async fn search_encodes_query_and_reads_results() {
    let (base, server) = serve(vec![(
        200,
        r#"{"results":{"license":[{"licenseId":"Apache-2.0","name":"Apache License 2.0"}]}}"#,
    )]);
    let hits = client(&base)
        .smart_search_license(Some("tok"), "apache 2.0&x")
        .await
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].license_id, "Apache-2.0");

    let seen = server.join().unwrap();
    assert_eq!(seen[0].url, "/dtrack/api/v1/search/license?query=apache%202.0%26x");
}

#[tokio::test]
async fn version_parse_failure_is_reported() {
    let (base, server) = serve(vec![(200, "not json")]);
    let err = client(&base).get_version().await.unwrap_err();
    assert!(matches!(err, ClientError::Parse(_)));
    server.join().unwrap();
}
