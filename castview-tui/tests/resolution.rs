//! Resolver dispatch against a canned local endpoint: numeric tokens must go
//! through the bulk-by-fid lookup, handles through the by-username lookup,
//! and the resolved profile must carry the matching fid.

use castview_tui::api::ApiClient;
use castview_tui::app::resolve_profile;
use castview_tui::resolve::{ResolutionError, SlugToken};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one HTTP request with the given body, returning the base
/// URL and a handle resolving to the raw request head.
async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.expect("accept");
        let mut buf = vec![0u8; 8192];
        let n = stream.read(&mut buf).await.expect("read request");
        let request = String::from_utf8_lossy(&buf[..n]).to_string();

        let response = format!(
            "{}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.expect("write");
        stream.shutdown().await.ok();
        request
    });

    (format!("http://{}", addr), handle)
}

#[tokio::test]
async fn handle_token_dispatches_to_by_username_lookup() {
    let body = r#"{"user":{"fid":3,"username":"dwr","display_name":"Dan","follower_count":42,"following_count":7}}"#;
    let (base_url, request_handle) = serve_once("HTTP/1.1 200 OK", body.to_string()).await;

    let client = ApiClient::new(base_url, None).expect("client builds");
    let slug = SlugToken::parse("dwr").unwrap();
    let profile = resolve_profile(&client, &slug, 1).await.expect("resolves");

    assert_eq!(profile.fid, 3);
    assert_eq!(profile.username, "dwr");
    assert_eq!(profile.follower_count, 42);

    let request = request_handle.await.unwrap();
    assert!(
        request.starts_with("GET /user/by_username?username=dwr"),
        "unexpected request: {}",
        request.lines().next().unwrap_or("")
    );
}

#[tokio::test]
async fn fid_token_dispatches_to_bulk_lookup_with_viewer() {
    let body = r#"{"users":[{"fid":194372,"username":"someone","viewer_following":true}]}"#;
    let (base_url, request_handle) = serve_once("HTTP/1.1 200 OK", body.to_string()).await;

    let client = ApiClient::new(base_url, None).expect("client builds");
    let slug = SlugToken::parse("fid:194372").unwrap();
    let profile = resolve_profile(&client, &slug, 9).await.expect("resolves");

    assert_eq!(profile.fid, 194372);
    assert_eq!(profile.viewer_following, Some(true));

    let request = request_handle.await.unwrap();
    assert!(
        request.starts_with("GET /user/bulk?fids=194372&viewer_fid=9"),
        "unexpected request: {}",
        request.lines().next().unwrap_or("")
    );
}

#[tokio::test]
async fn empty_bulk_result_is_a_not_found() {
    let (base_url, _request_handle) =
        serve_once("HTTP/1.1 200 OK", r#"{"users":[]}"#.to_string()).await;

    let client = ApiClient::new(base_url, None).expect("client builds");
    let slug = SlugToken::parse("fid:404").unwrap();
    let result = resolve_profile(&client, &slug, 1).await;

    assert!(matches!(result, Err(ResolutionError::NotFound(_))));
}

#[tokio::test]
async fn upstream_not_found_maps_to_resolution_not_found() {
    let (base_url, _request_handle) = serve_once(
        "HTTP/1.1 404 Not Found",
        r#"{"error":"no such user"}"#.to_string(),
    )
    .await;

    let client = ApiClient::new(base_url, None).expect("client builds");
    let slug = SlugToken::parse("ghost").unwrap();
    let result = resolve_profile(&client, &slug, 1).await;

    assert!(matches!(result, Err(ResolutionError::NotFound(_))));
}
