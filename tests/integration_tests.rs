//! Integration tests using a mock GraphQL server
//!
//! Tests the full flow: GraphQL endpoint → seed → paginated view → HTML

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use clap::Parser;
use launchdeck::cli::{router, AppState, Cli, Runner};
use launchdeck::graphql::{GraphQlLaunchSource, LaunchSource};
use launchdeck::http::HttpClient;
use launchdeck::loader::load_seed;
use launchdeck::view::{render_page, PaginatedView, ViewState};
use launchdeck::Error;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ============================================================================
// Fixtures
// ============================================================================

fn launch(n: u64) -> Value {
    json!({
        "id": n.to_string(),
        "mission_name": format!("Mission {n}"),
        "launch_date_local": "2015-06-28T14:21:00-04:00",
        "launch_site": { "site_name_long": "Vandenberg Air Force Base Space Launch Complex 4E" },
        "links": {
            "article_link": null,
            "video_link": format!("https://example.com/videos/{n}"),
            "mission_patch": format!("https://example.com/patches/{n}.png")
        },
        "rocket": { "rocket_name": "Falcon 9" }
    })
}

fn page_body(offsets: std::ops::Range<u64>) -> Value {
    let launches: Vec<Value> = offsets.map(launch).collect();
    json!({ "data": { "launchesPast": launches } })
}

/// Mount a mock answering the launches query at `offset`
async fn mount_page(server: &MockServer, offset: u64, body: Value, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/graphql"))
        .and(body_partial_json(json!({
            "variables": { "limit": 10, "offset": offset }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(expected_calls)
        .mount(server)
        .await;
}

fn endpoint(server: &MockServer) -> String {
    format!("{}/graphql", server.uri())
}

fn source(server: &MockServer) -> Arc<GraphQlLaunchSource> {
    Arc::new(GraphQlLaunchSource::new(
        endpoint(server),
        HttpClient::new().unwrap(),
    ))
}

fn mission_names(state: &ViewState) -> Vec<String> {
    state
        .records()
        .iter()
        .map(|r| r.mission_name.clone())
        .collect()
}

// ============================================================================
// Loader + View
// ============================================================================

#[tokio::test]
async fn test_seed_then_next_issues_single_query() {
    let server = MockServer::start().await;
    mount_page(&server, 0, page_body(0..10), 1).await;
    mount_page(&server, 10, page_body(10..20), 1).await;

    let source = source(&server);
    let seed = load_seed(source.as_ref()).await.unwrap();
    let view = PaginatedView::new(source, &seed);

    let first = view.snapshot().await;
    assert_eq!(first.page(), 1);
    assert_eq!(first.records(), seed.records());

    let second = view.next().await.unwrap();
    assert_eq!(second.offset(), 10);
    assert_eq!(second.page(), 2);
    assert_eq!(second.records().len(), 10);
    assert_eq!(mission_names(&second)[0], "Mission 10");
    assert!(!mission_names(&second).contains(&"Mission 0".to_string()));

    // `expect` counts are verified when the server drops
}

#[tokio::test]
async fn test_paging_past_the_end() {
    let server = MockServer::start().await;
    mount_page(&server, 0, page_body(0..10), 1).await;
    mount_page(&server, 10, page_body(10..13), 1).await;
    mount_page(&server, 20, page_body(0..0), 1).await;

    let source = source(&server);
    let seed = load_seed(source.as_ref()).await.unwrap();
    let view = PaginatedView::new(source, &seed);

    assert_eq!(view.next().await.unwrap().records().len(), 3);

    let empty = view.next().await.unwrap();
    assert_eq!(empty.page(), 3);
    assert!(empty.records().is_empty());
    assert!(render_page(&empty).contains("<span>Page 3</span>"));
}

#[tokio::test]
async fn test_seed_failure_propagates() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream down"))
        .expect(1)
        .mount(&server)
        .await;

    let source = source(&server);
    let result = load_seed(source.as_ref()).await;

    assert!(matches!(
        result,
        Err(Error::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_graphql_error_on_refetch_propagates() {
    let server = MockServer::start().await;
    mount_page(&server, 0, page_body(0..10), 1).await;
    mount_page(
        &server,
        10,
        json!({ "errors": [{ "message": "offset out of range" }] }),
        1,
    )
    .await;

    let source = source(&server);
    let seed = load_seed(source.as_ref()).await.unwrap();
    let view = PaginatedView::new(source.clone(), &seed);

    let err = view.next().await.unwrap_err();
    assert_eq!(err.to_string(), "GraphQL query failed: offset out of range");
}

// ============================================================================
// Server
// ============================================================================

#[tokio::test]
async fn test_server_pages_through_graphql() {
    let server = MockServer::start().await;
    mount_page(&server, 0, page_body(0..10), 1).await;
    mount_page(&server, 10, page_body(10..20), 1).await;

    let source: Arc<dyn LaunchSource> = source(&server);
    let seed = load_seed(source.as_ref()).await.unwrap();
    let app = router(AppState::new(source, seed));

    let response = app
        .clone()
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap()
        .split(';')
        .next()
        .unwrap()
        .to_string();

    let response = app
        .clone()
        .oneshot(
            Request::post("/next")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SEE_OTHER);

    let response = app
        .oneshot(
            Request::get("/")
                .header(header::COOKIE, &cookie)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();

    assert!(html.contains("<span>Page 2</span>"));
    assert!(html.contains("<h3>Mission 10</h3>"));
    assert!(html.contains("<strong>Launch Date:</strong> 6/28/2015"));
    assert!(html.contains("<button type=\"submit\">Back</button>"));
}

// ============================================================================
// CLI
// ============================================================================

#[tokio::test]
async fn test_render_command_writes_seed_page() {
    let server = MockServer::start().await;
    mount_page(&server, 0, page_body(0..10), 1).await;

    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("index.html");

    let cli = Cli::parse_from([
        "launchdeck",
        "--endpoint",
        &endpoint(&server),
        "render",
        "--output",
        output.to_str().unwrap(),
    ]);
    Runner::new(cli).run().await.unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert!(html.contains("<span>Page 1</span>"));
    assert_eq!(html.matches("class=\"card\"").count(), 10);
    assert!(html.contains("<button type=\"submit\" disabled>Back</button>"));
}

#[tokio::test]
async fn test_render_command_with_config_file() {
    let server = MockServer::start().await;
    mount_page(&server, 0, page_body(0..2), 1).await;

    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("launchdeck.yaml");
    let output = dir.path().join("index.html");
    std::fs::write(
        &config_path,
        format!("endpoint: {}\nhttp:\n  timeout_secs: 5\n", endpoint(&server)),
    )
    .unwrap();

    let cli = Cli::parse_from([
        "launchdeck",
        "-C",
        config_path.to_str().unwrap(),
        "render",
        "-o",
        output.to_str().unwrap(),
    ]);
    Runner::new(cli).run().await.unwrap();

    let html = std::fs::read_to_string(&output).unwrap();
    assert_eq!(html.matches("class=\"card\"").count(), 2);
}

#[tokio::test]
async fn test_fetch_command_rejects_page_zero() {
    let cli = Cli::parse_from([
        "launchdeck",
        "--endpoint",
        "http://127.0.0.1:9/graphql",
        "fetch",
        "--page",
        "0",
    ]);
    let result = Runner::new(cli).run().await;

    assert!(matches!(result, Err(Error::InvalidPage { .. })));
}

#[tokio::test]
async fn test_check_command() {
    let server = MockServer::start().await;
    mount_page(&server, 0, page_body(0..10), 1).await;

    let cli = Cli::parse_from(["launchdeck", "--endpoint", &endpoint(&server), "check"]);
    Runner::new(cli).run().await.unwrap();
}

#[tokio::test]
async fn test_invalid_endpoint_override() {
    let cli = Cli::parse_from(["launchdeck", "--endpoint", "not-a-url", "check"]);
    let result = Runner::new(cli).run().await;

    assert!(matches!(result, Err(Error::InvalidConfigValue { .. })));
}
