//! HTTP server mode: the paginated view in a browser
//!
//! Each browser session (identified by a cookie) owns one
//! [`PaginatedView`], built from the shared seed on first visit. Back and
//! Next are form POSTs answered with a redirect to `/`. Sessions idle for
//! longer than the configured TTL are evicted.

use crate::error::{Error, Result};
use crate::graphql::LaunchSource;
use crate::loader::SeedData;
use crate::pagination::{Navigation, PageCursor};
use crate::types::LaunchRecord;
use crate::view::{render_page, PaginatedView};
use axum::{
    extract::{Query, State},
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderMap, HeaderValue,
    },
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
    Json, Router,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use rand::RngCore;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Name of the cookie carrying the session id
pub const SESSION_COOKIE: &str = "launchdeck_session";

/// Idle time after which a session is dropped, unless configured otherwise
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// App state shared across handlers
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Shared>,
}

struct Shared {
    source: Arc<dyn LaunchSource>,
    seed: SeedData,
    session_ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

struct Session {
    view: Arc<PaginatedView>,
    last_seen: Instant,
}

impl AppState {
    /// State serving `seed` to new sessions and querying `source` on navigation
    pub fn new(source: Arc<dyn LaunchSource>, seed: SeedData) -> Self {
        Self::with_session_ttl(source, seed, DEFAULT_SESSION_TTL)
    }

    /// Like [`AppState::new`], dropping sessions idle for longer than `ttl`
    pub fn with_session_ttl(
        source: Arc<dyn LaunchSource>,
        seed: SeedData,
        ttl: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Shared {
                source,
                seed,
                session_ttl: ttl,
                sessions: RwLock::new(HashMap::new()),
            }),
        }
    }

    /// Number of live sessions
    pub async fn session_count(&self) -> usize {
        self.inner.sessions.read().await.len()
    }

    /// Drop every session idle for longer than the TTL; returns how many
    pub async fn evict_idle(&self) -> usize {
        let ttl = self.inner.session_ttl;
        let mut sessions = self.inner.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, session| session.last_seen.elapsed() <= ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            debug!(evicted, live = sessions.len(), "evicted idle sessions");
        }
        evicted
    }

    /// The view for `id`, or a fresh seeded one under a new id
    ///
    /// The boolean is true when a session was created.
    async fn session(&self, id: Option<String>) -> (String, Arc<PaginatedView>, bool) {
        let ttl = self.inner.session_ttl;
        let mut sessions = self.inner.sessions.write().await;

        if let Some(id) = id {
            if let Some(session) = sessions.get_mut(&id) {
                if session.last_seen.elapsed() <= ttl {
                    session.last_seen = Instant::now();
                    return (id, Arc::clone(&session.view), false);
                }
            }
        }

        sessions.retain(|_, session| session.last_seen.elapsed() <= ttl);

        let id = new_session_id();
        let view = Arc::new(PaginatedView::new(
            Arc::clone(&self.inner.source),
            &self.inner.seed,
        ));
        sessions.insert(
            id.clone(),
            Session {
                view: Arc::clone(&view),
                last_seen: Instant::now(),
            },
        );
        debug!(live = sessions.len(), "created session from seed");
        (id, view, true)
    }
}

/// 256 random bits from the OS, URL-safe base64
fn new_session_id() -> String {
    let mut bytes = [0u8; 32];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

/// JSON page returned by `/api/launches`
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiPage {
    pub page: u64,
    pub offset: u64,
    pub limit: u32,
    pub launches: Vec<LaunchRecord>,
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    #[serde(default)]
    page: Option<u64>,
}

/// Build the router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/back", post(back))
        .route("/next", post(next))
        .route("/api/launches", get(api_launches))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server
///
/// A background task sweeps idle sessions once per TTL.
pub async fn serve(state: AppState, addr: SocketAddr) -> Result<()> {
    info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    let sweeper = tokio::spawn({
        let state = state.clone();
        let period = state.inner.session_ttl.max(Duration::from_secs(1));
        async move {
            let mut interval = tokio::time::interval(period);
            loop {
                interval.tick().await;
                state.evict_idle().await;
            }
        }
    });

    let served = axum::serve(listener, router(state))
        .await
        .map_err(|e| Error::Other(format!("Server error: {e}")));
    sweeper.abort();
    served
}

/// Render the session's current page
async fn index(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, view, created) = state.session(session_id(&headers)).await;
    let html = render_page(&view.snapshot().await);
    with_session_cookie(Html(html).into_response(), &id, created)
}

async fn back(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    navigate(&state, &headers, Navigation::Back).await
}

async fn next(State(state): State<AppState>, headers: HeaderMap) -> Result<Response> {
    navigate(&state, &headers, Navigation::Next).await
}

/// Apply a pager action, then send the browser back to `/`
async fn navigate(state: &AppState, headers: &HeaderMap, navigation: Navigation) -> Result<Response> {
    let (id, view, created) = state.session(session_id(headers)).await;
    let snapshot = view.navigate(navigation).await?;
    debug!(%navigation, page = snapshot.page(), "navigated");
    Ok(with_session_cookie(
        Redirect::to("/").into_response(),
        &id,
        created,
    ))
}

/// Stateless page of launches as JSON
async fn api_launches(
    State(state): State<AppState>,
    Query(query): Query<ApiQuery>,
) -> Result<Json<ApiPage>> {
    let cursor = PageCursor::from_page(query.page.unwrap_or(1))?;
    let launches = state.inner.source.launches_past(cursor).await?;
    Ok(Json(ApiPage {
        page: cursor.page(),
        offset: cursor.offset(),
        limit: cursor.limit(),
        launches,
    }))
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Session id from the request's cookies
fn session_id(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

fn with_session_cookie(mut response: Response, id: &str, created: bool) -> Response {
    if created {
        let cookie = format!("{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax");
        if let Ok(value) = HeaderValue::from_str(&cookie) {
            response.headers_mut().insert(SET_COOKIE, value);
        }
    }
    response
}
