//! # launchdeck
//!
//! A paginated, server-rendered view over historical rocket launches served
//! by a public GraphQL API.
//!
//! ## Features
//!
//! - **Seeded first page**: the first page is fetched once, before any view
//!   exists, and shown without a second query
//! - **Back / Next pagination**: fixed pages of ten, offset and page number
//!   moving in lockstep
//! - **Stale-response protection**: overlapping refetches are resolved by
//!   generation, newest navigation wins
//! - **Server and CLI**: an axum server for browsers, plus `fetch`,
//!   `render` and `check` commands
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use launchdeck::graphql::GraphQlLaunchSource;
//! use launchdeck::http::HttpClient;
//! use launchdeck::loader::load_seed;
//! use launchdeck::view::PaginatedView;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> launchdeck::Result<()> {
//!     let source = Arc::new(GraphQlLaunchSource::new(
//!         launchdeck::DEFAULT_ENDPOINT,
//!         HttpClient::new()?,
//!     ));
//!     let seed = load_seed(source.as_ref()).await?;
//!     let view = PaginatedView::new(source, &seed);
//!
//!     let page_two = view.next().await?;
//!     for launch in page_two.records() {
//!         println!("{}", launch.mission_name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!  ┌──────────────┐  seed   ┌──────────────────┐  snapshot  ┌──────────┐
//!  │    loader    │ ──────▶ │  PaginatedView   │ ─────────▶ │  render  │
//!  └──────┬───────┘         │  (per session)   │            └──────────┘
//!         │                 └────────┬─────────┘
//!         │   page 1                 │ page N on Back/Next
//!         ▼                          ▼
//!  ┌─────────────────────────────────────────────┐
//!  │   LaunchSource  ─▶  GraphQL  ─▶  HttpClient │
//!  └─────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Launch records and shared constants
pub mod types;

/// Configuration file and CLI overrides
pub mod config;

/// HTTP client with timeout, retry and rate limiting
pub mod http;

/// GraphQL query and launch source
pub mod graphql;

/// Page cursor and navigation actions
pub mod pagination;

/// Initial loader producing seed data
pub mod loader;

/// Paginated view state, controller and HTML rendering
pub mod view;

/// Command-line interface and HTTP server
pub mod cli;

#[cfg(test)]
mod testing;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
