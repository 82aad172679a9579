//! CLI module
//!
//! Command-line interface for the launch pager.
//!
//! # Commands
//!
//! - `serve` - Seed the first page and serve the paginated view
//! - `fetch` - Print one page of launches
//! - `render` - Write the seed page as static HTML
//! - `check` - Test that the GraphQL endpoint answers

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, ApiPage, AppState, DEFAULT_SESSION_TTL, SESSION_COOKIE};
