//! Paginated view
//!
//! - [`ViewState`]: immutable offset/page/records snapshot
//! - [`PaginatedView`]: owns a snapshot and refetches on navigation
//! - [`render_page`]: HTML for a snapshot

mod controller;
mod render;
mod state;

pub use controller::PaginatedView;
pub use render::{escape_html, format_launch_date, render_card, render_page, TITLE};
pub use state::{FetchTicket, ViewState};
