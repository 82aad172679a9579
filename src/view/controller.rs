//! Paginated view
//!
//! Owns one [`ViewState`] and turns Back/Next into refetches. The lock is
//! held only while swapping snapshots, never across a query, so overlapping
//! navigations each fire their own request; generations decide which
//! response lands.

use super::state::ViewState;
use crate::error::Result;
use crate::graphql::LaunchSource;
use crate::loader::SeedData;
use crate::pagination::Navigation;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

/// Stateful pager over a [`LaunchSource`]
pub struct PaginatedView {
    source: Arc<dyn LaunchSource>,
    state: RwLock<ViewState>,
}

impl PaginatedView {
    /// Build a view showing `seed`; issues no query
    pub fn new(source: Arc<dyn LaunchSource>, seed: &SeedData) -> Self {
        Self {
            source,
            state: RwLock::new(ViewState::from_seed(seed)),
        }
    }

    /// Current snapshot
    pub async fn snapshot(&self) -> ViewState {
        self.state.read().await.clone()
    }

    /// Go back one page; a no-op on the first page
    pub async fn back(&self) -> Result<ViewState> {
        self.navigate(Navigation::Back).await
    }

    /// Go forward one page
    pub async fn next(&self) -> Result<ViewState> {
        self.navigate(Navigation::Next).await
    }

    /// Apply `navigation` and, if the offset changed, fetch the new page
    ///
    /// Returns the snapshot after this navigation's response was applied,
    /// or dropped as stale. On error the offset stays advanced and the
    /// previous records remain. An error for a fetch that a newer navigation
    /// has already replaced is dropped like a stale response.
    pub async fn navigate(&self, navigation: Navigation) -> Result<ViewState> {
        let ticket = {
            let mut state = self.state.write().await;
            let Some((next, ticket)) = state.navigate(navigation) else {
                debug!(%navigation, offset = state.offset(), "navigation is a no-op");
                return Ok(state.clone());
            };
            *state = next;
            ticket
        };

        info!(
            %navigation,
            generation = ticket.generation(),
            offset = ticket.cursor().offset(),
            "refetching launches"
        );
        let fetched = self.source.launches_past(ticket.cursor()).await;

        let mut state = self.state.write().await;
        let records = match fetched {
            Ok(records) => records,
            Err(error) if !state.is_current(&ticket) => {
                debug!(
                    generation = ticket.generation(),
                    current = state.generation(),
                    %error,
                    "dropping error from stale launches fetch"
                );
                return Ok(state.clone());
            }
            Err(error) => return Err(error),
        };

        match state.apply(&ticket, records) {
            Some(next) => *state = next,
            None => debug!(
                generation = ticket.generation(),
                current = state.generation(),
                "dropping stale launches response"
            ),
        }
        Ok(state.clone())
    }
}

impl std::fmt::Debug for PaginatedView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedView").finish_non_exhaustive()
    }
}
