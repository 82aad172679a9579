//! Initial loader
//!
//! Fetches the first page once, before any view exists, and packages it as
//! seed data. Views built from the seed never query for that page again.

use crate::error::Result;
use crate::graphql::LaunchSource;
use crate::pagination::PageCursor;
use crate::types::LaunchRecord;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::info;

/// First page of launches, fetched ahead of the first render
#[derive(Debug, Clone)]
pub struct SeedData {
    cursor: PageCursor,
    records: Arc<[LaunchRecord]>,
    fetched_at: DateTime<Utc>,
}

impl SeedData {
    /// Seed from records already at hand
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self {
            cursor: PageCursor::first(),
            records: records.into(),
            fetched_at: Utc::now(),
        }
    }

    /// Page the seed belongs to (always the first)
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// Seeded launches
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Shared handle to the seeded launches
    pub fn shared_records(&self) -> Arc<[LaunchRecord]> {
        Arc::clone(&self.records)
    }

    /// When the seed was fetched
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }
}

/// Run the initial query (`limit = 10`, `offset = 0`)
///
/// Failures are returned untouched; nothing is retried here.
pub async fn load_seed<S>(source: &S) -> Result<SeedData>
where
    S: LaunchSource + ?Sized,
{
    let cursor = PageCursor::first();
    info!(offset = cursor.offset(), limit = cursor.limit(), "loading seed page");

    let records = source.launches_past(cursor).await?;
    info!(count = records.len(), "seed page loaded");

    Ok(SeedData::new(records))
}
