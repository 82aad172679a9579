//! Shared fixtures for unit tests

use crate::error::{Error, Result};
use crate::graphql::LaunchSource;
use crate::pagination::PageCursor;
use crate::types::{LaunchLinks, LaunchRecord, LaunchSite, Rocket};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::sync::Mutex;

/// A launch whose fields are derived from `n`
pub fn sample_launch(n: u64) -> LaunchRecord {
    LaunchRecord {
        id: n.to_string(),
        mission_name: format!("Mission {n}"),
        launch_date_local: "2015-06-28T10:21:00-04:00".to_string(),
        launch_site: LaunchSite {
            site_name_long: "Cape Canaveral Air Force Station Space Launch Complex 40".to_string(),
        },
        links: LaunchLinks {
            article_link: Some(format!("https://example.com/articles/{n}")),
            video_link: Some(format!("https://example.com/videos/{n}")),
            mission_patch: Some(format!("https://example.com/patches/{n}.png")),
        },
        rocket: Rocket {
            rocket_name: "Falcon 9".to_string(),
        },
    }
}

/// The page of sample launches a well-behaved source returns at `cursor`
pub fn sample_page(cursor: PageCursor) -> Vec<LaunchRecord> {
    (cursor.offset()..cursor.offset() + cursor.limit() as u64)
        .map(sample_launch)
        .collect()
}

/// GraphQL response body wrapping `launches`
pub fn launches_response(launches: &[LaunchRecord]) -> Value {
    json!({ "data": { "launchesPast": launches } })
}

/// In-memory [`LaunchSource`] that records every query it receives
#[derive(Debug, Default)]
pub struct FakeLaunchSource {
    calls: Mutex<Vec<PageCursor>>,
    total: Option<u64>,
    fail: bool,
}

impl FakeLaunchSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source holding only `total` launches; later pages come back short or empty
    pub fn with_total(total: u64) -> Self {
        Self {
            total: Some(total),
            ..Self::default()
        }
    }

    /// Source whose every query fails
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> Vec<PageCursor> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LaunchSource for FakeLaunchSource {
    async fn launches_past(&self, cursor: PageCursor) -> Result<Vec<LaunchRecord>> {
        self.calls.lock().unwrap().push(cursor);
        if self.fail {
            return Err(Error::http_status(503, "unavailable"));
        }
        let mut page = sample_page(cursor);
        if let Some(total) = self.total {
            page.retain(|launch| launch.id.parse::<u64>().is_ok_and(|id| id < total));
        }
        Ok(page)
    }
}
