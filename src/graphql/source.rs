//! Launch sources
//!
//! [`LaunchSource`] is the seam between the pager and the network; the view
//! and the loader only ever see this trait.

use super::query::{GraphQlRequest, GraphQlResponse, LaunchesPastData};
use crate::error::Result;
use crate::http::HttpClient;
use crate::pagination::PageCursor;
use crate::types::LaunchRecord;
use async_trait::async_trait;
use tracing::debug;

/// Something that can return one page of past launches
#[async_trait]
pub trait LaunchSource: Send + Sync {
    /// Fetch the launches at `cursor`, most recent first
    ///
    /// Past the end of the data this returns a short or empty page.
    async fn launches_past(&self, cursor: PageCursor) -> Result<Vec<LaunchRecord>>;
}

/// [`LaunchSource`] backed by a remote GraphQL endpoint
#[derive(Debug)]
pub struct GraphQlLaunchSource {
    endpoint: String,
    client: HttpClient,
}

impl GraphQlLaunchSource {
    /// Create a source for `endpoint` using `client` as transport
    pub fn new(endpoint: impl Into<String>, client: HttpClient) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// The endpoint queried by this source
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl LaunchSource for GraphQlLaunchSource {
    async fn launches_past(&self, cursor: PageCursor) -> Result<Vec<LaunchRecord>> {
        debug!(
            endpoint = %self.endpoint,
            offset = cursor.offset(),
            limit = cursor.limit(),
            "querying launchesPast"
        );

        let request = GraphQlRequest::launches_past(cursor);
        let response: GraphQlResponse<LaunchesPastData> =
            self.client.post_json(&self.endpoint, &request).await?;

        let launches = response.into_data("launchesPast")?.launches_past;
        debug!(count = launches.len(), "launchesPast returned");
        Ok(launches)
    }
}
