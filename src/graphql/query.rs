//! GraphQL request and response envelopes
//!
//! One operation is ever sent: `GetLaunches`, parameterised by `limit` and
//! `offset` variables.

use crate::error::{Error, Result};
use crate::pagination::PageCursor;
use crate::types::LaunchRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Operation name of [`LAUNCHES_PAST_QUERY`]
pub const LAUNCHES_PAST_OPERATION: &str = "GetLaunches";

/// The launches query with its fixed field set
pub const LAUNCHES_PAST_QUERY: &str = "\
query GetLaunches($limit: Int!, $offset: Int!) {
  launchesPast(limit: $limit, offset: $offset) {
    id
    mission_name
    launch_date_local
    launch_site {
      site_name_long
    }
    links {
      article_link
      video_link
      mission_patch
    }
    rocket {
      rocket_name
    }
  }
}";

/// Body of a GraphQL POST
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphQlRequest<V> {
    /// Query document
    pub query: &'static str,
    /// Operation to run within the document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation_name: Option<&'static str>,
    /// Variables bound to the operation
    pub variables: V,
}

/// Variables of the launches query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LaunchesVariables {
    pub limit: u32,
    pub offset: u64,
}

impl GraphQlRequest<LaunchesVariables> {
    /// Build the launches query for one page
    pub fn launches_past(cursor: PageCursor) -> Self {
        Self {
            query: LAUNCHES_PAST_QUERY,
            operation_name: Some(LAUNCHES_PAST_OPERATION),
            variables: LaunchesVariables {
                limit: cursor.limit(),
                offset: cursor.offset(),
            },
        }
    }
}

/// Standard GraphQL response envelope
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlResponse<T> {
    /// Payload; absent or null when the query failed outright
    pub data: Option<T>,
    /// Errors reported by the server
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One entry of a response's `errors` list
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
    #[serde(default)]
    pub path: Option<Vec<Value>>,
}

impl<T> GraphQlResponse<T> {
    /// Unwrap the payload, turning any server-reported errors into [`Error::GraphQl`]
    ///
    /// Partial responses (data plus errors) are rejected as a whole.
    pub fn into_data(self, field: &str) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(Error::graphql(self.errors.into_iter().map(|e| e.message)));
        }
        self.data.ok_or_else(|| Error::missing_data(field))
    }
}

/// `data` payload of the launches query
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchesPastData {
    pub launches_past: Vec<LaunchRecord>,
}
