//! Common types used throughout launchdeck
//!
//! Launch records as returned by the GraphQL source, plus the shared
//! constants and small enums used across modules.

use serde::{Deserialize, Serialize};

// ============================================================================
// Constants
// ============================================================================

/// Number of launches requested per page
pub const LIMIT: u32 = 10;

/// Public GraphQL endpoint serving historical launches
pub const DEFAULT_ENDPOINT: &str = "https://api.spacex.land/graphql";

// ============================================================================
// Launch Records
// ============================================================================

/// One historical rocket launch as returned by `launchesPast`
///
/// Records are read-only: they are decoded from the data source and
/// rendered, never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRecord {
    /// Opaque identifier, unique per launch
    pub id: String,
    /// Mission name
    pub mission_name: String,
    /// Launch time in the launch site's local timezone (ISO-like)
    pub launch_date_local: String,
    /// Where the launch took place
    pub launch_site: LaunchSite,
    /// Media links; each may be absent
    #[serde(default)]
    pub links: LaunchLinks,
    /// Rocket flown
    pub rocket: Rocket,
}

/// Launch site descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchSite {
    /// Long, human readable site name
    pub site_name_long: String,
}

/// Link bundle attached to a launch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchLinks {
    /// Press/news article
    #[serde(default)]
    pub article_link: Option<String>,
    /// Launch webcast
    #[serde(default)]
    pub video_link: Option<String>,
    /// Mission patch image
    #[serde(default)]
    pub mission_patch: Option<String>,
}

/// Rocket descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    /// Rocket name (e.g. "Falcon 9")
    pub rocket_name: String,
}

// ============================================================================
// Backoff Strategy
// ============================================================================

/// Backoff strategy for HTTP retries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackoffType {
    /// Constant delay between retries
    Constant,
    /// Linear increase in delay
    Linear,
    /// Exponential increase in delay
    #[default]
    Exponential,
}
