//! GraphQL access to the launches API
//!
//! - [`query`]: the `GetLaunches` document and the request/response envelopes
//! - [`LaunchSource`]: trait every consumer depends on
//! - [`GraphQlLaunchSource`]: the HTTP implementation

pub mod query;
mod source;

pub use query::{GraphQlRequest, GraphQlResponse, LaunchesPastData, LAUNCHES_PAST_QUERY};
pub use source::{GraphQlLaunchSource, LaunchSource};
