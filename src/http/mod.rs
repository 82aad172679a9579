//! HTTP client module
//!
//! The transport under the GraphQL launch source.
//!
//! # Features
//!
//! - **Timeouts**: every request carries one (30s by default)
//! - **Retries**: opt-in, with constant, linear or exponential backoff
//! - **Rate Limiting**: optional token bucket using governor

mod client;
mod rate_limit;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};
pub use rate_limit::{RateLimiter, RateLimiterConfig};
