//! Core utilities for the top-teams CLI
//!
//! This module consolidates the pieces the pipeline is parameterized over:
//! - `clock`: injectable source of "now" for experience calculations
//! - `http`: HTTP client construction and environment-driven request settings

pub mod clock;
pub mod http;

// Re-export commonly used items for convenience
pub use clock::{Clock, FixedClock, SystemClock};
pub use http::{build_http_client, maybe_api_key, resolve_base_url};
