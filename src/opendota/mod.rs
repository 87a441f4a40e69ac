//! OpenDota API access: wire types, the HTTP client, experience math, and the concurrent team
//! fetcher.

pub mod compute;
pub mod http;
pub mod teams;
pub mod types;
