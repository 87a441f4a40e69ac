//! Top Teams Library
//!
//! Fetches professional Dota 2 players and teams from the OpenDota API, measures how long
//! OpenDota has tracked each player's full match history ("experience"), and ranks teams by the
//! combined experience of their players.
//!
//! ## Pipeline
//!
//! 1. One `GET /proPlayers` call.
//! 2. Players are grouped by team; players without a team or without a `full_history_time` are
//!    skipped.
//! 3. The `n` lowest team ids are fetched concurrently with `GET /teams/{id}`; failed fetches and
//!    unknown teams are dropped.
//! 4. Teams are ranked by summed player experience, highest first.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use top_teams::{commands::top_teams::top_teams, core::SystemClock, OpenDotaClient};
//!
//! # async fn example() -> top_teams::Result<()> {
//! let api = Arc::new(OpenDotaClient::new()?);
//! if let Some(teams) = top_teams(&api, &SystemClock, 5).await? {
//!     for team in teams {
//!         println!("{} {}", team.name, team.experience);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export OPENDOTA_BASE_URL=https://api.opendota.com/api   # alternate API host
//! export OPENDOTA_API_KEY=...                             # sent as `api_key`
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod opendota;
pub mod output;

// Re-export commonly used types
pub use cli::types::{format::OutputFormat, ids::TeamId};
pub use error::{DotaError, Result};
pub use opendota::http::{OpenDotaApi, OpenDotaClient};
pub use opendota::types::{PlayerInput, PlayerOutput, Team};

/// Public OpenDota API root.
pub const OPENDOTA_BASE_URL: &str = "https://api.opendota.com/api";
pub const BASE_URL_ENV_VAR: &str = "OPENDOTA_BASE_URL";
pub const API_KEY_ENV_VAR: &str = "OPENDOTA_API_KEY";
