//! Command implementations for the top-teams CLI

pub mod top_teams;
