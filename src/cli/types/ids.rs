//! ID types for OpenDota teams.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Type-safe wrapper for OpenDota team IDs.
///
/// OpenDota reports players without a team, and teams it cannot find, with an id of `0`,
/// so the zero value doubles as "unset".
///
/// # Examples
///
/// ```rust
/// use top_teams::TeamId;
///
/// let team_id = TeamId::new(15);
/// assert_eq!(team_id.as_i64(), 15);
/// assert_eq!(team_id.to_string(), "15");
/// assert!(!TeamId::default().is_valid());
/// ```
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct TeamId(pub i64);

impl TeamId {
    /// Create a new TeamId from an i64 value.
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the underlying i64 value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }

    /// Whether this id refers to an actual team (anything but zero).
    pub fn is_valid(&self) -> bool {
        self.0 != 0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
