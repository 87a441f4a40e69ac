use crate::cli::types::ids::TeamId;
use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Deserializer, Serialize};


/// OpenDota sends `null` for plenty of fields (players without a country, teams without a
/// rating); collapse those to the type's default.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Player as returned by `/proPlayers`, filtered for the fields we care about.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerInput {
    #[serde(default, deserialize_with = "de_null_default")]
    pub team_id: TeamId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub personaname: String,
    /// When OpenDota started holding this player's complete match history.
    /// `None` when the field is missing or `null`.
    #[serde(default)]
    pub full_history_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub country_code: String,
}

impl PlayerInput {
    /// `full_history_time` if it is actually set.
    ///
    /// Besides `null`, upstream sometimes sends Go's zero time (`0001-01-01T00:00:00Z`); anything
    /// in year 1 or earlier counts as unset.
    pub fn history_start(&self) -> Option<DateTime<Utc>> {
        self.full_history_time.filter(|t| t.year() > 1)
    }
}

/// Player as written to the report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlayerOutput {
    #[serde(rename = "Personaname")]
    pub personaname: String,
    /// Seconds since `full_history_time`. Negative for timestamps in the future.
    #[serde(rename = "Player Experience")]
    pub experience: i64,
    #[serde(rename = "Country Code")]
    pub country_code: String,
}

/// Team as returned by `/teams/{id}`, plus the roster and experience the pipeline fills in.
///
/// Field names differ between the API (deserialize) and the report (serialize).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Team {
    #[serde(
        rename(serialize = "Team Name"),
        default,
        deserialize_with = "de_null_default"
    )]
    pub name: String,
    #[serde(
        rename(deserialize = "team_id", serialize = "Team Id"),
        default,
        deserialize_with = "de_null_default"
    )]
    pub id: TeamId,
    #[serde(
        rename(serialize = "Wins"),
        default,
        deserialize_with = "de_null_default"
    )]
    pub wins: i64,
    #[serde(
        rename(serialize = "Losses"),
        default,
        deserialize_with = "de_null_default"
    )]
    pub losses: i64,
    #[serde(
        rename(serialize = "Rating"),
        default,
        deserialize_with = "de_null_default"
    )]
    pub rating: f64,
    #[serde(rename(serialize = "Team Experience"), skip_deserializing)]
    pub experience: i64,
    #[serde(rename(serialize = "Players"), skip_deserializing)]
    pub players: Vec<PlayerOutput>,
}
