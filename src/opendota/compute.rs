use chrono::{DateTime, Utc};

use crate::core::Clock;
use crate::opendota::types::{PlayerInput, PlayerOutput, Team};


/// Whole seconds from `since` to `now`, truncated toward zero.
///
/// Not clamped: a `since` in the future gives a negative value.
pub fn experience_seconds(since: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - since).num_seconds()
}

/// Turn a raw `/proPlayers` record into its report form.
///
/// Experience is the time elapsed since `full_history_time` according to `clock`.
/// A player with an unset `full_history_time` gets 0.
pub fn transform_player(input: &PlayerInput, clock: &dyn Clock) -> PlayerOutput {
    let experience = input
        .history_start()
        .map(|since| experience_seconds(since, clock.now()))
        .unwrap_or(0);

    PlayerOutput {
        personaname: input.personaname.clone(),
        experience,
        country_code: input.country_code.clone(),
    }
}

/// Set a team's experience to the sum of its players' experience.
pub fn compute_team_experience(team: &mut Team) {
    team.experience = team.players.iter().map(|p| p.experience).sum();
}
