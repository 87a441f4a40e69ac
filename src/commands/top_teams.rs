//! Top teams command: fetch pro players, rank their teams by combined experience, and write the
//! report.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, info};

use crate::{
    cli::types::{format::OutputFormat, ids::TeamId},
    core::Clock,
    opendota::{
        compute::{compute_team_experience, transform_player},
        http::OpenDotaApi,
        teams::fetch_teams,
        types::{PlayerInput, PlayerOutput, Team},
    },
    output::write_report,
    DotaError, Result,
};


/// Player outputs keyed by team id, each group in input order.
pub type TeamRosters = BTreeMap<TeamId, Vec<PlayerOutput>>;

/// Parameters for the top teams command
#[derive(Debug, Clone)]
pub struct TopTeamsParams {
    pub num_teams: usize,
    pub output_file: PathBuf,
    pub format: OutputFormat,
}

/// Group transformed players by team.
///
/// Players without a team, and players with an unset `full_history_time`, are skipped. The map's
/// keys are the distinct valid team ids.
pub fn group_players_by_team(players: &[PlayerInput], clock: &dyn Clock) -> TeamRosters {
    let mut rosters = TeamRosters::new();
    for p in players {
        if !p.team_id.is_valid() {
            continue;
        }
        // Unset history time means the record is incomplete.
        if p.history_start().is_none() {
            debug!(personaname = %p.personaname, team_id = %p.team_id, "skipping player without full_history_time");
            continue;
        }
        rosters
            .entry(p.team_id)
            .or_default()
            .push(transform_player(p, clock));
    }
    rosters
}

/// The first `n` team ids in ascending order.
pub fn first_team_ids(rosters: &TeamRosters, n: usize) -> BTreeSet<TeamId> {
    rosters.keys().copied().take(n).collect()
}

/// Attach rosters, compute experience, and rank teams by experience, highest first.
///
/// Teams are put in id order before the stable experience sort, so ties come out by ascending
/// id.
pub fn rank_teams(mut teams: Vec<Team>, rosters: &mut TeamRosters) -> Vec<Team> {
    for team in &mut teams {
        team.players = rosters.remove(&team.id).unwrap_or_default();
        compute_team_experience(team);
    }

    teams.sort_by_key(|t| t.id);
    teams.sort_by(|a, b| b.experience.cmp(&a.experience));
    teams
}

/// Fetch pro players and return the `n` lowest-id teams ranked by experience.
///
/// Returns `Ok(None)` when OpenDota reports no players at all, and `Ok(Some(vec![]))` when there
/// are players but `n` is 0. Teams past the first `n` ids are never requested.
pub async fn top_teams<A>(api: &Arc<A>, clock: &dyn Clock, n: usize) -> Result<Option<Vec<Team>>>
where
    A: OpenDotaApi + 'static,
{
    let players = api.pro_players().await.map_err(DotaError::players)?;
    if players.is_empty() {
        info!("OpenDota returned no pro players");
        return Ok(None);
    }

    let mut rosters = group_players_by_team(&players, clock);
    let ids = first_team_ids(&rosters, n);
    info!(
        players = players.len(),
        teams = rosters.len(),
        selected = ids.len(),
        "grouped pro players by team"
    );

    let teams = fetch_teams(api, &ids).await;
    debug!(requested = ids.len(), fetched = teams.len(), "fetched teams");

    Ok(Some(rank_teams(teams, &mut rosters)))
}

/// Handle the top teams command
pub async fn handle_top_teams<A>(
    api: A,
    clock: &dyn Clock,
    params: TopTeamsParams,
) -> anyhow::Result<()>
where
    A: OpenDotaApi + 'static,
{
    let api = Arc::new(api);
    let teams = top_teams(&api, clock, params.num_teams)
        .await
        .context("Failed to fetch from OpenDota API")?
        .unwrap_or_default();

    write_report(&teams, &params.output_file, params.format).with_context(|| {
        format!(
            "Failed to write {} output to {}",
            params.format,
            params.output_file.display()
        )
    })?;

    println!(
        "Wrote {} team(s) to {}",
        teams.len(),
        params.output_file.display()
    );
    Ok(())
}
