//! Concurrent per-team retrieval.

use std::collections::BTreeSet;
use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::cli::types::ids::TeamId;
use crate::opendota::{http::OpenDotaApi, types::Team};

/// Fetch every team in `ids` concurrently, one task per id.
///
/// Teams that fail to fetch or come back with an id of 0 are dropped. Returns only after every
/// task has finished; the order of the result is unspecified.
pub async fn fetch_teams<A>(api: &Arc<A>, ids: &BTreeSet<TeamId>) -> Vec<Team>
where
    A: OpenDotaApi + 'static,
{
    let (tx, mut rx) = mpsc::unbounded_channel();

    let handles: Vec<_> = ids
        .iter()
        .copied()
        .map(|id| {
            let api = Arc::clone(api);
            let tx = tx.clone();
            tokio::spawn(async move {
                match api.team(id).await {
                    Ok(team) => {
                        // Receiver outlives every task.
                        let _ = tx.send(team);
                    }
                    Err(e) => debug!(team_id = %id, error = %e, "dropping team that failed to fetch"),
                }
            })
        })
        .collect();
    drop(tx);

    for joined in join_all(handles).await {
        if let Err(e) = joined {
            warn!(error = %e, "team fetch task did not complete");
        }
    }

    let mut teams = Vec::with_capacity(ids.len());
    while let Some(team) = rx.recv().await {
        if team.id.is_valid() {
            teams.push(team);
        } else {
            debug!(name = %team.name, "dropping team with unset id");
        }
    }
    teams
}
