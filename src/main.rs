//! Entry point: parse CLI, set up logging, and run the top teams command.

use clap::Parser;
use top_teams::{
    cli::TopTeamsCli,
    commands::top_teams::{handle_top_teams, TopTeamsParams},
    core::{maybe_api_key, resolve_base_url, Clock, FixedClock, SystemClock},
    OpenDotaClient, OutputFormat,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = TopTeamsCli::parse();

    let default_level = if app.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let api =
        OpenDotaClient::with_base_url(resolve_base_url(app.base_url))?.with_api_key(maybe_api_key());

    let clock: Box<dyn Clock> = match app.as_of {
        Some(instant) => Box::new(FixedClock(instant)),
        None => Box::new(SystemClock),
    };

    handle_top_teams(
        api,
        clock.as_ref(),
        TopTeamsParams {
            num_teams: app.num_teams,
            output_file: app.output_file,
            format: OutputFormat::from_json_flag(app.json),
        },
    )
    .await
}
