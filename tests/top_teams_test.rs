//! End-to-end tests: real HTTP client against a mock OpenDota server

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use serde_json::json;
use tempfile::TempDir;
use top_teams::{
    commands::top_teams::{handle_top_teams, top_teams, TopTeamsParams},
    core::FixedClock,
    DotaError, OpenDotaClient, OutputFormat, TeamId,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

fn clock() -> FixedClock {
    FixedClock(Utc.with_ymd_and_hms(2024, 3, 13, 0, 0, 0).unwrap())
}

async fn mount_players(server: &MockServer) {
    let players = json!([
        { "personaname": "a1", "team_id": 1, "country_code": "us",
          "full_history_time": "2024-03-12T23:59:59Z" },
        { "personaname": "a2", "team_id": 1, "country_code": "ca",
          "full_history_time": "2024-03-12T23:59:58Z" },
        { "personaname": "b1", "team_id": 2, "country_code": "se",
          "full_history_time": "2024-03-12T23:59:55Z" },
        { "personaname": "c1", "team_id": 3, "country_code": "pe",
          "full_history_time": "2024-03-12T23:00:00Z" },
        { "personaname": "ghost", "team_id": 2, "country_code": null,
          "full_history_time": null },
        { "personaname": "free agent", "team_id": 0, "country_code": "de",
          "full_history_time": "2020-01-01T00:00:00Z" }
    ]);

    Mock::given(method("GET"))
        .and(path("/proPlayers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&players))
        .expect(1)
        .mount(server)
        .await;
}

async fn mount_team(server: &MockServer, id: i64, name: &str, expected_calls: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/teams/{}", id)))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "team_id": id,
            "name": name,
            "wins": 10 * id,
            "losses": id,
            "rating": 1000.5
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_top_two_teams_ranked_by_experience() {
    let server = MockServer::start().await;
    mount_players(&server).await;
    mount_team(&server, 1, "One", 1).await;
    mount_team(&server, 2, "Two", 1).await;
    // Team 3 is outside the first two ids.
    mount_team(&server, 3, "Three", 0).await;

    let api = Arc::new(OpenDotaClient::with_base_url(server.uri()).unwrap());
    let teams = top_teams(&api, &clock(), 2).await.unwrap().unwrap();

    assert_eq!(teams.len(), 2);
    assert_eq!(teams[0].id, TeamId::new(2));
    assert_eq!(teams[0].name, "Two");
    assert_eq!(teams[0].experience, 5);
    assert_eq!(teams[0].players.len(), 1);
    assert_eq!(teams[1].id, TeamId::new(1));
    assert_eq!(teams[1].experience, 3);
    assert_eq!(teams[1].players[0].personaname, "a1");
    assert_eq!(teams[1].players[1].personaname, "a2");
    assert_eq!(teams[1].wins, 10);
}

#[tokio::test]
async fn test_failed_team_fetch_is_dropped() {
    let server = MockServer::start().await;
    mount_players(&server).await;
    mount_team(&server, 1, "One", 1).await;
    Mock::given(method("GET"))
        .and(path("/teams/2"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/teams/3"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let api = Arc::new(OpenDotaClient::with_base_url(server.uri()).unwrap());
    let teams = top_teams(&api, &clock(), 3).await.unwrap().unwrap();

    assert_eq!(teams.len(), 1);
    assert_eq!(teams[0].id, TeamId::new(1));
}

#[tokio::test]
async fn test_unknown_team_is_dropped() {
    let server = MockServer::start().await;
    mount_players(&server).await;
    mount_team(&server, 1, "One", 1).await;
    mount_team(&server, 3, "Three", 1).await;
    Mock::given(method("GET"))
        .and(path("/teams/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let api = Arc::new(OpenDotaClient::with_base_url(server.uri()).unwrap());
    let teams = top_teams(&api, &clock(), 3).await.unwrap().unwrap();

    let ids: Vec<i64> = teams.iter().map(|t| t.id.as_i64()).collect();
    assert_eq!(ids, vec![3, 1]);
    assert_eq!(teams[0].experience, 3600);
}

#[tokio::test]
async fn test_player_endpoint_failure_is_fatal() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/proPlayers"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let api = Arc::new(OpenDotaClient::with_base_url(server.uri()).unwrap());
    let err = top_teams(&api, &clock(), 5).await.unwrap_err();

    assert!(matches!(err, DotaError::Players(_)));
    assert!(err.to_string().starts_with("unable to get players: "));
}

#[tokio::test]
async fn test_empty_player_list_gives_none() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/proPlayers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let api = Arc::new(OpenDotaClient::with_base_url(server.uri()).unwrap());
    assert!(top_teams(&api, &clock(), 5).await.unwrap().is_none());
}

#[tokio::test]
async fn test_handle_top_teams_writes_yaml_report() {
    let server = MockServer::start().await;
    mount_players(&server).await;
    mount_team(&server, 1, "One", 1).await;
    mount_team(&server, 2, "Two", 1).await;
    mount_team(&server, 3, "Three", 1).await;

    let dir = TempDir::new().unwrap();
    let output_file = dir.path().join("output.yaml");
    let api = OpenDotaClient::with_base_url(server.uri()).unwrap();

    handle_top_teams(
        api,
        &clock(),
        TopTeamsParams {
            num_teams: 5,
            output_file: output_file.clone(),
            format: OutputFormat::Yaml,
        },
    )
    .await
    .unwrap();

    let written = std::fs::read_to_string(&output_file).unwrap();
    let three = written.find("Team Name: Three").unwrap();
    let two = written.find("Team Name: Two").unwrap();
    let one = written.find("Team Name: One").unwrap();
    assert!(three < two && two < one);
    assert!(written.contains("Team Experience: 3600"));
    assert!(written.contains("Personaname: a1"));
    assert!(!written.contains("ghost"));
    assert!(!written.contains("free agent"));
}
