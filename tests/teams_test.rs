mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

fn team_body(name: &str, wins: i64, losses: i64) -> serde_json::Value {
    json!({
        "team_name": name,
        "league": "Big Ten",
        "wins": wins,
        "losses": losses,
        "standing": 2,
        "location": "Ann Arbor, MI"
    })
}

#[tokio::test]
async fn create_stores_win_ratio() {
    let app = app().await;

    let (status, json) = post(&app, "/api/teams", team_body("Wolves", 7, 3)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(approx(&json["record"], 0.7));

    let (_, json) = post(&app, "/api/teams", team_body("Owls", 0, 0)).await;
    assert!(approx(&json["record"], 0.0));

    // Undefeated teams keep their full record.
    let (_, json) = post(&app, "/api/teams", team_body("Hawks", 5, 0)).await;
    assert!(approx(&json["record"], 1.0));
}

#[tokio::test]
async fn update_recomputes_record() {
    let app = app().await;
    let id = create_team(&app, "Rams", 1, 1).await;

    let (status, json) = put(&app, &format!("/api/teams/{id}"), team_body("Rams", 9, 1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["wins"], 9);
    assert!(approx(&json["record"], 0.9));

    let (_, json) = get(&app, &format!("/api/teams/{id}")).await;
    assert!(approx(&json["record"], 0.9));
    assert_eq!(json["location"], "Ann Arbor, MI");
}

#[tokio::test]
async fn update_missing_team_is_not_found() {
    let app = app().await;

    let (status, json) = put(&app, "/api/teams/31", team_body("Ghosts", 1, 0)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["message"], "Team not found");
}

#[tokio::test]
async fn duplicate_name_has_its_own_message() {
    let app = app().await;
    create_team(&app, "Tigers", 2, 2).await;
    let other = create_team(&app, "Lions", 2, 2).await;

    let (status, json) = post(&app, "/api/teams", team_body("Tigers", 0, 0)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "A team with this name already exists");

    let (status, json) = put(&app, &format!("/api/teams/{other}"), team_body("Tigers", 0, 0)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["message"], "A team with this name already exists");
}

#[tokio::test]
async fn delete_without_dependents_succeeds() {
    let app = app().await;
    let id = create_team(&app, "Loners", 0, 0).await;

    let (status, _) = delete(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = get(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_with_athlete_is_blocked() {
    let app = app().await;
    let id = create_team(&app, "Roster", 0, 0).await;
    create_athlete(&app, "Member", "Guard", Some(id)).await;

    let (status, json) = delete(&app, &format!("/api/teams/{id}")).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        json["message"],
        "Team is still referenced by athletes, games or awards"
    );
    let (status, _) = get(&app, &format!("/api/teams/{id}")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn delete_missing_team_is_not_found() {
    let app = app().await;

    let (status, _) = delete(&app, "/api/teams/9").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn paged_search_over_name_league_location() {
    let app = app().await;
    for i in 0..13 {
        create_team(&app, &format!("Team {i:02}"), i, 1).await;
    }
    post(
        &app,
        "/api/teams",
        json!({ "team_name": "Surfers", "league": "West Coast", "wins": 1, "losses": 1, "location": "San Diego" }),
    )
    .await;

    let (_, json) = get(&app, "/api/teams?search=columbus&limit=5&page=3").await;
    assert_eq!(json["total"], 13);
    assert_eq!(json["totalPages"], 3);
    assert_eq!(json["teams"].as_array().unwrap().len(), 3);

    let (_, json) = get(&app, "/api/teams?search=west%20coast").await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["teams"][0]["team_name"], "Surfers");
}

#[tokio::test]
async fn malformed_paging_parameters_are_rejected() {
    let app = app().await;

    let (status, json) = get(&app, "/api/teams?page=first").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn games_need_two_different_teams() {
    let app = app().await;
    let id = create_team(&app, "Solo", 0, 0).await;

    let (status, json) = post(
        &app,
        "/api/games",
        json!({
            "home_team_ID": id,
            "away_team_ID": id,
            "home_team_score": 1,
            "away_team_score": 0,
            "date": "2024-01-01",
            "match_type": "Exhibition"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "Home and away teams must be different");
}

#[tokio::test]
async fn games_reject_unknown_match_type() {
    let app = app().await;
    let home = create_team(&app, "A", 0, 0).await;
    let away = create_team(&app, "B", 0, 0).await;

    let (status, _) = post(
        &app,
        "/api/games",
        json!({
            "home_team_ID": home,
            "away_team_ID": away,
            "home_team_score": 1,
            "away_team_score": 0,
            "date": "2024-01-01",
            "match_type": "Scrimmage"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn games_are_listed_newest_first() {
    let app = app().await;
    let home = create_team(&app, "A", 0, 0).await;
    let away = create_team(&app, "B", 0, 0).await;
    create_game(&app, home, away, 50, 40, "2024-01-01").await;
    create_game(&app, away, home, 61, 66, "2024-02-10").await;

    let (status, json) = get(&app, "/api/games").await;

    assert_eq!(status, StatusCode::OK);
    let games = json["games"].as_array().unwrap();
    assert_eq!(games.len(), 2);
    assert_eq!(games[0]["date"], "2024-02-10");
    assert_eq!(games[0]["match_type"], "Regular Season");

    // A game makes both teams undeletable.
    let (status, _) = delete(&app, &format!("/api/teams/{home}")).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn non_numeric_team_id_gets_a_json_error() {
    let app = app().await;

    let (status, json) = delete(&app, "/api/teams/abc").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "400 Bad Request");
    assert!(json["message"].is_string());

    let (status, json) = get(&app, "/api/teams/1.5").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["message"].is_string());
}

#[tokio::test]
async fn extreme_win_totals_are_stored() {
    let app = app().await;

    let (status, json) = post(&app, "/api/teams", team_body("Dynasty", i64::MAX, 1)).await;

    assert_eq!(status, StatusCode::CREATED, "{json}");
    assert_eq!(json["wins"], i64::MAX);
    assert!(approx(&json["record"], 1.0));
}
