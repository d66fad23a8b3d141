#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use scout_api::{db, router};

/// Fresh router over its own in-memory database.
pub async fn app() -> Router {
    let pool = db::memory_pool().await.unwrap();
    router(pool)
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::DELETE, uri, None).await
}

pub async fn create_team(app: &Router, name: &str, wins: i64, losses: i64) -> i64 {
    let (status, json) = post(
        app,
        "/api/teams",
        json!({
            "team_name": name,
            "league": "NCAA",
            "wins": wins,
            "losses": losses,
            "standing": 1,
            "location": "Columbus, OH"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["team_ID"].as_i64().unwrap()
}

pub async fn create_athlete(app: &Router, name: &str, position: &str, team_id: Option<i64>) -> i64 {
    let (status, json) = post(
        app,
        "/api/athletes",
        json!({
            "player_name": name,
            "player_number": 23,
            "height": 78,
            "weight": 210,
            "age": 20,
            "player_position": position,
            "player_year": 2,
            "hometown": "Akron, OH",
            "highschool": "St. Vincent",
            "team_ID": team_id
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["player_ID"].as_i64().unwrap()
}

pub async fn create_game(app: &Router, home: i64, away: i64, home_score: i64, away_score: i64, date: &str) -> i64 {
    let (status, json) = post(
        app,
        "/api/games",
        json!({
            "home_team_ID": home,
            "away_team_ID": away,
            "home_team_score": home_score,
            "away_team_score": away_score,
            "date": date,
            "league": "NCAA",
            "match_type": "Regular Season"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED, "{json}");
    json["match_ID"].as_i64().unwrap()
}

/// A complete statistics body; override fields with `body["points"] = ...`.
pub fn stat_body(player_id: i64, match_id: i64) -> Value {
    json!({
        "player_ID": player_id,
        "match_ID": match_id,
        "minutes_played": 30,
        "field_goals_made": 10,
        "field_goals_attempted": 20,
        "three_point_goals_made": 2,
        "three_point_goals_attempted": 5,
        "free_throws_made": 4,
        "free_throws_attempted": 5,
        "total_rebounds": 8,
        "assists": 6,
        "steals": 2,
        "blocks": 1,
        "turnovers": 3,
        "fouls": 2,
        "points": 26
    })
}

pub fn approx(value: &Value, expected: f64) -> bool {
    value
        .as_f64()
        .map(|v| (v - expected).abs() < 1e-6)
        .unwrap_or(false)
}
