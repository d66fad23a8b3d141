use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{Game, GameList, NewGame};
use super::parse_date;

// GET /api/games - All games, newest first
pub async fn get_games(
    State(pool): State<SqlitePool>,
) -> Result<Json<GameList>, ApiError> {
    let games = db::get_all_games(&pool).await?;
    Ok(Json(GameList { games }))
}

// POST /api/games - Create game between two different teams
pub async fn create_game(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewGame>, JsonRejection>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let Json(mut game) = payload?;

    if game.home_team_id == game.away_team_id {
        return Err(ApiError::Validation(
            "Home and away teams must be different".to_string(),
        ));
    }
    game.date = parse_date("date", &game.date)?.format("%Y-%m-%d").to_string();

    let created = db::create_game(&pool, &game)
        .await
        .map_err(|e| ApiError::from(e).on_reference("Home or away team does not exist"))?;

    tracing::info!(
        "Created game {}: team {} vs team {} on {}",
        created.match_id,
        created.home_team_id,
        created.away_team_id,
        created.date
    );
    Ok((StatusCode::CREATED, Json(created)))
}
