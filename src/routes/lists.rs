//! Identity + name listings used to populate selectors.

use axum::{extract::State, response::Json};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{AthleteList, AwardList, TeamList};

// GET /api/list/athletes
pub async fn list_athletes(
    State(pool): State<SqlitePool>,
) -> Result<Json<AthleteList>, ApiError> {
    let athletes = db::list_athletes(&pool).await?;
    Ok(Json(AthleteList { athletes }))
}

// GET /api/list/teams
pub async fn list_teams(
    State(pool): State<SqlitePool>,
) -> Result<Json<TeamList>, ApiError> {
    let teams = db::list_teams(&pool).await?;
    Ok(Json(TeamList { teams }))
}

// GET /api/list/awards
pub async fn list_awards(
    State(pool): State<SqlitePool>,
) -> Result<Json<AwardList>, ApiError> {
    let awards = db::list_awards(&pool).await?;
    Ok(Json(AwardList { awards }))
}
