use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{require, ApiError};
use crate::models::{MessageResponse, PageQuery, Team, TeamInput, TeamPage};

const DUPLICATE_NAME: &str = "A team with this name already exists";

// GET /api/teams?page=1&limit=10&search=east - Paged team search
pub async fn get_teams(
    State(pool): State<SqlitePool>,
    params: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<TeamPage>, ApiError> {
    let Query(params) = params?;
    let req = params.resolve();

    let total = db::count_teams(&pool, &req.pattern).await?;
    let teams = db::get_teams_page(&pool, &req).await?;

    Ok(Json(TeamPage {
        teams,
        total,
        page: req.page,
        total_pages: req.total_pages(total),
    }))
}

// GET /api/teams/:id - Get team by ID
pub async fn get_team_by_id(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Team>, ApiError> {
    let Path(team_id) = path?;
    let team = db::get_team_by_id(&pool, team_id)
        .await?
        .ok_or(ApiError::NotFound("Team"))?;

    Ok(Json(team))
}

// POST /api/teams - Create team; record is derived from wins and losses
pub async fn create_team(
    State(pool): State<SqlitePool>,
    payload: Result<Json<TeamInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let Json(team) = payload?;
    require("team_name", &team.team_name)?;

    let created = db::create_team(&pool, &team)
        .await
        .map_err(|e| ApiError::from(e).on_duplicate(DUPLICATE_NAME))?;

    tracing::info!("Created team {} ({})", created.team_id, created.team_name);
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/teams/:id - Update team and recompute its record
pub async fn update_team(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<TeamInput>, JsonRejection>,
) -> Result<Json<Team>, ApiError> {
    let Path(team_id) = path?;
    let Json(team) = payload?;
    require("team_name", &team.team_name)?;

    let updated = db::update_team(&pool, team_id, &team)
        .await
        .map_err(|e| ApiError::from(e).on_duplicate(DUPLICATE_NAME))?
        .ok_or(ApiError::NotFound("Team"))?;

    Ok(Json(updated))
}

// DELETE /api/teams/:id - Fails while athletes, games or awards reference the team
pub async fn delete_team(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(team_id) = path?;
    let deleted = db::delete_team(&pool, team_id).await.map_err(|e| {
        ApiError::from(e).on_reference("Team is still referenced by athletes, games or awards")
    })?;

    if !deleted {
        return Err(ApiError::NotFound("Team"));
    }

    tracing::info!("Deleted team {}", team_id);
    Ok(Json(MessageResponse {
        message: "Team deleted successfully".to_string(),
    }))
}
