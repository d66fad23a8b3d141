use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{require, ApiError};
use crate::models::{
    like_pattern, Athlete, AthletePage, AthleteUpdate, MessageResponse, NewAthlete, PageQuery,
};

// Query parameters for the unpaged search
#[derive(Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    q: String,
}

// GET /api/athletes?page=1&limit=10&search=guard - Paged athlete search
pub async fn get_athletes(
    State(pool): State<SqlitePool>,
    params: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<AthletePage>, ApiError> {
    let Query(params) = params?;
    let req = params.resolve();

    let total = db::count_athletes(&pool, &req.pattern).await?;
    let athletes = db::get_athletes_page(&pool, &req).await?;

    Ok(Json(AthletePage {
        athletes,
        total,
        page: req.page,
        total_pages: req.total_pages(total),
    }))
}

// GET /api/athletes/search?q=Ohio - Unpaged search over name, position and hometown
pub async fn search_athletes(
    State(pool): State<SqlitePool>,
    params: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<Vec<Athlete>>, ApiError> {
    let Query(params) = params?;
    let athletes = db::search_athletes(&pool, &like_pattern(&params.q)).await?;
    Ok(Json(athletes))
}

// GET /api/athletes/:id - Get athlete by ID
pub async fn get_athlete_by_id(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<Athlete>, ApiError> {
    let Path(player_id) = path?;
    let athlete = db::get_athlete_by_id(&pool, player_id)
        .await?
        .ok_or(ApiError::NotFound("Athlete"))?;

    Ok(Json(athlete))
}

// POST /api/athletes - Create athlete
pub async fn create_athlete(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewAthlete>, JsonRejection>,
) -> Result<(StatusCode, Json<Athlete>), ApiError> {
    let Json(athlete) = payload?;
    require("player_name", &athlete.player_name)?;

    let created = db::create_athlete(&pool, &athlete)
        .await
        .map_err(|e| ApiError::from(e).on_reference("Team does not exist"))?;

    tracing::info!("Created athlete {} ({})", created.player_id, created.player_name);
    Ok((StatusCode::CREATED, Json(created)))
}

// PUT /api/athletes/:id - Update name, number, size, position and year
pub async fn update_athlete(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<AthleteUpdate>, JsonRejection>,
) -> Result<Json<Athlete>, ApiError> {
    let Path(player_id) = path?;
    let Json(update) = payload?;
    require("player_name", &update.player_name)?;

    let athlete = db::update_athlete(&pool, player_id, &update)
        .await?
        .ok_or(ApiError::NotFound("Athlete"))?;

    Ok(Json(athlete))
}

// DELETE /api/athletes/:id - Fails while statistics, awards or injuries reference the athlete
pub async fn delete_athlete(
    State(pool): State<SqlitePool>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(player_id) = path?;
    let deleted = db::delete_athlete(&pool, player_id).await.map_err(|e| {
        ApiError::from(e).on_reference("Athlete has statistics, awards or injuries and cannot be deleted")
    })?;

    if !deleted {
        return Err(ApiError::NotFound("Athlete"));
    }

    tracing::info!("Deleted athlete {}", player_id);
    Ok(Json(MessageResponse {
        message: "Athlete deleted successfully".to_string(),
    }))
}
