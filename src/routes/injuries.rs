use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{require, ApiError};
use crate::models::{Injury, InjuryList, NewInjury};
use crate::stats;
use super::parse_date;

// GET /api/injuries - All injuries with player names, most recent first
pub async fn get_injuries(
    State(pool): State<SqlitePool>,
) -> Result<Json<InjuryList>, ApiError> {
    let injuries = db::get_all_injuries(&pool).await?;
    Ok(Json(InjuryList { injuries }))
}

// POST /api/injuries - Record an injury; days out and status are derived here
pub async fn create_injury(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewInjury>, JsonRejection>,
) -> Result<(StatusCode, Json<Injury>), ApiError> {
    let Json(mut injury) = payload?;
    require("injury_type", &injury.injury_type)?;

    let injury_date = parse_date("injury_date", &injury.injury_date)?;
    let recovery_date = parse_date("recovery_date", &injury.recovery_date)?;
    let today = chrono::Local::now().date_naive();

    let (days, status) = stats::injury_span(injury_date, recovery_date, today).ok_or_else(|| {
        ApiError::Validation("recovery_date must not be before injury_date".to_string())
    })?;

    injury.injury_date = injury_date.format("%Y-%m-%d").to_string();
    injury.recovery_date = recovery_date.format("%Y-%m-%d").to_string();

    let created = db::create_injury(&pool, &injury, days, status)
        .await
        .map_err(|e| ApiError::from(e).on_reference("Player does not exist"))?;

    tracing::info!(
        "Recorded injury {} for player {}: {} days ({})",
        created.injury_id,
        created.player_id,
        created.total_days_injured,
        created.status
    );
    Ok((StatusCode::CREATED, Json(created)))
}
