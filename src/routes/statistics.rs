use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::ApiError;
use crate::models::{NewStatistic, Statistic, StatisticListing};

// GET /api/statistics - All stat lines with player name and game date
pub async fn get_statistics(
    State(pool): State<SqlitePool>,
) -> Result<Json<Vec<StatisticListing>>, ApiError> {
    let statistics = db::get_all_statistics(&pool).await?;
    Ok(Json(statistics))
}

// POST /api/statistics - Record one player's line for one game
pub async fn create_statistic(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewStatistic>, JsonRejection>,
) -> Result<(StatusCode, Json<Statistic>), ApiError> {
    let Json(input) = payload?;

    let statistic = db::record_statistic(&pool, &input).await.map_err(|e| {
        ApiError::from(e)
            .on_duplicate("Statistics already exist for this player in this game")
            .on_reference("Player or game does not exist")
    })?;

    tracing::debug!(
        "Recorded statistics for player {} in game {}",
        statistic.player_id,
        statistic.match_id
    );
    Ok((StatusCode::CREATED, Json(statistic)))
}
