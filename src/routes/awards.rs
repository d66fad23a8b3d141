use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::sqlite::SqlitePool;
use crate::db;
use crate::error::{require, ApiError};
use crate::models::{
    AthleteAwardList, Award, MessageResponse, NewAthleteAward, NewAward, NewTeamAward,
    TeamAwardList,
};
use super::parse_date;

// POST /api/awards - Create award
pub async fn create_award(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewAward>, JsonRejection>,
) -> Result<(StatusCode, Json<Award>), ApiError> {
    let Json(mut award) = payload?;
    require("award_name", &award.award_name)?;

    if let Some(date) = award.award_date.as_deref() {
        award.award_date = Some(parse_date("award_date", date)?.format("%Y-%m-%d").to_string());
    }

    let created = db::create_award(&pool, &award).await?;

    tracing::info!("Created award {} ({})", created.award_id, created.award_name);
    Ok((StatusCode::CREATED, Json(created)))
}

// GET /api/athlete-awards - Athlete award links, newest award first
pub async fn get_athlete_awards(
    State(pool): State<SqlitePool>,
) -> Result<Json<AthleteAwardList>, ApiError> {
    let athlete_awards = db::get_athlete_awards(&pool).await?;
    Ok(Json(AthleteAwardList { athlete_awards }))
}

// POST /api/athlete-awards - Link an award to an athlete
pub async fn create_athlete_award(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewAthleteAward>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(link) = payload?;

    db::create_athlete_award(&pool, &link)
        .await
        .map_err(|e| ApiError::from(e).on_reference("Athlete or award does not exist"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Athlete award created successfully".to_string(),
        }),
    ))
}

// GET /api/team-awards - Team award links, newest award first
pub async fn get_team_awards(
    State(pool): State<SqlitePool>,
) -> Result<Json<TeamAwardList>, ApiError> {
    let team_awards = db::get_team_awards(&pool).await?;
    Ok(Json(TeamAwardList { team_awards }))
}

// POST /api/team-awards - Link an award to a team
pub async fn create_team_award(
    State(pool): State<SqlitePool>,
    payload: Result<Json<NewTeamAward>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let Json(link) = payload?;

    db::create_team_award(&pool, &link)
        .await
        .map_err(|e| ApiError::from(e).on_reference("Team or award does not exist"))?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Team award created successfully".to_string(),
        }),
    ))
}
