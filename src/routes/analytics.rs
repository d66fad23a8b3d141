use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::sqlite::SqlitePool;
use std::str::FromStr;
use crate::db::analytics;
use crate::error::ApiError;
use crate::models::{
    AwardWinnersResponse, HighestScoringResponse, InjuredPlayersResponse, TeamAveragesResponse,
    TeamRatiosResponse, TopScorersResponse,
};

/// Single optional filter shared by all reports. Blank or unparsable
/// values mean "no filter".
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    date: Option<String>,
    min_ratio: Option<String>,
    min_games: Option<String>,
    #[serde(rename = "type")]
    award_type: Option<String>,
    min_days: Option<String>,
    min_points: Option<String>,
}

fn text_filter(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn number_filter<T: FromStr + Default>(value: &Option<String>) -> T {
    text_filter(value)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default()
}

// GET /api/analytics/top-scorers?date=2024-01-15
pub async fn top_scorers(
    State(pool): State<SqlitePool>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<TopScorersResponse>, ApiError> {
    let Query(params) = params?;
    let top_scorers = analytics::top_scorers(&pool, text_filter(&params.date)).await?;
    Ok(Json(TopScorersResponse { top_scorers }))
}

// GET /api/analytics/team-ratios?minRatio=0.5
pub async fn team_ratios(
    State(pool): State<SqlitePool>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<TeamRatiosResponse>, ApiError> {
    let Query(params) = params?;
    let min_ratio: f64 = number_filter(&params.min_ratio);
    let team_ratios = analytics::team_ratios(&pool, min_ratio).await?;
    Ok(Json(TeamRatiosResponse { team_ratios }))
}

// GET /api/analytics/highest-scoring?minGames=3
pub async fn highest_scoring(
    State(pool): State<SqlitePool>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<HighestScoringResponse>, ApiError> {
    let Query(params) = params?;
    let min_games: i64 = number_filter(&params.min_games);
    tracing::debug!("Fetching highest scoring teams with minGames: {}", min_games);

    let highest_scoring_teams = analytics::highest_scoring(&pool, min_games).await?;
    Ok(Json(HighestScoringResponse { highest_scoring_teams }))
}

// GET /api/analytics/award-winners?type=MVP
pub async fn award_winners(
    State(pool): State<SqlitePool>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<AwardWinnersResponse>, ApiError> {
    let Query(params) = params?;
    let award_winners = analytics::award_winners(&pool, text_filter(&params.award_type)).await?;
    Ok(Json(AwardWinnersResponse { award_winners }))
}

// GET /api/analytics/injured-players?minDays=14
pub async fn injured_players(
    State(pool): State<SqlitePool>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<InjuredPlayersResponse>, ApiError> {
    let Query(params) = params?;
    let min_days: i64 = number_filter(&params.min_days);
    tracing::debug!("Fetching injured players with minDays: {}", min_days);

    let injured_players = analytics::injured_players(&pool, min_days).await?;
    Ok(Json(InjuredPlayersResponse { injured_players }))
}

// GET /api/analytics/team-averages?minPoints=90
pub async fn team_averages(
    State(pool): State<SqlitePool>,
    params: Result<Query<ReportQuery>, QueryRejection>,
) -> Result<Json<TeamAveragesResponse>, ApiError> {
    let Query(params) = params?;
    let min_points: f64 = number_filter(&params.min_points);
    let team_averages = analytics::team_averages(&pool, min_points).await?;
    Ok(Json(TeamAveragesResponse { team_averages }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_filters_are_absent() {
        assert_eq!(text_filter(&Some("  ".to_string())), None);
        assert_eq!(text_filter(&None), None);
        assert_eq!(text_filter(&Some("MVP".to_string())), Some("MVP"));
    }

    #[test]
    fn unparsable_numbers_default_to_zero() {
        assert_eq!(number_filter::<i64>(&Some("abc".to_string())), 0);
        assert_eq!(number_filter::<i64>(&Some("".to_string())), 0);
        assert_eq!(number_filter::<i64>(&Some("7".to_string())), 7);
        assert_eq!(number_filter::<f64>(&Some("0.5".to_string())), 0.5);
    }
}
