use axum::{
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use sqlx::sqlite::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::error::ApiError;

pub mod analytics;
pub mod athletes;
pub mod awards;
pub mod games;
pub mod health;
pub mod injuries;
pub mod lists;
pub mod statistics;
pub mod teams;

/// Builds the full API with the pool injected as shared state.
pub fn router(pool: SqlitePool) -> Router {
    // CORS configuration for the browser client
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Basketball Scout API - v1.0" }))
        .route("/health", get(health::health_check))

        // Athlete endpoints
        .route("/api/athletes", get(athletes::get_athletes).post(athletes::create_athlete))
        .route("/api/athletes/search", get(athletes::search_athletes))
        .route(
            "/api/athletes/{id}",
            get(athletes::get_athlete_by_id)
                .put(athletes::update_athlete)
                .delete(athletes::delete_athlete),
        )

        // Team endpoints
        .route("/api/teams", get(teams::get_teams).post(teams::create_team))
        .route(
            "/api/teams/{id}",
            get(teams::get_team_by_id)
                .put(teams::update_team)
                .delete(teams::delete_team),
        )

        // Games and statistics
        .route("/api/games", get(games::get_games).post(games::create_game))
        .route(
            "/api/statistics",
            get(statistics::get_statistics).post(statistics::create_statistic),
        )

        // Awards and injuries
        .route("/api/awards", post(awards::create_award))
        .route(
            "/api/athlete-awards",
            get(awards::get_athlete_awards).post(awards::create_athlete_award),
        )
        .route(
            "/api/team-awards",
            get(awards::get_team_awards).post(awards::create_team_award),
        )
        .route("/api/injuries", get(injuries::get_injuries).post(injuries::create_injury))

        // Selector listings
        .route("/api/list/athletes", get(lists::list_athletes))
        .route("/api/list/teams", get(lists::list_teams))
        .route("/api/list/awards", get(lists::list_awards))

        // Analytics
        .route("/api/analytics/top-scorers", get(analytics::top_scorers))
        .route("/api/analytics/team-ratios", get(analytics::team_ratios))
        .route("/api/analytics/highest-scoring", get(analytics::highest_scoring))
        .route("/api/analytics/award-winners", get(analytics::award_winners))
        .route("/api/analytics/injured-players", get(analytics::injured_players))
        .route("/api/analytics/team-averages", get(analytics::team_averages))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}

/// Parses a `YYYY-MM-DD` request field.
pub(crate) fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ApiError::Validation(format!("{} must be a YYYY-MM-DD date", field)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let date = parse_date("date", " 2024-03-09 ").unwrap();
        assert_eq!(date.format("%Y-%m-%d").to_string(), "2024-03-09");
    }

    #[test]
    fn rejects_other_formats() {
        let err = parse_date("date", "03/09/2024").unwrap_err();
        assert!(err.to_string().contains("date"));
    }
}
