//! The six fixed analytics reports. Each takes one filter and returns at most
//! [`REPORT_LIMIT`] rows, highest ranking key first.

use sqlx::sqlite::SqlitePool;

use crate::models::{AwardWinner, HighestScoringTeam, InjuredPlayer, TeamAverage, TeamRatio, TopScorer};

pub const REPORT_LIMIT: i64 = 5;

/// Best single-game point totals, optionally restricted to one game date.
pub async fn top_scorers(pool: &SqlitePool, date: Option<&str>) -> Result<Vec<TopScorer>, sqlx::Error> {
    sqlx::query_as::<_, TopScorer>(
        r#"SELECT
               s.player_id AS id,
               a.player_name AS name,
               s.points,
               home.team_name || ' vs ' || away.team_name AS game,
               g.date
           FROM statistics s
           JOIN athletes a ON s.player_id = a.player_id
           JOIN games g ON s.match_id = g.match_id
           JOIN teams home ON g.home_team_id = home.team_id
           JOIN teams away ON g.away_team_id = away.team_id
           WHERE (? IS NULL OR g.date = ?)
           ORDER BY s.points DESC
           LIMIT ?"#
    )
    .bind(date)
    .bind(date)
    .bind(REPORT_LIMIT)
    .fetch_all(pool)
    .await
}

pub async fn team_ratios(pool: &SqlitePool, min_ratio: f64) -> Result<Vec<TeamRatio>, sqlx::Error> {
    sqlx::query_as::<_, TeamRatio>(
        r#"SELECT
               team_id AS id,
               team_name AS name,
               wins,
               losses,
               ROUND(record, 3) AS ratio
           FROM teams
           WHERE record >= ?
           ORDER BY record DESC
           LIMIT ?"#
    )
    .bind(min_ratio)
    .bind(REPORT_LIMIT)
    .fetch_all(pool)
    .await
}

/// Teams by total points scored across all their games. Teams without games
/// count as zero games and zero points.
pub async fn highest_scoring(pool: &SqlitePool, min_games: i64) -> Result<Vec<HighestScoringTeam>, sqlx::Error> {
    sqlx::query_as::<_, HighestScoringTeam>(
        r#"SELECT
               t.team_id AS id,
               t.team_name AS name,
               COALESCE(SUM(CASE
                   WHEN g.home_team_id = t.team_id THEN g.home_team_score
                   WHEN g.away_team_id = t.team_id THEN g.away_team_score
                   ELSE 0
               END), 0) AS total_score,
               COUNT(DISTINCT g.match_id) AS games_played
           FROM teams t
           LEFT JOIN games g ON t.team_id IN (g.home_team_id, g.away_team_id)
           GROUP BY t.team_id, t.team_name
           HAVING COUNT(DISTINCT g.match_id) >= ?
           ORDER BY total_score DESC
           LIMIT ?"#
    )
    .bind(min_games)
    .bind(REPORT_LIMIT)
    .fetch_all(pool)
    .await
}

/// Athlete award winners, newest award first, optionally for one award name.
pub async fn award_winners(pool: &SqlitePool, award_name: Option<&str>) -> Result<Vec<AwardWinner>, sqlx::Error> {
    sqlx::query_as::<_, AwardWinner>(
        r#"SELECT
               aa.athlete_id || '_' || aa.award_id AS id,
               a.player_name AS name,
               aw.award_name AS award,
               CAST(strftime('%Y', aw.award_date) AS INTEGER) AS year
           FROM athlete_awards aa
           JOIN athletes a ON aa.athlete_id = a.player_id
           JOIN awards aw ON aa.award_id = aw.award_id
           WHERE (? IS NULL OR aw.award_name = ?)
           ORDER BY aw.award_date DESC
           LIMIT ?"#
    )
    .bind(award_name)
    .bind(award_name)
    .bind(REPORT_LIMIT)
    .fetch_all(pool)
    .await
}

pub async fn injured_players(pool: &SqlitePool, min_days: i64) -> Result<Vec<InjuredPlayer>, sqlx::Error> {
    sqlx::query_as::<_, InjuredPlayer>(
        r#"SELECT
               i.injury_id AS id,
               a.player_name AS name,
               i.injury_type AS injury,
               i.injury_date,
               i.total_days_injured AS days_out,
               i.status
           FROM injuries i
           JOIN athletes a ON i.player_id = a.player_id
           WHERE i.total_days_injured >= ?
           ORDER BY i.total_days_injured DESC
           LIMIT ?"#
    )
    .bind(min_days)
    .bind(REPORT_LIMIT)
    .fetch_all(pool)
    .await
}

/// Average points per game for teams that have played at least once.
pub async fn team_averages(pool: &SqlitePool, min_points: f64) -> Result<Vec<TeamAverage>, sqlx::Error> {
    sqlx::query_as::<_, TeamAverage>(
        r#"SELECT
               t.team_id AS id,
               t.team_name AS team,
               ROUND(AVG(CASE
                   WHEN g.home_team_id = t.team_id THEN g.home_team_score
                   ELSE g.away_team_score
               END), 1) AS avg_points
           FROM teams t
           JOIN games g ON t.team_id IN (g.home_team_id, g.away_team_id)
           GROUP BY t.team_id, t.team_name
           HAVING avg_points >= ?
           ORDER BY avg_points DESC
           LIMIT ?"#
    )
    .bind(min_points)
    .bind(REPORT_LIMIT)
    .fetch_all(pool)
    .await
}
