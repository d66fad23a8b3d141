use serde::{Deserialize, Serialize};

use crate::stats::StatLine;

// Athletes

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Athlete {
    #[serde(rename = "player_ID")]
    pub player_id: i64,
    pub player_name: String,
    pub player_number: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<i64>,
    pub player_position: Option<String>,
    pub player_year: Option<i64>,
    pub hometown: Option<String>,
    pub highschool: Option<String>,
    #[serde(rename = "team_ID")]
    pub team_id: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct NewAthlete {
    pub player_name: String,
    pub player_number: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub age: Option<i64>,
    pub player_position: Option<String>,
    pub player_year: Option<i64>,
    pub hometown: Option<String>,
    pub highschool: Option<String>,
    #[serde(rename = "team_ID")]
    pub team_id: Option<i64>,
}

/// Fields an athlete update may touch. Age, hometown, high school and team
/// are fixed once the athlete is created.
#[derive(Debug, Deserialize)]
pub struct AthleteUpdate {
    pub player_name: String,
    pub player_number: Option<i64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub player_position: Option<String>,
    pub player_year: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AthleteListItem {
    #[serde(rename = "player_ID")]
    pub player_id: i64,
    pub player_name: String,
}

// Teams

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Team {
    #[serde(rename = "team_ID")]
    pub team_id: i64,
    pub team_name: String,
    pub league: Option<String>,
    pub wins: i64,
    pub losses: i64,
    pub record: f64,
    pub standing: Option<i64>,
    pub location: Option<String>,
}

/// Body of both team create and team update; `record` is always derived.
#[derive(Debug, Deserialize)]
pub struct TeamInput {
    pub team_name: String,
    pub league: Option<String>,
    pub wins: i64,
    pub losses: i64,
    pub standing: Option<i64>,
    pub location: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamListItem {
    #[serde(rename = "team_ID")]
    pub team_id: i64,
    pub team_name: String,
}

// Games

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
pub enum MatchType {
    #[serde(rename = "Regular Season")]
    #[sqlx(rename = "Regular Season")]
    RegularSeason,
    Playoff,
    Championship,
    Exhibition,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    #[serde(rename = "match_ID")]
    pub match_id: i64,
    #[serde(rename = "home_team_ID")]
    pub home_team_id: i64,
    #[serde(rename = "away_team_ID")]
    pub away_team_id: i64,
    pub home_team_score: i64,
    pub away_team_score: i64,
    pub date: String,
    pub league: Option<String>,
    pub match_type: MatchType,
}

#[derive(Debug, Deserialize)]
pub struct NewGame {
    #[serde(rename = "home_team_ID")]
    pub home_team_id: i64,
    #[serde(rename = "away_team_ID")]
    pub away_team_id: i64,
    pub home_team_score: i64,
    pub away_team_score: i64,
    pub date: String,
    pub league: Option<String>,
    pub match_type: MatchType,
}

// Statistics

/// One player's line for one game, raw counts plus the derived columns
/// stored at creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Statistic {
    #[serde(rename = "player_ID")]
    pub player_id: i64,
    #[serde(rename = "match_ID")]
    pub match_id: i64,
    pub minutes_played: f64,
    pub field_goals_made: i64,
    pub field_goals_attempted: i64,
    pub field_goal_percentage: f64,
    pub three_point_goals_made: i64,
    pub three_point_goals_attempted: i64,
    pub three_point_percentage: f64,
    pub free_throws_made: i64,
    pub free_throws_attempted: i64,
    pub free_throws_percentage: f64,
    pub total_rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub turnovers: i64,
    pub fouls: i64,
    pub points: i64,
    pub player_rating_per_minute: f64,
    pub player_efficiency: f64,
    pub effective_field_goal_percentage: f64,
    pub true_shooting_percentage: f64,
}

#[derive(Debug, Deserialize)]
pub struct NewStatistic {
    #[serde(rename = "player_ID")]
    pub player_id: i64,
    #[serde(rename = "match_ID")]
    pub match_id: i64,
    #[serde(flatten)]
    pub line: StatLine,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct StatisticListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub statistic: Statistic,
    pub player_name: String,
    pub game_date: String,
}

// Awards

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Award {
    #[serde(rename = "award_ID")]
    pub award_id: i64,
    pub award_name: String,
    pub officiating_body: Option<String>,
    pub award_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewAward {
    pub award_name: String,
    pub officiating_body: Option<String>,
    pub award_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewAthleteAward {
    #[serde(rename = "athlete_ID")]
    pub athlete_id: i64,
    #[serde(rename = "award_ID")]
    pub award_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct NewTeamAward {
    #[serde(rename = "team_ID")]
    pub team_id: i64,
    #[serde(rename = "award_ID")]
    pub award_id: i64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AthleteAwardRow {
    #[serde(rename = "athlete_ID")]
    pub athlete_id: i64,
    #[serde(rename = "award_ID")]
    pub award_id: i64,
    pub player_name: String,
    pub award_name: String,
    pub award_date: Option<String>,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TeamAwardRow {
    #[serde(rename = "team_ID")]
    pub team_id: i64,
    #[serde(rename = "award_ID")]
    pub award_id: i64,
    pub team_name: String,
    pub award_name: String,
    pub award_date: Option<String>,
}

// Injuries

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Injury {
    #[serde(rename = "injury_ID")]
    pub injury_id: i64,
    #[serde(rename = "player_ID")]
    pub player_id: i64,
    pub injury_type: String,
    pub injury_date: String,
    pub recovery_date: String,
    pub total_days_injured: i64,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct NewInjury {
    #[serde(rename = "player_ID")]
    pub player_id: i64,
    pub injury_type: String,
    pub injury_date: String,
    pub recovery_date: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct InjuryListing {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub injury: Injury,
    pub player_name: String,
}

// Paged search

/// Query string of the paged athlete/team listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub search: Option<String>,
}

pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// A resolved page request: 1-based page, positive limit, and the LIKE
/// pattern for the search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
    pub pattern: String,
}

impl PageQuery {
    pub fn resolve(&self) -> PageRequest {
        let page = self.page.filter(|p| *p >= 1).unwrap_or(1);
        let limit = self.limit.filter(|l| *l >= 1).unwrap_or(DEFAULT_PAGE_LIMIT);
        let search = self.search.as_deref().unwrap_or("");

        PageRequest {
            page,
            limit,
            pattern: like_pattern(search),
        }
    }
}

impl PageRequest {
    /// Saturates for page/limit pairs past the end of any real table.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    pub fn total_pages(&self, total: i64) -> i64 {
        if total > 0 {
            (total - 1) / self.limit + 1
        } else {
            0
        }
    }
}

/// Substring LIKE pattern with `\`, `%` and `_` escaped. Use with
/// `ESCAPE '\'`.
///
/// SQLite's LIKE folds case for ASCII letters only, so "ERIC" matches "eric"
/// but "ÉRIC" does not match "éric".
pub fn like_pattern(search: &str) -> String {
    let mut pattern = String::with_capacity(search.len() + 2);
    pattern.push('%');
    for c in search.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthletePage {
    pub athletes: Vec<Athlete>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPage {
    pub teams: Vec<Team>,
    pub total: i64,
    pub page: i64,
    pub total_pages: i64,
}

// Collection wrappers

#[derive(Debug, Serialize, Deserialize)]
pub struct AthleteList {
    pub athletes: Vec<AthleteListItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TeamList {
    pub teams: Vec<TeamListItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AwardList {
    pub awards: Vec<Award>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GameList {
    pub games: Vec<Game>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteAwardList {
    pub athlete_awards: Vec<AthleteAwardRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAwardList {
    pub team_awards: Vec<TeamAwardRow>,
}

#[derive(Debug, Serialize)]
pub struct InjuryList {
    pub injuries: Vec<InjuryListing>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// Analytics

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TopScorer {
    pub id: i64,
    pub name: String,
    pub points: i64,
    pub game: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct TeamRatio {
    pub id: i64,
    pub name: String,
    pub wins: i64,
    pub losses: i64,
    pub ratio: f64,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HighestScoringTeam {
    pub id: i64,
    pub name: String,
    pub total_score: i64,
    pub games_played: i64,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct AwardWinner {
    pub id: String,
    pub name: String,
    pub award: String,
    pub year: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct InjuredPlayer {
    pub id: i64,
    pub name: String,
    pub injury: String,
    pub injury_date: String,
    pub days_out: i64,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct TeamAverage {
    pub id: i64,
    pub team: String,
    pub avg_points: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TopScorersResponse {
    pub top_scorers: Vec<TopScorer>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamRatiosResponse {
    pub team_ratios: Vec<TeamRatio>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HighestScoringResponse {
    pub highest_scoring_teams: Vec<HighestScoringTeam>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardWinnersResponse {
    pub award_winners: Vec<AwardWinner>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuredPlayersResponse {
    pub injured_players: Vec<InjuredPlayer>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamAveragesResponse {
    pub team_averages: Vec<TeamAverage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_defaults() {
        let req = PageQuery::default().resolve();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, DEFAULT_PAGE_LIMIT);
        assert_eq!(req.pattern, "%%");
        assert_eq!(req.offset(), 0);
    }

    #[test]
    fn out_of_range_page_and_limit_fall_back() {
        let req = PageQuery {
            page: Some(0),
            limit: Some(-4),
            search: None,
        }
        .resolve();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn offset_and_page_count() {
        let req = PageQuery {
            page: Some(3),
            limit: Some(10),
            search: Some("guard".into()),
        }
        .resolve();
        assert_eq!(req.offset(), 20);
        assert_eq!(req.total_pages(25), 3);
        assert_eq!(req.total_pages(30), 3);
        assert_eq!(req.total_pages(0), 0);
        assert_eq!(req.pattern, "%guard%");
    }

    #[test]
    fn huge_limits_do_not_overflow() {
        let req = PageQuery {
            page: Some(i64::MAX),
            limit: Some(i64::MAX),
            search: None,
        }
        .resolve();
        assert_eq!(req.offset(), i64::MAX);
        assert_eq!(req.total_pages(1), 1);
        assert_eq!(req.total_pages(i64::MAX), 1);
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(like_pattern("50%"), "%50\\%%");
        assert_eq!(like_pattern("a_b"), "%a\\_b%");
        assert_eq!(like_pattern("c:\\"), "%c:\\\\%");
    }

    #[test]
    fn statistic_body_flattens_raw_fields() {
        let body = serde_json::json!({
            "player_ID": 4,
            "match_ID": 9,
            "minutes_played": 31.5,
            "field_goals_made": 8,
            "field_goals_attempted": 15,
            "three_point_goals_made": 2,
            "three_point_goals_attempted": 6,
            "free_throws_made": 3,
            "free_throws_attempted": 4,
            "total_rebounds": 7,
            "assists": 5,
            "steals": 1,
            "blocks": 0,
            "turnovers": 2,
            "fouls": 3,
            "points": 21
        });

        let stat: NewStatistic = serde_json::from_value(body).unwrap();
        assert_eq!(stat.player_id, 4);
        assert_eq!(stat.match_id, 9);
        assert_eq!(stat.line.points, 21);
        assert_eq!(stat.line.minutes_played, 31.5);
    }

    #[test]
    fn match_type_uses_display_names() {
        let parsed: MatchType = serde_json::from_str("\"Regular Season\"").unwrap();
        assert_eq!(parsed, MatchType::RegularSeason);
        assert!(serde_json::from_str::<MatchType>("\"Preseason\"").is_err());
    }
}
