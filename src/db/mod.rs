use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

use crate::models::*;
use crate::stats::{self, InjuryStatus};

pub mod analytics;

const SCHEMA: &str = include_str!("schema.sql");

// Pool setup

/// Opens the process-wide pool. Every pooled connection enforces foreign keys,
/// which is what blocks deletes of referenced athletes and teams.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Single-connection in-memory pool with the schema applied.
pub async fn memory_pool() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

    // Each in-memory connection is its own database, so keep exactly one alive.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;
    Ok(pool)
}

pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(SCHEMA).execute(pool).await?;
    Ok(())
}

// Athlete queries
pub async fn count_athletes(pool: &SqlitePool, pattern: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM athletes
           WHERE player_name LIKE ? ESCAPE '\'
              OR player_position LIKE ? ESCAPE '\'
              OR hometown LIKE ? ESCAPE '\'"#
    )
    .bind(pattern)
    .bind(pattern)
    .bind(pattern)
    .fetch_one(pool)
    .await
}

pub async fn get_athletes_page(pool: &SqlitePool, req: &PageRequest) -> Result<Vec<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT * FROM athletes
           WHERE player_name LIKE ? ESCAPE '\'
              OR player_position LIKE ? ESCAPE '\'
              OR hometown LIKE ? ESCAPE '\'
           ORDER BY player_id
           LIMIT ? OFFSET ?"#
    )
    .bind(&req.pattern)
    .bind(&req.pattern)
    .bind(&req.pattern)
    .bind(req.limit)
    .bind(req.offset())
    .fetch_all(pool)
    .await
}

pub async fn search_athletes(pool: &SqlitePool, pattern: &str) -> Result<Vec<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT * FROM athletes
           WHERE player_name LIKE ? ESCAPE '\'
              OR player_position LIKE ? ESCAPE '\'
              OR hometown LIKE ? ESCAPE '\'
           ORDER BY player_name"#
    )
    .bind(pattern)
    .bind(pattern)
    .bind(pattern)
    .fetch_all(pool)
    .await
}

pub async fn get_athlete_by_id(pool: &SqlitePool, player_id: i64) -> Result<Option<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT * FROM athletes WHERE player_id = ?"#
    )
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_athlete(pool: &SqlitePool, athlete: &NewAthlete) -> Result<Athlete, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"INSERT INTO athletes (
               player_name, player_number, height, weight, age,
               player_position, player_year, hometown, highschool, team_id
           ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&athlete.player_name)
    .bind(athlete.player_number)
    .bind(athlete.height)
    .bind(athlete.weight)
    .bind(athlete.age)
    .bind(&athlete.player_position)
    .bind(athlete.player_year)
    .bind(&athlete.hometown)
    .bind(&athlete.highschool)
    .bind(athlete.team_id)
    .fetch_one(pool)
    .await
}

/// Returns `None` when no athlete has this id.
pub async fn update_athlete(
    pool: &SqlitePool,
    player_id: i64,
    update: &AthleteUpdate,
) -> Result<Option<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"UPDATE athletes
           SET player_name = ?,
               player_number = ?,
               height = ?,
               weight = ?,
               player_position = ?,
               player_year = ?
           WHERE player_id = ?
           RETURNING *"#
    )
    .bind(&update.player_name)
    .bind(update.player_number)
    .bind(update.height)
    .bind(update.weight)
    .bind(&update.player_position)
    .bind(update.player_year)
    .bind(player_id)
    .fetch_optional(pool)
    .await
}

/// Returns whether a row was deleted.
pub async fn delete_athlete(pool: &SqlitePool, player_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM athletes WHERE player_id = ?"#)
        .bind(player_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_athletes(pool: &SqlitePool) -> Result<Vec<AthleteListItem>, sqlx::Error> {
    sqlx::query_as::<_, AthleteListItem>(
        r#"SELECT player_id, player_name FROM athletes ORDER BY player_name ASC"#
    )
    .fetch_all(pool)
    .await
}

// Team queries
pub async fn count_teams(pool: &SqlitePool, pattern: &str) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar(
        r#"SELECT COUNT(*) FROM teams
           WHERE team_name LIKE ? ESCAPE '\'
              OR league LIKE ? ESCAPE '\'
              OR location LIKE ? ESCAPE '\'"#
    )
    .bind(pattern)
    .bind(pattern)
    .bind(pattern)
    .fetch_one(pool)
    .await
}

pub async fn get_teams_page(pool: &SqlitePool, req: &PageRequest) -> Result<Vec<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT * FROM teams
           WHERE team_name LIKE ? ESCAPE '\'
              OR league LIKE ? ESCAPE '\'
              OR location LIKE ? ESCAPE '\'
           ORDER BY team_id
           LIMIT ? OFFSET ?"#
    )
    .bind(&req.pattern)
    .bind(&req.pattern)
    .bind(&req.pattern)
    .bind(req.limit)
    .bind(req.offset())
    .fetch_all(pool)
    .await
}

pub async fn get_team_by_id(pool: &SqlitePool, team_id: i64) -> Result<Option<Team>, sqlx::Error> {
    sqlx::query_as::<_, Team>(
        r#"SELECT * FROM teams WHERE team_id = ?"#
    )
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

pub async fn create_team(pool: &SqlitePool, team: &TeamInput) -> Result<Team, sqlx::Error> {
    let record = stats::team_record(team.wins, team.losses);

    sqlx::query_as::<_, Team>(
        r#"INSERT INTO teams (team_name, league, wins, losses, record, standing, location)
           VALUES (?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(&team.team_name)
    .bind(&team.league)
    .bind(team.wins)
    .bind(team.losses)
    .bind(record)
    .bind(team.standing)
    .bind(&team.location)
    .fetch_one(pool)
    .await
}

/// Rewrites the team and its stored record. Returns `None` when no team has
/// this id.
pub async fn update_team(
    pool: &SqlitePool,
    team_id: i64,
    team: &TeamInput,
) -> Result<Option<Team>, sqlx::Error> {
    let record = stats::team_record(team.wins, team.losses);

    sqlx::query_as::<_, Team>(
        r#"UPDATE teams
           SET team_name = ?,
               league = ?,
               wins = ?,
               losses = ?,
               record = ?,
               standing = ?,
               location = ?
           WHERE team_id = ?
           RETURNING *"#
    )
    .bind(&team.team_name)
    .bind(&team.league)
    .bind(team.wins)
    .bind(team.losses)
    .bind(record)
    .bind(team.standing)
    .bind(&team.location)
    .bind(team_id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_team(pool: &SqlitePool, team_id: i64) -> Result<bool, sqlx::Error> {
    let result = sqlx::query(r#"DELETE FROM teams WHERE team_id = ?"#)
        .bind(team_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

pub async fn list_teams(pool: &SqlitePool) -> Result<Vec<TeamListItem>, sqlx::Error> {
    sqlx::query_as::<_, TeamListItem>(
        r#"SELECT team_id, team_name FROM teams ORDER BY team_name ASC"#
    )
    .fetch_all(pool)
    .await
}

// Game queries
pub async fn get_all_games(pool: &SqlitePool) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT * FROM games ORDER BY date DESC, match_id DESC"#
    )
    .fetch_all(pool)
    .await
}

pub async fn create_game(pool: &SqlitePool, game: &NewGame) -> Result<Game, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"INSERT INTO games (
               home_team_id, away_team_id, home_team_score, away_team_score,
               date, league, match_type
           ) VALUES (?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(game.home_team_id)
    .bind(game.away_team_id)
    .bind(game.home_team_score)
    .bind(game.away_team_score)
    .bind(&game.date)
    .bind(&game.league)
    .bind(game.match_type)
    .fetch_one(pool)
    .await
}

// Statistic queries

/// Derives the shooting and efficiency columns and stores the line in one
/// insert. A second line for the same (player, game) pair violates the
/// primary key and nothing is written.
pub async fn record_statistic(pool: &SqlitePool, input: &NewStatistic) -> Result<Statistic, sqlx::Error> {
    let raw = &input.line;
    let derived = raw.derive();

    sqlx::query_as::<_, Statistic>(
        r#"INSERT INTO statistics (
               player_id, match_id, minutes_played,
               field_goals_made, field_goals_attempted, field_goal_percentage,
               three_point_goals_made, three_point_goals_attempted, three_point_percentage,
               free_throws_made, free_throws_attempted, free_throws_percentage,
               total_rebounds, assists, steals, blocks, turnovers, fouls,
               points, player_rating_per_minute, player_efficiency,
               effective_field_goal_percentage, true_shooting_percentage
           ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(input.player_id)
    .bind(input.match_id)
    .bind(raw.minutes_played)
    .bind(raw.field_goals_made)
    .bind(raw.field_goals_attempted)
    .bind(derived.field_goal_percentage)
    .bind(raw.three_point_goals_made)
    .bind(raw.three_point_goals_attempted)
    .bind(derived.three_point_percentage)
    .bind(raw.free_throws_made)
    .bind(raw.free_throws_attempted)
    .bind(derived.free_throws_percentage)
    .bind(raw.total_rebounds)
    .bind(raw.assists)
    .bind(raw.steals)
    .bind(raw.blocks)
    .bind(raw.turnovers)
    .bind(raw.fouls)
    .bind(raw.points)
    .bind(derived.player_rating_per_minute)
    .bind(derived.player_efficiency)
    .bind(derived.effective_field_goal_percentage)
    .bind(derived.true_shooting_percentage)
    .fetch_one(pool)
    .await
}

pub async fn get_all_statistics(pool: &SqlitePool) -> Result<Vec<StatisticListing>, sqlx::Error> {
    sqlx::query_as::<_, StatisticListing>(
        r#"SELECT s.*, a.player_name, g.date AS game_date
           FROM statistics s
           JOIN athletes a ON s.player_id = a.player_id
           JOIN games g ON s.match_id = g.match_id
           ORDER BY g.date DESC, a.player_name"#
    )
    .fetch_all(pool)
    .await
}

// Award queries
pub async fn create_award(pool: &SqlitePool, award: &NewAward) -> Result<Award, sqlx::Error> {
    sqlx::query_as::<_, Award>(
        r#"INSERT INTO awards (award_name, officiating_body, award_date)
           VALUES (?, ?, ?)
           RETURNING *"#
    )
    .bind(&award.award_name)
    .bind(&award.officiating_body)
    .bind(&award.award_date)
    .fetch_one(pool)
    .await
}

pub async fn list_awards(pool: &SqlitePool) -> Result<Vec<Award>, sqlx::Error> {
    sqlx::query_as::<_, Award>(
        r#"SELECT award_id, award_name, officiating_body, award_date
           FROM awards ORDER BY award_name ASC"#
    )
    .fetch_all(pool)
    .await
}

pub async fn create_athlete_award(pool: &SqlitePool, link: &NewAthleteAward) -> Result<(), sqlx::Error> {
    sqlx::query(r#"INSERT INTO athlete_awards (athlete_id, award_id) VALUES (?, ?)"#)
        .bind(link.athlete_id)
        .bind(link.award_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn create_team_award(pool: &SqlitePool, link: &NewTeamAward) -> Result<(), sqlx::Error> {
    sqlx::query(r#"INSERT INTO team_awards (team_id, award_id) VALUES (?, ?)"#)
        .bind(link.team_id)
        .bind(link.award_id)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn get_athlete_awards(pool: &SqlitePool) -> Result<Vec<AthleteAwardRow>, sqlx::Error> {
    sqlx::query_as::<_, AthleteAwardRow>(
        r#"SELECT aa.athlete_id, aa.award_id, a.player_name, aw.award_name, aw.award_date
           FROM athlete_awards aa
           JOIN athletes a ON aa.athlete_id = a.player_id
           JOIN awards aw ON aa.award_id = aw.award_id
           ORDER BY aw.award_date DESC"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_team_awards(pool: &SqlitePool) -> Result<Vec<TeamAwardRow>, sqlx::Error> {
    sqlx::query_as::<_, TeamAwardRow>(
        r#"SELECT ta.team_id, ta.award_id, t.team_name, aw.award_name, aw.award_date
           FROM team_awards ta
           JOIN teams t ON ta.team_id = t.team_id
           JOIN awards aw ON ta.award_id = aw.award_id
           ORDER BY aw.award_date DESC"#
    )
    .fetch_all(pool)
    .await
}

// Injury queries

/// Stores an injury with its already-derived duration and status.
pub async fn create_injury(
    pool: &SqlitePool,
    injury: &NewInjury,
    total_days_injured: i64,
    status: InjuryStatus,
) -> Result<Injury, sqlx::Error> {
    sqlx::query_as::<_, Injury>(
        r#"INSERT INTO injuries (
               player_id, injury_type, injury_date, recovery_date, total_days_injured, status
           ) VALUES (?, ?, ?, ?, ?, ?)
           RETURNING *"#
    )
    .bind(injury.player_id)
    .bind(&injury.injury_type)
    .bind(&injury.injury_date)
    .bind(&injury.recovery_date)
    .bind(total_days_injured)
    .bind(status.as_str())
    .fetch_one(pool)
    .await
}

pub async fn get_all_injuries(pool: &SqlitePool) -> Result<Vec<InjuryListing>, sqlx::Error> {
    sqlx::query_as::<_, InjuryListing>(
        r#"SELECT i.*, a.player_name
           FROM injuries i
           JOIN athletes a ON i.player_id = a.player_id
           ORDER BY i.injury_date DESC"#
    )
    .fetch_all(pool)
    .await
}
