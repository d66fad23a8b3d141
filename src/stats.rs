//! Write-time derivations.
//!
//! Everything here is computed once, when a row is created or updated, and
//! persisted next to the raw inputs. Readers query the stored columns and
//! never recompute them.

use chrono::NaiveDate;
use serde::Deserialize;

/// Divisor floor for the per-minute metrics. Applied even when a player
/// logged zero minutes.
pub const MIN_MINUTES: f64 = 0.1;

/// Raw per-game counting stats for one player in one game.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatLine {
    pub minutes_played: f64,
    pub field_goals_made: i64,
    pub field_goals_attempted: i64,
    pub three_point_goals_made: i64,
    pub three_point_goals_attempted: i64,
    pub free_throws_made: i64,
    pub free_throws_attempted: i64,
    pub total_rebounds: i64,
    pub assists: i64,
    pub steals: i64,
    pub blocks: i64,
    pub turnovers: i64,
    pub fouls: i64,
    pub points: i64,
}

/// Shooting percentages and efficiency ratings derived from a [`StatLine`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedStats {
    pub field_goal_percentage: f64,
    pub three_point_percentage: f64,
    pub free_throws_percentage: f64,
    pub player_rating_per_minute: f64,
    pub player_efficiency: f64,
    pub effective_field_goal_percentage: f64,
    pub true_shooting_percentage: f64,
}

impl StatLine {
    pub fn derive(&self) -> DerivedStats {
        let fgm = self.field_goals_made as f64;
        let fga = self.field_goals_attempted as f64;
        let ftm = self.free_throws_made as f64;
        let fta = self.free_throws_attempted as f64;
        let three_made = self.three_point_goals_made as f64;
        let points = self.points as f64;

        let minutes = self.minutes_played.max(MIN_MINUTES);

        let positive = points
            + self.total_rebounds as f64
            + self.assists as f64
            + self.steals as f64
            + self.blocks as f64;

        let rating = positive - self.turnovers as f64 - self.fouls as f64;
        let misses = (fga - fgm) + (fta - ftm) + self.turnovers as f64;

        DerivedStats {
            field_goal_percentage: percentage(fgm, fga),
            three_point_percentage: percentage(
                three_made,
                self.three_point_goals_attempted as f64,
            ),
            free_throws_percentage: percentage(ftm, fta),
            player_rating_per_minute: rating / minutes,
            player_efficiency: (positive - misses) / minutes,
            effective_field_goal_percentage: percentage(fgm + 0.5 * three_made, fga),
            true_shooting_percentage: percentage(points, 2.0 * (fga + 0.44 * fta)),
        }
    }
}

/// `part / whole * 100`, or 0 when `whole` is not positive.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        part / whole * 100.0
    } else {
        0.0
    }
}

/// Win ratio stored in `teams.record`.
pub fn team_record(wins: i64, losses: i64) -> f64 {
    let played = wins as f64 + losses as f64;
    if played > 0.0 {
        wins as f64 / played
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InjuryStatus {
    Injured,
    Recovered,
}

impl InjuryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryStatus::Injured => "Injured",
            InjuryStatus::Recovered => "Recovered",
        }
    }
}

/// Days out and current status of an injury, as of `today`.
///
/// Returns `None` when the recovery date precedes the injury date.
pub fn injury_span(
    injury_date: NaiveDate,
    recovery_date: NaiveDate,
    today: NaiveDate,
) -> Option<(i64, InjuryStatus)> {
    if recovery_date < injury_date {
        return None;
    }

    let days = (recovery_date - injury_date).num_days();
    let status = if recovery_date <= today {
        InjuryStatus::Recovered
    } else {
        InjuryStatus::Injured
    };

    Some((days, status))
}
