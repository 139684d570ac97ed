use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::AqrError;
use crate::model::shot::ShotEvent;

pub mod file;

pub use file::FileShotStore;

/// Source of shot records. The scoring core consumes this and never
/// performs I/O itself; implementations return fully materialized
/// sequences.
pub trait ShotRepository {
    /// All shots (assisted or not) by one shooter in a season.
    fn shots_for_player(&self, player_id: u64, season: &str) -> Result<Vec<ShotEvent>, AqrError>;

    /// All assisted shots created by one passer for a team in a season.
    fn assists_for_passer(
        &self,
        passer_id: u64,
        team: &str,
        season: &str,
    ) -> Result<Vec<ShotEvent>, AqrError>;

    /// Every assisted shot of a season, the population for normalization.
    fn assists_for_season(&self, season: &str) -> Result<Vec<ShotEvent>, AqrError>;
}

/// `"2024-25"` covers October 2024 through June 2025.
pub fn season_dates(season: &str) -> Result<(String, String), AqrError> {
    let start_year: u32 = season
        .get(..4)
        .and_then(|s| s.parse().ok())
        .ok_or_else(|| AqrError::Parse(format!("invalid season label: {season}")))?;
    Ok((
        format!("{start_year}-10-01"),
        format!("{}-06-30", start_year + 1),
    ))
}

#[derive(Debug, Clone, Deserialize)]
struct DefenseRow {
    season: String,
    team: String,
    rel_drtg: f64,
}

/// Season-scoped opponent defensive ratings relative to league average.
/// Unknown `(season, team)` pairs are neutral (0.0).
#[derive(Debug, Clone, Default)]
pub struct DefenseRatingTable {
    ratings: HashMap<(String, String), f64>,
}

impl DefenseRatingTable {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self, AqrError> {
        let rows: Vec<DefenseRow> = file::read_records(path)?;
        let mut table = Self::empty();
        for row in rows {
            table.insert(&row.season, &row.team, row.rel_drtg);
        }
        info!(
            "loaded defense ratings: file={}, teams={}",
            path.display(),
            table.len()
        );
        Ok(table)
    }

    pub fn insert(&mut self, season: &str, team: &str, rel_rating: f64) {
        self.ratings
            .insert((season.to_string(), team.to_string()), rel_rating);
    }

    pub fn lookup(&self, season: &str, team: &str) -> f64 {
        self.ratings
            .get(&(season.to_string(), team.to_string()))
            .copied()
            .unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.ratings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ratings.is_empty()
    }
}
