use std::collections::HashMap;

use crate::model::skill::SkillProfile;
use crate::model::stats::PopulationStats;

/// Skill profiles keyed by `(shooter, season)`. A profile is a pure
/// function of the shooter's fixed season history, so entries never go
/// stale within a run; invalidation exists for callers that swap the
/// underlying store.
#[derive(Debug, Default)]
pub struct SkillCache {
    entries: HashMap<(u64, String), SkillProfile>,
}

impl SkillCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, shooter_id: u64, season: &str) -> Option<&SkillProfile> {
        self.entries.get(&(shooter_id, season.to_string()))
    }

    pub fn insert(&mut self, shooter_id: u64, season: &str, profile: SkillProfile) {
        self.entries.insert((shooter_id, season.to_string()), profile);
    }

    pub fn invalidate(&mut self, shooter_id: u64, season: &str) {
        self.entries.remove(&(shooter_id, season.to_string()));
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Population statistics keyed by season. Builds are expensive (every
/// assisted shot of the season), so rebuilds happen only on a miss or an
/// explicit force-refresh, never implicitly.
#[derive(Debug, Default)]
pub struct StatsCache {
    entries: HashMap<String, PopulationStats>,
}

impl StatsCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, season: &str) -> Option<&PopulationStats> {
        self.entries.get(season)
    }

    pub fn insert(&mut self, season: &str, stats: PopulationStats) {
        self.entries.insert(season.to_string(), stats);
    }

    pub fn invalidate(&mut self, season: &str) {
        self.entries.remove(season);
    }

    pub fn contains(&self, season: &str) -> bool {
        self.entries.contains_key(season)
    }
}
