use tracing::{debug, info, warn};

use crate::cache::{SkillCache, StatsCache};
use crate::error::AqrError;
use crate::model::profile::RatingProfile;
use crate::model::shot::ShotEvent;
use crate::model::skill::SkillProfile;
use crate::model::stats::PopulationStats;
use crate::pipeline::stage2_skill::build_profile;
use crate::pipeline::stage4_compose::{FactorBreakdown, compute_breakdown};
use crate::pipeline::stage5_normalize::build_stats;
use crate::pipeline::stage6_aggregate::{ScoredShot, ranked, summarize};
use crate::report::{
    AnalysisReport, AssistRow, BreakdownReport, CompareReport, CompareRow, GameReport, RankingRow,
    RankingsReport, SeasonReport,
};
use crate::store::{DefenseRatingTable, ShotRepository};

/// A batch of scored shots plus the count of records that failed
/// validation and were skipped.
#[derive(Debug)]
pub struct ScoredBatch {
    pub scored: Vec<ScoredShot>,
    pub skipped: usize,
}

/// Wires the shot repository, defense table and parameter profile to the
/// scoring pipeline, owning the per-season caches.
///
/// Single-threaded and synchronous; all repository answers are fully
/// materialized before scoring starts.
pub struct AqrEngine<R: ShotRepository> {
    store: R,
    defense: DefenseRatingTable,
    profile: RatingProfile,
    skill_cache: SkillCache,
    stats_cache: StatsCache,
}

impl<R: ShotRepository> AqrEngine<R> {
    pub fn new(store: R, defense: DefenseRatingTable, profile: RatingProfile) -> Self {
        Self {
            store,
            defense,
            profile,
            skill_cache: SkillCache::new(),
            stats_cache: StatsCache::new(),
        }
    }

    pub fn profile(&self) -> &RatingProfile {
        &self.profile
    }

    /// Cached per (shooter, season): the profile is a pure function of the
    /// shooter's fixed season history, and rebuilding means refetching that
    /// entire history.
    fn skill_profile(&mut self, shooter_id: u64, season: &str) -> Result<SkillProfile, AqrError> {
        if let Some(cached) = self.skill_cache.get(shooter_id, season) {
            return Ok(cached.clone());
        }
        let history = self.store.shots_for_player(shooter_id, season)?;
        let profile = build_profile(&history, &self.profile);
        debug!(
            "built skill profile: shooter={shooter_id}, season={season}, attempts={}",
            profile.total_attempts
        );
        self.skill_cache.insert(shooter_id, season, profile.clone());
        Ok(profile)
    }

    pub fn score_shot(&mut self, shot: &ShotEvent, season: &str) -> Result<f64, AqrError> {
        self.score_breakdown(shot, season).map(|b| b.raw)
    }

    pub fn score_breakdown(
        &mut self,
        shot: &ShotEvent,
        season: &str,
    ) -> Result<FactorBreakdown, AqrError> {
        let skill = self.skill_profile(shot.player_id, season)?;
        let rel_rating = self.defense.lookup(season, &shot.opponent);
        compute_breakdown(shot, &skill, rel_rating, &self.profile)
    }

    /// Bulk scoring is skip-and-count: one malformed record must not abort
    /// a whole season scan.
    fn score_batch(&mut self, shots: Vec<ShotEvent>, season: &str) -> ScoredBatch {
        let mut scored = Vec::with_capacity(shots.len());
        let mut skipped = 0usize;
        for shot in shots {
            match self.score_shot(&shot, season) {
                Ok(raw) => scored.push(ScoredShot { shot, raw }),
                Err(err) => {
                    skipped += 1;
                    debug!("skipping shot in game {}: {err}", shot.game_id);
                }
            }
        }
        if skipped > 0 {
            warn!("skipped {skipped} unscorable shot records");
        }
        ScoredBatch { scored, skipped }
    }

    /// Build (or reuse) the season's population statistics. Rebuilds only
    /// on a cache miss or `force_refresh`; returns the skipped-record count
    /// of the build (0 when served from cache).
    pub fn ensure_season_stats(
        &mut self,
        season: &str,
        force_refresh: bool,
    ) -> Result<usize, AqrError> {
        if !force_refresh && self.stats_cache.contains(season) {
            return Ok(0);
        }
        info!("building population statistics: season={season}");
        let assists = self.store.assists_for_season(season)?;
        let batch = self.score_batch(assists, season);
        let raws: Vec<f64> = batch.scored.iter().map(|s| s.raw).collect();
        let stats = build_stats(&raws)?;
        info!(
            "population statistics ready: season={season}, n={}, mean={:.4}",
            stats.n, stats.mean
        );
        self.stats_cache.insert(season, stats);
        Ok(batch.skipped)
    }

    pub fn season_stats(&self, season: &str) -> Result<&PopulationStats, AqrError> {
        self.stats_cache.get(season).ok_or_else(|| {
            AqrError::InsufficientData(format!("no population statistics built for {season}"))
        })
    }

    /// Factor decomposition of one assist, picked 1-based out of the
    /// passer's assists in a game.
    pub fn assist_breakdown(
        &mut self,
        assister_id: u64,
        team: &str,
        game_id: &str,
        pick: usize,
        season: &str,
    ) -> Result<BreakdownReport, AqrError> {
        let assists = self.game_assists(assister_id, team, game_id, season)?;
        if pick == 0 || pick > assists.len() {
            return Err(AqrError::Validation(format!(
                "pick {pick} out of range: {} assists in game {game_id}",
                assists.len()
            )));
        }
        let shot = &assists[pick - 1];
        let breakdown = self.score_breakdown(shot, season)?;
        Ok(BreakdownReport {
            season: season.to_string(),
            assister: shot.passer_name().to_string(),
            shooter: shot.shooter_name().to_string(),
            shot_label: shot.shot_label().to_string(),
            game_id: game_id.to_string(),
            breakdown,
        })
    }

    pub fn game_average(
        &mut self,
        assister_id: u64,
        team: &str,
        game_id: &str,
        season: &str,
    ) -> Result<GameReport, AqrError> {
        let assists = self.game_assists(assister_id, team, game_id, season)?;
        let assister = assists[0].passer_name().to_string();
        let batch = self.score_batch(assists, season);
        if batch.scored.is_empty() {
            return Err(AqrError::InsufficientData(format!(
                "no scorable assists for {assister_id} in game {game_id}"
            )));
        }

        let mean_raw =
            batch.scored.iter().map(|s| s.raw).sum::<f64>() / batch.scored.len() as f64;
        let rows = batch
            .scored
            .iter()
            .map(|s| AssistRow {
                shooter: s.shot.shooter_name().to_string(),
                shot_label: s.shot.shot_label().to_string(),
                raw: s.raw,
            })
            .collect();

        Ok(GameReport {
            season: season.to_string(),
            game_id: game_id.to_string(),
            assister,
            count: batch.scored.len(),
            mean_raw,
            skipped: batch.skipped,
            rows,
        })
    }

    pub fn season_average(
        &mut self,
        assister_id: u64,
        team: &str,
        season: &str,
    ) -> Result<SeasonReport, AqrError> {
        let assists = self.passer_assists(assister_id, team, season)?;
        let assister = assists[0].passer_name().to_string();
        let batch = self.score_batch(assists, season);
        if batch.scored.is_empty() {
            return Err(AqrError::InsufficientData(format!(
                "no scorable assists for {assister_id} in {season}"
            )));
        }

        Ok(SeasonReport {
            season: season.to_string(),
            assister,
            count: batch.scored.len(),
            mean_raw: batch.scored.iter().map(|s| s.raw).sum::<f64>()
                / batch.scored.len() as f64,
            skipped: batch.skipped,
        })
    }

    /// Full assister profile: aggregate summary against the season
    /// population, zone mix, top assists, strongest shooter connections.
    pub fn analyze_assister(
        &mut self,
        assister_id: u64,
        team: &str,
        season: &str,
    ) -> Result<AnalysisReport, AqrError> {
        let assists = self.passer_assists(assister_id, team, season)?;
        let batch = self.score_batch(assists, season);
        let stats_skipped = self.ensure_season_stats(season, false)?;
        let stats = self.season_stats(season)?;

        let (mut summaries, _) = summarize(
            &batch.scored,
            |shot| {
                shot.assist_player_id
                    .map(|id| (id.to_string(), shot.passer_name().to_string()))
            },
            stats,
            &self.profile,
        );
        let summary = summaries.pop().ok_or_else(|| {
            AqrError::InsufficientData(format!(
                "no scorable assists for {assister_id} in {season}"
            ))
        })?;

        let (connections, _) = summarize(
            &batch.scored,
            |shot| {
                Some((
                    shot.player_id.to_string(),
                    shot.shooter_name().to_string(),
                ))
            },
            stats,
            &self.profile,
        );
        let connections = ranked(connections, self.profile.min_connection_sample)
            .into_iter()
            .take(self.profile.top_assists)
            .collect();

        Ok(AnalysisReport {
            season: season.to_string(),
            summary,
            connections,
            min_connection_sample: self.profile.min_connection_sample,
            skipped: batch.skipped + stats_skipped,
        })
    }

    pub fn compare_assisters(
        &mut self,
        assister_ids: &[u64],
        team: &str,
        season: &str,
    ) -> Result<CompareReport, AqrError> {
        let stats_skipped = self.ensure_season_stats(season, false)?;
        let mut rows = Vec::with_capacity(assister_ids.len());
        let mut skipped = stats_skipped;

        for &id in assister_ids {
            let assists = match self.passer_assists(id, team, season) {
                Ok(assists) => assists,
                Err(AqrError::InsufficientData(_)) => {
                    warn!("no assists for {id}, leaving out of comparison");
                    continue;
                }
                Err(err) => return Err(err),
            };
            let batch = self.score_batch(assists, season);
            skipped += batch.skipped;
            let stats = self.season_stats(season)?;
            let (summaries, _) = summarize(
                &batch.scored,
                |shot| {
                    shot.assist_player_id
                        .map(|pid| (pid.to_string(), shot.passer_name().to_string()))
                },
                stats,
                &self.profile,
            );
            if let Some(s) = summaries.into_iter().next() {
                rows.push(CompareRow {
                    name: s.label,
                    assists: s.count,
                    mean_raw: s.mean_raw,
                    shrunk_raw: s.shrunk_raw,
                    rating: s.rating,
                });
            }
        }

        rows.sort_by(|a, b| b.shrunk_raw.total_cmp(&a.shrunk_raw));
        Ok(CompareReport {
            season: season.to_string(),
            rows,
            skipped,
        })
    }

    /// League passer rankings: every assisted shot of the season scored,
    /// grouped by passer, shrunk toward the league mean, normalized, gated
    /// by the minimum-assist threshold.
    pub fn rankings(
        &mut self,
        season: &str,
        min_assists: Option<usize>,
        limit: usize,
        force_refresh: bool,
    ) -> Result<RankingsReport, AqrError> {
        let assists = self.store.assists_for_season(season)?;
        info!(
            "computing rankings: season={season}, assists={}",
            assists.len()
        );
        let batch = self.score_batch(assists, season);

        if force_refresh || !self.stats_cache.contains(season) {
            let raws: Vec<f64> = batch.scored.iter().map(|s| s.raw).collect();
            self.stats_cache.insert(season, build_stats(&raws)?);
        }
        let stats = self.season_stats(season)?;

        let (summaries, unkeyed) = summarize(
            &batch.scored,
            |shot| {
                shot.assist_player_id
                    .map(|id| (id.to_string(), shot.passer_name().to_string()))
            },
            stats,
            &self.profile,
        );

        let min_assists = min_assists.unwrap_or(self.profile.min_ranked_sample);
        let rows = ranked(summaries, min_assists)
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(i, s)| RankingRow::from_summary(i + 1, &s))
            .collect();

        Ok(RankingsReport {
            season: season.to_string(),
            min_assists,
            skipped: batch.skipped + unkeyed,
            stats: stats.clone(),
            rows,
        })
    }

    pub fn invalidate_season(&mut self, season: &str) {
        self.stats_cache.invalidate(season);
    }

    fn passer_assists(
        &mut self,
        assister_id: u64,
        team: &str,
        season: &str,
    ) -> Result<Vec<ShotEvent>, AqrError> {
        let assists = self.store.assists_for_passer(assister_id, team, season)?;
        if assists.is_empty() {
            return Err(AqrError::InsufficientData(format!(
                "no assists found for {assister_id} ({team}) in {season}"
            )));
        }
        Ok(assists)
    }

    fn game_assists(
        &mut self,
        assister_id: u64,
        team: &str,
        game_id: &str,
        season: &str,
    ) -> Result<Vec<ShotEvent>, AqrError> {
        let assists: Vec<ShotEvent> = self
            .passer_assists(assister_id, team, season)?
            .into_iter()
            .filter(|s| s.game_id == game_id)
            .collect();
        if assists.is_empty() {
            return Err(AqrError::InsufficientData(format!(
                "no assists found for {assister_id} in game {game_id}"
            )));
        }
        Ok(assists)
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/engine.rs"]
mod tests;
