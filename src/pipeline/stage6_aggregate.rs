use std::collections::HashMap;

use serde::Serialize;

use crate::model::profile::RatingProfile;
use crate::model::shot::ShotEvent;
use crate::model::stats::PopulationStats;
use crate::model::zones::Zone;
use crate::pipeline::stage1_zones::classify;
use crate::pipeline::stage5_normalize::{normalize, shrink_mean};

/// A shot with its raw AQR attached; what the aggregator consumes.
#[derive(Debug, Clone)]
pub struct ScoredShot {
    pub shot: ShotEvent,
    pub raw: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ZoneBucket {
    pub zone: Zone,
    pub count: usize,
    pub mean_normalized: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct TopShot {
    pub normalized: f64,
    pub raw: f64,
    pub shooter: String,
    pub shot_label: String,
    pub game_id: String,
    pub game_date: Option<String>,
}

/// Per-entity aggregate: one passer, game, shooter connection or season.
#[derive(Debug, Clone, Serialize)]
pub struct EntitySummary {
    pub key: String,
    pub label: String,
    pub count: usize,
    pub mean_raw: f64,
    /// Mean shrunk toward the league average before normalization.
    pub shrunk_raw: f64,
    /// Normalized shrunk mean, 1..=100.
    pub rating: f64,
    pub min_normalized: f64,
    pub max_normalized: f64,
    pub elite_share: f64,
    pub poor_share: f64,
    pub zones: Vec<ZoneBucket>,
    pub top: Vec<TopShot>,
}

/// Group scored shots by an entity key and summarize each group.
///
/// `key_fn` returns `(key, display label)` or `None` for records that carry
/// no usable key (e.g. an assist row without a passer id); those are counted
/// and returned alongside, not silently dropped. Group order is first-seen
/// input order, so output is deterministic.
pub fn summarize<K>(
    scored: &[ScoredShot],
    key_fn: K,
    stats: &PopulationStats,
    profile: &RatingProfile,
) -> (Vec<EntitySummary>, usize)
where
    K: Fn(&ShotEvent) -> Option<(String, String)>,
{
    let mut order: Vec<String> = Vec::new();
    let mut labels: HashMap<String, String> = HashMap::new();
    let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
    let mut unkeyed = 0usize;

    for (idx, s) in scored.iter().enumerate() {
        let Some((key, label)) = key_fn(&s.shot) else {
            unkeyed += 1;
            continue;
        };
        match groups.get_mut(&key) {
            Some(indices) => indices.push(idx),
            None => {
                order.push(key.clone());
                labels.insert(key.clone(), label);
                groups.insert(key, vec![idx]);
            }
        }
    }

    let summaries = order
        .iter()
        .map(|key| {
            let indices = &groups[key];
            let label = labels[key].clone();
            build_summary(key.clone(), label, indices, scored, stats, profile)
        })
        .collect();
    (summaries, unkeyed)
}

/// Ranked view: entities below the minimum-sample threshold are excluded
/// (not zero-filled), the rest sorted by adjusted rating descending. The
/// sort is stable, so ties keep their first-seen order.
pub fn ranked(mut summaries: Vec<EntitySummary>, min_sample: usize) -> Vec<EntitySummary> {
    summaries.retain(|s| s.count >= min_sample);
    summaries.sort_by(|a, b| b.shrunk_raw.total_cmp(&a.shrunk_raw));
    summaries
}

fn build_summary(
    key: String,
    label: String,
    indices: &[usize],
    scored: &[ScoredShot],
    stats: &PopulationStats,
    profile: &RatingProfile,
) -> EntitySummary {
    let count = indices.len();
    let mean_raw = indices.iter().map(|&i| scored[i].raw).sum::<f64>() / count as f64;
    let shrunk_raw = shrink_mean(mean_raw, count, stats.mean, profile.aggregate_regression);
    let rating = normalize(shrunk_raw, stats);

    let normalized: Vec<f64> = indices.iter().map(|&i| normalize(scored[i].raw, stats)).collect();
    let min_normalized = normalized.iter().copied().fold(f64::INFINITY, f64::min);
    let max_normalized = normalized.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let elite = indices
        .iter()
        .filter(|&&i| scored[i].raw >= profile.elite_threshold)
        .count();
    let poor = indices
        .iter()
        .filter(|&&i| scored[i].raw < profile.poor_threshold)
        .count();

    let mut zones = Vec::new();
    for &zone in Zone::all() {
        let mut zone_count = 0usize;
        let mut zone_sum = 0.0;
        for (pos, &i) in indices.iter().enumerate() {
            if classify(&scored[i].shot) == zone {
                zone_count += 1;
                zone_sum += normalized[pos];
            }
        }
        if zone_count > 0 {
            zones.push(ZoneBucket {
                zone,
                count: zone_count,
                mean_normalized: zone_sum / zone_count as f64,
            });
        }
    }

    // Stable sort: equal normalized values keep input order.
    let mut by_value: Vec<usize> = (0..count).collect();
    by_value.sort_by(|&a, &b| normalized[b].total_cmp(&normalized[a]));
    let top = by_value
        .into_iter()
        .take(profile.top_assists)
        .map(|pos| {
            let s = &scored[indices[pos]];
            TopShot {
                normalized: normalized[pos],
                raw: s.raw,
                shooter: s.shot.shooter_name().to_string(),
                shot_label: s.shot.shot_label().to_string(),
                game_id: s.shot.game_id.clone(),
                game_date: s.shot.game_date.clone(),
            }
        })
        .collect();

    EntitySummary {
        key,
        label,
        count,
        mean_raw,
        shrunk_raw,
        rating,
        min_normalized,
        max_normalized,
        elite_share: elite as f64 / count as f64,
        poor_share: poor as f64 / count as f64,
        zones,
        top,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_aggregate.rs"]
mod tests;
