use crate::error::AqrError;
use crate::model::profile::{ClutchTier, DistancePolicy, RatingProfile};
use crate::model::shot::ShotEvent;
use crate::pipeline::stage1_zones::classify;

/// Regulation period length; a missing game clock reads as a full period
/// remaining, which can only loosen the clutch factor toward 1.0.
pub const FULL_PERIOD_SECONDS: f64 = 720.0;

/// How much harder or easier than zone average the shot was to get,
/// independent of the result: `0.5 + 0.5 * (shot_quality / baseline)`.
///
/// A missing or nonpositive shot quality, or a nonpositive baseline, is a
/// validation error: a silently neutral creation factor would corrupt the
/// score without trace.
pub fn creation_factor(shot: &ShotEvent, profile: &RatingProfile) -> Result<f64, AqrError> {
    let zone = classify(shot);
    let sq = shot.shot_quality.ok_or_else(|| {
        AqrError::Validation(format!(
            "shot in game {} missing shot_quality",
            shot.game_id
        ))
    })?;
    if sq <= 0.0 {
        return Err(AqrError::Validation(format!(
            "shot in game {} has nonpositive shot_quality {sq}",
            shot.game_id
        )));
    }
    let baseline = profile.zone_sq_baseline.get(zone);
    if baseline <= 0.0 {
        return Err(AqrError::Validation(format!(
            "zone baseline undefined for {zone}"
        )));
    }

    let factor = 0.5 + 0.5 * (sq / baseline);
    Ok(match profile.creation_cap {
        Some(cap) => factor.min(cap),
        None => factor,
    })
}

/// Reward for scoring against tougher defenses. `rel_rating` is the
/// opponent's points allowed relative to league average (negative =
/// stingier defense, yielding a factor above 1.0); unknown opponents pass
/// 0.0 for a neutral 1.0.
pub fn defense_factor(profile: &RatingProfile, rel_rating: f64) -> f64 {
    let opp_rating = profile.league_avg_rating + rel_rating;
    1.0 + (profile.league_avg_rating - opp_rating) / 100.0
}

/// Step function over (period, clock, margin). Tiers are checked in order,
/// tightest first; the first match wins, and nothing matches before Q4.
pub fn clutch_factor(shot: &ShotEvent, tiers: &[ClutchTier]) -> f64 {
    if shot.period < 4 {
        return 1.0;
    }
    let clock = shot.clock_seconds.unwrap_or(FULL_PERIOD_SECONDS);
    let margin = shot.score_margin.unwrap_or(0).abs();

    for tier in tiers {
        if clock <= tier.max_clock && margin <= tier.max_margin {
            return tier.factor;
        }
    }
    1.0
}

/// Small zone- or distance-dependent multiplier, bounded near 1.0.
pub fn distance_factor(shot: &ShotEvent, policy: &DistancePolicy) -> f64 {
    match policy {
        DistancePolicy::ZoneTable(table) => table.get(classify(shot)),
        DistancePolicy::SmoothDecay { scale, cap } => {
            let dist = shot.shot_distance.unwrap_or(0.0).max(0.0);
            (1.0 + scale / (dist + 3.0)).min(*cap)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_factors.rs"]
mod tests;
