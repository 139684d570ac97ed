use serde::Serialize;

use crate::error::AqrError;
use crate::model::profile::RatingProfile;
use crate::model::shot::ShotEvent;
use crate::model::skill::SkillProfile;
use crate::model::zones::Zone;
use crate::pipeline::stage1_zones::classify;
use crate::pipeline::stage3_factors::{
    clutch_factor, creation_factor, defense_factor, distance_factor,
};

/// The five multiplicative components of one raw AQR, kept apart for the
/// breakdown report.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct FactorBreakdown {
    pub zone: Zone,
    pub creation: f64,
    pub skill: f64,
    pub defense: f64,
    pub clutch: f64,
    pub distance: f64,
    pub raw: f64,
}

/// Compose one raw AQR. Pure multiplicative: all factors at 1.0 yields
/// exactly 1.0. Fails only where `creation_factor` fails; every other
/// factor is total.
pub fn compute_raw(
    shot: &ShotEvent,
    skill: &SkillProfile,
    opponent_rel_rating: f64,
    profile: &RatingProfile,
) -> Result<f64, AqrError> {
    compute_breakdown(shot, skill, opponent_rel_rating, profile).map(|b| b.raw)
}

pub fn compute_breakdown(
    shot: &ShotEvent,
    skill: &SkillProfile,
    opponent_rel_rating: f64,
    profile: &RatingProfile,
) -> Result<FactorBreakdown, AqrError> {
    let zone = classify(shot);
    let creation = creation_factor(shot, profile)?;
    let skill_mult = skill.skill_for(zone);
    let defense = defense_factor(profile, opponent_rel_rating);
    let clutch = clutch_factor(shot, &profile.clutch_tiers);
    let distance = distance_factor(shot, &profile.distance_policy);

    Ok(FactorBreakdown {
        zone,
        creation,
        skill: skill_mult,
        defense,
        clutch,
        distance,
        raw: creation * skill_mult * defense * clutch * distance,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_compose.rs"]
mod tests;
