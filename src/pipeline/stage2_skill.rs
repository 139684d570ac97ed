use crate::model::profile::RatingProfile;
use crate::model::shot::ShotEvent;
use crate::model::skill::SkillProfile;
use crate::model::zones::{Zone, ZoneTable};
use crate::pipeline::stage1_zones::classify;

/// Build a shooter's per-zone skill profile from their full attempt history
/// (all shots, not just assisted ones).
///
/// Per zone: Bayesian-smoothed make rate `(makes + m*prior) / (attempts + m)`
/// divided by the league prior, then dampened toward the floor when the zone
/// carries less than `skill_share_min` of the shooter's attempts. A shooter
/// with zero total attempts collapses to the floor in every zone.
pub fn build_profile(shots: &[ShotEvent], profile: &RatingProfile) -> SkillProfile {
    let mut attempts = [0u32; Zone::COUNT];
    let mut makes = [0u32; Zone::COUNT];

    for shot in shots {
        let zone = classify(shot);
        attempts[zone.index()] += 1;
        if shot.made {
            makes[zone.index()] += 1;
        }
    }

    let total_attempts: u32 = attempts.iter().sum();
    let mut skill = ZoneTable::splat(0.0);

    for &zone in Zone::all() {
        let prior = profile.zone_priors.get(zone);
        let att = attempts[zone.index()] as f64;
        let mk = makes[zone.index()] as f64;
        let m = profile.skill_regression;

        let smoothed = (mk + m * prior) / (att + m);
        let base_skill = smoothed / prior;

        let share = if total_attempts > 0 {
            att / total_attempts as f64
        } else {
            0.0
        };

        let mut value = if share >= profile.skill_share_min {
            base_skill
        } else {
            let t = share / profile.skill_share_min;
            profile.skill_floor + t * (base_skill - profile.skill_floor)
        };

        if let Some(cap) = profile.skill_cap {
            value = value.min(cap);
        }
        skill.set(zone, value);
    }

    SkillProfile {
        skill,
        attempts,
        makes,
        total_attempts,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_skill.rs"]
mod tests;
