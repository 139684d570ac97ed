use crate::model::zones::{Zone, ZoneTable};

/// Per-shooter skill multipliers for one season, with the attempt counts
/// they were built from. Every known zone has an entry; zones the shooter
/// never attempted collapse toward the configured floor.
#[derive(Debug, Clone, PartialEq)]
pub struct SkillProfile {
    pub skill: ZoneTable,
    pub attempts: [u32; Zone::COUNT],
    pub makes: [u32; Zone::COUNT],
    pub total_attempts: u32,
}

impl SkillProfile {
    /// Skill multiplier for a zone; 1.0 is exactly league average.
    pub fn skill_for(&self, zone: Zone) -> f64 {
        self.skill.get(zone)
    }

    pub fn attempts_in(&self, zone: Zone) -> u32 {
        self.attempts[zone.index()]
    }
}
