use serde::{Deserialize, Serialize};

/// Court region used to bucket shot difficulty and value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    AtRim,
    ShortMidRange,
    LongMidRange,
    Arc3,
    Corner3,
}

impl Zone {
    pub const COUNT: usize = 5;

    pub fn all() -> &'static [Zone] {
        &[
            Zone::AtRim,
            Zone::ShortMidRange,
            Zone::LongMidRange,
            Zone::Arc3,
            Zone::Corner3,
        ]
    }

    pub fn index(self) -> usize {
        match self {
            Zone::AtRim => 0,
            Zone::ShortMidRange => 1,
            Zone::LongMidRange => 2,
            Zone::Arc3 => 3,
            Zone::Corner3 => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Zone::AtRim => "AtRim",
            Zone::ShortMidRange => "ShortMidRange",
            Zone::LongMidRange => "LongMidRange",
            Zone::Arc3 => "Arc3",
            Zone::Corner3 => "Corner3",
        }
    }

    /// Source shot-type labels are authoritative when present.
    /// `AboveBreak3` is the feed's alias for above-the-break threes.
    pub fn from_label(label: &str) -> Option<Zone> {
        match label {
            "AtRim" => Some(Zone::AtRim),
            "ShortMidRange" => Some(Zone::ShortMidRange),
            "LongMidRange" => Some(Zone::LongMidRange),
            "Arc3" | "AboveBreak3" => Some(Zone::Arc3),
            "Corner3" => Some(Zone::Corner3),
            _ => None,
        }
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fixed per-zone value table, indexed by `Zone::index`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZoneTable(pub [f64; Zone::COUNT]);

impl ZoneTable {
    pub fn get(&self, zone: Zone) -> f64 {
        self.0[zone.index()]
    }

    pub fn set(&mut self, zone: Zone, value: f64) {
        self.0[zone.index()] = value;
    }

    pub fn splat(value: f64) -> Self {
        ZoneTable([value; Zone::COUNT])
    }
}
