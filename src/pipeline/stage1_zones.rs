use crate::model::shot::ShotEvent;
use crate::model::zones::Zone;

pub const RIM_MAX_FT: f64 = 4.5;
pub const SHORT_MID_MAX_FT: f64 = 14.0;
pub const THREE_MIN_FT: f64 = 22.0;
pub const CORNER_MAX_FT: f64 = 22.5;
pub const CORNER_MIN_ABS_X_FT: f64 = 22.0;

/// Map a shot to exactly one zone. Total function: every record classifies.
///
/// Shot-type labels from the feed are authoritative when recognized;
/// distance and coordinates are only consulted for unlabeled records.
/// Records with neither label nor distance default to mid-range rather
/// than guessing a premium zone.
pub fn classify(shot: &ShotEvent) -> Zone {
    if let Some(label) = shot.shot_type.as_deref() {
        if let Some(zone) = Zone::from_label(label) {
            return zone;
        }
    }

    let Some(dist) = shot.shot_distance else {
        return Zone::LongMidRange;
    };

    if dist <= RIM_MAX_FT {
        return Zone::AtRim;
    }
    if dist <= SHORT_MID_MAX_FT {
        return Zone::ShortMidRange;
    }
    if dist >= THREE_MIN_FT {
        if let Some(x) = shot.x {
            if x.abs() > CORNER_MIN_ABS_X_FT && dist <= CORNER_MAX_FT {
                return Zone::Corner3;
            }
        }
        return Zone::Arc3;
    }
    Zone::LongMidRange
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_zones.rs"]
mod tests;
