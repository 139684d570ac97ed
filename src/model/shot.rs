use serde::{Deserialize, Serialize};

/// One recorded shot attempt, field names matching the source feed.
///
/// Records are immutable once parsed; every nullable column of the source
/// schema stays an `Option` here, and scoring decides per field whether a
/// missing value is a neutral default or a validation error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShotEvent {
    #[serde(rename = "gid")]
    pub game_id: String,
    #[serde(default)]
    pub game_date: Option<String>,
    pub period: u8,
    /// Game-clock seconds remaining in the period.
    #[serde(rename = "shot_time", default)]
    pub clock_seconds: Option<f64>,
    #[serde(default)]
    pub player: Option<String>,
    pub player_id: u64,
    pub team: String,
    pub opponent: String,
    #[serde(default)]
    pub assisted: bool,
    #[serde(default)]
    pub assist_player: Option<String>,
    #[serde(default)]
    pub assist_player_id: Option<u64>,
    #[serde(default)]
    pub shot_type: Option<String>,
    #[serde(default)]
    pub shot_distance: Option<f64>,
    /// Pre-computed expected make probability, in (0, 1].
    #[serde(default)]
    pub shot_quality: Option<f64>,
    pub made: bool,
    /// Signed, shooter's-team perspective, at the time of the shot.
    #[serde(default)]
    pub score_margin: Option<i32>,
    #[serde(default)]
    pub x: Option<f64>,
    #[serde(default)]
    pub y: Option<f64>,
}

impl ShotEvent {
    pub fn shooter_name(&self) -> &str {
        self.player.as_deref().unwrap_or("Unknown")
    }

    pub fn passer_name(&self) -> &str {
        self.assist_player.as_deref().unwrap_or("Unknown")
    }

    pub fn shot_label(&self) -> &str {
        self.shot_type.as_deref().unwrap_or("-")
    }
}
