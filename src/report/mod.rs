pub mod json;
pub mod text;

use serde::Serialize;

use crate::model::stats::PopulationStats;
use crate::pipeline::stage4_compose::FactorBreakdown;
use crate::pipeline::stage6_aggregate::EntitySummary;

/// Factor decomposition of a single assist.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownReport {
    pub season: String,
    pub assister: String,
    pub shooter: String,
    pub shot_label: String,
    pub game_id: String,
    pub breakdown: FactorBreakdown,
}

#[derive(Debug, Clone, Serialize)]
pub struct AssistRow {
    pub shooter: String,
    pub shot_label: String,
    pub raw: f64,
}

/// One passer's assists within a single game.
#[derive(Debug, Clone, Serialize)]
pub struct GameReport {
    pub season: String,
    pub game_id: String,
    pub assister: String,
    pub count: usize,
    pub mean_raw: f64,
    pub skipped: usize,
    pub rows: Vec<AssistRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    pub season: String,
    pub assister: String,
    pub count: usize,
    pub mean_raw: f64,
    pub skipped: usize,
}

/// Full breakdown of one passer: aggregate summary, zone mix, top assists
/// and strongest shooter connections.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub season: String,
    pub summary: EntitySummary,
    pub connections: Vec<EntitySummary>,
    pub min_connection_sample: usize,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareRow {
    pub name: String,
    pub assists: usize,
    pub mean_raw: f64,
    pub shrunk_raw: f64,
    pub rating: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompareReport {
    pub season: String,
    pub rows: Vec<CompareRow>,
    pub skipped: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankingRow {
    pub rank: usize,
    pub name: String,
    pub assists: usize,
    pub mean_raw: f64,
    pub shrunk_raw: f64,
    pub rating: f64,
    pub elite_pct: f64,
    pub poor_pct: f64,
}

impl RankingRow {
    pub fn from_summary(rank: usize, summary: &EntitySummary) -> Self {
        Self {
            rank,
            name: summary.label.clone(),
            assists: summary.count,
            mean_raw: summary.mean_raw,
            shrunk_raw: summary.shrunk_raw,
            rating: summary.rating,
            elite_pct: summary.elite_share * 100.0,
            poor_pct: summary.poor_share * 100.0,
        }
    }
}

/// League-wide passer rankings over shrunk, normalized season aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct RankingsReport {
    pub season: String,
    pub min_assists: usize,
    pub skipped: usize,
    pub stats: PopulationStats,
    pub rows: Vec<RankingRow>,
}

pub fn format_f64_3(v: f64) -> String {
    format!("{v:.3}")
}
