use serde::Serialize;

/// Percentile cut points published in every population summary.
pub const CUT_POINTS: &[f64] = &[0.05, 0.10, 0.25, 0.75, 0.90, 0.95];

/// Summary statistics over all raw AQR values of one season's population,
/// plus the sorted value list backing percentile-rank lookups.
///
/// Building one is O(n log n) and touches every assisted shot of the
/// season; callers cache per season and rebuild only on explicit request.
#[derive(Debug, Clone, Serialize)]
pub struct PopulationStats {
    pub n: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// `(probability, value)` pairs for `CUT_POINTS`.
    pub cut_points: Vec<(f64, f64)>,
    #[serde(skip)]
    pub sorted: Vec<f64>,
}
