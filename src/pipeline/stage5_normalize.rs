use crate::error::AqrError;
use crate::model::stats::{CUT_POINTS, PopulationStats};

/// Build population statistics over all raw AQR values of a season.
///
/// Exact order statistics over the full sorted list; O(n log n), so callers
/// cache per season and rebuild only on explicit request. Fewer than two
/// values is an error (standard deviation is undefined), never a NaN.
pub fn build_stats(raws: &[f64]) -> Result<PopulationStats, AqrError> {
    if raws.len() < 2 {
        return Err(AqrError::InsufficientData(format!(
            "population statistics need at least 2 values, got {}",
            raws.len()
        )));
    }

    let mut sorted = raws.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let var = sorted.iter().map(|v| (v - mean) * (v - mean)).sum::<f64>() / (n as f64 - 1.0);

    Ok(PopulationStats {
        n,
        mean,
        std_dev: var.sqrt(),
        min: sorted[0],
        max: sorted[n - 1],
        median: quantile_sorted(&sorted, 0.5),
        cut_points: CUT_POINTS
            .iter()
            .map(|&p| (p, quantile_sorted(&sorted, p)))
            .collect(),
        sorted,
    })
}

/// Exact ceil-index order statistic over an already-sorted slice.
fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    let idx = ((sorted.len() - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

/// Percentile rank of `raw` within the population, on a 1..=100 scale
/// rounded to one decimal.
///
/// Rank counts values strictly below `raw`, scaled over `n - 1` so the
/// population minimum lands exactly on 1 and the maximum on 100. Monotone
/// non-decreasing in `raw` for fixed stats; robust to outliers and skew,
/// at the cost of being population-relative.
pub fn normalize(raw: f64, stats: &PopulationStats) -> f64 {
    let below = stats.sorted.partition_point(|&v| v < raw);
    let rank = (below as f64 / (stats.n as f64 - 1.0)).clamp(0.0, 1.0);
    round1(rank * 99.0 + 1.0)
}

/// Shrink a player-level mean toward the league average, weighted by sample
/// size: `(n/(n+m)) * mean + (m/(n+m)) * league_avg`.
///
/// Same conjugate form as the skill model but with a much larger `m`:
/// hundreds of assists are needed before an aggregate mean is trusted over
/// the league average. With `n = 0` this is exactly the league average.
pub fn shrink_mean(mean_raw: f64, n: usize, league_avg: f64, m: f64) -> f64 {
    let n = n as f64;
    (n / (n + m)) * mean_raw + (m / (n + m)) * league_avg
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_normalize.rs"]
mod tests;
