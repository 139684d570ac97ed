use crate::model::zones::ZoneTable;

/// One clutch tier: applies when `period >= 4`, the game clock is at or
/// under `max_clock` seconds and the absolute score margin is at or under
/// `max_margin`. Tiers are checked in declaration order, tightest first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClutchTier {
    pub max_clock: f64,
    pub max_margin: i32,
    pub factor: f64,
}

/// Distance adjustment policy. Exactly one policy per profile; the two
/// published snapshots disagree and are never blended.
#[derive(Debug, Clone, PartialEq)]
pub enum DistancePolicy {
    /// Flat per-zone multiplier.
    ZoneTable(ZoneTable),
    /// `min(1 + scale / (distance + 3), cap)`, a positive-only boost that
    /// decays with distance.
    SmoothDecay { scale: f64, cap: f64 },
}

/// Every tuned constant of the rating model, as data.
///
/// Zone tables are ordered AtRim, ShortMidRange, LongMidRange, Arc3,
/// Corner3 (see `Zone::index`).
#[derive(Debug, Clone)]
pub struct RatingProfile {
    /// League-average make rate per zone.
    pub zone_priors: ZoneTable,
    /// League-average shot-quality baseline per zone.
    pub zone_sq_baseline: ZoneTable,
    /// Regression weight `m` for the per-zone skill model.
    pub skill_regression: f64,
    /// Multiplier a zone collapses toward when the shooter rarely attempts it.
    pub skill_floor: f64,
    /// Attempt share below which the floor interpolation engages.
    pub skill_share_min: f64,
    /// Optional upper bound on the final skill multiplier.
    pub skill_cap: Option<f64>,
    /// Optional upper bound on the creation factor.
    pub creation_cap: Option<f64>,
    /// League-average defensive rating (points allowed per 100).
    pub league_avg_rating: f64,
    /// Ordered clutch tiers, tightest (highest bonus) first.
    pub clutch_tiers: Vec<ClutchTier>,
    pub distance_policy: DistancePolicy,
    /// Regression weight `m` for player-level aggregate shrinkage.
    pub aggregate_regression: f64,
    /// Minimum assists before a passer appears in ranked output.
    pub min_ranked_sample: usize,
    /// Minimum assists to the same shooter before a connection is reported.
    pub min_connection_sample: usize,
    /// Top-assist list length in analysis reports.
    pub top_assists: usize,
    /// Raw-AQR thresholds for the elite / poor share columns.
    pub elite_threshold: f64,
    pub poor_threshold: f64,
}

impl RatingProfile {
    /// Canonical snapshot (database-backed tuning).
    pub fn default_v1() -> Self {
        Self {
            zone_priors: ZoneTable([0.665, 0.442, 0.413, 0.351, 0.388]),
            zone_sq_baseline: ZoneTable([0.665, 0.442, 0.413, 0.351, 0.388]),
            skill_regression: 20.0,
            skill_floor: 0.5,
            skill_share_min: 0.05,
            skill_cap: Some(1.10),
            creation_cap: Some(1.25),
            league_avg_rating: 113.0,
            clutch_tiers: vec![
                ClutchTier {
                    max_clock: 5.0,
                    max_margin: 3,
                    factor: 1.20,
                },
                ClutchTier {
                    max_clock: 10.0,
                    max_margin: 3,
                    factor: 1.15,
                },
                ClutchTier {
                    max_clock: 20.0,
                    max_margin: 4,
                    factor: 1.10,
                },
                ClutchTier {
                    max_clock: 60.0,
                    max_margin: 6,
                    factor: 1.05,
                },
                ClutchTier {
                    max_clock: 120.0,
                    max_margin: 8,
                    factor: 1.025,
                },
            ],
            distance_policy: DistancePolicy::ZoneTable(ZoneTable([0.99, 0.99, 0.97, 1.0, 1.0])),
            aggregate_regression: 250.0,
            min_ranked_sample: 50,
            min_connection_sample: 10,
            top_assists: 5,
            elite_threshold: 1.2,
            poor_threshold: 0.9,
        }
    }

    /// First published snapshot, kept selectable for comparison runs.
    pub fn legacy_v0() -> Self {
        let mut base = Self::default_v1();
        base.zone_priors = ZoneTable([0.60, 0.41, 0.38, 0.354, 0.378]);
        base.zone_sq_baseline = base.zone_priors;
        base.skill_regression = 50.0;
        base.skill_floor = 0.20;
        base.skill_cap = None;
        base.creation_cap = None;
        // The v0 two-minute tier ignored the margin; i32::MAX keeps the
        // tier table uniform.
        base.clutch_tiers = vec![
            ClutchTier {
                max_clock: 120.0,
                max_margin: i32::MAX,
                factor: 1.25,
            },
            ClutchTier {
                max_clock: 300.0,
                max_margin: 5,
                factor: 1.15,
            },
        ];
        base.distance_policy = DistancePolicy::SmoothDecay {
            scale: 0.10,
            cap: 1.10,
        };
        base
    }
}
