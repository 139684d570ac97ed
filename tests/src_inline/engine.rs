use super::*;
use crate::store::FileShotStore;

fn assist(game: &str, shooter: u64, passer: u64, quality: Option<f64>, made: bool) -> ShotEvent {
    ShotEvent {
        game_id: game.to_string(),
        game_date: None,
        period: 2,
        clock_seconds: Some(400.0),
        player: Some(format!("Shooter {shooter}")),
        player_id: shooter,
        team: "BOS".to_string(),
        opponent: "NYK".to_string(),
        assisted: true,
        assist_player: Some(format!("Passer {passer}")),
        assist_player_id: Some(passer),
        shot_type: Some("Arc3".to_string()),
        shot_distance: Some(25.0),
        shot_quality: quality,
        made,
        score_margin: Some(2),
        x: None,
        y: None,
    }
}

fn small_season() -> Vec<ShotEvent> {
    vec![
        assist("g1", 1, 2, Some(0.50), true),
        assist("g1", 1, 2, Some(0.45), false),
        assist("g2", 1, 2, Some(0.40), true),
        assist("g1", 1, 3, Some(0.30), false),
        assist("g2", 1, 3, Some(0.25), true),
    ]
}

fn engine_over(shots: Vec<ShotEvent>) -> AqrEngine<FileShotStore> {
    AqrEngine::new(
        FileShotStore::from_shots(shots),
        DefenseRatingTable::empty(),
        RatingProfile::default_v1(),
    )
}

#[test]
fn test_breakdown_first_pick() {
    let mut engine = engine_over(small_season());
    let report = engine.assist_breakdown(2, "BOS", "g1", 1, "2024-25").unwrap();
    assert_eq!(report.assister, "Passer 2");
    assert_eq!(report.shooter, "Shooter 1");
    assert_eq!(report.game_id, "g1");
    assert!(report.breakdown.raw > 0.0);
}

#[test]
fn test_breakdown_pick_out_of_range() {
    let mut engine = engine_over(small_season());
    assert!(matches!(
        engine.assist_breakdown(2, "BOS", "g1", 0, "2024-25"),
        Err(AqrError::Validation(_))
    ));
    assert!(matches!(
        engine.assist_breakdown(2, "BOS", "g1", 9, "2024-25"),
        Err(AqrError::Validation(_))
    ));
}

#[test]
fn test_game_average_skips_unscorable_records() {
    let mut shots = small_season();
    shots.push(assist("g1", 1, 2, None, true)); // no shot quality
    let mut engine = engine_over(shots);

    let report = engine.game_average(2, "BOS", "g1", "2024-25").unwrap();
    assert_eq!(report.count, 2);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.rows.len(), 2);
    assert!(report.mean_raw > 0.0);
}

#[test]
fn test_season_average_unknown_passer() {
    let mut engine = engine_over(small_season());
    assert!(matches!(
        engine.season_average(99, "BOS", "2024-25"),
        Err(AqrError::InsufficientData(_))
    ));
}

#[test]
fn test_skill_profile_cached_per_shooter() {
    let mut engine = engine_over(small_season());
    let shot = assist("g1", 1, 2, Some(0.5), true);
    let first = engine.score_shot(&shot, "2024-25").unwrap();
    let second = engine.score_shot(&shot, "2024-25").unwrap();
    assert_eq!(first, second);
    assert_eq!(engine.skill_cache.len(), 1);
}

#[test]
fn test_ensure_season_stats_rebuilds_only_on_demand() {
    let mut shots = small_season();
    shots.push(assist("g2", 1, 3, None, false)); // unscorable
    let mut engine = engine_over(shots);

    assert_eq!(engine.ensure_season_stats("2024-25", false).unwrap(), 1);
    assert_eq!(engine.season_stats("2024-25").unwrap().n, 5);

    // Cached: no rebuild, no skips.
    assert_eq!(engine.ensure_season_stats("2024-25", false).unwrap(), 0);

    // Forced: full rescore, same skip count.
    assert_eq!(engine.ensure_season_stats("2024-25", true).unwrap(), 1);
}

#[test]
fn test_season_stats_missing_until_built() {
    let engine = engine_over(small_season());
    assert!(matches!(
        engine.season_stats("2024-25"),
        Err(AqrError::InsufficientData(_))
    ));
}

#[test]
fn test_invalidate_season_drops_cached_stats() {
    let mut engine = engine_over(small_season());
    engine.ensure_season_stats("2024-25", false).unwrap();
    engine.invalidate_season("2024-25");
    assert!(engine.season_stats("2024-25").is_err());
}

#[test]
fn test_analyze_assister_reports_connections() {
    let mut engine = AqrEngine::new(
        FileShotStore::from_shots(small_season()),
        DefenseRatingTable::empty(),
        {
            let mut p = RatingProfile::default_v1();
            p.min_connection_sample = 1;
            p
        },
    );

    let report = engine.analyze_assister(2, "BOS", "2024-25").unwrap();
    assert_eq!(report.summary.label, "Passer 2");
    assert_eq!(report.summary.count, 3);
    assert!(report.summary.rating >= 1.0 && report.summary.rating <= 100.0);
    assert_eq!(report.connections.len(), 1);
    assert_eq!(report.connections[0].label, "Shooter 1");
}

#[test]
fn test_compare_leaves_out_missing_passers() {
    let mut engine = engine_over(small_season());
    let report = engine
        .compare_assisters(&[2, 3, 99], "BOS", "2024-25")
        .unwrap();
    assert_eq!(report.rows.len(), 2);
    // Passer 2 got the better looks, so ranks first on adjusted mean.
    assert_eq!(report.rows[0].name, "Passer 2");
    assert_eq!(report.rows[1].name, "Passer 3");
}

#[test]
fn test_rankings_orders_and_numbers_rows() {
    let mut engine = engine_over(small_season());
    let report = engine.rankings("2024-25", Some(1), 10, false).unwrap();

    assert_eq!(report.min_assists, 1);
    assert_eq!(report.rows.len(), 2);
    assert_eq!(report.rows[0].rank, 1);
    assert_eq!(report.rows[0].name, "Passer 2");
    assert_eq!(report.rows[1].rank, 2);
    assert!(report.rows[0].shrunk_raw >= report.rows[1].shrunk_raw);
    assert_eq!(report.stats.n, 5);
}

#[test]
fn test_rankings_threshold_excludes_small_samples() {
    let mut engine = engine_over(small_season());
    let report = engine.rankings("2024-25", Some(3), 10, false).unwrap();
    assert_eq!(report.rows.len(), 1);
    assert_eq!(report.rows[0].name, "Passer 2");
}
