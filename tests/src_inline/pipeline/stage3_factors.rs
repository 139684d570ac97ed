use super::*;
use crate::model::zones::{Zone, ZoneTable};

fn corner_shot() -> ShotEvent {
    ShotEvent {
        game_id: "g1".to_string(),
        game_date: None,
        period: 2,
        clock_seconds: None,
        player: None,
        player_id: 1,
        team: "BOS".to_string(),
        opponent: "NYK".to_string(),
        assisted: true,
        assist_player: None,
        assist_player_id: Some(2),
        shot_type: Some("Corner3".to_string()),
        shot_distance: Some(22.1),
        shot_quality: Some(0.388),
        made: true,
        score_margin: None,
        x: None,
        y: None,
    }
}

#[test]
fn test_creation_neutral_at_baseline() {
    let profile = RatingProfile::default_v1();
    let shot = corner_shot();
    assert_eq!(creation_factor(&shot, &profile).unwrap(), 1.0);
}

#[test]
fn test_creation_rewards_open_looks() {
    let profile = RatingProfile::default_v1();
    let mut shot = corner_shot();
    shot.shot_quality = Some(0.5);
    let open = creation_factor(&shot, &profile).unwrap();
    shot.shot_quality = Some(0.3);
    let contested = creation_factor(&shot, &profile).unwrap();
    assert!(open > 1.0);
    assert!(contested < 1.0);
}

#[test]
fn test_creation_cap() {
    let profile = RatingProfile::default_v1();
    let mut shot = corner_shot();
    shot.shot_quality = Some(0.95);
    assert_eq!(creation_factor(&shot, &profile).unwrap(), 1.25);
}

#[test]
fn test_creation_rejects_missing_or_bad_quality() {
    let profile = RatingProfile::default_v1();
    let mut shot = corner_shot();

    shot.shot_quality = None;
    assert!(matches!(
        creation_factor(&shot, &profile),
        Err(AqrError::Validation(_))
    ));

    shot.shot_quality = Some(0.0);
    assert!(matches!(
        creation_factor(&shot, &profile),
        Err(AqrError::Validation(_))
    ));
}

#[test]
fn test_defense_factor_sign() {
    let profile = RatingProfile::default_v1();
    assert_eq!(defense_factor(&profile, 0.0), 1.0);
    // Stingier defense (fewer points allowed) boosts the score.
    assert!(defense_factor(&profile, -5.0) > 1.0);
    assert!(defense_factor(&profile, 5.0) < 1.0);
    assert!((defense_factor(&profile, -5.0) - 1.05).abs() < 1e-12);
}

#[test]
fn test_clutch_only_in_fourth_or_later() {
    let tiers = RatingProfile::default_v1().clutch_tiers;
    let mut shot = corner_shot();
    shot.clock_seconds = Some(4.0);
    shot.score_margin = Some(1);

    shot.period = 3;
    assert_eq!(clutch_factor(&shot, &tiers), 1.0);

    shot.period = 4;
    assert_eq!(clutch_factor(&shot, &tiers), 1.20);

    shot.period = 5; // overtime
    assert_eq!(clutch_factor(&shot, &tiers), 1.20);
}

#[test]
fn test_clutch_first_matching_tier_wins() {
    let tiers = RatingProfile::default_v1().clutch_tiers;
    let mut shot = corner_shot();
    shot.period = 4;

    shot.clock_seconds = Some(15.0);
    shot.score_margin = Some(-4);
    assert_eq!(clutch_factor(&shot, &tiers), 1.10);

    shot.clock_seconds = Some(90.0);
    shot.score_margin = Some(7);
    assert_eq!(clutch_factor(&shot, &tiers), 1.025);

    // Blowout late: no tier matches.
    shot.clock_seconds = Some(15.0);
    shot.score_margin = Some(20);
    assert_eq!(clutch_factor(&shot, &tiers), 1.0);
}

#[test]
fn test_clutch_missing_fields_default_loose() {
    let tiers = RatingProfile::default_v1().clutch_tiers;
    let mut shot = corner_shot();
    shot.period = 4;

    // No clock reads as a full period remaining.
    shot.clock_seconds = None;
    shot.score_margin = Some(1);
    assert_eq!(clutch_factor(&shot, &tiers), 1.0);

    // No margin reads as tied.
    shot.clock_seconds = Some(4.0);
    shot.score_margin = None;
    assert_eq!(clutch_factor(&shot, &tiers), 1.20);
}

#[test]
fn test_distance_zone_table_policy() {
    let policy = DistancePolicy::ZoneTable(ZoneTable([0.99, 0.99, 0.97, 1.0, 1.0]));
    let mut shot = corner_shot();
    assert_eq!(distance_factor(&shot, &policy), 1.0);
    shot.shot_type = Some("LongMidRange".to_string());
    assert_eq!(distance_factor(&shot, &policy), 0.97);
    assert_eq!(classify(&shot), Zone::LongMidRange);
}

#[test]
fn test_distance_smooth_decay_policy() {
    let policy = DistancePolicy::SmoothDecay {
        scale: 0.10,
        cap: 1.10,
    };
    let mut shot = corner_shot();

    shot.shot_distance = Some(0.0);
    assert!((distance_factor(&shot, &policy) - (1.0 + 0.10 / 3.0)).abs() < 1e-12);

    shot.shot_distance = Some(27.0);
    assert!((distance_factor(&shot, &policy) - (1.0 + 0.10 / 30.0)).abs() < 1e-12);

    // Missing distance reads as zero.
    shot.shot_distance = None;
    assert!((distance_factor(&shot, &policy) - (1.0 + 0.10 / 3.0)).abs() < 1e-12);
}
