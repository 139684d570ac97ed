use super::*;
use crate::model::zones::ZoneTable;

fn neutral_shot() -> ShotEvent {
    ShotEvent {
        game_id: "g1".to_string(),
        game_date: None,
        period: 2,
        clock_seconds: Some(300.0),
        player: Some("Shooter".to_string()),
        player_id: 1,
        team: "BOS".to_string(),
        opponent: "NYK".to_string(),
        assisted: true,
        assist_player: Some("Passer".to_string()),
        assist_player_id: Some(2),
        shot_type: Some("Corner3".to_string()),
        shot_distance: Some(22.1),
        shot_quality: Some(0.388),
        made: true,
        score_margin: Some(0),
        x: Some(22.5),
        y: None,
    }
}

fn average_skill() -> SkillProfile {
    SkillProfile {
        skill: ZoneTable::splat(1.0),
        attempts: [100; Zone::COUNT],
        makes: [40; Zone::COUNT],
        total_attempts: 500,
    }
}

#[test]
fn test_all_neutral_factors_compose_to_exactly_one() {
    // Corner three at the baseline shot quality, neutral opponent, second
    // period, league-average shooter: every factor is 1.0 and the product
    // is exactly 1.0 (the v1 distance table is flat at 1.0 for threes).
    let profile = RatingProfile::default_v1();
    let b = compute_breakdown(&neutral_shot(), &average_skill(), 0.0, &profile).unwrap();
    assert_eq!(b.zone, Zone::Corner3);
    assert_eq!(b.creation, 1.0);
    assert_eq!(b.skill, 1.0);
    assert_eq!(b.defense, 1.0);
    assert_eq!(b.clutch, 1.0);
    assert_eq!(b.distance, 1.0);
    assert_eq!(b.raw, 1.0);
}

#[test]
fn test_raw_is_product_of_factors() {
    let profile = RatingProfile::default_v1();
    let mut shot = neutral_shot();
    shot.shot_quality = Some(0.45);
    shot.period = 4;
    shot.clock_seconds = Some(8.0);
    shot.score_margin = Some(-2);

    let b = compute_breakdown(&shot, &average_skill(), -3.0, &profile).unwrap();
    let product = b.creation * b.skill * b.defense * b.clutch * b.distance;
    assert!((b.raw - product).abs() < 1e-12);
    assert_eq!(b.clutch, 1.15);
    assert!(b.raw > 1.0);
}

#[test]
fn test_compute_raw_matches_breakdown() {
    let profile = RatingProfile::default_v1();
    let shot = neutral_shot();
    let skill = average_skill();
    let raw = compute_raw(&shot, &skill, 0.0, &profile).unwrap();
    let b = compute_breakdown(&shot, &skill, 0.0, &profile).unwrap();
    assert_eq!(raw, b.raw);
}

#[test]
fn test_missing_quality_propagates() {
    let profile = RatingProfile::default_v1();
    let mut shot = neutral_shot();
    shot.shot_quality = None;
    assert!(matches!(
        compute_raw(&shot, &average_skill(), 0.0, &profile),
        Err(AqrError::Validation(_))
    ));
}
