use super::*;
use crate::{domain::cloud::REFERENCE_VIEWPORT, test_support::fixture_cloud};

const VW: f64 = REFERENCE_VIEWPORT.width;

#[test]
fn empty_scene_keeps_only_shared_drift() {
    let sheet = derive_animation_sheet(&[]);
    assert_eq!(sheet.keyframes.len(), 1);
    assert_eq!(sheet.keyframes[0].name, "drift");
    assert!(sheet.cloud_rules.is_empty());
    assert_eq!(sheet.base_rule.class, "cloud");
}

#[test]
fn every_cloud_gets_float_keyframes_and_rule() {
    let clouds = vec![fixture_cloud(3), fixture_cloud(1)];
    let sheet = derive_animation_sheet(&clouds);

    let names: Vec<&str> = sheet.keyframes.iter().map(|k| k.name.as_str()).collect();
    assert_eq!(names, vec!["drift", "float3", "float1"]);

    let rule = sheet.rule_for(1).expect("rule for cloud 1");
    assert_eq!(rule.class, "cloud-1");
    assert_eq!(rule.delay_secs, Some(-2.0));
    assert_eq!(rule.animations[0].keyframes, "drift");
    assert_eq!(rule.animations[1].keyframes, "float1");
    assert_eq!(rule.animations[1].timing, TimingFunction::EaseInOut);
    assert!(sheet.rule_for(2).is_none());
}

#[test]
fn float_peaks_halfway_and_rests_at_ends() {
    let keyframes = float_keyframes(&fixture_cloud(1));
    assert_eq!(keyframes.sample(0.0, VW), (0.0, 0.0));
    assert_eq!(keyframes.sample(0.5, VW), (100.0, -20.0));
    assert_eq!(keyframes.sample(0.25, VW), (50.0, -10.0));
    assert_eq!(keyframes.sample(1.0, VW), (0.0, 0.0));
}

#[test]
fn drift_spans_past_both_edges() {
    let keyframes = drift_keyframes();
    assert_eq!(keyframes.sample(0.0, VW), (-100.0, 0.0));
    assert_eq!(keyframes.sample(0.5, VW), (1160.0, 0.0));
    assert_eq!(keyframes.sample(1.0, VW), (2420.0, 0.0));
}

#[test]
fn float_duration_is_kept_to_one_decimal() {
    let mut cloud = fixture_cloud(1);
    cloud.float_duration = 4.26;
    let rule = cloud_rule(&cloud);
    assert_eq!(rule.animations[1].duration_secs, 4.3);
    assert_eq!(rule.animations[0].duration_secs, 4.0);
}

#[test]
fn negative_delay_starts_mid_cycle() {
    let clouds = vec![fixture_cloud(1)];
    let sheet = derive_animation_sheet(&clouds);
    let rule = &sheet.cloud_rules[0];
    // Two seconds into both four-second cycles: drift halfway, float at its peak.
    assert_eq!(sheet.offset_at(rule, 0.0, VW), (1260.0, -20.0));
}

#[test]
fn positive_delay_holds_still_until_start() {
    let mut cloud = fixture_cloud(1);
    cloud.delay = 3.0;
    let sheet = derive_animation_sheet(std::slice::from_ref(&cloud));
    let rule = &sheet.cloud_rules[0];
    assert_eq!(sheet.offset_at(rule, 1.0, VW), (0.0, 0.0));
    assert_ne!(sheet.offset_at(rule, 4.0, VW), (0.0, 0.0));
}

#[test]
fn ease_in_out_is_symmetric() {
    let ease = TimingFunction::EaseInOut;
    assert_eq!(ease.apply(0.0), 0.0);
    assert_eq!(ease.apply(0.5), 0.5);
    assert_eq!(ease.apply(1.0), 1.0);
    assert!((ease.apply(0.25) + ease.apply(0.75) - 1.0).abs() < 1e-12);
    assert_eq!(TimingFunction::Linear.css_name(), "linear");
    assert_eq!(ease.css_name(), "ease-in-out");
}
