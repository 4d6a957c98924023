use cloud_loader::{
    config::{CloudConfig, Range},
    domain::cloud::Placement,
    layout::{generate_clouds, is_position_valid},
};
use proptest::prelude::*;
use rand::{SeedableRng, rngs::StdRng};

fn config(count: usize, min_size: f64, spread: f64, min_distance: f64) -> CloudConfig {
    CloudConfig {
        count,
        min_distance,
        max_placement_attempts: 40,
        size_range: Range::new(min_size, min_size + spread),
        ..CloudConfig::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn ids_are_exactly_one_through_count(
        seed in any::<u64>(),
        count in 0usize..60,
    ) {
        let cfg = config(count, 100.0, 200.0, 10.0);
        let clouds = generate_clouds(&cfg, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(clouds.len(), count);
        let mut ids: Vec<usize> = clouds.iter().map(|c| c.id).collect();
        ids.sort_unstable();
        prop_assert_eq!(ids, (1..=count).collect::<Vec<_>>());
    }

    #[test]
    fn sizes_and_opacity_stay_in_range(
        seed in any::<u64>(),
        count in 1usize..40,
        min_size in 20.0f64..400.0,
        spread in 0.0f64..300.0,
    ) {
        let cfg = config(count, min_size, spread, 10.0);
        for cloud in generate_clouds(&cfg, &mut StdRng::seed_from_u64(seed)) {
            prop_assert!(cfg.size_range.contains(cloud.width));
            prop_assert_eq!(cloud.height, (cloud.width * 0.5).floor());
            prop_assert!(cfg.opacity_range.contains(cloud.opacity));
        }
    }

    #[test]
    fn non_fallback_clouds_never_overlap_earlier_ones(
        seed in any::<u64>(),
        count in 1usize..50,
        min_distance in 0.0f64..40.0,
    ) {
        let cfg = config(count, 100.0, 200.0, min_distance);
        let clouds = generate_clouds(&cfg, &mut StdRng::seed_from_u64(seed));
        for (idx, cloud) in clouds.iter().enumerate() {
            if cloud.placement != Placement::Fallback {
                let earlier = clouds[..idx].iter().map(|c| c.bounds());
                prop_assert!(is_position_valid(&cloud.bounds(), 0.0, earlier));
            }
        }
    }

    #[test]
    fn first_cloud_always_lands_immediately(
        seed in any::<u64>(),
        min_distance in 0.0f64..200.0,
    ) {
        let cfg = config(1, 100.0, 200.0, min_distance);
        let clouds = generate_clouds(&cfg, &mut StdRng::seed_from_u64(seed));
        prop_assert_eq!(
            clouds[0].placement,
            Placement::Resolved { buffer: min_distance, attempts: 1 }
        );
    }
}
