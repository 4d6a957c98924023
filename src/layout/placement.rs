use log::debug;
use rand::Rng;

use crate::{
    config::{CloudConfig, Range},
    domain::cloud::{Cloud, CornerPosition, Placement, REFERENCE_VIEWPORT},
    layout::collision::{Bounds, is_position_valid},
};

#[derive(Debug, Clone, Copy)]
struct SizedCloud {
    index: usize,
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    opacity: f64,
    drift_duration: f64,
    float_duration: f64,
    delay: f64,
    float_x: f64,
    float_y: f64,
}

/// Produces exactly `config.count` clouds, largest first, with ids `1..=count`
/// assigned in pre-sort order.
///
/// Never fails: when no free spot turns up within the attempt budget the
/// cloud is dropped at an unconstrained position instead.
pub fn generate_clouds<R: Rng + ?Sized>(config: &CloudConfig, rng: &mut R) -> Vec<Cloud> {
    let mut pending = presize(config, rng);
    pending.sort_by(|a, b| b.width.total_cmp(&a.width));

    let mut clouds: Vec<Cloud> = Vec::with_capacity(pending.len());
    for sized in pending {
        let motion = sample_motion(config, rng);
        let (position, placement) = resolve_position(config, sized, &clouds, rng);
        let (x, y) = position.to_pixels(REFERENCE_VIEWPORT);

        if placement == Placement::Fallback {
            debug!(
                "cloud {} ({}x{}) found no free spot, using fallback position",
                sized.index + 1,
                sized.width,
                sized.height
            );
        }

        clouds.push(Cloud {
            id: sized.index + 1,
            width: sized.width,
            height: sized.height,
            opacity: motion.opacity,
            drift_duration: motion.drift_duration,
            float_duration: motion.float_duration,
            delay: motion.delay,
            float_x: motion.float_x,
            float_y: motion.float_y,
            position,
            x,
            y,
            placement,
        });
    }

    debug!(
        "generated {} clouds ({} fallback)",
        clouds.len(),
        clouds.iter().filter(|c| c.is_fallback()).count()
    );
    clouds
}

fn presize<R: Rng + ?Sized>(config: &CloudConfig, rng: &mut R) -> Vec<SizedCloud> {
    (0..config.count)
        .map(|index| {
            let width = whole_width(&config.size_range, config.size_range.sample(rng));
            SizedCloud {
                index,
                width,
                height: (width * 0.5).floor(),
            }
        })
        .collect()
}

/// Floors the sampled width, lifting it back to the smallest whole width
/// inside the range when flooring drops below `min`. A range with no whole
/// number in it keeps `min` as is.
fn whole_width(range: &Range, sampled: f64) -> f64 {
    let floored = sampled.floor();
    if floored >= range.min {
        return floored;
    }
    let lifted = range.min.ceil();
    if lifted <= range.max { lifted } else { range.min }
}

fn sample_motion<R: Rng + ?Sized>(config: &CloudConfig, rng: &mut R) -> Motion {
    Motion {
        opacity: config.opacity_range.sample(rng),
        drift_duration: config.drift_duration.sample(rng).floor(),
        float_duration: config.float_duration.sample(rng),
        delay: config.delay_range.sample(rng).floor(),
        float_x: config.float_offset_x.sample(rng),
        float_y: config.float_offset_y.sample(rng),
    }
}

/// Buffer passes with their attempt budgets: full distance, half, then none
/// with twice the budget.
fn buffer_schedule(config: &CloudConfig) -> [(f64, u32); 3] {
    let attempts = config.max_placement_attempts;
    let budget = |buffer: f64| {
        if buffer == 0.0 {
            attempts.saturating_mul(2)
        } else {
            attempts
        }
    };
    let full = config.min_distance;
    let half = config.min_distance / 2.0;
    [(full, budget(full)), (half, budget(half)), (0.0, budget(0.0))]
}

fn resolve_position<R: Rng + ?Sized>(
    config: &CloudConfig,
    sized: SizedCloud,
    placed: &[Cloud],
    rng: &mut R,
) -> (CornerPosition, Placement) {
    if !config.randomize {
        let position = config
            .positions
            .get(sized.index)
            .map(|spec| CornerPosition::from(*spec))
            .unwrap_or_else(|| CornerPosition::random_top_left(rng));
        return (position, Placement::Explicit);
    }

    for (buffer, budget) in buffer_schedule(config) {
        for attempt in 1..=budget {
            let position = CornerPosition::random(rng);
            let (x, y) = position.to_pixels(REFERENCE_VIEWPORT);
            let candidate = Bounds::new(x, y, sized.width, sized.height);
            if is_position_valid(&candidate, buffer, placed.iter().map(Cloud::bounds)) {
                return (
                    position,
                    Placement::Resolved {
                        buffer,
                        attempts: attempt,
                    },
                );
            }
        }
    }

    (CornerPosition::random_top_left(rng), Placement::Fallback)
}
