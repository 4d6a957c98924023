use crate::{
    config::CloudConfig,
    domain::cloud::{Cloud, CornerPosition, HorizontalAnchor, Placement, VerticalAnchor},
};

pub(crate) fn fixture_cloud(id: usize) -> Cloud {
    Cloud {
        id,
        width: 200.0,
        height: 100.0,
        opacity: 0.75,
        drift_duration: 4.0,
        float_duration: 4.0,
        delay: -2.0,
        float_x: 100.0,
        float_y: -20.0,
        position: CornerPosition::new(VerticalAnchor::Top(25.0), HorizontalAnchor::Left(12.5)),
        x: 240.0,
        y: 270.0,
        placement: Placement::Resolved {
            buffer: 10.0,
            attempts: 1,
        },
    }
}

pub(crate) fn small_config(count: usize) -> CloudConfig {
    CloudConfig {
        count,
        ..CloudConfig::default()
    }
}
