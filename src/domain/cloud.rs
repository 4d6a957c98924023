use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::layout::Bounds;

/// Percentages are resolved against this viewport regardless of the actual
/// display size, so on-screen spacing is only approximate elsewhere.
pub const REFERENCE_VIEWPORT: Viewport = Viewport {
    width: 1920.0,
    height: 1080.0,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAnchor {
    Top(f64),
    Bottom(f64),
}

impl VerticalAnchor {
    #[must_use]
    pub fn percent(self) -> f64 {
        match self {
            Self::Top(p) | Self::Bottom(p) => p,
        }
    }

    #[must_use]
    pub fn css_property(self) -> &'static str {
        match self {
            Self::Top(_) => "top",
            Self::Bottom(_) => "bottom",
        }
    }

    fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Top(p) => p / 100.0 * extent,
            Self::Bottom(p) => extent - p / 100.0 * extent,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left(f64),
    Right(f64),
}

impl HorizontalAnchor {
    #[must_use]
    pub fn percent(self) -> f64 {
        match self {
            Self::Left(p) | Self::Right(p) => p,
        }
    }

    #[must_use]
    pub fn css_property(self) -> &'static str {
        match self {
            Self::Left(_) => "left",
            Self::Right(_) => "right",
        }
    }

    fn resolve(self, extent: f64) -> f64 {
        match self {
            Self::Left(p) => p / 100.0 * extent,
            Self::Right(p) => extent - p / 100.0 * extent,
        }
    }
}

/// A cloud anchored to one of the four viewport corners by a percentage pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CornerPosition {
    #[serde(flatten)]
    pub vertical: VerticalAnchor,
    #[serde(flatten)]
    pub horizontal: HorizontalAnchor,
}

impl CornerPosition {
    #[must_use]
    pub const fn new(vertical: VerticalAnchor, horizontal: HorizontalAnchor) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Coin flips pick the anchors, percentages are uniform in `[0, 100)`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let use_top = rng.random_bool(0.5);
        let use_left = rng.random_bool(0.5);
        let vertical = if use_top {
            VerticalAnchor::Top(random_percent(rng))
        } else {
            VerticalAnchor::Bottom(random_percent(rng))
        };
        let horizontal = if use_left {
            HorizontalAnchor::Left(random_percent(rng))
        } else {
            HorizontalAnchor::Right(random_percent(rng))
        };
        Self::new(vertical, horizontal)
    }

    pub fn random_top_left<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let top = random_percent(rng);
        let left = random_percent(rng);
        Self::new(VerticalAnchor::Top(top), HorizontalAnchor::Left(left))
    }

    /// Treats the anchored percentage as the box origin on both axes, also for
    /// `right`/`bottom` anchors.
    #[must_use]
    pub fn to_pixels(&self, viewport: Viewport) -> (f64, f64) {
        (
            self.horizontal.resolve(viewport.width),
            self.vertical.resolve(viewport.height),
        )
    }
}

fn random_percent<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.random::<f64>() * 100.0
}

/// Hand-written position as it appears in config files. `top` wins over
/// `bottom` and `left` over `right`; a missing axis anchors at 0%.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right: Option<f64>,
}

impl From<PositionSpec> for CornerPosition {
    fn from(spec: PositionSpec) -> Self {
        let vertical = spec
            .top
            .map(VerticalAnchor::Top)
            .or(spec.bottom.map(VerticalAnchor::Bottom))
            .unwrap_or(VerticalAnchor::Top(0.0));
        let horizontal = spec
            .left
            .map(HorizontalAnchor::Left)
            .or(spec.right.map(HorizontalAnchor::Right))
            .unwrap_or(HorizontalAnchor::Left(0.0));
        Self::new(vertical, horizontal)
    }
}

/// How a cloud's position was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Placement {
    /// Passed the collision test at `buffer` on attempt `attempts` of that pass.
    Resolved { buffer: f64, attempts: u32 },
    /// Taken from the configured table (or its stand-in) without testing.
    Explicit,
    /// Every pass was exhausted; the position may overlap.
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Cloud {
    pub id: usize,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub drift_duration: f64,
    pub float_duration: f64,
    pub delay: f64,
    pub float_x: f64,
    pub float_y: f64,
    pub position: CornerPosition,
    pub x: f64,
    pub y: f64,
    pub placement: Placement,
}

impl Cloud {
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.x, self.y, self.width, self.height)
    }

    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.placement == Placement::Fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_and_top_measure_from_origin() {
        let pos = CornerPosition::new(VerticalAnchor::Top(50.0), HorizontalAnchor::Left(25.0));
        assert_eq!(pos.to_pixels(REFERENCE_VIEWPORT), (480.0, 540.0));
    }

    #[test]
    fn right_and_bottom_measure_from_far_edge() {
        let pos = CornerPosition::new(
            VerticalAnchor::Bottom(10.0),
            HorizontalAnchor::Right(10.0),
        );
        assert_eq!(pos.to_pixels(REFERENCE_VIEWPORT), (1728.0, 972.0));
    }

    #[test]
    fn position_prefers_top_and_left() {
        let spec = PositionSpec {
            top: Some(20.0),
            bottom: Some(70.0),
            left: None,
            right: Some(5.0),
        };
        let pos = CornerPosition::from(spec);
        assert_eq!(pos.vertical, VerticalAnchor::Top(20.0));
        assert_eq!(pos.horizontal, HorizontalAnchor::Right(5.0));
    }

    #[test]
    fn empty_spec_anchors_top_left_corner() {
        let pos = CornerPosition::from(PositionSpec::default());
        assert_eq!(pos.to_pixels(REFERENCE_VIEWPORT), (0.0, 0.0));
    }

    #[test]
    fn position_serializes_as_css_like_pair() {
        let pos = CornerPosition::new(VerticalAnchor::Bottom(12.5), HorizontalAnchor::Left(3.0));
        let json = serde_json::to_value(pos).expect("serialize");
        assert_eq!(json, serde_json::json!({ "bottom": 12.5, "left": 3.0 }));
    }

    #[test]
    fn placement_serializes_with_kind_tag() {
        let json = serde_json::to_value(Placement::Resolved {
            buffer: 5.0,
            attempts: 2,
        })
        .expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "kind": "resolved", "buffer": 5.0, "attempts": 2 })
        );
        let json = serde_json::to_value(Placement::Fallback).expect("serialize");
        assert_eq!(json, serde_json::json!({ "kind": "fallback" }));
    }
}
