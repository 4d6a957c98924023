pub mod animation;
pub mod css;
pub mod html;
pub mod shape;
pub mod svg;

pub use animation::{AnimationSheet, derive_animation_sheet};
pub use shape::{CloudShape, Ellipse, cloud_shape};

/// Formats a coordinate or percentage with at most two decimals, never `-0`.
pub(crate) fn number(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded == 0.0 {
        return "0".to_string();
    }
    format!("{rounded}")
}
