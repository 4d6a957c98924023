pub mod collision;
pub mod placement;

pub use collision::{Bounds, is_position_valid};
pub use placement::generate_clouds;
