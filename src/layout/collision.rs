/// Axis-aligned box in reference-viewport pixels, origin at the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// True when `self` intersects `other` grown by `buffer` on every side.
    /// Edges that merely touch do not count.
    #[must_use]
    pub fn overlaps(&self, other: &Bounds, buffer: f64) -> bool {
        self.x < other.right() + buffer
            && self.right() > other.x - buffer
            && self.y < other.bottom() + buffer
            && self.bottom() > other.y - buffer
    }
}

/// False iff `candidate` overlaps any of `existing` expanded by `buffer`.
pub fn is_position_valid<I>(candidate: &Bounds, buffer: f64, existing: I) -> bool
where
    I: IntoIterator<Item = Bounds>,
{
    existing
        .into_iter()
        .all(|placed| !candidate.overlaps(&placed, buffer))
}
