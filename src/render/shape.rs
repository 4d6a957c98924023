pub const CLOUD_FILL: &str = "white";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub cx: f64,
    pub cy: f64,
    pub rx: f64,
    pub ry: f64,
}

impl Ellipse {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if self.rx <= 0.0 || self.ry <= 0.0 {
            return false;
        }
        let dx = (x - self.cx) / self.rx;
        let dy = (y - self.cy) / self.ry;
        dx * dx + dy * dy <= 1.0
    }
}

/// Overlapping puffs in the cloud's own coordinate space (`0..width`, `0..height`).
#[derive(Debug, Clone, PartialEq)]
pub struct CloudShape {
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
    pub puffs: Vec<Ellipse>,
}

impl CloudShape {
    #[must_use]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.puffs.iter().any(|puff| puff.contains(x, y))
    }
}

/// Three base puffs, plus a top puff for even `index` and a shoulder puff
/// when `index` is a multiple of three.
#[must_use]
pub fn cloud_shape(width: f64, height: f64, opacity: f64, index: usize) -> CloudShape {
    let center_x = width / 2.0;
    let center_y = height * 0.65;
    let base_rx = width * 0.2;
    let base_ry = height * 0.3;

    let mut puffs = vec![
        Ellipse {
            cx: center_x - width * 0.25,
            cy: center_y,
            rx: base_rx,
            ry: base_ry * 0.8,
        },
        Ellipse {
            cx: center_x,
            cy: center_y - height * 0.1,
            rx: base_rx * 1.2,
            ry: base_ry,
        },
        Ellipse {
            cx: center_x + width * 0.25,
            cy: center_y,
            rx: base_rx,
            ry: base_ry * 0.8,
        },
    ];

    if index.is_multiple_of(2) {
        puffs.push(Ellipse {
            cx: center_x,
            cy: center_y - height * 0.4,
            rx: base_rx * 0.7,
            ry: base_ry * 0.6,
        });
    }
    if index.is_multiple_of(3) {
        puffs.push(Ellipse {
            cx: center_x + width * 0.25,
            cy: center_y - height * 0.25,
            rx: base_rx * 0.9,
            ry: base_ry * 0.8,
        });
    }

    CloudShape {
        width,
        height,
        opacity,
        puffs,
    }
}
