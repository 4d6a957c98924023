use crate::{
    domain::cloud::REFERENCE_VIEWPORT,
    render::shape::CloudShape,
    scene::Scene,
};

/// Lightest to densest.
pub const SHADES: [char; 4] = ['░', '▒', '▓', '█'];

/// Character grid covering the reference viewport, one cell per terminal cell.
#[derive(Debug, Clone)]
pub struct SkyCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<char>>,
}

impl SkyCanvas {
    #[must_use]
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![' '; cols]; rows],
        }
    }

    /// Paints every cloud at its animated offset after `elapsed_secs`.
    pub fn paint_scene(&mut self, scene: &Scene, elapsed_secs: f64) {
        for ((cloud, shape), rule) in scene.shapes().zip(&scene.sheet.cloud_rules) {
            let (dx, dy) = scene
                .sheet
                .offset_at(rule, elapsed_secs, REFERENCE_VIEWPORT.width);
            self.paint_shape(&shape, (cloud.x + dx, cloud.y + dy));
        }
    }

    /// Samples the shape at each cell centre. Clouds smaller than a cell
    /// still leave a mark at their centre.
    pub fn paint_shape(&mut self, shape: &CloudShape, origin: (f64, f64)) {
        if self.cols == 0 || self.rows == 0 {
            return;
        }
        let scale_x = self.cols as f64 / REFERENCE_VIEWPORT.width;
        let scale_y = self.rows as f64 / REFERENCE_VIEWPORT.height;
        let glyph = shade_for_opacity(shape.opacity);

        let (col_start, col_end) = cell_span(origin.0, shape.width, scale_x, self.cols);
        let (row_start, row_end) = cell_span(origin.1, shape.height, scale_y, self.rows);

        let mut painted = false;
        for row in row_start..row_end {
            let local_y = (row as f64 + 0.5) / scale_y - origin.1;
            for col in col_start..col_end {
                let local_x = (col as f64 + 0.5) / scale_x - origin.0;
                if shape.contains(local_x, local_y) {
                    self.paint_cell(col, row, glyph);
                    painted = true;
                }
            }
        }

        if !painted {
            let center_x = (origin.0 + shape.width / 2.0) * scale_x;
            let center_y = (origin.1 + shape.height / 2.0) * scale_y;
            if center_x >= 0.0 && center_y >= 0.0 {
                self.paint_cell(center_x as usize, center_y as usize, glyph);
            }
        }
    }

    fn paint_cell(&mut self, col: usize, row: usize, glyph: char) {
        let Some(cell) = self.cells.get_mut(row).and_then(|line| line.get_mut(col)) else {
            return;
        };
        if density(*cell) < density(glyph) {
            *cell = glyph;
        }
    }

    #[must_use]
    pub fn cell(&self, col: usize, row: usize) -> Option<char> {
        self.cells.get(row).and_then(|line| line.get(col)).copied()
    }

    pub fn lines(&self) -> impl Iterator<Item = String> + '_ {
        self.cells.iter().map(|line| line.iter().collect())
    }
}

fn cell_span(start_px: f64, extent_px: f64, scale: f64, limit: usize) -> (usize, usize) {
    let first = (start_px * scale).floor().max(0.0);
    let last = ((start_px + extent_px) * scale).ceil().max(0.0);
    let clamp = |v: f64| (v as usize).min(limit);
    (clamp(first), clamp(last))
}

fn density(glyph: char) -> usize {
    SHADES
        .iter()
        .position(|&shade| shade == glyph)
        .map_or(0, |idx| idx + 1)
}

#[must_use]
pub fn shade_for_opacity(opacity: f64) -> char {
    if opacity >= 0.875 {
        SHADES[3]
    } else if opacity >= 0.75 {
        SHADES[2]
    } else if opacity >= 0.625 {
        SHADES[1]
    } else {
        SHADES[0]
    }
}
