//! In-memory raster surface.

use crate::types::Colour;

/// A square-or-rectangular pixel buffer owned by one generation call.
///
/// Drawing is write-only: nothing in the pipeline reads pixels back to make
/// decisions. All primitives clip to the surface bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    /// Pixels, row-major (`pixels[y * width + x]`).
    pixels: Vec<Colour>,

    width: u32,

    height: u32,
}

impl Surface {
    /// Create a surface cleared to `background`.
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            pixels: vec![background; width as usize * height as usize],
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Get a reference to the pixel buffer.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }

    /// Fill an axis-aligned rectangle. Parts outside the surface are dropped.
    pub fn fill_rect(&mut self, x: i64, y: i64, w: i64, h: i64, colour: Colour) {
        let x0 = x.max(0);
        let y0 = y.max(0);
        let x1 = (x + w).min(self.width as i64);
        let y1 = (y + h).min(self.height as i64);

        for py in y0..y1 {
            for px in x0..x1 {
                let i = self.index(px as u32, py as u32);
                self.pixels[i] = colour;
            }
        }
    }

    /// Fill a convex polygon.
    ///
    /// A pixel is painted when its centre lies inside the polygon or on its
    /// boundary. Polygons with no area paint nothing.
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], colour: Colour) {
        if points.len() < 3 {
            return;
        }

        let area = signed_area(points);
        if area.abs() < f64::EPSILON {
            return;
        }
        let orientation = area.signum();

        let (min_x, max_x, min_y, max_y) = points.iter().fold(
            (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
            |(min_x, max_x, min_y, max_y), &(x, y)| {
                (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
            },
        );

        let x0 = (min_x.floor() as i64).max(0);
        let y0 = (min_y.floor() as i64).max(0);
        let x1 = (max_x.ceil() as i64).min(self.width as i64);
        let y1 = (max_y.ceil() as i64).min(self.height as i64);

        for py in y0..y1 {
            let cy = py as f64 + 0.5;
            for px in x0..x1 {
                let cx = px as f64 + 0.5;
                if contains(points, orientation, cx, cy) {
                    let i = self.index(px as u32, py as u32);
                    self.pixels[i] = colour;
                }
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Shoelace area; the sign gives the winding direction.
fn signed_area(points: &[(f64, f64)]) -> f64 {
    let mut sum = 0.0;
    for (i, &(x0, y0)) in points.iter().enumerate() {
        let (x1, y1) = points[(i + 1) % points.len()];
        sum += x0 * y1 - x1 * y0;
    }
    sum / 2.0
}

fn contains(points: &[(f64, f64)], orientation: f64, x: f64, y: f64) -> bool {
    points.iter().enumerate().all(|(i, &(ax, ay))| {
        let (bx, by) = points[(i + 1) % points.len()];
        let edge = (bx - ax) * (y - ay) - (by - ay) * (x - ax);
        edge * orientation >= 0.0
    })
}
