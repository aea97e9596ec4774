//! RGBA pixel surface and the raster operations the paint tools use.

use std::f64::consts::TAU;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Opaque colour.
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white, the blank canvas colour.
    pub const WHITE: Rgb = Rgb::new(0xff, 0xff, 0xff);
    /// Pure black.
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Builds a colour from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#rrggbb` or `rrggbb`, case-insensitively.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();
        Some(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn mix(self, other: Rgb, t: f64) -> Rgb {
        let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
        Rgb::new(
            lerp(self.r, other.r),
            lerp(self.g, other.g),
            lerp(self.b, other.b),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Canvas-space pixel coordinate; may lie outside the surface.
pub struct PixelPoint {
    /// Column.
    pub x: i32,
    /// Row.
    pub y: i32,
}

impl PixelPoint {
    /// Builds a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: PixelPoint) -> f64 {
        let dx = f64::from(other.x - self.x);
        let dy = f64::from(other.y - self.y);
        (dx * dx + dy * dy).sqrt()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Fixed-size RGBA surface, row-major, four bytes per pixel.
pub struct PixelCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelCanvas {
    /// White canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * 4],
        };
        canvas.fill(Rgb::WHITE);
        canvas
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return None;
        }
        Some((y as usize * self.width as usize + x as usize) * 4)
    }

    /// Colour at a pixel, or `None` off the surface.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb> {
        let i = self.index(x, y)?;
        Some(Rgb::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Writes an opaque pixel; off-surface writes are dropped.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + 4].copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    fn blend_pixel(&mut self, x: i32, y: i32, color: Rgb, alpha: f64) {
        if let Some(under) = self.pixel(x, y) {
            self.set_pixel(x, y, under.mix(color, alpha.clamp(0.0, 1.0)));
        }
    }

    /// Paints every pixel.
    pub fn fill(&mut self, color: Rgb) {
        for pixel in self.data.chunks_exact_mut(4) {
            pixel.copy_from_slice(&[color.r, color.g, color.b, 0xff]);
        }
    }

    /// Round brush dab of diameter `size` centred on `center`.
    pub fn stamp(&mut self, center: PixelPoint, size: u32, color: Rgb) {
        let radius = f64::from(size.max(1)) / 2.0;
        let reach = radius.ceil() as i32;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let (fx, fy) = (f64::from(dx), f64::from(dy));
                if fx * fx + fy * fy <= radius * radius {
                    self.set_pixel(center.x + dx, center.y + dy, color);
                }
            }
        }
    }

    /// Straight stroke from `from` to `to`, dabbing the brush at every step.
    pub fn stroke_line(&mut self, from: PixelPoint, to: PixelPoint, size: u32, color: Rgb) {
        let (mut x, mut y) = (from.x, from.y);
        let dx = (to.x - from.x).abs();
        let dy = -(to.y - from.y).abs();
        let step_x = if from.x < to.x { 1 } else { -1 };
        let step_y = if from.y < to.y { 1 } else { -1 };
        let mut error = dx + dy;
        loop {
            self.stamp(PixelPoint::new(x, y), size, color);
            if x == to.x && y == to.y {
                break;
            }
            let doubled = 2 * error;
            if doubled >= dy {
                error += dy;
                x += step_x;
            }
            if doubled <= dx {
                error += dx;
                y += step_y;
            }
        }
    }

    /// Rectangle outline spanning two corners.
    pub fn stroke_rect(&mut self, a: PixelPoint, b: PixelPoint, size: u32, color: Rgb) {
        let top_right = PixelPoint::new(b.x, a.y);
        let bottom_left = PixelPoint::new(a.x, b.y);
        self.stroke_line(a, top_right, size, color);
        self.stroke_line(top_right, b, size, color);
        self.stroke_line(b, bottom_left, size, color);
        self.stroke_line(bottom_left, a, size, color);
    }

    /// Circle outline around `center`.
    pub fn stroke_circle(&mut self, center: PixelPoint, radius: f64, size: u32, color: Rgb) {
        let steps = (TAU * radius).ceil().max(8.0) as u32;
        let point_at = |step: u32| {
            let angle = TAU * f64::from(step) / f64::from(steps);
            PixelPoint::new(
                center.x + (radius * angle.cos()).round() as i32,
                center.y + (radius * angle.sin()).round() as i32,
            )
        };
        let mut previous = point_at(0);
        for step in 1..=steps {
            let next = point_at(step);
            self.stroke_line(previous, next, size, color);
            previous = next;
        }
    }

    /// Replaces the 4-connected region of the seed colour with `color`.
    ///
    /// Returns `false` without touching the canvas when the seed is off-surface or already
    /// `color`.
    pub fn flood_fill(&mut self, seed: PixelPoint, color: Rgb) -> bool {
        let Some(target) = self.pixel(seed.x, seed.y) else {
            return false;
        };
        if target == color {
            return false;
        }
        let mut stack = vec![seed];
        while let Some(point) = stack.pop() {
            if self.pixel(point.x, point.y) != Some(target) {
                continue;
            }
            self.set_pixel(point.x, point.y, color);
            stack.extend([
                PixelPoint::new(point.x + 1, point.y),
                PixelPoint::new(point.x - 1, point.y),
                PixelPoint::new(point.x, point.y + 1),
                PixelPoint::new(point.x, point.y - 1),
            ]);
        }
        true
    }

    /// Radial gradient from the centre through three stops at 0, 0.5, and 1 of half the width.
    pub fn fill_radial_gradient(&mut self, stops: [Rgb; 3]) {
        let center = PixelPoint::new(self.width as i32 / 2, self.height as i32 / 2);
        let reach = (f64::from(self.width) / 2.0).max(1.0);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let t = (center.distance_to(PixelPoint::new(x, y)) / reach).min(1.0);
                let color = if t <= 0.5 {
                    stops[0].mix(stops[1], t * 2.0)
                } else {
                    stops[1].mix(stops[2], (t - 0.5) * 2.0)
                };
                self.set_pixel(x, y, color);
            }
        }
    }

    /// Translucent filled disc.
    pub fn blend_disc(&mut self, center: PixelPoint, radius: f64, color: Rgb, alpha: f64) {
        let reach = radius.ceil() as i32;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                if f64::from(dx * dx + dy * dy) <= radius * radius {
                    self.blend_pixel(center.x + dx, center.y + dy, color, alpha);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const RED: Rgb = Rgb::new(0xff, 0, 0);

    #[test]
    fn hex_parsing_accepts_both_cases_and_rejects_garbage() {
        assert_eq!(Rgb::from_hex("#FF00ff"), Some(Rgb::new(255, 0, 255)));
        assert_eq!(Rgb::from_hex("008080"), Some(Rgb::new(0, 128, 128)));
        assert_eq!(Rgb::from_hex("#12345"), None);
        assert_eq!(Rgb::from_hex("#zz0000"), None);
        assert_eq!(Rgb::new(0xc0, 0xc0, 0xc0).to_hex(), "#c0c0c0");
    }

    #[test]
    fn flood_fill_stays_inside_a_closed_outline() {
        let mut canvas = PixelCanvas::new(20, 20);
        canvas.stroke_rect(PixelPoint::new(2, 2), PixelPoint::new(10, 10), 1, Rgb::BLACK);

        assert!(canvas.flood_fill(PixelPoint::new(5, 5), RED));
        assert_eq!(canvas.pixel(5, 5), Some(RED));
        assert_eq!(canvas.pixel(9, 9), Some(RED));
        assert_eq!(canvas.pixel(2, 5), Some(Rgb::BLACK));
        assert_eq!(canvas.pixel(15, 15), Some(Rgb::WHITE));
    }

    #[test]
    fn flood_fill_with_the_seed_colour_is_a_no_op() {
        let mut canvas = PixelCanvas::new(4, 4);
        let before = canvas.clone();
        assert!(!canvas.flood_fill(PixelPoint::new(1, 1), Rgb::WHITE));
        assert!(!canvas.flood_fill(PixelPoint::new(-1, 1), RED));
        assert_eq!(canvas, before);
    }

    #[test]
    fn diagonal_neighbours_do_not_leak_a_fill() {
        let mut canvas = PixelCanvas::new(3, 3);
        canvas.fill(Rgb::BLACK);
        canvas.set_pixel(0, 0, Rgb::WHITE);
        canvas.set_pixel(1, 1, Rgb::WHITE);

        canvas.flood_fill(PixelPoint::new(0, 0), RED);
        assert_eq!(canvas.pixel(0, 0), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(Rgb::WHITE));
    }

    #[test]
    fn line_reaches_both_endpoints() {
        let mut canvas = PixelCanvas::new(10, 10);
        canvas.stroke_line(PixelPoint::new(1, 8), PixelPoint::new(8, 1), 1, RED);
        assert_eq!(canvas.pixel(1, 8), Some(RED));
        assert_eq!(canvas.pixel(8, 1), Some(RED));
        assert_eq!(canvas.pixel(4, 5), Some(RED));
    }

    #[test]
    fn circle_outline_leaves_the_centre_untouched() {
        let mut canvas = PixelCanvas::new(40, 40);
        canvas.stroke_circle(PixelPoint::new(20, 20), 10.0, 1, RED);
        assert_eq!(canvas.pixel(30, 20), Some(RED));
        assert_eq!(canvas.pixel(20, 10), Some(RED));
        assert_eq!(canvas.pixel(20, 20), Some(Rgb::WHITE));
    }

    #[test]
    fn off_canvas_drawing_is_clipped() {
        let mut canvas = PixelCanvas::new(5, 5);
        canvas.stamp(PixelPoint::new(-3, -3), 4, RED);
        canvas.stroke_line(PixelPoint::new(-10, 2), PixelPoint::new(10, 2), 1, RED);
        assert_eq!(canvas.pixel(0, 2), Some(RED));
        assert_eq!(canvas.pixel(4, 2), Some(RED));
        assert_eq!(canvas.data().len(), 5 * 5 * 4);
    }
}
