//! Tool state, stroke tracking, and undo history for one paint window.

use std::collections::VecDeque;

use crate::canvas::{PixelCanvas, PixelPoint, Rgb};

/// Drawing surface width.
pub const CANVAS_WIDTH: u32 = 800;
/// Drawing surface height.
pub const CANVAS_HEIGHT: u32 = 600;
/// Snapshots kept for undo, the current state included.
pub const HISTORY_LIMIT: usize = 10;
/// Brush size bounds.
pub const BRUSH_SIZE_RANGE: (u32, u32) = (1, 20);

/// Palette offered under the toolbar.
pub const PALETTE: [&str; 16] = [
    "#000000", "#FFFFFF", "#FF0000", "#00FF00", "#0000FF", "#FFFF00", "#FF00FF", "#00FFFF",
    "#800000", "#008000", "#000080", "#808000", "#800080", "#008080", "#C0C0C0", "#808080",
];

const WATER_STOPS: [Rgb; 3] = [
    Rgb::new(0x4a, 0x90, 0xe2),
    Rgb::new(0x7e, 0xd3, 0xf7),
    Rgb::new(0xb8, 0xe6, 0xb8),
];
const DREAM_STOPS: [Rgb; 3] = [
    Rgb::new(0xff, 0x6b, 0x9d),
    Rgb::new(0x4e, 0xcd, 0xc4),
    Rgb::new(0x45, 0xb7, 0xd1),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Paint tools.
pub enum Tool {
    /// Freehand stroke in the current colour.
    #[default]
    Brush,
    /// Freehand stroke back to white.
    Eraser,
    /// Straight line from press to release.
    Line,
    /// Rectangle outline from press to release.
    Rectangle,
    /// Circle outline centred on the press point.
    Circle,
    /// Flood fill.
    Fill,
    /// Picks the colour under the pointer.
    Eyedropper,
}

impl Tool {
    /// Toolbar order.
    pub const ALL: [Tool; 7] = [
        Tool::Brush,
        Tool::Eraser,
        Tool::Line,
        Tool::Rectangle,
        Tool::Circle,
        Tool::Fill,
        Tool::Eyedropper,
    ];

    /// Toolbar label.
    pub const fn label(self) -> &'static str {
        match self {
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Line => "Line",
            Tool::Rectangle => "Rect",
            Tool::Circle => "Circle",
            Tool::Fill => "Fill",
            Tool::Eyedropper => "Pick",
        }
    }
}

/// Source of `[0, 1)` samples for procedural art.
pub trait UnitRandom {
    /// Next sample.
    fn next_unit(&mut self) -> f64;
}

#[derive(Debug, Clone)]
/// Small xorshift generator; good enough for scattering dream bubbles.
pub struct XorShift(u64);

impl XorShift {
    /// Seeds the generator; a zero seed is replaced.
    pub fn new(seed: u64) -> Self {
        Self(if seed == 0 { 0x9e37_79b9_7f4a_7c15 } else { seed })
    }
}

impl UnitRandom for XorShift {
    fn next_unit(&mut self) -> f64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
}

#[derive(Debug, Clone, Copy)]
struct Stroke {
    start: PixelPoint,
    last: PixelPoint,
}

#[derive(Debug, Clone)]
/// Canvas plus tool settings and history.
pub struct PaintSession {
    canvas: PixelCanvas,
    history: VecDeque<PixelCanvas>,
    tool: Tool,
    color: Rgb,
    brush_size: u32,
    stroke: Option<Stroke>,
}

impl Default for PaintSession {
    fn default() -> Self {
        Self::new(CANVAS_WIDTH, CANVAS_HEIGHT)
    }
}

impl PaintSession {
    /// Blank white session; the blank state is the first history entry.
    pub fn new(width: u32, height: u32) -> Self {
        let canvas = PixelCanvas::new(width, height);
        Self {
            history: VecDeque::from([canvas.clone()]),
            canvas,
            tool: Tool::Brush,
            color: Rgb::BLACK,
            brush_size: 2,
            stroke: None,
        }
    }

    /// Current surface.
    pub fn canvas(&self) -> &PixelCanvas {
        &self.canvas
    }

    /// Active tool.
    pub fn tool(&self) -> Tool {
        self.tool
    }

    /// Active colour.
    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Brush and outline width.
    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    /// Number of undo snapshots held.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Switches tool, abandoning any half-drawn shape.
    pub fn select_tool(&mut self, tool: Tool) {
        self.tool = tool;
        self.stroke = None;
    }

    /// Sets the active colour.
    pub fn select_color(&mut self, color: Rgb) {
        self.color = color;
    }

    /// Sets the brush size, clamped to [`BRUSH_SIZE_RANGE`].
    pub fn set_brush_size(&mut self, size: u32) {
        self.brush_size = size.clamp(BRUSH_SIZE_RANGE.0, BRUSH_SIZE_RANGE.1);
    }

    fn stroke_color(&self) -> Rgb {
        match self.tool {
            Tool::Eraser => Rgb::WHITE,
            _ => self.color,
        }
    }

    fn commit(&mut self) {
        self.history.push_back(self.canvas.clone());
        while self.history.len() > HISTORY_LIMIT {
            self.history.pop_front();
        }
    }

    /// Pointer pressed on the canvas. Returns whether the surface changed.
    pub fn press(&mut self, at: PixelPoint) -> bool {
        match self.tool {
            Tool::Brush | Tool::Eraser => {
                self.stroke = Some(Stroke { start: at, last: at });
                self.canvas.stamp(at, self.brush_size, self.stroke_color());
                true
            }
            Tool::Line | Tool::Rectangle | Tool::Circle => {
                self.stroke = Some(Stroke { start: at, last: at });
                false
            }
            Tool::Fill => {
                let filled = self.canvas.flood_fill(at, self.color);
                if filled {
                    self.commit();
                }
                filled
            }
            Tool::Eyedropper => {
                if let Some(color) = self.canvas.pixel(at.x, at.y) {
                    self.color = color;
                }
                false
            }
        }
    }

    /// Pointer moved with the button held. Returns whether the surface changed.
    pub fn drag(&mut self, to: PixelPoint) -> bool {
        let Some(stroke) = self.stroke.as_mut() else {
            return false;
        };
        let from = stroke.last;
        stroke.last = to;
        if !matches!(self.tool, Tool::Brush | Tool::Eraser) {
            return false;
        }
        let color = self.stroke_color();
        self.canvas.stroke_line(from, to, self.brush_size, color);
        true
    }

    /// Pointer released or left the canvas. Finishes the stroke or shape and records history.
    pub fn release(&mut self, at: PixelPoint) -> bool {
        let Some(stroke) = self.stroke.take() else {
            return false;
        };
        let (size, color) = (self.brush_size, self.stroke_color());
        match self.tool {
            Tool::Brush | Tool::Eraser => self.canvas.stroke_line(stroke.last, at, size, color),
            Tool::Line => self.canvas.stroke_line(stroke.start, at, size, color),
            Tool::Rectangle => self.canvas.stroke_rect(stroke.start, at, size, color),
            Tool::Circle => {
                let radius = stroke.start.distance_to(at);
                self.canvas.stroke_circle(stroke.start, radius, size, color);
            }
            Tool::Fill | Tool::Eyedropper => return false,
        }
        self.commit();
        true
    }

    /// Steps back one snapshot; the oldest snapshot is never dropped.
    pub fn undo(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop_back();
        if let Some(previous) = self.history.back() {
            self.canvas = previous.clone();
        }
        self.stroke = None;
        true
    }

    /// Paints the canvas white and records it.
    pub fn clear(&mut self) {
        self.canvas.fill(Rgb::WHITE);
        self.stroke = None;
        self.commit();
    }

    /// Procedural dreamscape themed on a dream's symbols.
    ///
    /// Water dreams get a blue palette; the bubble count scales with the symbol count.
    pub fn generate_dreamscape(&mut self, symbols: &[String], rng: &mut impl UnitRandom) {
        let stops = if symbols.iter().any(|symbol| symbol == "water") {
            WATER_STOPS
        } else {
            DREAM_STOPS
        };
        self.canvas.fill_radial_gradient(stops);

        let symbol_count = if symbols.is_empty() { 5 } else { symbols.len() };
        let (width, height) = (f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        for _ in 0..symbol_count * 4 {
            let center = PixelPoint::new(
                (rng.next_unit() * width) as i32,
                (rng.next_unit() * height) as i32,
            );
            let radius = rng.next_unit() * 30.0 + 5.0;
            let alpha = rng.next_unit() * 0.3 + 0.1;
            self.canvas.blend_disc(center, radius, Rgb::WHITE, alpha);
        }
        self.stroke = None;
        self.commit();
    }
}
