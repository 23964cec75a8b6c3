//! Immediate-mode 2D drawing surface used by all sketches.
//!
//! Coordinates are logical (CSS) pixels; the implementation owns the device
//! pixel ratio transform.

use crate::color::Rgba;
use glam::Vec2;
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    Lighter,
}

impl Composite {
    pub fn as_css(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::Lighter => "lighter",
        }
    }
}

/// Radial gradient from `center` (offset 0) out to `radius` (offset 1).
#[derive(Clone, Debug, PartialEq)]
pub struct RadialGradient {
    pub center: Vec2,
    pub radius: f32,
    pub stops: SmallVec<[(f32, Rgba); 4]>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Paint {
    Solid(Rgba),
    Radial(RadialGradient),
}

pub trait Surface {
    /// Erase the whole surface to transparent.
    fn clear(&mut self);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint);
    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32);
    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);
    fn set_composite(&mut self, op: Composite);
    /// CSS filter string, `None` resets to no filter.
    fn set_filter(&mut self, filter: Option<&str>);
    /// Text whose bottom-right corner sits at `anchor`.
    fn text(&mut self, text: &str, anchor: Vec2, size: f32, color: Rgba);
}

/// One recorded draw call.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCmd {
    Clear,
    FillRect { origin: Vec2, size: Vec2, color: Rgba },
    FillCircle { center: Vec2, radius: f32, paint: Paint },
    StrokeCircle { center: Vec2, radius: f32, color: Rgba, width: f32 },
    Line { from: Vec2, to: Vec2, color: Rgba, width: f32 },
    Composite(Composite),
    Filter(Option<String>),
    Text { text: String, anchor: Vec2 },
}

/// Headless surface that records every call, for host-side tests and
/// debugging draw order.
#[derive(Default, Debug)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCmd>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stroke_circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::StrokeCircle {
                center,
                radius,
                color,
                ..
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn filled_circles(&self) -> impl Iterator<Item = (Vec2, f32, &Paint)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCmd::FillCircle {
                center,
                radius,
                paint,
            } => Some((*center, *radius, paint)),
            _ => None,
        })
    }

    pub fn lines(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCmd::Line { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.commands.push(DrawCmd::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCmd::FillRect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        self.commands.push(DrawCmd::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        self.commands.push(DrawCmd::StrokeCircle {
            center,
            radius,
            color,
            width,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn set_composite(&mut self, op: Composite) {
        self.commands.push(DrawCmd::Composite(op));
    }

    fn set_filter(&mut self, filter: Option<&str>) {
        self.commands.push(DrawCmd::Filter(filter.map(str::to_owned)));
    }

    fn text(&mut self, text: &str, anchor: Vec2, _size: f32, _color: Rgba) {
        self.commands.push(DrawCmd::Text {
            text: text.to_owned(),
            anchor,
        });
    }
}
