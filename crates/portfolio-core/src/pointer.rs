use glam::Vec2;

use crate::math::map_range;

/// Last known pointer position in surface space. `None` until the first
/// pointer event reaches the sketch.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub pos: Option<Vec2>,
}

impl PointerState {
    pub fn at(pos: Vec2) -> Self {
        Self { pos: Some(pos) }
    }

    pub fn distance_to(&self, p: Vec2) -> Option<f32> {
        self.pos.map(|m| m.distance(p))
    }
}

/// Linear proximity weight: `1` at the pointer, `0` at and beyond `radius`.
#[inline]
pub fn proximity(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || distance >= radius {
        0.0
    } else {
        (1.0 - distance / radius).max(0.0)
    }
}

/// Force pushing a body at `at` away from `pointer`.
///
/// Magnitude falls linearly from `peak` at distance zero to zero at
/// `radius`; nothing is applied at or beyond the radius. A body sitting
/// exactly on the pointer is pushed along +x.
#[inline]
pub fn repulsion(pointer: Vec2, at: Vec2, radius: f32, peak: f32) -> Vec2 {
    let d = pointer.distance(at);
    if d >= radius {
        return Vec2::ZERO;
    }
    let force = map_range(d, 0.0, radius, peak, 0.0).max(0.0);
    let delta = at - pointer;
    let angle = delta.y.atan2(delta.x);
    Vec2::from_angle(angle) * force
}

/// Strict containment used to validate presses against a surface.
#[inline]
pub fn inside_surface(p: Vec2, width: f32, height: f32) -> bool {
    p.x > 0.0 && p.x < width && p.y > 0.0 && p.y < height
}
