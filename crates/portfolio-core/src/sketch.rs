use glam::Vec2;

use crate::surface::Surface;
use crate::viewport::SurfaceFit;

/// How a render loop turns a frame callback into motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clock {
    /// Motion scaled by the measured elapsed time.
    WallTime,
    /// One fixed logical step per frame callback, whatever the elapsed time.
    FrameCount,
}

/// One animation bound to its own surface.
///
/// The render loop calls [`Sketch::tick`] then [`Sketch::draw`] once per
/// display frame. Pointer events arrive between frames in surface space.
pub trait Sketch {
    fn clock(&self) -> Clock;

    fn fit(&self) -> SurfaceFit;

    /// Surface size changed. Entities keep their creation-time sizes.
    fn resize(&mut self, width: f32, height: f32);

    fn pointer_moved(&mut self, _pos: Vec2) {}

    /// Returns whether the press produced anything.
    fn pointer_pressed(&mut self, _pos: Vec2) -> bool {
        false
    }

    /// Advance the simulation. `dt_sec` is ignored by frame-counted sketches.
    fn tick(&mut self, dt_sec: f32);

    fn draw(&self, surface: &mut dyn Surface);
}
