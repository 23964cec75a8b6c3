//! Ambient background: a handful of large, soft, drifting blue lights.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use smallvec::smallvec;
use std::f32::consts::TAU;

use crate::color::Rgba;
use crate::constants::*;
use crate::math::{rand_range, wrap_with_margin};
use crate::sketch::{Clock, Sketch};
use crate::surface::{Composite, Paint, RadialGradient, Surface};
use crate::viewport::SurfaceFit;

#[derive(Clone, Debug)]
pub struct Light {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: [u8; 3],
    pub alpha: f32,
    pub phase: f32,
    pub flicker: f32,
}

impl Light {
    /// Peak alpha after flicker.
    pub fn intensity(&self) -> f32 {
        self.alpha * self.flicker
    }

    fn gradient(&self) -> RadialGradient {
        let c = |a: f32| Rgba::from_rgb(self.color, a);
        let i = self.intensity();
        RadialGradient {
            center: self.pos,
            radius: self.radius,
            stops: smallvec![
                (0.0, c(i)),
                (0.25, c(i * 0.7)),
                (0.6, c(i * 0.22)),
                (1.0, c(0.0)),
            ],
        }
    }
}

pub struct AmbientBackground {
    pub lights: Vec<Light>,
    width: f32,
    height: f32,
    rng: StdRng,
}

impl AmbientBackground {
    /// Lights are scattered over the given viewport; radii are fixed from
    /// its width and never recomputed.
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let lights = (0..LIGHT_COUNT)
            .map(|i| Light {
                pos: Vec2::new(rand_range(&mut rng, 0.0, width), rand_range(&mut rng, 0.0, height)),
                vel: Vec2::new(
                    rand_range(&mut rng, -LIGHT_VX_MAX, LIGHT_VX_MAX),
                    rand_range(&mut rng, -LIGHT_VY_MAX, LIGHT_VY_MAX),
                ),
                radius: rand_range(
                    &mut rng,
                    width * LIGHT_RADIUS_MIN_FRAC,
                    width * LIGHT_RADIUS_MAX_FRAC,
                ),
                color: LIGHT_PALETTE[i % LIGHT_PALETTE.len()],
                alpha: rand_range(&mut rng, LIGHT_ALPHA_MIN, LIGHT_ALPHA_MAX),
                phase: rand_range(&mut rng, 0.0, TAU),
                flicker: rand_range(&mut rng, LIGHT_FLICKER_INIT_MIN, LIGHT_FLICKER_INIT_MAX),
            })
            .collect();
        log::debug!("[background] {} lights over {}x{}", LIGHT_COUNT, width, height);
        Self {
            lights,
            width,
            height,
            rng,
        }
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

impl Sketch for AmbientBackground {
    fn clock(&self) -> Clock {
        Clock::WallTime
    }

    fn fit(&self) -> SurfaceFit {
        SurfaceFit::Viewport
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn tick(&mut self, dt_sec: f32) {
        let dt = dt_sec.max(0.0);
        let steps = dt * LIGHT_REFERENCE_FPS;
        let (w, h) = (self.width, self.height);
        for l in &mut self.lights {
            l.phase += dt * rand_range(&mut self.rng, LIGHT_PHASE_RATE_MIN, LIGHT_PHASE_RATE_MAX);
            l.pos.x += l.vel.x * (LIGHT_SPEED_X_BASE + l.phase.sin() * LIGHT_SPEED_SWING) * steps;
            l.pos.y += l.vel.y * (LIGHT_SPEED_Y_BASE + l.phase.cos() * LIGHT_SPEED_SWING) * steps;

            l.flicker += rand_range(&mut self.rng, -LIGHT_FLICKER_STEP, LIGHT_FLICKER_STEP);
            l.flicker = l.flicker.clamp(LIGHT_FLICKER_MIN, LIGHT_FLICKER_MAX);

            l.pos.x = wrap_with_margin(l.pos.x, w, l.radius);
            l.pos.y = wrap_with_margin(l.pos.y, h, l.radius);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(self.width, self.height),
            Rgba::from_rgb(BACKDROP_RGB, BACKDROP_ALPHA),
        );
        surface.set_filter(Some(BACKGROUND_FILTER));
        surface.set_composite(Composite::Lighter);
        for l in &self.lights {
            surface.fill_circle(l.pos, l.radius, &Paint::Radial(l.gradient()));
        }
        surface.set_filter(None);
        surface.set_composite(Composite::SourceOver);
    }
}
