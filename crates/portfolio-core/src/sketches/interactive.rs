//! Playground: colourful discs that scatter from the pointer, which leaves
//! a fading trail behind it.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::VecDeque;

use crate::color::Hsba;
use crate::constants::*;
use crate::math::{bounce, map_range, rand_range};
use crate::pointer::{repulsion, PointerState};
use crate::sketch::{Clock, Sketch};
use crate::surface::{Paint, Surface};
use crate::viewport::SurfaceFit;

#[derive(Clone, Debug)]
pub struct InteractiveConfig {
    pub circle_count: usize,
    pub trail_length: usize,
    pub trail_fade: f32,
    pub pointer_influence: f32,
    pub max_speed: f32,
}

impl Default for InteractiveConfig {
    fn default() -> Self {
        Self {
            circle_count: INTERACTIVE_CIRCLE_COUNT,
            trail_length: TRAIL_LENGTH,
            trail_fade: TRAIL_FADE,
            pointer_influence: INTERACTIVE_POINTER_INFLUENCE,
            max_speed: INTERACTIVE_MAX_SPEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bubble {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub hue: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailSegment {
    pub pos: Vec2,
    pub alpha: f32,
}

/// Bounded pointer trail, oldest segment first.
#[derive(Clone, Debug, Default)]
pub struct Trail {
    segments: VecDeque<TrailSegment>,
    max_len: usize,
    fade: f32,
}

impl Trail {
    pub fn new(max_len: usize, fade: f32) -> Self {
        Self {
            segments: VecDeque::with_capacity(max_len + 1),
            max_len,
            fade,
        }
    }

    /// Decay every segment, drop the spent ones, then append `pos` at full
    /// alpha and evict from the front past the length bound.
    pub fn advance(&mut self, pos: Option<Vec2>) {
        for s in &mut self.segments {
            s.alpha -= self.fade;
        }
        self.segments.retain(|s| s.alpha > 0.0);
        if let Some(pos) = pos {
            self.segments.push_back(TrailSegment { pos, alpha: 100.0 });
        }
        while self.segments.len() > self.max_len {
            self.segments.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailSegment> {
        self.segments.iter()
    }
}

pub struct InteractiveSketch {
    pub config: InteractiveConfig,
    pub bubbles: Vec<Bubble>,
    pub trail: Trail,
    pointer: PointerState,
    width: f32,
    height: f32,
}

impl InteractiveSketch {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(InteractiveConfig::default(), width, height, seed)
    }

    pub fn with_config(config: InteractiveConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let bubbles = (0..config.circle_count)
            .map(|_| Bubble {
                pos: Vec2::new(rand_range(&mut rng, 0.0, width), rand_range(&mut rng, 0.0, height)),
                vel: Vec2::new(
                    rand_range(&mut rng, -0.5, 0.5),
                    rand_range(&mut rng, -0.5, 0.5),
                ),
                size: rand_range(&mut rng, 25.0, 55.0),
                hue: rand_range(&mut rng, 0.0, 360.0),
            })
            .collect();
        let trail = Trail::new(config.trail_length, config.trail_fade);
        Self {
            config,
            bubbles,
            trail,
            pointer: PointerState::default(),
            width,
            height,
        }
    }

    /// Fill alpha (0..100) of a bubble at `distance` from the pointer.
    pub fn proximity_alpha(distance: f32) -> f32 {
        map_range(distance, 0.0, INTERACTIVE_PROXIMITY_RANGE, 100.0, 25.0)
    }
}

impl Sketch for InteractiveSketch {
    fn clock(&self) -> Clock {
        Clock::FrameCount
    }

    fn fit(&self) -> SurfaceFit {
        SurfaceFit::ContainerWidth {
            height: INTERACTIVE_HEIGHT,
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = PointerState::at(pos);
    }

    fn tick(&mut self, _dt_sec: f32) {
        self.trail.advance(self.pointer.pos);

        let (w, h) = (self.width, self.height);
        let radius = self.config.pointer_influence;
        let max = Vec2::splat(self.config.max_speed);
        for b in &mut self.bubbles {
            b.pos += b.vel;
            b.vel.x = bounce(b.pos.x, b.vel.x, w);
            b.vel.y = bounce(b.pos.y, b.vel.y, h);
            if let Some(m) = self.pointer.pos {
                b.vel += repulsion(m, b.pos, radius, INTERACTIVE_REPULSION_PEAK);
            }
            b.vel = b.vel.clamp(-max, max);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();

        for s in self.trail.iter() {
            let color = Hsba::new(TRAIL_HUE, 80.0, 100.0, s.alpha).to_rgba();
            surface.fill_circle(s.pos, TRAIL_POINT_SIZE / 2.0, &Paint::Solid(color));
        }

        for b in &self.bubbles {
            let alpha = self
                .pointer
                .distance_to(b.pos)
                .map_or(25.0, Self::proximity_alpha);
            let color = Hsba::new(b.hue, 75.0, 90.0, alpha).to_rgba();
            surface.fill_circle(b.pos, b.size / 2.0, &Paint::Solid(color));
        }
    }
}
