//! Skills strip: a drifting row of pale discs that light up and grow under
//! the pointer.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::Rgba;
use crate::constants::*;
use crate::math::{lerp, rand_range, wrap_mod};
use crate::pointer::PointerState;
use crate::sketch::{Clock, Sketch};
use crate::surface::{Paint, Surface};
use crate::viewport::SurfaceFit;

#[derive(Clone, Debug)]
pub struct SkillsConfig {
    pub circle_count: usize,
    pub spacing: f32,
    pub speed: f32,
    pub amplitude: f32,
    pub base_size: f32,
    pub hover_size: f32,
    pub hover_radius: f32,
}

impl Default for SkillsConfig {
    fn default() -> Self {
        Self {
            circle_count: SKILLS_CIRCLE_COUNT,
            spacing: SKILLS_SPACING,
            speed: SKILLS_SPEED,
            amplitude: SKILLS_AMPLITUDE,
            base_size: SKILLS_BASE_SIZE,
            hover_size: SKILLS_HOVER_SIZE,
            hover_radius: SKILLS_HOVER_RADIUS,
        }
    }
}

impl SkillsConfig {
    /// The hover zone grows with the disc.
    pub fn hovers(&self, d: f32, size: f32) -> bool {
        d < self.hover_radius + size / 2.0
    }
}

#[derive(Clone, Debug)]
pub struct SkillCircle {
    pub index: usize,
    pub pos: Vec2,
    pub base_color: Rgba,
    pub hover_color: Rgba,
    pub color: Rgba,
    pub size: f32,
}

pub struct SkillsSketch {
    pub config: SkillsConfig,
    pub circles: Vec<SkillCircle>,
    pointer: PointerState,
    width: f32,
    height: f32,
    frame: u64,
}

impl SkillsSketch {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(SkillsConfig::default(), width, height, seed)
    }

    pub fn with_config(config: SkillsConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let base = Rgba::new(255.0, 255.0, 255.0, 50.0 / 255.0);
        let circles = (0..config.circle_count)
            .map(|index| SkillCircle {
                index,
                pos: Vec2::ZERO,
                base_color: base,
                hover_color: Rgba::new(
                    rand_range(&mut rng, 100.0, 255.0),
                    rand_range(&mut rng, 150.0, 255.0),
                    rand_range(&mut rng, 200.0, 255.0),
                    230.0 / 255.0,
                ),
                color: base,
                size: config.base_size,
            })
            .collect();
        Self {
            config,
            circles,
            pointer: PointerState::default(),
            width,
            height,
            frame: 0,
        }
    }

    /// Whether a disc of `size` at distance `d` from the pointer counts as
    /// hovered.
    pub fn is_hovered(&self, d: f32, size: f32) -> bool {
        self.config.hovers(d, size)
    }
}

impl Sketch for SkillsSketch {
    fn clock(&self) -> Clock {
        Clock::FrameCount
    }

    fn fit(&self) -> SurfaceFit {
        SurfaceFit::ContainerWidth {
            height: SKILLS_HEIGHT,
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
        self.frame += 1;
        let n = self.frame as f32;
        let (w, h) = (self.width, self.height);
        let cfg = self.config.clone();
        let pointer = self.pointer;
        for c in &mut self.circles {
            let i = c.index as f32;
            c.pos = Vec2::new(
                wrap_mod(i * cfg.spacing + n * cfg.speed, w),
                (i * 0.35 + n * 0.018).sin() * cfg.amplitude + h / 2.0,
            );
            let hovered = pointer
                .distance_to(c.pos)
                .is_some_and(|d| cfg.hovers(d, c.size));
            if hovered {
                c.color = c.color.lerp(c.hover_color, SKILLS_HOVER_IN_COLOR_LERP);
                c.size = lerp(c.size, cfg.hover_size, SKILLS_HOVER_IN_SIZE_LERP);
            } else {
                c.color = c.color.lerp(c.base_color, SKILLS_HOVER_OUT_LERP);
                c.size = lerp(c.size, cfg.base_size, SKILLS_HOVER_OUT_LERP);
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        for c in &self.circles {
            surface.fill_circle(c.pos, c.size / 2.0, &Paint::Solid(c.color));
        }
    }
}
