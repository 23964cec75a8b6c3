//! Hero banner: a swaying band of glowing discs that swell when a click
//! ripple passes through them.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::color::Hsba;
use crate::constants::*;
use crate::math::{lerp, map_range, rand_range, wrap_mod};
use crate::pointer::inside_surface;
use crate::sketch::{Clock, Sketch};
use crate::surface::{Paint, Surface};
use crate::viewport::SurfaceFit;

#[derive(Clone, Debug)]
pub struct HeroConfig {
    pub particle_count: usize,
    pub first_visible: usize,
    pub spacing: f32,
    pub drift_speed: f32,
    pub sway: f32,
    pub base_size: f32,
    pub wave_expansion: f32,
    pub wave_fade: f32,
    pub wave_influence: f32,
    pub wave_scale_effect: f32,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            particle_count: HERO_PARTICLE_COUNT,
            first_visible: HERO_FIRST_VISIBLE,
            spacing: HERO_SPACING,
            drift_speed: HERO_DRIFT_SPEED,
            sway: HERO_SWAY,
            base_size: HERO_BASE_SIZE,
            wave_expansion: WAVE_EXPANSION_SPEED,
            wave_fade: WAVE_FADE_SPEED,
            wave_influence: WAVE_INFLUENCE_RADIUS,
            wave_scale_effect: WAVE_SCALE_EFFECT,
        }
    }
}

#[derive(Clone, Debug)]
pub struct HeroParticle {
    pub index: usize,
    pub pos: Vec2,
    pub scale: f32,
    pub rotation: f32,
    pub hue: f32,
}

/// Expanding click ripple. Removed once `alpha` reaches zero.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    pub origin: Vec2,
    pub radius: f32,
    pub alpha: f32,
}

impl Wave {
    pub fn spawn(origin: Vec2) -> Self {
        Self {
            origin,
            radius: 0.0,
            alpha: WAVE_MAX_ALPHA,
        }
    }

    /// Weight in `[0, 1]` of this wave on a point at `distance` from its
    /// origin: non-zero only inside the ring band trailing the wavefront.
    pub fn influence(&self, distance: f32, band: f32) -> f32 {
        let inner = self.radius - band;
        if distance < self.radius && distance > inner {
            map_range(distance, inner, self.radius, 1.0, 0.0)
                * map_range(self.alpha, 0.0, WAVE_MAX_ALPHA, 0.0, 1.0)
        } else {
            0.0
        }
    }
}

pub struct HeroSketch {
    pub config: HeroConfig,
    pub particles: Vec<HeroParticle>,
    pub waves: Vec<Wave>,
    width: f32,
    height: f32,
    frame: u64,
}

impl HeroSketch {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(HeroConfig::default(), width, height, seed)
    }

    pub fn with_config(config: HeroConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let particles = (0..config.particle_count)
            .map(|index| HeroParticle {
                index,
                pos: Vec2::ZERO,
                scale: 1.0,
                rotation: 0.0,
                hue: rand_range(&mut rng, HERO_HUE_MIN, HERO_HUE_MAX),
            })
            .collect();
        Self {
            config,
            particles,
            waves: Vec::new(),
            width,
            height,
            frame: 0,
        }
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    fn visible(&self) -> impl Iterator<Item = &HeroParticle> {
        self.particles.iter().skip(self.config.first_visible)
    }

    fn color_shift(&self, index: usize) -> f32 {
        (self.frame as f32 * 0.02 + index as f32 * 0.5).sin() * 30.0
    }

    fn advance_waves(&mut self) {
        let (grow, fade) = (self.config.wave_expansion, self.config.wave_fade);
        for w in &mut self.waves {
            w.radius += grow;
            w.alpha -= fade;
        }
        self.waves.retain(|w| w.alpha > 0.0);
    }
}

impl Sketch for HeroSketch {
    fn clock(&self) -> Clock {
        Clock::FrameCount
    }

    fn fit(&self) -> SurfaceFit {
        SurfaceFit::WindowWidth {
            height: HERO_HEIGHT,
        }
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    fn pointer_pressed(&mut self, pos: Vec2) -> bool {
        if !inside_surface(pos, self.width, self.height) {
            return false;
        }
        self.waves.push(Wave::spawn(pos));
        true
    }

    fn tick(&mut self, _dt_sec: f32) {
        self.frame += 1;
        self.advance_waves();

        let n = self.frame as f32;
        let cfg = &self.config;
        let (w, h) = (self.width, self.height);
        for p in self.particles.iter_mut().skip(cfg.first_visible) {
            let i = p.index as f32;
            let x = wrap_mod(i * cfg.spacing + n * cfg.drift_speed, w);
            let y = (i * 0.3 + n * 0.015).sin() * cfg.sway + h / 2.0;
            p.pos = Vec2::new(x, y);

            let mut target_scale = 1.0;
            let mut target_rotation = 0.0;
            for wave in &self.waves {
                let infl = wave.influence(wave.origin.distance(p.pos), cfg.wave_influence);
                target_scale += infl * cfg.wave_scale_effect;
                target_rotation += infl * WAVE_ROTATION_EFFECT;
            }
            p.scale = lerp(p.scale, target_scale, HERO_SCALE_LERP);
            p.rotation = lerp(p.rotation, target_rotation, HERO_ROTATION_LERP);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();

        for w in self.waves.iter().filter(|w| w.alpha > 0.0) {
            let color = Hsba::new(200.0, 100.0, 100.0, w.alpha).to_rgba();
            surface.stroke_circle(w.origin, w.radius, color, WAVE_STROKE_WIDTH);
        }

        for p in self.visible() {
            let hue = (p.hue + self.color_shift(p.index)).rem_euclid(360.0);
            let size = self.config.base_size * p.scale;
            let outer = Hsba::new(hue, 80.0, 95.0, 35.0).to_rgba();
            let core = Hsba::new(hue, 60.0, 100.0, 80.0).to_rgba();
            surface.fill_circle(p.pos, (size / 2.0).abs(), &Paint::Solid(outer));
            surface.fill_circle(p.pos, (size * HERO_CORE_RATIO / 2.0).abs(), &Paint::Solid(core));
        }
    }
}
