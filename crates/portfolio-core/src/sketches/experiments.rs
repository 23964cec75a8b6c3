//! "Cold constellation": bouncing stars joined by faint lines, nudged away
//! from the pointer and haloed when it comes close.

use glam::Vec2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{Hsba, Rgba};
use crate::constants::*;
use crate::math::{bounce, lerp, map_range, rand_range};
use crate::pointer::{proximity, repulsion, PointerState};
use crate::sketch::{Clock, Sketch};
use crate::surface::{Paint, Surface};
use crate::viewport::SurfaceFit;

#[derive(Clone, Debug)]
pub struct ExperimentsConfig {
    pub particle_count: usize,
    pub particle_size: f32,
    pub connection_dist: f32,
    pub pointer_influence: f32,
    pub max_speed: f32,
}

impl Default for ExperimentsConfig {
    fn default() -> Self {
        Self {
            particle_count: EXPERIMENTS_PARTICLE_COUNT,
            particle_size: EXPERIMENTS_PARTICLE_SIZE,
            connection_dist: EXPERIMENTS_CONNECTION_DIST,
            pointer_influence: EXPERIMENTS_POINTER_INFLUENCE,
            max_speed: EXPERIMENTS_MAX_SPEED,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Star {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color_idx: usize,
    pub size: f32,
}

/// Line between two nearby stars.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub distance: f32,
}

pub struct ExperimentsSketch {
    pub config: ExperimentsConfig,
    pub stars: Vec<Star>,
    pointer: PointerState,
    width: f32,
    height: f32,
    frame: u64,
}

impl ExperimentsSketch {
    pub fn new(width: f32, height: f32, seed: u64) -> Self {
        Self::with_config(ExperimentsConfig::default(), width, height, seed)
    }

    pub fn with_config(config: ExperimentsConfig, width: f32, height: f32, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = (0..config.particle_count)
            .map(|_| Star {
                pos: Vec2::new(rand_range(&mut rng, 0.0, width), rand_range(&mut rng, 0.0, height)),
                vel: Vec2::new(
                    rand_range(&mut rng, -0.5, 0.5),
                    rand_range(&mut rng, -0.5, 0.5),
                ),
                color_idx: rng.gen_range(0..COLD_COLORS.len()),
                size: rand_range(
                    &mut rng,
                    config.particle_size * 0.8,
                    config.particle_size * 1.2,
                ),
            })
            .collect();
        Self {
            config,
            stars,
            pointer: PointerState::default(),
            width,
            height,
            frame: 0,
        }
    }

    /// Every pair closer than the connection distance, `a < b`.
    pub fn connections(&self) -> Vec<Connection> {
        let max = self.config.connection_dist;
        let mut out = Vec::new();
        for (a, sa) in self.stars.iter().enumerate() {
            for (b, sb) in self.stars.iter().enumerate().skip(a + 1) {
                let distance = sa.pos.distance(sb.pos);
                if distance < max {
                    out.push(Connection { a, b, distance });
                }
            }
        }
        out
    }

    fn connection_color(&self, c: &Connection) -> (Rgba, f32) {
        let max = self.config.connection_dist;
        let t = map_range(c.distance, 0.0, max, 0.0, 1.0);
        let c1 = COLD_COLORS[self.stars[c.a].color_idx];
        let c2 = COLD_COLORS[self.stars[c.b].color_idx];
        let color = Hsba::new(
            lerp(c1[0], c2[0], t),
            lerp(c1[1], c2[1], t),
            lerp(c1[2], c2[2], t),
            map_range(c.distance, 0.0, max, 15.0, 0.0),
        );
        (color.to_rgba(), map_range(c.distance, 0.0, max, 2.0, 0.5))
    }
}

impl Sketch for ExperimentsSketch {
    fn clock(&self) -> Clock {
        Clock::FrameCount
    }

    fn fit(&self) -> SurfaceFit {
        SurfaceFit::ContainerWidth {
            height: EXPERIMENTS_HEIGHT,
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
        let radius = self.config.pointer_influence;
        let max_speed = self.config.max_speed;
        for s in &mut self.stars {
            s.pos += s.vel;
            s.vel.x = bounce(s.pos.x, s.vel.x, w);
            s.vel.y = bounce(s.pos.y, s.vel.y, h);

            if let Some(m) = self.pointer.pos {
                s.vel += repulsion(m, s.pos, radius, EXPERIMENTS_REPULSION_PEAK)
                    * EXPERIMENTS_REPULSION_GAIN;
            }

            s.pos.x += (n * 0.01 + s.pos.x * 0.01).sin() * 0.2;
            s.pos.y += (n * 0.012 + s.pos.y * 0.01).cos() * 0.2;

            s.vel = s.vel.clamp(Vec2::splat(-max_speed), Vec2::splat(max_speed));
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let [bh, bs, bb] = EXPERIMENTS_BACKGROUND_HSB;
        surface.fill_rect(
            Vec2::ZERO,
            Vec2::new(self.width, self.height),
            Hsba::new(bh, bs, bb, 100.0).to_rgba(),
        );

        for c in self.connections() {
            let (color, width) = self.connection_color(&c);
            surface.line(self.stars[c.a].pos, self.stars[c.b].pos, color, width);
        }

        let n = self.frame as f32;
        let halo_radius = self.config.pointer_influence * EXPERIMENTS_HALO_FRACTION;
        for (i, s) in self.stars.iter().enumerate() {
            let c = COLD_COLORS[s.color_idx];
            let pulse = map_range((n * 0.03 + i as f32).sin(), -1.0, 1.0, 0.85, 1.15);
            let fill = Hsba::from_triple(c, 80.0).to_rgba();
            surface.fill_circle(s.pos, s.size * pulse / 2.0, &Paint::Solid(fill));

            if let Some(d) = self.pointer.distance_to(s.pos) {
                let weight = proximity(d, halo_radius);
                if weight > 0.0 {
                    let halo = Hsba::new(c[0], c[1], 100.0, 60.0 * weight);
                    let diameter = s.size * 2.0 + (n * 0.2 + i as f32).sin() * 4.0;
                    surface.stroke_circle(s.pos, diameter / 2.0, halo.to_rgba(), 1.0 + 4.0 * weight);
                }
            }
        }

        surface.text(
            ":)",
            Vec2::new(self.width - 12.0, self.height - 10.0),
            10.0,
            Rgba::new(255.0, 255.0, 255.0, 1.0),
        );
    }
}
