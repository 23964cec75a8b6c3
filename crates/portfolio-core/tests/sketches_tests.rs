use glam::Vec2;
use portfolio_core::constants::*;
use portfolio_core::{
    DrawCmd, ExperimentsSketch, InteractiveSketch, RecordingSurface, SkillsSketch, Sketch, Trail,
};

// skills

#[test]
fn skills_rest_without_pointer() {
    let mut skills = SkillsSketch::new(800.0, SKILLS_HEIGHT, 1);
    for _ in 0..50 {
        skills.tick(0.0);
    }
    for c in &skills.circles {
        assert_eq!(c.size, SKILLS_BASE_SIZE);
        assert_eq!(c.color, c.base_color);
    }
}

#[test]
fn skills_hovered_circle_grows_and_recovers() {
    let mut skills = SkillsSketch::new(1200.0, SKILLS_HEIGHT, 2);
    skills.tick(0.0);
    let target = skills.circles[3].pos;
    skills.pointer_moved(target);
    for _ in 0..10 {
        skills.tick(0.0);
    }
    let grown = skills.circles[3].size;
    assert!(grown > SKILLS_BASE_SIZE && grown <= SKILLS_HOVER_SIZE);
    let (c, h) = (skills.circles[3].color, skills.circles[3].hover_color);
    assert!((c.r - h.r).abs() < 1e-3 && (c.g - h.g).abs() < 1e-3 && (c.b - h.b).abs() < 1e-3);

    skills.pointer_moved(Vec2::new(-1_000.0, -1_000.0));
    for _ in 0..100 {
        skills.tick(0.0);
    }
    assert!((skills.circles[3].size - SKILLS_BASE_SIZE).abs() < 0.1);
}

#[test]
fn skills_hover_radius_includes_disc() {
    let skills = SkillsSketch::new(800.0, SKILLS_HEIGHT, 3);
    assert!(skills.is_hovered(SKILLS_HOVER_RADIUS + 10.0, 40.0));
    assert!(!skills.is_hovered(SKILLS_HOVER_RADIUS + 20.0, 40.0));
}

// experiments

#[test]
fn experiments_connections_are_short_and_ordered() {
    let exp = ExperimentsSketch::new(900.0, EXPERIMENTS_HEIGHT, 4);
    let conns = exp.connections();
    assert!(!conns.is_empty());
    for c in conns {
        assert!(c.a < c.b);
        assert!(c.distance < EXPERIMENTS_CONNECTION_DIST);
        let d = exp.stars[c.a].pos.distance(exp.stars[c.b].pos);
        assert!((d - c.distance).abs() < 1e-4);
    }
}

#[test]
fn experiments_speed_is_clamped() {
    let mut exp = ExperimentsSketch::new(900.0, EXPERIMENTS_HEIGHT, 5);
    let centre = exp.stars[0].pos;
    exp.pointer_moved(centre);
    for _ in 0..300 {
        exp.tick(0.0);
        for s in &exp.stars {
            assert!(s.vel.x.abs() <= EXPERIMENTS_MAX_SPEED);
            assert!(s.vel.y.abs() <= EXPERIMENTS_MAX_SPEED);
        }
    }
}

#[test]
fn experiments_star_past_edge_turns_back() {
    let mut exp = ExperimentsSketch::new(900.0, EXPERIMENTS_HEIGHT, 11);
    exp.stars[0].pos = Vec2::new(905.0, 150.0);
    exp.stars[0].vel = Vec2::new(0.5, 0.0);
    exp.tick(0.0);
    assert_eq!(exp.stars[0].vel.x, -0.5);
    // Only the velocity changes; the star is not moved back inside.
    assert!(exp.stars[0].pos.x > 900.0);
}

#[test]
fn experiments_draw_order() {
    let mut exp = ExperimentsSketch::new(900.0, EXPERIMENTS_HEIGHT, 6);
    exp.tick(0.0);
    let mut s = RecordingSurface::new();
    exp.draw(&mut s);

    assert!(matches!(s.commands.first(), Some(DrawCmd::FillRect { .. })));
    assert_eq!(s.lines(), exp.connections().len());
    assert_eq!(s.filled_circles().count(), EXPERIMENTS_PARTICLE_COUNT);
    // No pointer yet: no halos.
    assert_eq!(s.stroke_circles().count(), 0);
    assert_eq!(
        s.commands.last(),
        Some(&DrawCmd::Text {
            text: ":)".into(),
            anchor: Vec2::new(900.0 - 12.0, EXPERIMENTS_HEIGHT - 10.0),
        })
    );
}

#[test]
fn experiments_halo_near_pointer() {
    let mut exp = ExperimentsSketch::new(900.0, EXPERIMENTS_HEIGHT, 7);
    let at = exp.stars[0].pos;
    exp.pointer_moved(at);
    let mut s = RecordingSurface::new();
    exp.draw(&mut s);
    assert!(s.stroke_circles().count() >= 1);
}

// interactive

#[test]
fn trail_evicts_oldest_beyond_bound() {
    let mut trail = Trail::new(5, 1.0);
    for i in 0..10 {
        trail.advance(Some(Vec2::new(i as f32, 0.0)));
    }
    assert_eq!(trail.len(), 5);
    let xs: Vec<f32> = trail.iter().map(|s| s.pos.x).collect();
    assert_eq!(xs, vec![5.0, 6.0, 7.0, 8.0, 9.0]);
    let alphas: Vec<f32> = trail.iter().map(|s| s.alpha).collect();
    assert!(alphas.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn trail_drains_once_pointer_stops() {
    let mut trail = Trail::new(TRAIL_LENGTH, TRAIL_FADE);
    for i in 0..200 {
        trail.advance(Some(Vec2::new(i as f32, 10.0)));
        assert!(trail.len() <= TRAIL_LENGTH);
    }
    let ticks = (100.0 / TRAIL_FADE).ceil() as usize;
    for _ in 0..ticks {
        trail.advance(None);
    }
    assert!(trail.is_empty());
}

#[test]
fn trail_segments_always_visible() {
    let mut trail = Trail::new(TRAIL_LENGTH, TRAIL_FADE);
    for i in 0..100 {
        trail.advance((i % 3 != 0).then(|| Vec2::new(i as f32, 0.0)));
        assert!(trail.iter().all(|s| s.alpha > 0.0));
    }
}

#[test]
fn interactive_has_no_trail_before_pointer() {
    let mut sketch = InteractiveSketch::new(800.0, INTERACTIVE_HEIGHT, 8);
    for _ in 0..10 {
        sketch.tick(0.0);
    }
    assert!(sketch.trail.is_empty());

    sketch.pointer_moved(Vec2::new(50.0, 50.0));
    sketch.tick(0.0);
    assert_eq!(sketch.trail.len(), 1);
}

#[test]
fn interactive_bubbles_fade_with_distance() {
    let near = InteractiveSketch::proximity_alpha(0.0);
    let mid = InteractiveSketch::proximity_alpha(INTERACTIVE_PROXIMITY_RANGE / 2.0);
    let far = InteractiveSketch::proximity_alpha(INTERACTIVE_PROXIMITY_RANGE);
    assert_eq!(near, 100.0);
    assert_eq!(far, 25.0);
    assert!(near > mid && mid > far);
}

#[test]
fn interactive_speed_is_clamped() {
    let mut sketch = InteractiveSketch::new(600.0, INTERACTIVE_HEIGHT, 9);
    let at = sketch.bubbles[0].pos;
    sketch.pointer_moved(at);
    for _ in 0..200 {
        sketch.tick(0.0);
        for b in &sketch.bubbles {
            assert!(b.vel.length() <= INTERACTIVE_MAX_SPEED * 2f32.sqrt() + 1e-4);
            assert!(b.vel.x.abs() <= INTERACTIVE_MAX_SPEED);
        }
    }
}

#[test]
fn interactive_bubble_past_edge_turns_back() {
    let mut sketch = InteractiveSketch::new(600.0, INTERACTIVE_HEIGHT, 12);
    sketch.bubbles[0].pos = Vec2::new(-5.0, 100.0);
    sketch.bubbles[0].vel = Vec2::new(-1.0, 0.0);
    sketch.tick(0.0);
    assert_eq!(sketch.bubbles[0].pos, Vec2::new(-6.0, 100.0));
    assert_eq!(sketch.bubbles[0].vel, Vec2::new(1.0, 0.0));
    sketch.tick(0.0);
    assert_eq!(sketch.bubbles[0].pos.x, -5.0);
}

#[test]
fn interactive_bubbles_return_after_shrink() {
    let mut sketch = InteractiveSketch::new(800.0, INTERACTIVE_HEIGHT, 13);
    sketch.resize(100.0, INTERACTIVE_HEIGHT);
    sketch.tick(0.0);
    for _ in 0..2_000 {
        let before: Vec<f32> = sketch.bubbles.iter().map(|b| b.pos.x).collect();
        sketch.tick(0.0);
        for (prev, b) in before.iter().zip(&sketch.bubbles) {
            if *prev > 100.0 {
                assert!(b.pos.x <= *prev, "drifted out from {prev} to {}", b.pos.x);
            }
            if *prev < 0.0 {
                assert!(b.pos.x >= *prev, "drifted out from {prev} to {}", b.pos.x);
            }
        }
    }
    let inside_or_moving = sketch
        .bubbles
        .iter()
        .all(|b| (0.0..=100.0).contains(&b.pos.x) || b.vel.x != 0.0);
    assert!(inside_or_moving);
}

#[test]
fn interactive_draws_trail_then_bubbles() {
    let mut sketch = InteractiveSketch::new(600.0, INTERACTIVE_HEIGHT, 10);
    sketch.pointer_moved(Vec2::new(10.0, 10.0));
    for _ in 0..3 {
        sketch.tick(0.0);
    }
    let mut s = RecordingSurface::new();
    sketch.draw(&mut s);
    assert_eq!(s.commands.first(), Some(&DrawCmd::Clear));
    assert_eq!(
        s.filled_circles().count(),
        sketch.trail.len() + INTERACTIVE_CIRCLE_COUNT
    );
    let (_, first_radius, _) = s.filled_circles().next().unwrap();
    assert_eq!(first_radius, TRAIL_POINT_SIZE / 2.0);
}
