use portfolio_core::constants::*;
use portfolio_core::{AmbientBackground, Composite, DrawCmd, Paint, RecordingSurface, Sketch};

#[test]
fn lights_created_with_palette_and_ranges() {
    let bg = AmbientBackground::new(1200.0, 800.0, 7);
    assert_eq!(bg.lights.len(), LIGHT_COUNT);
    for (i, l) in bg.lights.iter().enumerate() {
        assert_eq!(l.color, LIGHT_PALETTE[i % LIGHT_PALETTE.len()]);
        assert!(l.radius >= 1200.0 * LIGHT_RADIUS_MIN_FRAC);
        assert!(l.radius <= 1200.0 * LIGHT_RADIUS_MAX_FRAC);
        assert!(l.alpha >= LIGHT_ALPHA_MIN && l.alpha <= LIGHT_ALPHA_MAX);
    }
}

#[test]
fn lights_stay_within_wrap_margin() {
    let (w, h) = (900.0, 600.0);
    let mut bg = AmbientBackground::new(w, h, 42);
    for step in 0..5_000 {
        // Mix normal frames with an occasional long stall.
        let dt = if step % 500 == 0 { 2.0 } else { 1.0 / 60.0 };
        bg.tick(dt);
        for l in &bg.lights {
            assert!(l.pos.x >= -l.radius && l.pos.x <= w + l.radius, "x={}", l.pos.x);
            assert!(l.pos.y >= -l.radius && l.pos.y <= h + l.radius, "y={}", l.pos.y);
            assert!(l.flicker >= LIGHT_FLICKER_MIN && l.flicker <= LIGHT_FLICKER_MAX);
        }
    }
}

#[test]
fn zero_elapsed_time_does_not_move_lights() {
    let mut bg = AmbientBackground::new(800.0, 600.0, 3);
    let before: Vec<_> = bg.lights.iter().map(|l| l.pos).collect();
    bg.tick(0.0);
    let after: Vec<_> = bg.lights.iter().map(|l| l.pos).collect();
    assert_eq!(before, after);
}

#[test]
fn radius_is_kept_on_resize() {
    let mut bg = AmbientBackground::new(1000.0, 700.0, 11);
    let radii: Vec<f32> = bg.lights.iter().map(|l| l.radius).collect();
    bg.resize(400.0, 300.0);
    assert_eq!(bg.size(), (400.0, 300.0));
    assert_eq!(radii, bg.lights.iter().map(|l| l.radius).collect::<Vec<_>>());
}

#[test]
fn draw_blends_additively_and_resets_state() {
    let bg = AmbientBackground::new(640.0, 480.0, 5);
    let mut s = RecordingSurface::new();
    bg.draw(&mut s);

    assert!(matches!(s.commands.first(), Some(DrawCmd::FillRect { .. })));
    assert!(s
        .commands
        .contains(&DrawCmd::Filter(Some(BACKGROUND_FILTER.to_owned()))));
    assert!(s.commands.contains(&DrawCmd::Composite(Composite::Lighter)));
    assert_eq!(
        s.commands.last(),
        Some(&DrawCmd::Composite(Composite::SourceOver))
    );

    let radial = s
        .filled_circles()
        .filter(|(_, _, p)| matches!(p, Paint::Radial(_)))
        .count();
    assert_eq!(radial, LIGHT_COUNT);
}
