use glam::Vec2;
use portfolio_core::navbar::navbar_scrolled;
use portfolio_core::{inside_surface, proximity, repulsion, PointerState, SurfaceFit, Viewport};

#[test]
fn repulsion_is_monotone_and_bounded() {
    let pointer = Vec2::new(100.0, 100.0);
    let radius = 80.0;
    let mut last = f32::INFINITY;
    for step in 0..=120 {
        let d = step as f32;
        let f = repulsion(pointer, pointer + Vec2::new(d, 0.0), radius, 0.8);
        let mag = f.length();
        assert!(mag <= last + 1e-6, "magnitude rose at d={d}");
        if d >= radius {
            assert_eq!(f, Vec2::ZERO);
        }
        last = mag;
    }
}

#[test]
fn repulsion_points_away_from_pointer() {
    let pointer = Vec2::new(50.0, 50.0);
    let f = repulsion(pointer, Vec2::new(50.0, 20.0), 100.0, 1.0);
    assert!(f.y < 0.0);
    assert!(f.x.abs() < 1e-5);
}

#[test]
fn proximity_falls_to_zero_at_radius() {
    assert_eq!(proximity(0.0, 100.0), 1.0);
    assert_eq!(proximity(50.0, 100.0), 0.5);
    assert_eq!(proximity(100.0, 100.0), 0.0);
    assert_eq!(proximity(150.0, 100.0), 0.0);
    assert_eq!(proximity(10.0, 0.0), 0.0);
}

#[test]
fn pointer_unknown_until_first_event() {
    let p = PointerState::default();
    assert_eq!(p.distance_to(Vec2::ZERO), None);
    let p = PointerState::at(Vec2::new(3.0, 4.0));
    assert_eq!(p.distance_to(Vec2::ZERO), Some(5.0));
}

#[test]
fn press_containment_is_strict() {
    assert!(inside_surface(Vec2::new(1.0, 1.0), 10.0, 10.0));
    assert!(!inside_surface(Vec2::new(0.0, 5.0), 10.0, 10.0));
    assert!(!inside_surface(Vec2::new(10.0, 5.0), 10.0, 10.0));
    assert!(!inside_surface(Vec2::new(5.0, 11.0), 10.0, 10.0));
}

#[test]
fn backing_store_follows_device_pixel_ratio() {
    let vp = Viewport::new(800.0, 600.0, 2.0);
    assert_eq!(vp.backing_size(), (1600, 1200));
    assert_eq!(vp.transform(), [2.0, 0.0, 0.0, 2.0, 0.0, 0.0]);

    let vp = Viewport::new(333.0, 250.0, 1.5);
    assert_eq!(vp.backing_size(), (499, 375));
}

#[test]
fn degenerate_viewport_is_sanitised() {
    let vp = Viewport::new(0.0, -10.0, f64::NAN);
    assert_eq!(vp.dpr, 1.0);
    assert_eq!(vp.backing_size(), (1, 1));
}

#[test]
fn surface_fit_sizes() {
    assert_eq!(SurfaceFit::Viewport.css_size(1280.0, 720.0, 600.0), (1280.0, 720.0));
    assert_eq!(
        SurfaceFit::WindowWidth { height: 500.0 }.css_size(1280.0, 720.0, 600.0),
        (1280.0, 500.0)
    );
    assert_eq!(
        SurfaceFit::ContainerWidth { height: 250.0 }.css_size(1280.0, 720.0, 600.0),
        (600.0, 250.0)
    );
}

#[test]
fn navbar_compacts_past_threshold() {
    assert!(!navbar_scrolled(0.0));
    assert!(!navbar_scrolled(50.0));
    assert!(navbar_scrolled(51.0));
}
