use portfolio_core::constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn light_ranges_are_ordered() {
    assert!(LIGHT_RADIUS_MIN_FRAC < LIGHT_RADIUS_MAX_FRAC);
    assert!(LIGHT_ALPHA_MIN < LIGHT_ALPHA_MAX && LIGHT_ALPHA_MAX <= 1.0);
    assert!(LIGHT_FLICKER_MIN < LIGHT_FLICKER_INIT_MIN);
    assert!(LIGHT_FLICKER_INIT_MAX < LIGHT_FLICKER_MAX);
    assert!(LIGHT_PHASE_RATE_MIN < LIGHT_PHASE_RATE_MAX);
    assert!(BACKDROP_ALPHA > 0.0 && BACKDROP_ALPHA <= 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hero_has_visible_particles() {
    assert!(HERO_FIRST_VISIBLE < HERO_PARTICLE_COUNT);
    assert!(HERO_HUE_MIN < HERO_HUE_MAX && HERO_HUE_MAX <= 360.0);
    assert!(WAVE_FADE_SPEED > 0.0 && WAVE_EXPANSION_SPEED > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn hover_and_trail_settings_are_sane() {
    assert!(SKILLS_HOVER_SIZE > SKILLS_BASE_SIZE);
    assert!(EXPERIMENTS_HALO_FRACTION < 1.0);
    assert!(TRAIL_LENGTH > 0 && TRAIL_FADE > 0.0);
    assert!((0.0..360.0).contains(&TRAIL_HUE));
    for c in COLD_COLORS {
        assert!((0.0..360.0).contains(&c[0]));
        assert!(c[1] <= 100.0 && c[2] <= 100.0);
    }
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn rechecks_run_after_load_settles() {
    assert!(INSPECT_RECHECK_MS > 0);
    assert!(ADJUST_RECHECK_MS > INSPECT_RECHECK_MS);
    assert!(METAL_ROUGHNESS_FACTOR > 0.0 && METAL_ROUGHNESS_FACTOR < 1.0);
}

#[test]
fn video_extensions_are_lowercase_with_dot() {
    for ext in VIDEO_EXTENSIONS {
        assert!(ext.starts_with('.'));
        assert_eq!(ext, ext.to_ascii_lowercase());
    }
}
