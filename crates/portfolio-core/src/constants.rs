//! Tuning constants for the page effects.
//!
//! Values are in logical (CSS) pixels and per-frame units unless the name
//! says otherwise. Sketch `*Config` defaults are built from these.

// ---------------- Ambient background ----------------
pub const LIGHT_COUNT: usize = 10;
pub const LIGHT_PALETTE: [[u8; 3]; 4] = [
    [11, 59, 189],   // vivid blue
    [33, 105, 205],  // bright blue
    [79, 137, 220],  // light blue
    [120, 170, 235], // pale blue
];
pub const LIGHT_VX_MAX: f32 = 0.04;
pub const LIGHT_VY_MAX: f32 = 0.03;
// light radius as a fraction of viewport width at creation time
pub const LIGHT_RADIUS_MIN_FRAC: f32 = 0.18;
pub const LIGHT_RADIUS_MAX_FRAC: f32 = 0.32;
pub const LIGHT_ALPHA_MIN: f32 = 0.16;
pub const LIGHT_ALPHA_MAX: f32 = 0.32;
pub const LIGHT_FLICKER_INIT_MIN: f32 = 0.95;
pub const LIGHT_FLICKER_INIT_MAX: f32 = 1.05;
pub const LIGHT_FLICKER_STEP: f32 = 0.03;
pub const LIGHT_FLICKER_MIN: f32 = 0.92;
pub const LIGHT_FLICKER_MAX: f32 = 1.08;
// phase drift, radians per second
pub const LIGHT_PHASE_RATE_MIN: f32 = 0.25;
pub const LIGHT_PHASE_RATE_MAX: f32 = 0.7;
pub const LIGHT_SPEED_X_BASE: f32 = 60.0;
pub const LIGHT_SPEED_Y_BASE: f32 = 50.0;
pub const LIGHT_SPEED_SWING: f32 = 30.0;
// reference frame rate that converts elapsed seconds into motion steps
pub const LIGHT_REFERENCE_FPS: f32 = 60.0;
pub const BACKDROP_RGB: [u8; 3] = [0x22, 0x4f, 0xff];
pub const BACKDROP_ALPHA: f32 = 0.92;
pub const BACKGROUND_FILTER: &str = "blur(40px) brightness(1.2)";

// ---------------- Hero sketch ----------------
pub const HERO_HEIGHT: f32 = 500.0;
pub const HERO_PARTICLE_COUNT: usize = 30;
// particles below this index are kept in the store but never positioned or drawn
pub const HERO_FIRST_VISIBLE: usize = 10;
pub const HERO_SPACING: f32 = 150.0;
pub const HERO_DRIFT_SPEED: f32 = 0.03;
pub const HERO_SWAY: f32 = 180.0;
pub const HERO_BASE_SIZE: f32 = 50.0;
pub const HERO_CORE_RATIO: f32 = 0.35;
pub const HERO_HUE_MIN: f32 = 200.0;
pub const HERO_HUE_MAX: f32 = 280.0;
pub const HERO_SCALE_LERP: f32 = 1.15;
pub const HERO_ROTATION_LERP: f32 = 0.15;
pub const WAVE_EXPANSION_SPEED: f32 = 3.0;
pub const WAVE_FADE_SPEED: f32 = 3.0;
pub const WAVE_MAX_ALPHA: f32 = 100.0;
pub const WAVE_INFLUENCE_RADIUS: f32 = 180.0;
pub const WAVE_SCALE_EFFECT: f32 = 1.5;
pub const WAVE_ROTATION_EFFECT: f32 = 0.6;
pub const WAVE_STROKE_WIDTH: f32 = 2.0;

// ---------------- Skills sketch ----------------
pub const SKILLS_HEIGHT: f32 = 250.0;
pub const SKILLS_CIRCLE_COUNT: usize = 16;
pub const SKILLS_SPACING: f32 = 80.0;
pub const SKILLS_SPEED: f32 = 0.5;
pub const SKILLS_AMPLITUDE: f32 = 80.0;
pub const SKILLS_BASE_SIZE: f32 = 40.0;
pub const SKILLS_HOVER_SIZE: f32 = 55.0;
pub const SKILLS_HOVER_RADIUS: f32 = 45.0;
pub const SKILLS_HOVER_IN_COLOR_LERP: f32 = 1.2;
pub const SKILLS_HOVER_IN_SIZE_LERP: f32 = 0.2;
pub const SKILLS_HOVER_OUT_LERP: f32 = 0.1;

// ---------------- Experiments sketch ----------------
pub const EXPERIMENTS_HEIGHT: f32 = 300.0;
pub const EXPERIMENTS_PARTICLE_COUNT: usize = 60;
pub const EXPERIMENTS_PARTICLE_SIZE: f32 = 18.0;
pub const EXPERIMENTS_CONNECTION_DIST: f32 = 140.0;
pub const EXPERIMENTS_POINTER_INFLUENCE: f32 = 100.0;
pub const EXPERIMENTS_REPULSION_PEAK: f32 = 0.7;
pub const EXPERIMENTS_REPULSION_GAIN: f32 = 0.3;
pub const EXPERIMENTS_MAX_SPEED: f32 = 1.0;
pub const EXPERIMENTS_HALO_FRACTION: f32 = 0.7;
// HSB triples, cold blues and violets
pub const COLD_COLORS: [[f32; 3]; 6] = [
    [210.0, 60.0, 85.0],
    [230.0, 40.0, 70.0],
    [255.0, 35.0, 90.0],
    [195.0, 55.0, 80.0],
    [265.0, 25.0, 80.0],
    [180.0, 30.0, 75.0],
];
pub const EXPERIMENTS_BACKGROUND_HSB: [f32; 3] = [220.0, 80.0, 50.0];

// ---------------- Interactive sketch ----------------
pub const INTERACTIVE_HEIGHT: f32 = 350.0;
pub const INTERACTIVE_CIRCLE_COUNT: usize = 50;
pub const TRAIL_LENGTH: usize = 40;
pub const TRAIL_FADE: f32 = 5.0;
pub const TRAIL_HUE: f32 = 200.0;
pub const TRAIL_POINT_SIZE: f32 = 4.0;
pub const INTERACTIVE_POINTER_INFLUENCE: f32 = 80.0;
pub const INTERACTIVE_REPULSION_PEAK: f32 = 0.8;
pub const INTERACTIVE_MAX_SPEED: f32 = 3.0;
pub const INTERACTIVE_PROXIMITY_RANGE: f32 = 250.0;

// ---------------- Modal ----------------
pub const MODAL_DEFAULT_TITLE: &str = "Project";
pub const VIDEO_EXTENSIONS: [&str; 5] = [".mp4", ".webm", ".ogg", ".mov", ".mkv"];
pub const PLACEHOLDER_POSTER: &str = "data:image/svg+xml,%3Csvg xmlns=\"http://www.w3.org/2000/svg\" width=\"400\" height=\"300\"%3E%3Crect fill=\"%23333\" width=\"400\" height=\"300\"/%3E%3Ctext x=\"50%25\" y=\"50%25\" dominant-baseline=\"middle\" text-anchor=\"middle\" fill=\"%23999\" font-size=\"18\"%3ENo image%3C/text%3E%3C/svg%3E";

// ---------------- Model debug ----------------
pub const METAL_KEYWORDS: [&str; 7] = [
    "metal", "alumin", "steel", "iron", "gold", "chrome", "bronze",
];
pub const METAL_METALLIC_FACTOR: f64 = 1.0;
pub const METAL_ROUGHNESS_FACTOR: f64 = 0.35;
pub const INSPECT_RECHECK_MS: i32 = 1200;
pub const ADJUST_RECHECK_MS: i32 = 1400;

// ---------------- Navbar ----------------
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

// ---------------- DOM ids and selectors ----------------
pub const BG_CANVAS_ID: &str = "bg-canvas";
pub const HERO_CANVAS_ID: &str = "hero-canvas";
pub const SKILLS_CANVAS_ID: &str = "skills-canvas";
pub const EXPERIMENTS_CANVAS_ID: &str = "experiments-canvas";
pub const INTERACTIVE_CANVAS_ID: &str = "interactive-canvas";
pub const MODAL_OVERLAY_ID: &str = "project-modal-overlay";
pub const MODAL_CLOSE_ID: &str = "project-modal-close";
pub const MODAL_POSTER_ID: &str = "modal-poster";
pub const MODAL_VIDEO_ID: &str = "modal-video";
pub const MODAL_DETAILS_ID: &str = "project-modal-details";
pub const MODAL_TITLE_ID: &str = "project-modal-title";
pub const MODAL_TRIGGER_SELECTOR: &str = ".skill-project-trigger";
pub const MODEL_VIEWER_SELECTOR: &str = "#main-model";
pub const NAVBAR_SELECTOR: &str = ".navbar";
