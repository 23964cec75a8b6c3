use portfolio_core::constants::{MODAL_DEFAULT_TITLE, PLACEHOLDER_POSTER};
use portfolio_core::{
    classify_poster, details_cache_key, is_video_file, MemoryCache, ModalController, ModalKey,
    ModalView, Poster, TriggerData,
};

#[test]
fn image_trigger_populates_view() {
    let mut ctl = ModalController::new();
    let cache = MemoryCache::new();
    let view = ctl
        .open(&TriggerData::new("3", "Demo", "demo.png"), &cache)
        .clone();
    assert!(ctl.is_open());
    assert_eq!(view.title, "Demo");
    assert_eq!(view.poster, Poster::Image("demo.png".into()));
    assert_eq!(view.details, None);
}

#[test]
fn video_poster_is_detected() {
    assert!(is_video_file("clip.mp4"));
    assert!(is_video_file("clip.WEBM"));
    assert!(!is_video_file("clip.mp4.png"));
    assert_eq!(
        classify_poster(Some("media/reel.mp4")),
        Poster::Video("media/reel.mp4".into())
    );
    assert!(classify_poster(Some("media/reel.mov")).is_video());
}

#[test]
fn missing_poster_uses_placeholder() {
    assert_eq!(classify_poster(None).src(), PLACEHOLDER_POSTER);
    assert_eq!(classify_poster(Some("")).src(), PLACEHOLDER_POSTER);
}

#[test]
fn missing_title_uses_default() {
    let trigger = TriggerData {
        project: Some("x".into()),
        title: None,
        poster: None,
    };
    let view = ModalView::from_trigger(&trigger, &MemoryCache::new());
    assert_eq!(view.title, MODAL_DEFAULT_TITLE);
}

#[test]
fn cached_details_are_used() {
    let mut cache = MemoryCache::new();
    cache.insert(details_cache_key("demo"), "<p>saved</p>");
    let view = ModalView::from_trigger(&TriggerData::new("demo", "Demo", "demo.png"), &cache);
    assert_eq!(view.details.as_deref(), Some("<p>saved</p>"));

    cache.insert(details_cache_key("empty"), "");
    let view = ModalView::from_trigger(&TriggerData::new("empty", "E", "e.png"), &cache);
    assert_eq!(view.details, None);
}

#[test]
fn cache_key_format() {
    assert_eq!(details_cache_key("demo"), "project_demo_details");
}

#[test]
fn trigger_without_project_skips_cache() {
    let mut cache = MemoryCache::new();
    cache.insert(details_cache_key(""), "<p>never</p>");
    let trigger = TriggerData {
        project: None,
        title: Some("T".into()),
        poster: Some("t.png".into()),
    };
    assert_eq!(ModalView::from_trigger(&trigger, &cache).details, None);
}

#[test]
fn open_close_open_is_idempotent() {
    let mut ctl = ModalController::new();
    let cache = MemoryCache::new();
    let trigger = TriggerData::new("demo", "Demo", "demo.png");
    let first = ctl.open(&trigger, &cache).clone();
    assert!(ctl.close());
    assert!(!ctl.is_open());
    let second = ctl.open(&trigger, &cache).clone();
    assert_eq!(first, second);
}

#[test]
fn escape_closes_only_when_open() {
    let mut ctl = ModalController::new();
    assert!(!ctl.on_key(ModalKey::Dismiss));
    assert!(!ctl.is_open());

    ctl.open(&TriggerData::new("a", "A", "a.png"), &MemoryCache::new());
    assert!(!ctl.on_key(ModalKey::Activate));
    assert!(ctl.is_open());
    assert!(ctl.on_key(ModalKey::Dismiss));
    assert!(!ctl.is_open());
    assert!(!ctl.close());
}

#[test]
fn only_backdrop_clicks_close() {
    let mut ctl = ModalController::new();
    ctl.open(&TriggerData::new("a", "A", "a.png"), &MemoryCache::new());
    assert!(!ctl.on_backdrop_click(false));
    assert!(ctl.is_open());
    assert!(ctl.on_backdrop_click(true));
    assert!(!ctl.is_open());
    // View survives close.
    assert_eq!(ctl.view().map(|v| v.title.as_str()), Some("A"));
}

#[test]
fn activation_keys() {
    assert_eq!(ModalKey::from_key("Enter"), Some(ModalKey::Activate));
    assert_eq!(ModalKey::from_key(" "), Some(ModalKey::Activate));
    assert_eq!(ModalKey::from_key("Escape"), Some(ModalKey::Dismiss));
    assert_eq!(ModalKey::from_key("a"), None);
}
