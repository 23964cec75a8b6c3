//! Project preview dialog state.
//!
//! The controller is a two-state machine (closed/open). Opening derives a
//! [`ModalView`] from a trigger's metadata and the detail cache; the web
//! layer only mirrors the view into the DOM.

use fnv::FnvHashMap;

use crate::constants::{MODAL_DEFAULT_TITLE, PLACEHOLDER_POSTER, VIDEO_EXTENSIONS};

/// Metadata carried by a trigger element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TriggerData {
    pub project: Option<String>,
    pub title: Option<String>,
    pub poster: Option<String>,
}

impl TriggerData {
    pub fn new(project: &str, title: &str, poster: &str) -> Self {
        Self {
            project: Some(project.to_owned()),
            title: Some(title.to_owned()),
            poster: Some(poster.to_owned()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Poster {
    Video(String),
    Image(String),
}

impl Poster {
    pub fn src(&self) -> &str {
        match self {
            Poster::Video(s) | Poster::Image(s) => s,
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Poster::Video(_))
    }
}

#[inline]
pub fn is_video_file(src: &str) -> bool {
    let lower = src.to_ascii_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Classify a poster reference; empty or missing becomes the placeholder
/// image.
pub fn classify_poster(src: Option<&str>) -> Poster {
    match src {
        Some(s) if is_video_file(s) => Poster::Video(s.to_owned()),
        Some(s) if !s.is_empty() => Poster::Image(s.to_owned()),
        _ => Poster::Image(PLACEHOLDER_POSTER.to_owned()),
    }
}

#[inline]
pub fn details_cache_key(project: &str) -> String {
    format!("project_{project}_details")
}

/// Read-only text store for saved project details. Any failure reads as a
/// miss.
pub trait DetailCache {
    fn get(&self, key: &str) -> Option<String>;
}

/// In-memory cache, used when no browser storage is reachable.
#[derive(Clone, Debug, Default)]
pub struct MemoryCache {
    entries: FnvHashMap<String, String>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }
}

impl DetailCache for MemoryCache {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

/// What the dialog shows. `details == None` means the default markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalView {
    pub title: String,
    pub poster: Poster,
    pub details: Option<String>,
}

impl ModalView {
    pub fn from_trigger(trigger: &TriggerData, cache: &dyn DetailCache) -> Self {
        let title = trigger
            .title
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or(MODAL_DEFAULT_TITLE)
            .to_owned();
        let details = trigger
            .project
            .as_deref()
            .and_then(|id| cache.get(&details_cache_key(id)))
            .filter(|d| !d.is_empty());
        Self {
            title,
            poster: classify_poster(trigger.poster.as_deref()),
            details,
        }
    }
}

/// Keys the dialog reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModalKey {
    /// Enter or Space on a trigger.
    Activate,
    /// Escape anywhere.
    Dismiss,
}

impl ModalKey {
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" | " " => Some(ModalKey::Activate),
            "Escape" => Some(ModalKey::Dismiss),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct ModalController {
    open: bool,
    view: Option<ModalView>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last populated view; kept after close so the content does not flash.
    pub fn view(&self) -> Option<&ModalView> {
        self.view.as_ref()
    }

    /// Populate from `trigger` and open. Re-opening while open repopulates.
    pub fn open(&mut self, trigger: &TriggerData, cache: &dyn DetailCache) -> &ModalView {
        let view = ModalView::from_trigger(trigger, cache);
        log::debug!("[modal] open title={:?} video={}", view.title, view.poster.is_video());
        self.open = true;
        self.view.insert(view)
    }

    /// Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// Escape: closes only when open.
    pub fn on_key(&mut self, key: ModalKey) -> bool {
        match key {
            ModalKey::Dismiss if self.open => self.close(),
            _ => false,
        }
    }

    /// Click on the overlay. Only a click whose target is the backdrop
    /// itself closes the dialog.
    pub fn on_backdrop_click(&mut self, target_is_backdrop: bool) -> bool {
        if target_is_backdrop {
            self.close()
        } else {
            false
        }
    }
}
