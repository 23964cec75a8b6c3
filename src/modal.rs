//! DOM side of the project preview dialog.

use crate::dom;
use crate::events;
use portfolio_core::constants::*;
use portfolio_core::{DetailCache, ModalController, ModalKey, ModalView, Poster, TriggerData};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Saved project details in `localStorage`. Unavailable storage and read
/// errors both count as a miss.
pub struct LocalStorageCache {
    storage: Option<web::Storage>,
}

impl LocalStorageCache {
    pub fn open() -> Self {
        let storage = web::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::info!("[modal] localStorage unavailable, saved details disabled");
        }
        Self { storage }
    }
}

impl DetailCache for LocalStorageCache {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }
}

pub fn trigger_data(el: &web::Element) -> TriggerData {
    TriggerData {
        project: el.get_attribute("data-project"),
        title: el.get_attribute("data-title"),
        poster: el.get_attribute("data-poster"),
    }
}

fn set_display(el: &web::HtmlElement, value: &str) {
    _ = el.style().set_property("display", value);
}

struct ModalDom {
    overlay: web::Element,
    title: Option<web::Element>,
    poster: Option<web::HtmlImageElement>,
    video: Option<web::HtmlVideoElement>,
    details: Option<web::Element>,
    default_details: String,
}

impl ModalDom {
    fn lookup(document: &web::Document) -> Option<Self> {
        let overlay = document.get_element_by_id(MODAL_OVERLAY_ID)?;
        let by_id = |id: &str| document.get_element_by_id(id);
        let details = by_id(MODAL_DETAILS_ID);
        let default_details = details.as_ref().map(|d| d.inner_html()).unwrap_or_default();
        Some(Self {
            overlay,
            title: by_id(MODAL_TITLE_ID),
            poster: by_id(MODAL_POSTER_ID).and_then(|e| e.dyn_into().ok()),
            video: by_id(MODAL_VIDEO_ID).and_then(|e| e.dyn_into().ok()),
            details,
            default_details,
        })
    }

    fn render(&self, view: &ModalView) {
        if let Some(t) = &self.title {
            t.set_text_content(Some(&view.title));
        }
        match &view.poster {
            Poster::Video(src) => {
                if let Some(img) = &self.poster {
                    set_display(img, "none");
                }
                if let Some(video) = &self.video {
                    set_display(video, "block");
                    video.set_src(src);
                }
            }
            Poster::Image(src) => {
                if let Some(video) = &self.video {
                    set_display(video, "none");
                }
                if let Some(img) = &self.poster {
                    set_display(img, "block");
                    img.set_src(src);
                }
            }
        }
        if let Some(d) = &self.details {
            d.set_inner_html(view.details.as_deref().unwrap_or(&self.default_details));
        }
    }

    fn set_open(&self, open: bool) {
        let cl = self.overlay.class_list();
        if open {
            _ = cl.add_1("open");
        } else {
            _ = cl.remove_1("open");
        }
        _ = self
            .overlay
            .set_attribute("aria-hidden", if open { "false" } else { "true" });
        if let Some(body) = dom::window_document().and_then(|d| d.body()) {
            _ = body
                .style()
                .set_property("overflow", if open { "hidden" } else { "" });
        }
    }
}

pub struct Modal {
    controller: RefCell<ModalController>,
    dom: ModalDom,
    cache: Box<dyn DetailCache>,
}

impl Modal {
    pub fn is_open(&self) -> bool {
        self.controller.borrow().is_open()
    }

    pub fn open_from(&self, trigger: &web::Element) {
        let data = trigger_data(trigger);
        let mut ctl = self.controller.borrow_mut();
        let view = ctl.open(&data, self.cache.as_ref());
        self.dom.render(view);
        self.dom.set_open(true);
    }

    pub fn close(&self) {
        if self.controller.borrow_mut().close() {
            self.dom.set_open(false);
        }
    }

    pub fn on_key(&self, key: ModalKey) {
        if self.controller.borrow_mut().on_key(key) {
            self.dom.set_open(false);
        }
    }

    fn on_overlay_click(&self, ev: &web::MouseEvent) {
        let on_backdrop = ev
            .target()
            .map(|t| js_sys::Object::is(&t, &self.dom.overlay))
            .unwrap_or(false);
        if self.controller.borrow_mut().on_backdrop_click(on_backdrop) {
            self.dom.set_open(false);
        }
    }
}

/// Wire triggers, close button, backdrop and Escape. Returns `None` (and
/// does nothing) when the page has no triggers or no overlay.
pub fn wire(document: &web::Document) -> Option<Rc<Modal>> {
    wire_with_cache(document, Box::new(LocalStorageCache::open()))
}

pub fn wire_with_cache(document: &web::Document, cache: Box<dyn DetailCache>) -> Option<Rc<Modal>> {
    let triggers: Vec<web::Element> = document
        .query_selector_all(MODAL_TRIGGER_SELECTOR)
        .ok()
        .map(|list| {
            (0..list.length())
                .filter_map(|i| list.get(i))
                .filter_map(|n| n.dyn_into::<web::Element>().ok())
                .collect()
        })
        .unwrap_or_default();
    if triggers.is_empty() {
        log::info!("[modal] no triggers, preview dialog disabled");
        return None;
    }
    let Some(dom) = ModalDom::lookup(document) else {
        log::info!("[modal] missing #{}, preview dialog disabled", MODAL_OVERLAY_ID);
        return None;
    };

    let modal = Rc::new(Modal {
        controller: RefCell::new(ModalController::new()),
        dom,
        cache,
    });

    for trigger in &triggers {
        let m = modal.clone();
        let el = trigger.clone();
        dom::add_click_listener(trigger, move |_| m.open_from(&el));
        events::wire_trigger_activation(trigger, modal.clone());
    }

    if let Some(close_btn) = document.get_element_by_id(MODAL_CLOSE_ID) {
        let m = modal.clone();
        dom::add_click_listener(&close_btn, move |_| m.close());
    }

    let m = modal.clone();
    dom::add_click_listener(&modal.dom.overlay, move |ev| m.on_overlay_click(&ev));

    events::wire_escape(modal.clone());
    log::info!("[modal] wired {} triggers", triggers.len());
    Some(modal)
}
