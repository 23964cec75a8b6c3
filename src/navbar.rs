use crate::dom;
use portfolio_core::constants::NAVBAR_SELECTOR;
use portfolio_core::navbar::navbar_scrolled;
use web_sys as web;

#[inline]
pub fn set_scrolled(navbar: &web::Element, scrolled: bool) {
    let cl = navbar.class_list();
    if scrolled {
        _ = cl.add_1("scrolled");
    } else {
        _ = cl.remove_1("scrolled");
    }
}

#[inline]
pub fn is_scrolled(navbar: &web::Element) -> bool {
    navbar.class_list().contains("scrolled")
}

/// Toggle the compact navbar style as the page scrolls past the threshold.
pub fn wire(document: &web::Document) {
    let Ok(Some(navbar)) = document.query_selector(NAVBAR_SELECTOR) else {
        log::info!("[navbar] no {} on page", NAVBAR_SELECTOR);
        return;
    };
    dom::add_window_listener("scroll", move |_: web::Event| {
        let y = web::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        let want = navbar_scrolled(y);
        if want != is_scrolled(&navbar) {
            set_scrolled(&navbar, want);
        }
    });
}
