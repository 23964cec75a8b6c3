use crate::dom;
use crate::modal::Modal;
use portfolio_core::ModalKey;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn modal_key(ev: &web::KeyboardEvent) -> Option<ModalKey> {
    ModalKey::from_key(&ev.key())
}

/// Enter/Space on a focused trigger opens the dialog for it.
pub fn wire_trigger_activation(trigger: &web::Element, modal: Rc<Modal>) {
    let el = trigger.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if modal_key(&ev) == Some(ModalKey::Activate) {
            ev.prevent_default();
            modal.open_from(&el);
        }
    }) as Box<dyn FnMut(_)>);
    _ = trigger.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Escape anywhere closes the dialog when it is open.
pub fn wire_escape(modal: Rc<Modal>) {
    dom::add_window_listener("keydown", move |ev: web::KeyboardEvent| {
        if let Some(key) = modal_key(&ev) {
            modal.on_key(key);
        }
    });
}
