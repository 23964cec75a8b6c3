use crate::dom;
use crate::frame::SharedSketch;
use crate::input;
use web_sys as web;

#[derive(Clone)]
pub struct PointerWiring {
    pub name: &'static str,
    pub canvas: web::HtmlCanvasElement,
    pub sketch: SharedSketch,
}

/// Pointer moves and presses anywhere on the page, translated into the
/// canvas's own coordinate space. The sketch decides what is in bounds.
pub fn wire_pointer_handlers(w: PointerWiring) {
    wire_pointermove(&w);
    wire_pointerdown(&w);
}

fn wire_pointermove(w: &PointerWiring) {
    let w = w.clone();
    dom::add_window_listener("pointermove", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        if pos.is_finite() {
            w.sketch.borrow_mut().pointer_moved(pos);
        }
    });
}

fn wire_pointerdown(w: &PointerWiring) {
    let w = w.clone();
    dom::add_window_listener("pointerdown", move |ev: web::PointerEvent| {
        let pos = input::pointer_canvas_css(&ev, &w.canvas);
        if !pos.is_finite() {
            return;
        }
        let mut sketch = w.sketch.borrow_mut();
        sketch.pointer_moved(pos);
        if sketch.pointer_pressed(pos) {
            log::debug!("[{}] press at ({:.0},{:.0})", w.name, pos.x, pos.y);
        }
    });
}
