use portfolio_core::{SurfaceFit, Viewport};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(target: &web::EventTarget, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

#[inline]
pub fn add_window_listener<E: FromWasmAbi + 'static>(event: &str, mut handler: impl FnMut(E) + 'static) {
    if let Some(window) = web::window() {
        let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(_)>);
        _ = window.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

fn window_inner_size() -> (f32, f32) {
    web::window()
        .map(|w| {
            let iw = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let ih = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (iw as f32, ih as f32)
        })
        .unwrap_or((0.0, 0.0))
}

/// Canvas for `id`: the element itself when it is a canvas, otherwise a
/// fresh canvas appended to it (the id then names a container).
pub fn mount_canvas(document: &web::Document, id: &str) -> Option<(web::HtmlCanvasElement, web::Element)> {
    let el = document.get_element_by_id(id)?;
    if let Some(canvas) = el.dyn_ref::<web::HtmlCanvasElement>() {
        let container = canvas.parent_element().unwrap_or_else(|| el.clone());
        return Some((canvas.clone(), container));
    }
    let canvas = document
        .create_element("canvas")
        .ok()?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()?;
    el.append_child(&canvas).ok()?;
    Some((canvas, el))
}

/// Logical size for a canvas under `fit` right now.
pub fn measure(fit: SurfaceFit, container: &web::Element) -> Viewport {
    let (ww, wh) = window_inner_size();
    let container_w = container
        .dyn_ref::<web::HtmlElement>()
        .map(|e| e.offset_width() as f32)
        .unwrap_or(ww);
    let (w, h) = fit.css_size(ww, wh, container_w);
    Viewport::new(w, h, device_pixel_ratio())
}

/// Resize the backing store to `viewport` and pin the CSS size so drawing
/// stays in logical pixels. Resetting the size clears the context state,
/// so the transform is reapplied here.
pub fn fit_canvas(canvas: &web::HtmlCanvasElement, ctx: &web::CanvasRenderingContext2d, viewport: &Viewport) {
    let (bw, bh) = viewport.backing_size();
    canvas.set_width(bw);
    canvas.set_height(bh);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.css_width));
    _ = style.set_property("height", &format!("{}px", viewport.css_height));
    let [a, b, c, d, e, f] = viewport.transform();
    _ = ctx.set_transform(a, b, c, d, e, f);
}

/// Pin the background canvas behind the page.
pub fn style_background_canvas(canvas: &web::HtmlCanvasElement) {
    let style = canvas.style();
    for (k, v) in [
        ("position", "fixed"),
        ("inset", "0"),
        ("pointer-events", "none"),
        ("z-index", "-1"),
        ("transition", "opacity 0.6s cubic-bezier(.4,0,.2,1)"),
    ] {
        _ = style.set_property(k, v);
    }
}
