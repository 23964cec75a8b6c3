use crate::canvas::CanvasSurface;
use crate::dom;
use instant::Instant;
use portfolio_core::{Clock, Sketch};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type SharedSketch = Rc<RefCell<dyn Sketch>>;

/// Render loop state for one sketch on one canvas.
pub struct FrameContext {
    pub name: &'static str,
    pub sketch: SharedSketch,
    pub surface: CanvasSurface,
    pub container: web::Element,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(name: &'static str, sketch: SharedSketch, surface: CanvasSurface, container: web::Element) -> Self {
        Self {
            name,
            sketch,
            surface,
            container,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let mut sketch = self.sketch.borrow_mut();
        match sketch.clock() {
            Clock::WallTime => sketch.tick(dt_sec),
            // frame-counted sketches advance one logical step per callback
            Clock::FrameCount => sketch.tick(0.0),
        }
        sketch.draw(&mut self.surface);
    }

    /// Re-measure the canvas and propagate the new logical size.
    pub fn resize(&mut self) {
        let fit = self.sketch.borrow().fit();
        let viewport = dom::measure(fit, &self.container);
        dom::fit_canvas(&self.surface.canvas, &self.surface.ctx, &viewport);
        self.surface.set_css_size(viewport.css_width, viewport.css_height);
        self.sketch
            .borrow_mut()
            .resize(viewport.css_width, viewport.css_height);
        log::debug!(
            "[{}] resized to {}x{} @{}x",
            self.name,
            viewport.css_width,
            viewport.css_height,
            viewport.dpr
        );
    }
}

pub fn wire_resize(frame_ctx: &Rc<RefCell<FrameContext>>) {
    frame_ctx.borrow_mut().resize();
    let ctx = frame_ctx.clone();
    dom::add_window_listener("resize", move |_: web::Event| {
        ctx.borrow_mut().resize();
    });
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
