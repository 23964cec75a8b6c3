#![cfg(target_arch = "wasm32")]
use portfolio_core::constants::*;
use portfolio_core::{
    AmbientBackground, ExperimentsSketch, HeroSketch, InteractiveSketch, Sketch, SkillsSketch,
    SurfaceFit,
};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod dom;
mod events;
mod frame;
mod input;
pub mod modal;
pub mod model_debug;
mod navbar;

pub use model_debug::ModelDebug;

use frame::{FrameContext, SharedSketch};

/// Where and how one sketch is mounted.
struct Mount {
    name: &'static str,
    id: &'static str,
    fit: SurfaceFit,
    pointer: bool,
}

/// Mount a sketch on `mount.id`, size it, wire resize/pointer and start its
/// frame loop. A missing element disables just this sketch.
fn mount_sketch(
    document: &web::Document,
    mount: Mount,
    make: impl FnOnce(f32, f32, u64) -> SharedSketch,
) -> anyhow::Result<()> {
    let Some((canvas, container)) = dom::mount_canvas(document, mount.id) else {
        log::info!("[{}] no #{} on page, skipped", mount.name, mount.id);
        return Ok(());
    };
    if mount.fit == SurfaceFit::Viewport {
        dom::style_background_canvas(&canvas);
    }
    let surface = canvas::CanvasSurface::new(canvas.clone())?;
    let viewport = dom::measure(mount.fit, &container);
    let sketch = make(viewport.css_width, viewport.css_height, rand::random());

    let frame_ctx = Rc::new(RefCell::new(FrameContext::new(
        mount.name,
        sketch.clone(),
        surface,
        container,
    )));
    frame::wire_resize(&frame_ctx);
    if mount.pointer {
        events::wire_pointer_handlers(events::PointerWiring {
            name: mount.name,
            canvas,
            sketch,
        });
    }
    frame::start_loop(frame_ctx);
    log::info!(
        "[{}] running at {}x{}",
        mount.name,
        viewport.css_width,
        viewport.css_height
    );
    Ok(())
}

fn shared<S: Sketch + 'static>(sketch: S) -> SharedSketch {
    Rc::new(RefCell::new(sketch))
}

fn mount_all_sketches(document: &web::Document) {
    let mounts: [(Mount, Box<dyn FnOnce(f32, f32, u64) -> SharedSketch>); 5] = [
        (
            Mount {
                name: "background",
                id: BG_CANVAS_ID,
                fit: SurfaceFit::Viewport,
                pointer: false,
            },
            Box::new(|w, h, seed| shared(AmbientBackground::new(w, h, seed))),
        ),
        (
            Mount {
                name: "hero",
                id: HERO_CANVAS_ID,
                fit: SurfaceFit::WindowWidth {
                    height: HERO_HEIGHT,
                },
                pointer: true,
            },
            Box::new(|w, h, seed| shared(HeroSketch::new(w, h, seed))),
        ),
        (
            Mount {
                name: "skills",
                id: SKILLS_CANVAS_ID,
                fit: SurfaceFit::ContainerWidth {
                    height: SKILLS_HEIGHT,
                },
                pointer: true,
            },
            Box::new(|w, h, seed| shared(SkillsSketch::new(w, h, seed))),
        ),
        (
            Mount {
                name: "experiments",
                id: EXPERIMENTS_CANVAS_ID,
                fit: SurfaceFit::ContainerWidth {
                    height: EXPERIMENTS_HEIGHT,
                },
                pointer: true,
            },
            Box::new(|w, h, seed| shared(ExperimentsSketch::new(w, h, seed))),
        ),
        (
            Mount {
                name: "interactive",
                id: INTERACTIVE_CANVAS_ID,
                fit: SurfaceFit::ContainerWidth {
                    height: INTERACTIVE_HEIGHT,
                },
                pointer: true,
            },
            Box::new(|w, h, seed| shared(InteractiveSketch::new(w, h, seed))),
        ),
    ];
    for (mount, make) in mounts {
        let name = mount.name;
        if let Err(e) = mount_sketch(document, mount, make) {
            log::error!("[{}] init error: {:?}", name, e);
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    mount_all_sketches(&document);
    _ = modal::wire(&document);
    _ = model_debug::wire(&document);
    navbar::wire(&document);

    Ok(())
}
