use glam::Vec2;
use portfolio_core::{Composite, Paint, Rgba, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// [`Surface`] over a canvas 2D context. Coordinates are logical pixels;
/// the context transform carries the device pixel ratio.
pub struct CanvasSurface {
    pub canvas: web::HtmlCanvasElement,
    pub ctx: web::CanvasRenderingContext2d,
    css_size: Vec2,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|_| anyhow::anyhow!("not a 2d context"))?;
        Ok(Self {
            canvas,
            ctx,
            css_size: Vec2::ZERO,
        })
    }

    pub fn set_css_size(&mut self, width: f32, height: f32) {
        self.css_size = Vec2::new(width, height);
    }

    fn circle_path(&self, center: Vec2, radius: f32) {
        self.ctx.begin_path();
        _ = self
            .ctx
            .arc(center.x as f64, center.y as f64, radius.max(0.0) as f64, 0.0, TAU);
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self) {
        self.ctx
            .clear_rect(0.0, 0.0, self.css_size.x as f64, self.css_size.y as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx
            .fill_rect(origin.x as f64, origin.y as f64, size.x as f64, size.y as f64);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: &Paint) {
        match paint {
            Paint::Solid(c) => self.ctx.set_fill_style_str(&c.css()),
            Paint::Radial(g) => {
                let (cx, cy) = (g.center.x as f64, g.center.y as f64);
                match self
                    .ctx
                    .create_radial_gradient(cx, cy, 0.0, cx, cy, g.radius.max(0.0) as f64)
                {
                    Ok(grad) => {
                        for (offset, color) in &g.stops {
                            _ = grad.add_color_stop(*offset, &color.css());
                        }
                        self.ctx.set_fill_style_canvas_gradient(&grad);
                    }
                    Err(e) => {
                        log::debug!("radial gradient rejected: {:?}", e);
                        return;
                    }
                }
            }
        }
        self.circle_path(center, radius);
        self.ctx.fill();
    }

    fn stroke_circle(&mut self, center: Vec2, radius: f32, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.circle_path(center, radius);
        self.ctx.stroke();
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.set_stroke_style_str(&color.css());
        self.ctx.set_line_width(width as f64);
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.stroke();
    }

    fn set_composite(&mut self, op: Composite) {
        _ = self.ctx.set_global_composite_operation(op.as_css());
    }

    fn set_filter(&mut self, filter: Option<&str>) {
        self.ctx.set_filter(filter.unwrap_or("none"));
    }

    fn text(&mut self, text: &str, anchor: Vec2, size: f32, color: Rgba) {
        self.ctx.set_fill_style_str(&color.css());
        self.ctx.set_font(&format!("{}px system-ui", size));
        self.ctx.set_text_align("right");
        self.ctx.set_text_baseline("bottom");
        _ = self.ctx.fill_text(text, anchor.x as f64, anchor.y as f64);
    }
}
