//! Surface sizing on viewport change.

/// How a canvas derives its logical size from the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SurfaceFit {
    /// Full window, both axes.
    Viewport,
    /// Window width with a fixed height.
    WindowWidth { height: f32 },
    /// Width of the containing element with a fixed height.
    ContainerWidth { height: f32 },
}

impl SurfaceFit {
    /// Logical size given the window's inner size and the container width.
    pub fn css_size(self, window_w: f32, window_h: f32, container_w: f32) -> (f32, f32) {
        match self {
            SurfaceFit::Viewport => (window_w, window_h),
            SurfaceFit::WindowWidth { height } => (window_w, height),
            SurfaceFit::ContainerWidth { height } => (container_w, height),
        }
    }
}

/// Logical surface size plus the device pixel ratio it is rendered at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f32,
    pub css_height: f32,
    pub dpr: f64,
}

impl Viewport {
    pub fn new(css_width: f32, css_height: f32, dpr: f64) -> Self {
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        Self {
            css_width: css_width.max(0.0),
            css_height: css_height.max(0.0),
            dpr,
        }
    }

    /// Backing store size in device pixels, never zero.
    pub fn backing_size(&self) -> (u32, u32) {
        let w = (self.css_width as f64 * self.dpr).floor() as u32;
        let h = (self.css_height as f64 * self.dpr).floor() as u32;
        (w.max(1), h.max(1))
    }

    /// `setTransform` arguments that keep drawing in logical pixels.
    pub fn transform(&self) -> [f64; 6] {
        [self.dpr, 0.0, 0.0, self.dpr, 0.0, 0.0]
    }
}
