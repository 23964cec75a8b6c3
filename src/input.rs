use glam::Vec2;
use web_sys as web;

/// Pointer position in the canvas's logical (CSS) pixel space. Positions
/// outside the canvas are returned as-is, not clamped.
#[inline]
pub fn pointer_canvas_css(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}
