use crate::constants::NAVBAR_SCROLL_THRESHOLD;

/// Whether the navbar should carry its compact `scrolled` style.
#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_SCROLL_THRESHOLD
}
