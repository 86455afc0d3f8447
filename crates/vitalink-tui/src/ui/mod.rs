//! Terminal UI: rendering, input handling, and the per-screen views.

pub mod input;
pub mod render;
pub mod screens;
pub mod styles;

use ratatui::layout::Rect;

/// Create a centered rectangle with fixed dimensions
pub(crate) fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
