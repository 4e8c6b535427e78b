//! Toast notification widget.
//!
//! Pure projection of the [`ToastController`] state onto the terminal: the
//! controller's phase and drag offset decide placement and styling, and no
//! state changes happen here. A non-blocking box in the bottom-right corner
//! that slides down and fades while being dragged.

use crate::styles::theme;
use crate::toast::{Phase, ToastController};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap};

/// Gesture points per terminal cell row. Terminal mice report rows, the
/// gesture thresholds are defined in points; one cell is roughly this tall
/// on common displays, so dragging a toast ~3 rows crosses the 55-point
/// dismissal threshold.
pub const CELL_POINTS: f32 = 24.0;

const TOAST_HEIGHT: u16 = 3;

/// Where the toast sits for the given screen area and drag offset
/// (bottom-right corner, shifted downward while dragged).
///
/// Exposed so the event loop can hit-test mouse input against the same
/// rectangle the widget draws into.
pub fn toast_area(area: Rect, drag_offset: f32) -> Rect {
    let width = 40u16.min(area.width.saturating_sub(4));

    let x = area.x + area.width.saturating_sub(width + 2);
    let rest_y = area.y + area.height.saturating_sub(TOAST_HEIGHT + 3); // Above footer

    // Sliding off the bottom clips the box rather than moving it off-area.
    let shift = (drag_offset / CELL_POINTS).round() as u16;
    let y = rest_y
        .saturating_add(shift)
        .min(area.y + area.height.saturating_sub(1));
    let height = TOAST_HEIGHT.min(area.y + area.height - y);

    Rect::new(x, y, width, height)
}

/// Renders the current toast, if there is one.
pub struct ToastWidget<'a> {
    toast: &'a ToastController,
}

impl<'a> ToastWidget<'a> {
    pub fn new(toast: &'a ToastController) -> Self {
        Self { toast }
    }

    /// Terminals have no alpha channel; the projected opacity maps onto
    /// styling tiers instead.
    fn style_for_opacity(&self, base: Style) -> Option<Style> {
        let opacity = self.toast.opacity();
        if opacity <= 0.0 {
            None
        } else if opacity < 0.65 || self.toast.phase() == Phase::Hiding {
            Some(base.add_modifier(Modifier::DIM))
        } else {
            Some(base)
        }
    }
}

impl<'a> Widget for ToastWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.toast.is_active() {
            return;
        }

        let t = theme();
        let Some(border_style) = self.style_for_opacity(t.success_style()) else {
            // Dragged past the fade distance: fully transparent.
            return;
        };
        let Some(text_style) =
            self.style_for_opacity(t.text_style().add_modifier(Modifier::BOLD))
        else {
            return;
        };

        let toast_area = toast_area(area, self.toast.drag_offset());
        if toast_area.height == 0 || toast_area.width == 0 {
            return;
        }

        Widget::render(Clear, toast_area, buf);

        let message = format!(" \u{2714} {} ", self.toast.message());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .style(t.background_style());

        let paragraph = Paragraph::new(message)
            .block(block)
            .style(text_style)
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: true });

        Widget::render(paragraph, toast_area, buf);
    }
}
