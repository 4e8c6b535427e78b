use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

/// Common header: venue title on the left, live cart count on the right.
pub struct Header;

impl Header {
    /// Render the header bar.
    ///
    /// # Returns
    /// The height used (3 lines: borders plus one text line)
    pub fn render(frame: &mut Frame, area: Rect, title: &str, cart_count: usize) -> Result<u16> {
        let t = theme();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(t.border_focused_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(16)])
            .split(inner);

        let title_para = Paragraph::new(Span::styled(format!(" {}", title), t.title_style()));
        frame.render_widget(title_para, chunks[0]);

        let cart_label = if cart_count == 1 {
            "🛒 1 item ".to_string()
        } else {
            format!("🛒 {} items ", cart_count)
        };
        let cart_para = Paragraph::new(Span::styled(cart_label, t.success_style()))
            .alignment(Alignment::Right);
        frame.render_widget(cart_para, chunks[1]);

        Ok(3)
    }
}
