use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::util::colors;

/// One-line app bar: app name, current screen title, key hints.
pub struct TopBar {
    screen: &'static str,
    drawer_open: bool,
}

impl TopBar {
    pub fn new(screen: &'static str, drawer_open: bool) -> Self {
        Self {
            screen,
            drawer_open,
        }
    }
}

impl Widget for TopBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(colors::SURFACE));
        let inner = block.inner(area);
        block.render(area, buf);

        let hint = if self.drawer_open {
            "enter select · esc close · q quit"
        } else {
            "tab menu · q quit"
        };

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(hint.width() as u16)])
            .split(inner);

        let title = Line::from(vec![
            Span::styled(
                " tunedeck ",
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("· ", Style::default().fg(colors::SURFACE)),
            Span::styled(
                self.screen,
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
        ]);
        Paragraph::new(title).render(chunks[0], buf);

        Paragraph::new(hint)
            .style(Style::default().fg(colors::MUTED))
            .render(chunks[1], buf);
    }
}
