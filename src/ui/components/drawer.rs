use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{nav::Destination, util::colors};

/// The side drawer menu: every destination with its icon, the cursor row
/// highlighted, the active route tinted.
pub struct Drawer {
    cursor: usize,
    active: Destination,
}

impl Drawer {
    pub fn new(cursor: usize, active: Destination) -> Self {
        Self { cursor, active }
    }
}

impl Widget for Drawer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = Destination::ALL
            .iter()
            .enumerate()
            .map(|(i, dest)| {
                let icon = dest.icon();
                // Glyphs are single or double width; pad to a fixed column.
                let pad = " ".repeat(3usize.saturating_sub(icon.width()));
                let style = if i == self.cursor {
                    Style::default()
                        .fg(colors::PRIMARY)
                        .add_modifier(Modifier::BOLD)
                } else if *dest == self.active {
                    Style::default().fg(colors::TEXT)
                } else {
                    Style::default().fg(colors::MUTED)
                };
                ListItem::new(format!(" {}{}{}", icon, pad, dest.title())).style(style)
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
