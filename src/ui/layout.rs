use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::border,
    widgets::{Block, Borders},
};

use crate::{
    ui::{
        app::App,
        components::{drawer::Drawer, topbar::TopBar},
    },
    util::colors,
};

pub struct AppLayout<'a> {
    pub app: &'a mut App,
}

impl<'a> AppLayout<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn render(self, f: &mut Frame, area: Rect) {
        let buf = f.buffer_mut();
        buf.set_style(area, Style::new().bg(colors::BACKGROUND));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        let current = self.app.state.nav.current();
        let drawer_open = self.app.state.nav.is_open();

        f.render_widget(TopBar::new(current.title(), drawer_open), chunks[0]);

        let content_area = if drawer_open {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(26), Constraint::Min(1)])
                .split(chunks[1]);

            let drawer_block = Block::default()
                .borders(Borders::ALL)
                .border_set(border::ROUNDED)
                .border_style(Style::default().fg(colors::PRIMARY));
            let drawer_inner = drawer_block.inner(cols[0]);
            f.render_widget(drawer_block, cols[0]);
            f.render_widget(
                Drawer::new(self.app.state.ui.drawer_cursor, current),
                drawer_inner,
            );

            cols[1]
        } else {
            chunks[1]
        };

        let content_block = Block::default()
            .borders(Borders::ALL)
            .border_set(border::ROUNDED)
            .border_style(Style::default().fg(colors::SURFACE));
        let content_inner = content_block.inner(content_area);
        f.render_widget(content_block, content_area);

        self.app
            .router
            .render(f, content_inner, &self.app.state, &self.app.ctx);
    }
}
