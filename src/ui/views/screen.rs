use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Paragraph, Wrap},
};

use crate::{
    content,
    nav::Destination,
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// Centered title + description for the non-tabbed destinations. Pure
/// rendering of the content table; holds no state of its own.
pub struct StaticScreen {
    dest: Destination,
}

impl StaticScreen {
    pub fn new(dest: Destination) -> Self {
        Self { dest }
    }
}

#[async_trait]
impl View for StaticScreen {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let copy = content::screen_copy(self.dest);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(copy.title)
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(colors::TEXT)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(title, chunks[1]);

        let description = Paragraph::new(copy.description)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .style(Style::default().fg(colors::MUTED));
        f.render_widget(description, chunks[3]);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        _ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Esc => Some(Action::Navigate(Destination::Home)),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        }
    }
}
