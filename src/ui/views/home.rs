use async_trait::async_trait;
use ratatui::crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Tabs},
};

use crate::{
    content,
    event::events::Event,
    nav::{HomeTab, TabSelector},
    ui::{
        context::AppContext,
        state::AppState,
        traits::{Action, View},
    },
    util::colors,
};

/// The tabbed home screen: Songs | Albums | Artists over a fixed sample
/// list. Tab and scroll state live here, scoped to the Home route.
pub struct HomeView {
    tabs: TabSelector,
    list_state: ListState,
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            tabs: TabSelector::default(),
            list_state: ListState::default(),
        }
    }
}

impl HomeView {
    pub fn selected_tab(&self) -> HomeTab {
        self.tabs.selected()
    }

    fn tab_changed(&mut self, ctx: &AppContext) {
        self.list_state.select(Some(0));
        let _ = ctx.event_tx.send(Event::TabSelected(self.tabs.selected()));
    }

    fn move_cursor(&mut self, delta: i32) {
        let len = content::tab_items(self.tabs.selected()).len();
        if len == 0 {
            return;
        }
        let i = self.list_state.selected().unwrap_or(0);
        let i = if delta < 0 {
            i.saturating_sub(delta.unsigned_abs() as usize)
        } else {
            (i + delta as usize).min(len - 1)
        };
        self.list_state.select(Some(i));
    }
}

#[async_trait]
impl View for HomeView {
    fn render(&mut self, f: &mut Frame, area: Rect, _state: &AppState, _ctx: &AppContext) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(1)])
            .split(area);

        let titles = HomeTab::ALL.iter().map(|tab| tab.title()).collect::<Vec<_>>();
        let tabs_widget = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(self.tabs.current_index())
            .style(Style::default().fg(colors::MUTED))
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            );
        f.render_widget(tabs_widget, chunks[0]);

        let tab = self.tabs.selected();
        let icon = content::tab_icon(tab);
        let items: Vec<ListItem> = content::tab_items(tab)
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("  {icon}  "), Style::default().fg(colors::PRIMARY)),
                    Span::styled(*entry, Style::default().fg(colors::TEXT)),
                ]))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )
            .highlight_symbol("> ");

        if self.list_state.selected().is_none() {
            self.list_state.select(Some(0));
        }

        f.render_stateful_widget(list, chunks[1], &mut self.list_state);
    }

    async fn handle_input(
        &mut self,
        key: KeyEvent,
        _state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => {
                if self.tabs.select_prev() {
                    self.tab_changed(ctx);
                }
                Some(Action::None)
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if self.tabs.select_next() {
                    self.tab_changed(ctx);
                }
                Some(Action::None)
            }
            KeyCode::Char(c @ '1'..='3') => {
                let index = c as usize - '1' as usize;
                if let Some(tab) = HomeTab::ALL.get(index).copied() {
                    if self.tabs.select(tab) {
                        self.tab_changed(ctx);
                    }
                }
                Some(Action::None)
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor(1);
                Some(Action::None)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor(-1);
                Some(Action::None)
            }
            KeyCode::Char('g') => {
                self.list_state.select(Some(0));
                Some(Action::None)
            }
            KeyCode::Char('G') => {
                let len = content::tab_items(self.tabs.selected()).len();
                if len > 0 {
                    self.list_state.select(Some(len - 1));
                }
                Some(Action::None)
            }
            _ => None,
        }
    }
}
