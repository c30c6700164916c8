use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;

use crate::nav::Destination;
use crate::ui::context::AppContext;
use crate::ui::state::AppState;
use crate::ui::traits::{Action, View};
use crate::ui::views::{HomeView, StaticScreen};

/// Holds one retained view per visited destination. There is no history
/// stack: the active view is whichever destination the nav state names, and
/// revisiting a destination reuses its previous instance, so scroll and tab
/// state come back with it.
pub struct Router {
    views: Vec<(Destination, Box<dyn View>)>,
}

impl Router {
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    fn make_view(dest: Destination) -> Box<dyn View> {
        match dest {
            Destination::Home => Box::new(HomeView::default()),
            _ => Box::new(StaticScreen::new(dest)),
        }
    }

    fn view_for(&mut self, dest: Destination) -> &mut Box<dyn View> {
        let pos = match self.views.iter().position(|(d, _)| *d == dest) {
            Some(pos) => pos,
            None => {
                self.views.push((dest, Self::make_view(dest)));
                self.views.len() - 1
            }
        };
        &mut self.views[pos].1
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, state: &AppState, ctx: &AppContext) {
        self.view_for(state.nav.current()).render(f, area, state, ctx);
    }

    pub async fn handle_input(
        &mut self,
        key: KeyEvent,
        state: &AppState,
        ctx: &AppContext,
    ) -> Option<Action> {
        self.view_for(state.nav.current())
            .handle_input(key, state, ctx)
            .await
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
