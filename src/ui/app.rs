use flume::Receiver;
use tracing::{info, warn};

use crate::{
    event::events::Event,
    nav::Destination,
    ui::{context::AppContext, layout::AppLayout, message::AppMessage, router::Router, state::AppState},
};

use super::{tui, util::handler::EventHandler};

pub struct App {
    pub state: AppState,
    pub router: Router,
    pub ctx: AppContext,
    pub event_rx: Receiver<Event>,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        let (event_tx, event_rx) = flume::unbounded();

        Self {
            state: AppState::default(),
            router: Router::new(),
            ctx: AppContext { event_tx },
            event_rx,
            has_focus: true,
            should_quit: false,
        }
    }

    /// Startup route override from `TUNEDECK_START_SCREEN`. Unknown ids are
    /// rejected and the default screen stays.
    pub fn set_start_screen(&mut self, route: &str) {
        match self.state.nav.navigate_route(route) {
            Ok(_) => info!(route, "start screen set"),
            Err(err) => warn!("{err}, keeping the default screen"),
        }
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        EventHandler::handle_terminal_event(self, tui::TerminalEvent::Init, &mut tui).await?;
        while !self.should_quit {
            tui.draw(|f| {
                if self.has_focus {
                    let area = f.area();
                    AppLayout::new(self).render(f, area);
                }
            })?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    pub fn update(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::Quit => self.should_quit = true,
            AppMessage::ToggleDrawer => {
                self.state.nav.toggle();
                if self.state.nav.is_open() {
                    self.state.ui.drawer_cursor = self.state.nav.current().index();
                }
            }
            AppMessage::CloseDrawer => self.state.nav.close(),
            AppMessage::DrawerNext => {
                let last = Destination::ALL.len() - 1;
                self.state.ui.drawer_cursor = (self.state.ui.drawer_cursor + 1).min(last);
            }
            AppMessage::DrawerPrev => {
                self.state.ui.drawer_cursor = self.state.ui.drawer_cursor.saturating_sub(1);
            }
            AppMessage::Navigate(dest) => {
                if self.state.nav.navigate(dest) {
                    info!(route = dest.route(), "navigated");
                }
            }
            AppMessage::GoHome => {
                self.state.nav.navigate(Destination::Home);
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;

    #[test]
    fn test_starts_on_home_with_drawer_closed() {
        let app = App::new();
        assert_eq!(app.state.nav.current(), Destination::Home);
        assert!(!app.state.nav.is_open());
    }

    #[test]
    fn test_drawer_click_search_scenario() {
        let mut app = App::new();
        app.update(AppMessage::ToggleDrawer);
        assert!(app.state.nav.is_open());

        app.update(AppMessage::Navigate(Destination::Search));
        assert_eq!(app.state.nav.current(), Destination::Search);
        assert!(!app.state.nav.is_open());

        let copy = content::screen_copy(app.state.nav.current());
        assert_eq!(copy.title, "Search");
        assert_eq!(copy.description, "Search for music, podcasts and more");
    }

    #[test]
    fn test_navigating_to_current_route_closes_drawer_only() {
        let mut app = App::new();
        app.update(AppMessage::ToggleDrawer);
        app.update(AppMessage::Navigate(Destination::Home));
        assert_eq!(app.state.nav.current(), Destination::Home);
        assert!(!app.state.nav.is_open());
    }

    #[test]
    fn test_opening_drawer_seeds_cursor_at_active_route() {
        let mut app = App::new();
        app.update(AppMessage::Navigate(Destination::Library));
        app.update(AppMessage::ToggleDrawer);
        assert_eq!(app.state.ui.drawer_cursor, Destination::Library.index());
    }

    #[test]
    fn test_drawer_cursor_stays_in_bounds() {
        let mut app = App::new();
        app.update(AppMessage::ToggleDrawer);
        for _ in 0..20 {
            app.update(AppMessage::DrawerNext);
        }
        assert_eq!(app.state.ui.drawer_cursor, Destination::ALL.len() - 1);
        for _ in 0..20 {
            app.update(AppMessage::DrawerPrev);
        }
        assert_eq!(app.state.ui.drawer_cursor, 0);
    }

    #[test]
    fn test_start_screen_env_route() {
        let mut app = App::new();
        app.set_start_screen("episodes");
        assert_eq!(app.state.nav.current(), Destination::YourEpisodes);
    }

    #[test]
    fn test_start_screen_rejects_unknown_route() {
        let mut app = App::new();
        app.set_start_screen("settings");
        assert_eq!(app.state.nav.current(), Destination::Home);
    }

    #[test]
    fn test_go_home_from_anywhere() {
        let mut app = App::new();
        app.update(AppMessage::Navigate(Destination::CreatePlaylist));
        app.update(AppMessage::GoHome);
        assert_eq!(app.state.nav.current(), Destination::Home);
    }

    #[test]
    fn test_quit_message() {
        let mut app = App::new();
        app.update(AppMessage::Quit);
        assert!(app.should_quit);
    }
}
