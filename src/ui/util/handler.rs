use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::{
    event::events::Event,
    nav::Destination,
    ui::{
        app::App,
        input::InputHandler,
        message::AppMessage,
        traits::Action,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<()> {
        if let Some(evt) = tui.next().await {
            Self::handle_terminal_event(app, evt, tui).await?;
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt);
        }

        Ok(())
    }

    pub async fn handle_terminal_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<()> {
        match evt {
            TerminalEvent::Init | TerminalEvent::Tick | TerminalEvent::Resize(..) => {}
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => Self::handle_key_event(app, key).await,
        }

        Ok(())
    }

    async fn handle_key_event(app: &mut App, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            app.update(AppMessage::Quit);
            return;
        }

        // While the drawer is open it captures navigation keys; the view
        // underneath sees nothing.
        if app.state.nav.is_open() {
            Self::handle_drawer_key(app, key);
            return;
        }

        if let Some(action) = app.router.handle_input(key, &app.state, &app.ctx).await {
            Self::dispatch_action(app, action);
            return;
        }

        if let Some(msg) = InputHandler::handle_key(key) {
            app.update(msg);
        }
    }

    fn handle_drawer_key(app: &mut App, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.update(AppMessage::DrawerPrev),
            KeyCode::Down | KeyCode::Char('j') => app.update(AppMessage::DrawerNext),
            KeyCode::Enter => {
                if let Some(dest) = Destination::ALL.get(app.state.ui.drawer_cursor).copied() {
                    let _ = app.ctx.event_tx.send(Event::Navigate(dest));
                }
            }
            KeyCode::Esc | KeyCode::Tab => app.update(AppMessage::CloseDrawer),
            KeyCode::Char('q') => app.update(AppMessage::Quit),
            _ => {}
        }
    }

    fn dispatch_action(app: &mut App, action: Action) {
        match action {
            Action::Quit => app.should_quit = true,
            Action::Navigate(dest) => app.update(AppMessage::Navigate(dest)),
            Action::None => {}
        }
    }

    fn handle_app_event(app: &mut App, evt: Event) {
        match evt {
            Event::Navigate(dest) => app.update(AppMessage::Navigate(dest)),
            Event::TabSelected(tab) => debug!(tab = tab.route(), "tab selected"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_drawer_enter_navigates_via_event_channel() {
        let mut app = App::new();
        app.update(AppMessage::ToggleDrawer);

        EventHandler::handle_key_event(&mut app, key(KeyCode::Down)).await;
        EventHandler::handle_key_event(&mut app, key(KeyCode::Enter)).await;

        // The drawer sends over the app channel; drain it like the run loop.
        while let Ok(evt) = app.event_rx.try_recv() {
            EventHandler::handle_app_event(&mut app, evt);
        }

        assert_eq!(app.state.nav.current(), Destination::Search);
        assert!(!app.state.nav.is_open());
    }

    #[tokio::test]
    async fn test_activating_current_destination_only_closes_drawer() {
        let mut app = App::new();
        app.update(AppMessage::ToggleDrawer);

        EventHandler::handle_key_event(&mut app, key(KeyCode::Enter)).await;
        while let Ok(evt) = app.event_rx.try_recv() {
            EventHandler::handle_app_event(&mut app, evt);
        }

        assert_eq!(app.state.nav.current(), Destination::Home);
        assert!(!app.state.nav.is_open());
    }

    #[tokio::test]
    async fn test_escape_closes_drawer_without_navigating() {
        let mut app = App::new();
        app.update(AppMessage::Navigate(Destination::Search));
        app.update(AppMessage::ToggleDrawer);

        EventHandler::handle_key_event(&mut app, key(KeyCode::Esc)).await;

        assert!(!app.state.nav.is_open());
        assert_eq!(app.state.nav.current(), Destination::Search);
    }

    #[tokio::test]
    async fn test_escape_on_static_screen_returns_home() {
        let mut app = App::new();
        app.update(AppMessage::Navigate(Destination::LikedSongs));

        EventHandler::handle_key_event(&mut app, key(KeyCode::Esc)).await;

        assert_eq!(app.state.nav.current(), Destination::Home);
    }

    #[tokio::test]
    async fn test_quit_key_falls_through_views() {
        let mut app = App::new();
        EventHandler::handle_key_event(&mut app, key(KeyCode::Char('q'))).await;
        assert!(app.should_quit);
    }
}
