use crate::nav::DrawerNav;

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub nav: DrawerNav,
    pub ui: UiState,
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub drawer_cursor: usize,
}
