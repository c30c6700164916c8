use crate::nav::destination::{Destination, UnknownRoute};

/// Drawer/route state: which top-level screen is active and whether the
/// drawer is open. Mutated only through the methods below.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrawerNav {
    current: Destination,
    open: bool,
}

impl DrawerNav {
    pub fn current(&self) -> Destination {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Switch to `dest`, closing the drawer as a side effect. Navigating to
    /// the already-current destination changes no route state (single-top)
    /// but still closes the drawer. Returns whether the route changed.
    pub fn navigate(&mut self, dest: Destination) -> bool {
        self.open = false;
        if dest == self.current {
            return false;
        }
        self.current = dest;
        true
    }

    /// String-route boundary. An unknown id is rejected: the current route
    /// stays as it was and the error is returned for the caller to log.
    pub fn navigate_route(&mut self, route: &str) -> Result<bool, UnknownRoute> {
        let dest = Destination::from_route(route)?;
        Ok(self.navigate(dest))
    }
}
