pub mod destination;
pub mod drawer;
pub mod tabs;

pub use destination::{Destination, UnknownRoute};
pub use drawer::DrawerNav;
pub use tabs::{HomeTab, TabSelector};
