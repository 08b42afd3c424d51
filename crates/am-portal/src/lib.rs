pub mod error;
pub mod logger;
pub mod nav_menu;
pub mod navigation;
pub mod portal;
pub mod screen;

pub use error::{PortalError, Result as PortalResult};
pub use nav_menu::{NavLink, NavMenu, NavTarget};
pub use navigation::Navigation;
pub use portal::Portal;
pub use screen::{Route, Screen};

#[cfg(test)]
mod tests;
