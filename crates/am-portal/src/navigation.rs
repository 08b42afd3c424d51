use crate::{Route, Screen};

/// Outcome of navigating to a path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    Render(Route),
    Redirect(Screen),
    NotFound,
}

impl Navigation {
    pub fn is_render(&self) -> bool {
        matches!(self, Self::Render(_))
    }

    /// The screen that ends up on display, if any.
    pub fn screen(&self) -> Option<Screen> {
        match self {
            Self::Render(route) => Some(route.screen),
            Self::Redirect(screen) => Some(*screen),
            Self::NotFound => None,
        }
    }
}
