use crate::SessionQueries;

/// Access level a screen declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Admin,
}

impl RouteAccess {
    /// Without `requires_auth` the admin flag has no effect.
    pub fn from_flags(requires_auth: bool, requires_admin: bool) -> Self {
        match (requires_auth, requires_admin) {
            (false, _) => Self::Public,
            (true, false) => Self::Authenticated,
            (true, true) => Self::Admin,
        }
    }

    pub fn requires_auth(&self) -> bool {
        !matches!(self, Self::Public)
    }

    pub fn requires_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }

    /// Decides whether the current session may see a screen with this access level.
    pub fn check(&self, session: &impl SessionQueries) -> GuardDecision {
        if !self.requires_auth() {
            return GuardDecision::Render;
        }
        if !session.is_authenticated() {
            return GuardDecision::RedirectTo(RedirectTarget::Login);
        }
        if self.requires_admin() && !session.is_admin() {
            return GuardDecision::RedirectTo(RedirectTarget::Dashboard);
        }
        GuardDecision::Render
    }
}

/// Where a rejected navigation is sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    /// The non-admin landing screen.
    Dashboard,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/dashboard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectTo(RedirectTarget),
}

/// Flag form of [`RouteAccess::check`].
pub fn decide(
    session: &impl SessionQueries,
    requires_auth: bool,
    requires_admin: bool,
) -> GuardDecision {
    RouteAccess::from_flags(requires_auth, requires_admin).check(session)
}
