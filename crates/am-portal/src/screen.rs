use am_auth::{RedirectTarget, RouteAccess};
use am_core::Role;

const AGENT_DETAIL_PREFIX: &str = "/agents/";

/// Every screen of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Login,
    Signup,
    ForgotPassword,
    AgentCatalog,
    AgentDetail,
    CustomAgent,
    Support,
    TripPlanner,
    Privacy,
    Terms,
    Dashboard,
    DashboardSettings,
    Referral,
    AdminDashboard,
}

impl Screen {
    pub const ALL: [Screen; 15] = [
        Self::Landing,
        Self::Login,
        Self::Signup,
        Self::ForgotPassword,
        Self::AgentCatalog,
        Self::AgentDetail,
        Self::CustomAgent,
        Self::Support,
        Self::TripPlanner,
        Self::Privacy,
        Self::Terms,
        Self::Dashboard,
        Self::DashboardSettings,
        Self::Referral,
        Self::AdminDashboard,
    ];

    /// Path pattern; `{id}` marks the agent id segment.
    pub fn path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::AgentCatalog => "/agents",
            Self::AgentDetail => "/agents/{id}",
            Self::CustomAgent => "/custom-agent",
            Self::Support => "/support",
            Self::TripPlanner => "/trip-planner",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
            Self::Dashboard => "/dashboard",
            Self::DashboardSettings => "/dashboard/settings",
            Self::Referral => "/referral",
            Self::AdminDashboard => "/admin/dashboard",
        }
    }

    pub fn access(&self) -> RouteAccess {
        match self {
            Self::Dashboard | Self::DashboardSettings | Self::Referral => {
                RouteAccess::Authenticated
            }
            Self::AdminDashboard => RouteAccess::Admin,
            _ => RouteAccess::Public,
        }
    }

    /// Where a user of this role lands after signing in.
    pub fn home_for(role: Role) -> Self {
        match role {
            Role::Admin => Self::AdminDashboard,
            Role::Customer => Self::Dashboard,
        }
    }

    /// Matches a browser path. Query string and fragment are ignored, as is
    /// one trailing slash.
    pub fn resolve(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let path = match path.strip_suffix('/') {
            Some(trimmed) if !trimmed.is_empty() => trimmed,
            _ => path,
        };

        if let Some(screen) = Self::ALL
            .into_iter()
            .find(|s| *s != Self::AgentDetail && s.path() == path)
        {
            return Some(Route {
                screen,
                agent_id: None,
            });
        }

        path.strip_prefix(AGENT_DETAIL_PREFIX)
            .filter(|id| !id.is_empty() && !id.contains('/'))
            .map(|id| Route {
                screen: Self::AgentDetail,
                agent_id: Some(id.to_string()),
            })
    }
}

impl From<RedirectTarget> for Screen {
    fn from(target: RedirectTarget) -> Self {
        match target {
            RedirectTarget::Login => Self::Login,
            RedirectTarget::Dashboard => Self::Dashboard,
        }
    }
}

/// A resolved path: the screen plus the agent id for detail pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub screen: Screen,
    pub agent_id: Option<String>,
}

impl Route {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            agent_id: None,
        }
    }

    /// Concrete path for links.
    pub fn path(&self) -> String {
        match (&self.screen, &self.agent_id) {
            (Screen::AgentDetail, Some(id)) => format!("{AGENT_DETAIL_PREFIX}{id}"),
            (screen, _) => screen.path().to_string(),
        }
    }
}
