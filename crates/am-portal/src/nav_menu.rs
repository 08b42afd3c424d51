use crate::Screen;

use am_core::{IdentityRecord, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Screen(Screen),
    SignOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub target: NavTarget,
}

impl NavLink {
    const fn to(label: &'static str, screen: Screen) -> Self {
        Self {
            label,
            target: NavTarget::Screen(screen),
        }
    }
}

const PUBLIC_LINKS: [NavLink; 3] = [
    NavLink::to("Agents", Screen::AgentCatalog),
    NavLink::to("Custom Agent", Screen::CustomAgent),
    NavLink::to("Support", Screen::Support),
];

const SIGN_OUT: NavLink = NavLink {
    label: "Sign Out",
    target: NavTarget::SignOut,
};

/// Header links for the current visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavMenu {
    pub links: Vec<NavLink>,
    /// Account dropdown; absent for anonymous visitors.
    pub user_menu: Option<Vec<NavLink>>,
}

impl NavMenu {
    pub fn for_user(user: Option<&IdentityRecord>) -> Self {
        let mut links = PUBLIC_LINKS.to_vec();

        let Some(user) = user else {
            return Self {
                links,
                user_menu: None,
            };
        };

        let home = match user.role {
            Role::Admin => NavLink::to("Admin Dashboard", Screen::AdminDashboard),
            Role::Customer => NavLink::to("Dashboard", Screen::Dashboard),
        };
        links.push(home);

        Self {
            links,
            user_menu: Some(vec![
                home,
                NavLink::to("Settings", Screen::DashboardSettings),
                SIGN_OUT,
            ]),
        }
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.links.iter().map(|l| l.label).collect()
    }
}
