use crate::DEFAULT_SEED_DEMO_ACCOUNTS;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Load the demo customer and admin accounts into the credential table.
    pub seed_demo_accounts: bool,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            seed_demo_accounts: DEFAULT_SEED_DEMO_ACCOUNTS,
        }
    }
}
