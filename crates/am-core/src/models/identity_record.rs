use crate::{CoreResult, Role, UserId, require_non_empty};

use serde::{Deserialize, Serialize};

/// Profile of an authenticated user.
///
/// Serialized in camelCase so stored records keep the `usedCredits` key the
/// browser portal wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// Consumable balance. Display only.
    pub credits: u64,
    /// Historical counter. Display only.
    pub used_credits: u64,
}

impl IdentityRecord {
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            role,
            credits: 0,
            used_credits: 0,
        }
    }

    pub fn with_credits(mut self, credits: u64, used_credits: u64) -> Self {
        self.credits = credits;
        self.used_credits = used_credits;
        self
    }

    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Checks the shape constraints serde cannot express.
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        require_non_empty("name", &self.name)?;
        require_non_empty("email", &self.email)?;
        Ok(())
    }
}
