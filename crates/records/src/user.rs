use serde::{Deserialize, Serialize};

use evalboard_core::{Entity, TenantId, UserId};

/// Local projection of a platform user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default)]
    pub id: Option<UserId>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub roq_user_id: Option<String>,
    #[serde(default)]
    pub tenant_id: Option<TenantId>,
}

impl UserRecord {
    /// "First Last", falling back to the email address.
    pub fn display_name(&self) -> Option<String> {
        let name = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|s| !s.trim().is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if name.is_empty() {
            self.email.clone()
        } else {
            Some(name)
        }
    }
}

impl Entity for UserRecord {
    type Id = UserId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }
}
