use crate::{AuthoritativeUser, GroupMembership, Term, UserIdentity};

use serde::{Deserialize, Serialize};

/// A course database's `users` row: identity and membership flattened together.
///
/// The course row also has a `user_password` column that the master database does not
/// track for this purpose; it is not part of the reconciled field set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalUserRecord {
    pub user_id: String,
    pub first_name: String,
    pub preferred_first_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub user_group: i32,
    pub registration_section: Option<String>,
    pub manual_registration: bool,
}

impl LocalUserRecord {
    pub fn from_authoritative(user: &AuthoritativeUser) -> Self {
        let identity = user.identity();
        let membership = user.membership();

        Self {
            user_id: identity.user_id.clone(),
            first_name: identity.first_name.clone(),
            preferred_first_name: identity.preferred_first_name.clone(),
            last_name: identity.last_name.clone(),
            email: identity.email.clone(),
            user_group: membership.user_group,
            registration_section: membership.registration_section.clone(),
            manual_registration: membership.manual_registration,
        }
    }

    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            user_id: self.user_id.clone(),
            first_name: self.first_name.clone(),
            preferred_first_name: self.preferred_first_name.clone(),
            last_name: self.last_name.clone(),
            email: self.email.clone(),
        }
    }

    /// Membership row for this user in the course the record was read from.
    pub fn membership(&self, group: &str, term: Term) -> GroupMembership {
        GroupMembership {
            user_id: self.user_id.clone(),
            group: group.to_string(),
            term,
            user_group: self.user_group,
            registration_section: self.registration_section.clone(),
            manual_registration: self.manual_registration,
        }
    }
}
