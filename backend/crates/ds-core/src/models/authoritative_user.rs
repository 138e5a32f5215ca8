use crate::{CoreError, GroupMembership, Result as CoreResult, UserIdentity};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Identity and membership of one user as the master database sees them for a single
/// course and term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthoritativeUser {
    identity: UserIdentity,
    membership: GroupMembership,
}

impl AuthoritativeUser {
    #[track_caller]
    pub fn new(identity: UserIdentity, membership: GroupMembership) -> CoreResult<Self> {
        if identity.user_id != membership.user_id {
            return Err(CoreError::Validation {
                message: format!(
                    "identity '{}' paired with membership of '{}'",
                    identity.user_id, membership.user_id
                ),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            identity,
            membership,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.identity.user_id
    }

    pub fn identity(&self) -> &UserIdentity {
        &self.identity
    }

    pub fn membership(&self) -> &GroupMembership {
        &self.membership
    }
}
