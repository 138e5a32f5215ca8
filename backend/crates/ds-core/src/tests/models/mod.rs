mod authoritative_user;
mod local_user_record;

use crate::{GroupMembership, Season, Term, UserIdentity};

pub(crate) fn sample_identity(user_id: &str) -> UserIdentity {
    UserIdentity {
        user_id: user_id.to_string(),
        first_name: "Ada".to_string(),
        preferred_first_name: Some("Addie".to_string()),
        last_name: "Lovelace".to_string(),
        email: format!("{}@example.edu", user_id),
    }
}

pub(crate) fn sample_membership(user_id: &str) -> GroupMembership {
    GroupMembership {
        user_id: user_id.to_string(),
        group: "csci1100".to_string(),
        term: Term::new(Season::Fall, 26).unwrap(),
        user_group: 4,
        registration_section: Some("2".to_string()),
        manual_registration: false,
    }
}
