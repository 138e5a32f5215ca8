use ds_core::{GroupMembership, LocalUserRecord, Season, Term, UserIdentity};

pub fn fall_26() -> Term {
    Term::new(Season::Fall, 26).unwrap()
}

pub fn identity(user_id: &str, first_name: &str) -> UserIdentity {
    UserIdentity {
        user_id: user_id.to_string(),
        first_name: first_name.to_string(),
        preferred_first_name: None,
        last_name: "Tester".to_string(),
        email: format!("{}@example.edu", user_id),
    }
}

pub fn membership(user_id: &str, group: &str, term: Term) -> GroupMembership {
    GroupMembership {
        user_id: user_id.to_string(),
        group: group.to_string(),
        term,
        user_group: 4,
        registration_section: Some("1".to_string()),
        manual_registration: false,
    }
}

/// Course row as it would look if copied straight from master.
pub fn course_record(user_id: &str, first_name: &str) -> LocalUserRecord {
    LocalUserRecord {
        user_id: user_id.to_string(),
        first_name: first_name.to_string(),
        preferred_first_name: None,
        last_name: "Tester".to_string(),
        email: format!("{}@example.edu", user_id),
        user_group: 4,
        registration_section: Some("1".to_string()),
        manual_registration: false,
    }
}

pub fn groups(names: &[&str]) -> Vec<String> {
    names.iter().map(|n| n.to_string()).collect()
}
