use crate::Term;

use serde::{Deserialize, Serialize};

/// One user's enrollment in one course for one term (`courses_users` table).
///
/// Keyed by `(user_id, group, term)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMembership {
    pub user_id: String,
    pub group: String,
    pub term: Term,
    /// Role classification (instructor, full access grader, limited access grader, student).
    pub user_group: i32,
    pub registration_section: Option<String>,
    pub manual_registration: bool,
}
