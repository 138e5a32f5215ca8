use serde::{Deserialize, Serialize};

/// A person known to the master database (`users` table).
///
/// The master row also carries `user_password`, which this tool never reads; reverse
/// inserts leave it NULL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub user_id: String,
    pub first_name: String,
    pub preferred_first_name: Option<String>,
    pub last_name: String,
    pub email: String,
}
