use std::time::Duration;

const DEFAULT_PASSWORD_PLACEHOLDER: &str = "!";

#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Resolve and partition only; write nothing.
    pub dry_run: bool,
    /// Value for the course-only `user_password` column on forward inserts.
    pub password_placeholder: String,
    /// Deadline for one course, including its reverse phase.
    pub group_timeout: Option<Duration>,
}

impl Default for SyncOptions {
    fn default() -> Self {
        Self {
            dry_run: false,
            password_placeholder: String::from(DEFAULT_PASSWORD_PLACEHOLDER),
            group_timeout: None,
        }
    }
}
