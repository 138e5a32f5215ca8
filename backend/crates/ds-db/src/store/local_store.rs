use crate::Result as DbErrorResult;

use ds_core::LocalUserRecord;

use std::collections::BTreeSet;

use async_trait::async_trait;

/// One course database. Opened for a single course and closed when that course is done.
#[async_trait]
pub trait LocalStore: Send + Sized {
    /// Every identifier in the course's `users` table.
    async fn user_ids(&mut self) -> DbErrorResult<BTreeSet<String>>;

    async fn find_user(&mut self, user_id: &str) -> DbErrorResult<Option<LocalUserRecord>>;

    /// Overwrite the mutable fields of an existing row. Returns the number of rows touched.
    async fn update_user(&mut self, record: &LocalUserRecord) -> DbErrorResult<u64>;

    /// Insert a new row, filling the local-only password column with `password_placeholder`.
    async fn insert_user(
        &mut self,
        record: &LocalUserRecord,
        password_placeholder: &str,
    ) -> DbErrorResult<()>;

    async fn close(self) -> DbErrorResult<()>;
}
