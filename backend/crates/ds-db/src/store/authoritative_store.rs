use crate::Result as DbErrorResult;

use ds_core::{AuthoritativeUser, GroupMembership, Term, UserIdentity};

use std::collections::BTreeSet;

use async_trait::async_trait;

/// The master database, shared by every course in a batch.
#[async_trait]
pub trait AuthoritativeStore: Send {
    /// Courses offered in `term`.
    async fn list_groups(&mut self, term: Term) -> DbErrorResult<Vec<String>>;

    /// Identifiers enrolled in `group` for `term`.
    async fn member_ids(&mut self, group: &str, term: Term) -> DbErrorResult<BTreeSet<String>>;

    /// Identity and membership of one user, scoped to `(user_id, group, term)`.
    async fn find_member(
        &mut self,
        user_id: &str,
        group: &str,
        term: Term,
    ) -> DbErrorResult<Option<AuthoritativeUser>>;

    /// Disable replication triggers for this session only.
    ///
    /// Fails with [`crate::DbError::InsufficientPrivilege`] when the role may not do so.
    async fn suspend_triggers(&mut self) -> DbErrorResult<()>;

    /// Return the session to normal trigger behaviour.
    ///
    /// Needs the same privilege as [`Self::suspend_triggers`], so only call it after a
    /// suspension succeeded.
    async fn restore_triggers(&mut self) -> DbErrorResult<()>;

    /// Whether `users` already holds this identifier, under any course.
    async fn has_identity(&mut self, user_id: &str) -> DbErrorResult<bool>;

    async fn insert_identity(&mut self, identity: &UserIdentity) -> DbErrorResult<()>;

    async fn insert_membership(&mut self, membership: &GroupMembership) -> DbErrorResult<()>;

    /// Cheap liveness check for the session.
    async fn ping(&mut self) -> DbErrorResult<()>;
}
