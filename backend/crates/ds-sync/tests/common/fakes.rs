//! In-memory stand-ins for the master and course databases.

use ds_core::{AuthoritativeUser, GroupMembership, LocalUserRecord, Term, UserIdentity};
use ds_db::{AuthoritativeStore, DbError, LocalStore, LocalStoreConnector, Result as DbResult};

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

fn failure(message: &str) -> DbError {
    DbError::from(sqlx::Error::Protocol(message.to_string()))
}

/// Master database with switches for the failure modes the engine must survive.
#[derive(Debug, Default)]
pub struct InMemoryMaster {
    pub users: BTreeMap<String, UserIdentity>,
    pub memberships: Vec<GroupMembership>,

    /// `session_replication_role = replica` currently in effect
    pub replica: bool,
    pub suspend_calls: usize,
    pub restore_calls: usize,
    /// Inserts that happened while triggers were active
    pub writes_outside_replica: usize,

    /// Role lacks the privilege to set `session_replication_role` either way
    pub deny_suspend: bool,
    pub fail_restore: bool,
    pub fail_ping: bool,
    pub fail_member_ids_for: Option<String>,
    pub stall_member_ids_for: Option<String>,
    pub fail_identity_insert_for: Option<String>,
    pub fail_membership_insert_for: Option<String>,
    pub stall_membership_insert_for: Option<String>,
}

impl InMemoryMaster {
    pub fn enroll(&mut self, identity: UserIdentity, membership: GroupMembership) {
        self.users.insert(identity.user_id.clone(), identity);
        self.memberships.push(membership);
    }

    pub fn is_enrolled(&self, user_id: &str, group: &str, term: Term) -> bool {
        self.memberships
            .iter()
            .any(|m| m.user_id == user_id && m.group == group && m.term == term)
    }

    pub fn membership(&self, user_id: &str, group: &str, term: Term) -> Option<&GroupMembership> {
        self.memberships
            .iter()
            .find(|m| m.user_id == user_id && m.group == group && m.term == term)
    }

    fn record_write(&mut self) {
        if !self.replica {
            self.writes_outside_replica += 1;
        }
    }
}

#[async_trait]
impl AuthoritativeStore for InMemoryMaster {
    async fn list_groups(&mut self, term: Term) -> DbResult<Vec<String>> {
        let groups: BTreeSet<String> = self
            .memberships
            .iter()
            .filter(|m| m.term == term)
            .map(|m| m.group.clone())
            .collect();
        Ok(groups.into_iter().collect())
    }

    async fn member_ids(&mut self, group: &str, term: Term) -> DbResult<BTreeSet<String>> {
        if self.stall_member_ids_for.as_deref() == Some(group) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.fail_member_ids_for.as_deref() == Some(group) {
            return Err(failure("server closed the connection unexpectedly"));
        }

        Ok(self
            .memberships
            .iter()
            .filter(|m| m.group == group && m.term == term)
            .map(|m| m.user_id.clone())
            .collect())
    }

    async fn find_member(
        &mut self,
        user_id: &str,
        group: &str,
        term: Term,
    ) -> DbResult<Option<AuthoritativeUser>> {
        let (Some(identity), Some(membership)) =
            (self.users.get(user_id), self.membership(user_id, group, term))
        else {
            return Ok(None);
        };

        Ok(Some(AuthoritativeUser::new(
            identity.clone(),
            membership.clone(),
        )?))
    }

    async fn suspend_triggers(&mut self) -> DbResult<()> {
        self.suspend_calls += 1;
        if self.deny_suspend {
            return Err(DbError::insufficient_privilege(
                "permission denied to set parameter \"session_replication_role\"",
            ));
        }
        self.replica = true;
        Ok(())
    }

    async fn restore_triggers(&mut self) -> DbResult<()> {
        self.restore_calls += 1;
        if self.deny_suspend {
            return Err(DbError::insufficient_privilege(
                "permission denied to set parameter \"session_replication_role\"",
            ));
        }
        if self.fail_restore {
            return Err(failure("connection lost while restoring session"));
        }
        self.replica = false;
        Ok(())
    }

    async fn has_identity(&mut self, user_id: &str) -> DbResult<bool> {
        Ok(self.users.contains_key(user_id))
    }

    async fn insert_identity(&mut self, identity: &UserIdentity) -> DbResult<()> {
        if self.fail_identity_insert_for.as_deref() == Some(identity.user_id.as_str())
            || self.users.contains_key(&identity.user_id)
        {
            return Err(failure("duplicate key value violates unique constraint \"users_pkey\""));
        }
        self.record_write();
        self.users
            .insert(identity.user_id.clone(), identity.clone());
        Ok(())
    }

    async fn insert_membership(&mut self, membership: &GroupMembership) -> DbResult<()> {
        if self.stall_membership_insert_for.as_deref() == Some(membership.user_id.as_str()) {
            tokio::time::sleep(Duration::from_secs(30)).await;
        }
        if self.fail_membership_insert_for.as_deref() == Some(membership.user_id.as_str()) {
            return Err(failure("insert or update on table \"courses_users\" violates foreign key"));
        }
        self.record_write();
        self.memberships.push(membership.clone());
        Ok(())
    }

    async fn ping(&mut self) -> DbResult<()> {
        if self.fail_ping {
            return Err(failure("connection closed"));
        }
        Ok(())
    }
}

/// Contents of one course database.
#[derive(Debug, Default, Clone)]
pub struct CourseTable {
    pub users: BTreeMap<String, LocalUserRecord>,
    pub passwords: BTreeMap<String, String>,
    pub updates: usize,
    pub inserts: usize,
    pub fail_insert_for: Option<String>,
    /// Report zero rows touched for updates of this user
    pub lose_update_for: Option<String>,
}

#[derive(Debug, Default)]
struct ServerState {
    courses: BTreeMap<String, CourseTable>,
    unreachable: BTreeSet<String>,
    opened: usize,
    closed: usize,
    fail_close: bool,
}

/// Course database server. Stores it hands out share its state, so tests can inspect
/// course tables after the runner has closed them.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCourseServer {
    state: Arc<Mutex<ServerState>>,
}

impl InMemoryCourseServer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_course(&self, group: &str, records: Vec<LocalUserRecord>) {
        let table = CourseTable {
            users: records
                .into_iter()
                .map(|r| (r.user_id.clone(), r))
                .collect(),
            ..CourseTable::default()
        };
        self.state
            .lock()
            .unwrap()
            .courses
            .insert(group.to_string(), table);
    }

    pub fn mark_unreachable(&self, group: &str) {
        self.state
            .lock()
            .unwrap()
            .unreachable
            .insert(group.to_string());
    }

    pub fn fail_close(&self) {
        self.state.lock().unwrap().fail_close = true;
    }

    pub fn edit_course(&self, group: &str, edit: impl FnOnce(&mut CourseTable)) {
        let mut state = self.state.lock().unwrap();
        edit(state.courses.get_mut(group).unwrap());
    }

    pub fn course(&self, group: &str) -> CourseTable {
        self.state.lock().unwrap().courses[group].clone()
    }

    pub fn opened(&self) -> usize {
        self.state.lock().unwrap().opened
    }

    pub fn closed(&self) -> usize {
        self.state.lock().unwrap().closed
    }
}

#[async_trait]
impl LocalStoreConnector for InMemoryCourseServer {
    type Store = InMemoryCourseStore;

    async fn connect(&self, group: &str, term: Term) -> DbResult<InMemoryCourseStore> {
        let mut state = self.state.lock().unwrap();
        let database = format!("submitty_{}_{}", term, group);

        if state.unreachable.contains(group) || !state.courses.contains_key(group) {
            return Err(DbError::connection(database, sqlx::Error::PoolTimedOut));
        }

        state.opened += 1;
        Ok(InMemoryCourseStore {
            group: group.to_string(),
            state: Arc::clone(&self.state),
        })
    }
}

pub struct InMemoryCourseStore {
    group: String,
    state: Arc<Mutex<ServerState>>,
}

impl InMemoryCourseStore {
    fn with_table<R>(&self, f: impl FnOnce(&mut CourseTable) -> R) -> R {
        let mut state = self.state.lock().unwrap();
        f(state.courses.get_mut(&self.group).unwrap())
    }
}

#[async_trait]
impl LocalStore for InMemoryCourseStore {
    async fn user_ids(&mut self) -> DbResult<BTreeSet<String>> {
        Ok(self.with_table(|t| t.users.keys().cloned().collect()))
    }

    async fn find_user(&mut self, user_id: &str) -> DbResult<Option<LocalUserRecord>> {
        Ok(self.with_table(|t| t.users.get(user_id).cloned()))
    }

    async fn update_user(&mut self, record: &LocalUserRecord) -> DbResult<u64> {
        Ok(self.with_table(|t| {
            if t.lose_update_for.as_deref() == Some(record.user_id.as_str()) {
                return 0;
            }
            match t.users.get_mut(&record.user_id) {
                Some(row) => {
                    *row = record.clone();
                    t.updates += 1;
                    1
                }
                None => 0,
            }
        }))
    }

    async fn insert_user(
        &mut self,
        record: &LocalUserRecord,
        password_placeholder: &str,
    ) -> DbResult<()> {
        self.with_table(|t| {
            if t.fail_insert_for.as_deref() == Some(record.user_id.as_str())
                || t.users.contains_key(&record.user_id)
            {
                return Err(failure("duplicate key value violates unique constraint"));
            }
            t.users.insert(record.user_id.clone(), record.clone());
            t.passwords
                .insert(record.user_id.clone(), password_placeholder.to_string());
            t.inserts += 1;
            Ok(())
        })
    }

    async fn close(self) -> DbResult<()> {
        let mut state = self.state.lock().unwrap();
        state.closed += 1;
        if state.fail_close {
            return Err(failure("close failed"));
        }
        Ok(())
    }
}
