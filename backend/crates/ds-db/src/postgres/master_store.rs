use crate::{AuthoritativeStore, ConnectionSettings, DbError, Result as DbErrorResult};

use ds_core::{AuthoritativeUser, GroupMembership, Term, UserIdentity};

use std::collections::BTreeSet;

use async_trait::async_trait;
use log::debug;
use sqlx::{Connection, FromRow, PgConnection};

#[derive(Debug, FromRow)]
struct MemberRow {
    user_id: String,
    user_firstname: String,
    user_preferred_firstname: Option<String>,
    user_lastname: String,
    user_email: String,
    user_group: i32,
    registration_section: Option<String>,
    manual_registration: bool,
}

impl MemberRow {
    fn into_user(self, group: &str, term: Term) -> DbErrorResult<AuthoritativeUser> {
        let identity = UserIdentity {
            user_id: self.user_id.clone(),
            first_name: self.user_firstname,
            preferred_first_name: self.user_preferred_firstname,
            last_name: self.user_lastname,
            email: self.user_email,
        };
        let membership = GroupMembership {
            user_id: self.user_id,
            group: group.to_string(),
            term,
            user_group: self.user_group,
            registration_section: self.registration_section,
            manual_registration: self.manual_registration,
        };

        Ok(AuthoritativeUser::new(identity, membership)?)
    }
}

/// The Submitty master database, held on one dedicated connection.
///
/// A single connection rather than a pool: `session_replication_role` is a session setting
/// and must stay on the session that performs the reverse inserts.
pub struct PgMasterStore {
    conn: PgConnection,
}

impl PgMasterStore {
    pub async fn connect(settings: &ConnectionSettings, database: &str) -> DbErrorResult<Self> {
        let conn = PgConnection::connect_with(&settings.connect_options(database))
            .await
            .map_err(|e| DbError::connection(database, e))?;

        Ok(Self { conn })
    }

    pub async fn close(self) -> DbErrorResult<()> {
        self.conn.close().await?;
        Ok(())
    }
}

#[async_trait]
impl AuthoritativeStore for PgMasterStore {
    async fn list_groups(&mut self, term: Term) -> DbErrorResult<Vec<String>> {
        let courses = sqlx::query_scalar::<_, String>(
            "SELECT course FROM courses WHERE semester = $1 ORDER BY course",
        )
        .bind(term.to_string())
        .fetch_all(&mut self.conn)
        .await?;

        Ok(courses)
    }

    async fn member_ids(&mut self, group: &str, term: Term) -> DbErrorResult<BTreeSet<String>> {
        let ids = sqlx::query_scalar::<_, String>(
            "SELECT user_id FROM courses_users WHERE course = $1 AND semester = $2",
        )
        .bind(group)
        .bind(term.to_string())
        .fetch_all(&mut self.conn)
        .await?;

        Ok(ids.into_iter().collect())
    }

    async fn find_member(
        &mut self,
        user_id: &str,
        group: &str,
        term: Term,
    ) -> DbErrorResult<Option<AuthoritativeUser>> {
        let row = sqlx::query_as::<_, MemberRow>(
            r#"
                SELECT u.user_id, u.user_firstname, u.user_preferred_firstname,
                       u.user_lastname, u.user_email,
                       cu.user_group, cu.registration_section, cu.manual_registration
                FROM users u
                JOIN courses_users cu ON cu.user_id = u.user_id
                WHERE u.user_id = $1 AND cu.course = $2 AND cu.semester = $3
                "#,
        )
        .bind(user_id)
        .bind(group)
        .bind(term.to_string())
        .fetch_optional(&mut self.conn)
        .await?;

        row.map(|r| r.into_user(group, term)).transpose()
    }

    async fn suspend_triggers(&mut self) -> DbErrorResult<()> {
        debug!("Setting session_replication_role = replica");
        sqlx::query("SET session_replication_role = replica")
            .execute(&mut self.conn)
            .await
            .map_err(DbError::classify)?;

        Ok(())
    }

    async fn restore_triggers(&mut self) -> DbErrorResult<()> {
        debug!("Setting session_replication_role = DEFAULT");
        sqlx::query("SET session_replication_role = DEFAULT")
            .execute(&mut self.conn)
            .await
            .map_err(DbError::classify)?;

        Ok(())
    }

    async fn has_identity(&mut self, user_id: &str) -> DbErrorResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM users WHERE user_id = $1)",
        )
        .bind(user_id)
        .fetch_one(&mut self.conn)
        .await?;

        Ok(exists)
    }

    async fn insert_identity(&mut self, identity: &UserIdentity) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users
                  (user_id, user_firstname, user_preferred_firstname, user_lastname, user_email)
              VALUES ($1, $2, $3, $4, $5)
              "#,
        )
        .bind(&identity.user_id)
        .bind(&identity.first_name)
        .bind(&identity.preferred_first_name)
        .bind(&identity.last_name)
        .bind(&identity.email)
        .execute(&mut self.conn)
        .await?;

        Ok(())
    }

    async fn insert_membership(&mut self, membership: &GroupMembership) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO courses_users
                  (semester, course, user_id, user_group, registration_section, manual_registration)
              VALUES ($1, $2, $3, $4, $5, $6)
              "#,
        )
        .bind(membership.term.to_string())
        .bind(&membership.group)
        .bind(&membership.user_id)
        .bind(membership.user_group)
        .bind(&membership.registration_section)
        .bind(membership.manual_registration)
        .execute(&mut self.conn)
        .await?;

        Ok(())
    }

    async fn ping(&mut self) -> DbErrorResult<()> {
        self.conn.ping().await?;
        Ok(())
    }
}
