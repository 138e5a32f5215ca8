use crate::{LocalStore, Result as DbErrorResult};

use ds_core::LocalUserRecord;

use std::collections::BTreeSet;

use async_trait::async_trait;
use log::debug;
use sqlx::{Connection, FromRow, PgConnection};

#[derive(Debug, FromRow)]
struct CourseUserRow {
    user_id: String,
    user_firstname: String,
    user_preferred_firstname: Option<String>,
    user_lastname: String,
    user_email: String,
    user_group: i32,
    registration_section: Option<String>,
    manual_registration: bool,
}

impl From<CourseUserRow> for LocalUserRecord {
    fn from(row: CourseUserRow) -> Self {
        Self {
            user_id: row.user_id,
            first_name: row.user_firstname,
            preferred_first_name: row.user_preferred_firstname,
            last_name: row.user_lastname,
            email: row.user_email,
            user_group: row.user_group,
            registration_section: row.registration_section,
            manual_registration: row.manual_registration,
        }
    }
}

/// A single course database (`submitty_{term}_{course}`).
pub struct PgCourseStore {
    database: String,
    conn: PgConnection,
}

impl PgCourseStore {
    pub(crate) fn new(database: String, conn: PgConnection) -> Self {
        Self { database, conn }
    }
}

#[async_trait]
impl LocalStore for PgCourseStore {
    async fn user_ids(&mut self) -> DbErrorResult<BTreeSet<String>> {
        let ids = sqlx::query_scalar::<_, String>("SELECT user_id FROM users")
            .fetch_all(&mut self.conn)
            .await?;

        Ok(ids.into_iter().collect())
    }

    async fn find_user(&mut self, user_id: &str) -> DbErrorResult<Option<LocalUserRecord>> {
        let row = sqlx::query_as::<_, CourseUserRow>(
            r#"
                SELECT user_id, user_firstname, user_preferred_firstname, user_lastname,
                       user_email, user_group, registration_section, manual_registration
                FROM users
                WHERE user_id = $1
                "#,
        )
        .bind(user_id)
        .fetch_optional(&mut self.conn)
        .await?;

        Ok(row.map(LocalUserRecord::from))
    }

    async fn update_user(&mut self, record: &LocalUserRecord) -> DbErrorResult<u64> {
        let result = sqlx::query(
            r#"
              UPDATE users
              SET user_firstname = $1, user_preferred_firstname = $2, user_lastname = $3,
                  user_email = $4, user_group = $5, registration_section = $6,
                  manual_registration = $7
              WHERE user_id = $8
              "#,
        )
        .bind(&record.first_name)
        .bind(&record.preferred_first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(record.user_group)
        .bind(&record.registration_section)
        .bind(record.manual_registration)
        .bind(&record.user_id)
        .execute(&mut self.conn)
        .await?;

        Ok(result.rows_affected())
    }

    async fn insert_user(
        &mut self,
        record: &LocalUserRecord,
        password_placeholder: &str,
    ) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users
                  (user_id, user_password, user_firstname, user_preferred_firstname,
                   user_lastname, user_email, user_group, registration_section,
                   manual_registration)
              VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
              "#,
        )
        .bind(&record.user_id)
        .bind(password_placeholder)
        .bind(&record.first_name)
        .bind(&record.preferred_first_name)
        .bind(&record.last_name)
        .bind(&record.email)
        .bind(record.user_group)
        .bind(&record.registration_section)
        .bind(record.manual_registration)
        .execute(&mut self.conn)
        .await?;

        Ok(())
    }

    async fn close(self) -> DbErrorResult<()> {
        debug!("Closing course database {}", self.database);
        self.conn.close().await?;
        Ok(())
    }
}
