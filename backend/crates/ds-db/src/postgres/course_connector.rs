use crate::{
    ConnectionSettings, DbError, LocalStoreConnector, PgCourseStore, Result as DbErrorResult,
};

use ds_core::Term;

use async_trait::async_trait;
use log::debug;
use sqlx::{Connection, PgConnection};

/// Opens `{prefix}_{term}_{course}` databases on the configured server.
pub struct PgCourseConnector {
    settings: ConnectionSettings,
    database_prefix: String,
}

impl PgCourseConnector {
    pub fn new(settings: ConnectionSettings, database_prefix: impl Into<String>) -> Self {
        Self {
            settings,
            database_prefix: database_prefix.into(),
        }
    }

    pub fn database_name(&self, group: &str, term: Term) -> String {
        course_database_name(&self.database_prefix, group, term)
    }
}

pub fn course_database_name(prefix: &str, group: &str, term: Term) -> String {
    format!("{}_{}_{}", prefix, term, group)
}

#[async_trait]
impl LocalStoreConnector for PgCourseConnector {
    type Store = PgCourseStore;

    async fn connect(&self, group: &str, term: Term) -> DbErrorResult<PgCourseStore> {
        let database = self.database_name(group, term);
        debug!("Connecting to course database {}", database);

        let conn = PgConnection::connect_with(&self.settings.connect_options(&database))
            .await
            .map_err(|e| DbError::connection(database.clone(), e))?;

        Ok(PgCourseStore::new(database, conn))
    }
}
