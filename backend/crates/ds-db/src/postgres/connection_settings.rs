use std::fmt;

use sqlx::postgres::PgConnectOptions;

const APPLICATION_NAME: &str = "db-sync";

/// Server and credentials shared by the master and every course database.
#[derive(Clone)]
pub struct ConnectionSettings {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: Option<String>,
}

impl ConnectionSettings {
    pub fn connect_options(&self, database: &str) -> PgConnectOptions {
        let options = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.username)
            .database(database)
            .application_name(APPLICATION_NAME);

        match self.password {
            Some(ref password) => options.password(password),
            None => options,
        }
    }
}

impl fmt::Debug for ConnectionSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
