pub mod error;
pub mod postgres;
pub mod store;


pub use error::{DbError, Result, SQLSTATE_INSUFFICIENT_PRIVILEGE, is_privilege_code};
pub use postgres::connection_settings::ConnectionSettings;
pub use postgres::course_connector::{PgCourseConnector, course_database_name};
pub use postgres::course_store::PgCourseStore;
pub use postgres::master_store::PgMasterStore;
pub use store::authoritative_store::AuthoritativeStore;
pub use store::local_store::LocalStore;
pub use store::local_store_connector::LocalStoreConnector;
