pub mod connection_settings;
pub mod course_connector;
pub mod course_store;
pub mod master_store;
