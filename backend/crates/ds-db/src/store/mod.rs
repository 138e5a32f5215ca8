//! Seams between the sync engine and the two kinds of database.
//!
//! Every method takes `&mut self`: each handle is one session, and the sync engine drives
//! it strictly sequentially.

pub mod authoritative_store;
pub mod local_store;
pub mod local_store_connector;
