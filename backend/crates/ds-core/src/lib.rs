pub mod error;
pub mod models;
pub mod partition;
pub mod term;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::authoritative_user::AuthoritativeUser;
pub use models::group_membership::GroupMembership;
pub use models::local_user_record::LocalUserRecord;
pub use models::user_identity::UserIdentity;
pub use partition::{IdentityPartition, partition};
pub use term::{Season, Term};

pub use error_location::ErrorLocation;
