pub mod authoritative_user;
pub mod group_membership;
pub mod local_user_record;
pub mod user_identity;
