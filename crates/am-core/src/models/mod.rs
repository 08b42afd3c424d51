pub mod identity_record;
pub mod role;
pub mod user_id;
