mod identity_record;
mod role;
