pub mod docs;
pub mod home;
pub mod not_found;
