pub mod prelude;

pub mod admin_users;
pub mod enquiries;
pub mod subscribers;
