pub mod admin_user;
pub mod enquiry;
pub mod subscriber;
