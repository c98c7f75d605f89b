pub use super::admin_users::Entity as AdminUsers;
pub use super::enquiries::Entity as Enquiries;
pub use super::subscribers::Entity as Subscribers;
