pub mod auth_service;
pub use auth_service::AuthService;

pub mod auth_service_impl;
pub use auth_service_impl::SeaOrmAuthService;

pub mod enquiry_service;
pub use enquiry_service::{EnquiryError, EnquiryService};

pub mod enquiry_service_impl;
pub use enquiry_service_impl::SeaOrmEnquiryService;

pub mod subscription_service;
pub use subscription_service::{SubscriptionError, SubscriptionService};

pub mod subscription_service_impl;
pub use subscription_service_impl::SeaOrmSubscriptionService;
