pub mod enquiry;
pub mod subscriber;

pub use enquiry::{
    DashboardSummary, Enquiry, EnquiryFields, EnquiryFilter, EnquiryListing, EnquiryStatus,
    MissingFields, NewEnquiry, StatusCount, StatusFilter, UnknownStatus,
};
pub use subscriber::{InvalidEmail, Subscriber, SubscriberEmail};
