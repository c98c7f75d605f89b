mod enquiries;

pub use enquiries::cmd_list_enquiries;
