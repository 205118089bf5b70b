pub mod attendance;
pub mod employee;
pub mod metrics;
pub mod profile;
pub mod project;
pub mod request;
