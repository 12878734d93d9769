pub mod config;
pub mod service_worker;
