pub mod config;
pub mod http;
pub mod lambda;
pub mod repositories;
pub mod request_id;
