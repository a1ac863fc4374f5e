pub mod client_config;
pub mod endpoints;
pub mod query_params;
