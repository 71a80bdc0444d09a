pub mod common_resp;
pub mod config_path;
pub mod config_variant;
pub mod env_parser;
pub mod http_client;
pub mod logger;
