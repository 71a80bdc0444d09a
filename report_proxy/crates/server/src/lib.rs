pub mod error;
pub mod handlers;
pub mod headers;
pub mod init;
