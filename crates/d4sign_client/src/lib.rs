pub mod client;
pub mod error;
pub mod models;
pub mod traits;

pub use client::{D4SignClient, D4SignConfig, D4SignCredentials};
pub use error::D4SignClientError;
pub use traits::D4SignApi;
