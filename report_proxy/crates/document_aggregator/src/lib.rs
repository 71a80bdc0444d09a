pub mod aggregator;
pub mod cache;
pub mod error;
pub mod paginator;
pub mod safe_enumerator;
pub mod signer_lookup;
