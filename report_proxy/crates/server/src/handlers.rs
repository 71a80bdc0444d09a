pub mod get_document_contacts;
pub mod get_document_signers;
pub mod healthcheck;
pub mod list_account_documents;
pub mod list_documents;
pub mod list_safe_documents;
pub mod list_safes;
