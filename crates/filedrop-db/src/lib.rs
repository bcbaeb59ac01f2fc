//! Database-backed stores: user credentials and per-upload metadata.
//!
//! Both stores are exposed through async traits so callers can be exercised
//! against in-memory fakes; the Postgres implementations live here.

pub mod records;
pub mod users;

pub use records::{MetadataStore, PgMetadataStore};
pub use users::{CredentialStore, UserRepository};
