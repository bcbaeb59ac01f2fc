//! Storage abstraction and backends.
//!
//! The `Storage` trait covers the object-store operations the upload flow
//! performs: store a file under a key, generate a time-limited retrieval
//! link, and read it back. Keys equal the uploaded file name exactly, so a
//! re-used name silently overwrites the previous object.

pub mod factory;
pub mod local;
pub mod s3;
pub mod traits;

pub use factory::create_storage;
pub use filedrop_core::StorageBackend;
pub use local::LocalStorage;
pub use s3::S3Storage;
pub use traits::{Storage, StorageError, StorageResult};
