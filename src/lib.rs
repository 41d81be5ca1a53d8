//! Object-storage media backend for a CMS host.
//!
//! Implements the host's five-operation storage contract (`save`, `exists`,
//! `serve`, `delete`, `read`) against an S3-compatible object-storage
//! service. Uploads land under time-based folders and come back as absolute
//! public URLs, so `serve` is a passthrough and nothing is kept on local
//! disk. The vendor client sits behind the narrow [`ObjectClient`] trait so
//! hosts and tests can substitute their own.

pub mod adapters;
pub mod middleware;
pub mod model;
pub mod storage;
pub mod util;

pub use adapters::{ClientError, ObjectClient, PutResponse};
pub use middleware::{Passthrough, PassthroughLayer};
pub use model::config::StorageConfig;
pub use model::error::StorageError;
pub use storage::{ObjectStorage, ReadOptions, StorageAdapter, UploadedFile};
