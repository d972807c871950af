//! # hassgen-adapter-yaml-files
//!
//! Implements the [`PackageWriter`](hassgen_app::ports::PackageWriter) port
//! on the local filesystem.
//!
//! ## Layout
//! - `<output>/packages/{areas,floors,labels}/<scope>_<id>.yaml`
//! - `<output>/entity-reference.yaml`
//! - the naming report at a configured path (next to the inventory by default)
//! - the starter override file at a configured path, never overwritten
//!
//! Files are overwritten in place. Packages for partitions that no longer
//! qualify are left on disk.

pub mod error;
pub mod writer;

pub use error::WriterError;
pub use writer::{FileLayout, YamlFileWriter};
