//! Quill Core Library
//!
//! An embedded, filesystem-backed JSON document store. A root directory
//! stands in for the database, each sub-directory is a collection, and each
//! `<resource>.json` file inside a collection is one document.
//!
//! # Guarantees
//!
//! - Writes and deletes on the same collection are serialized by a
//!   per-collection lock.
//! - Documents are published with write-temp-then-rename, so a reader never
//!   observes a partially written file.
//! - Reads take no lock.
//!
//! # Modules
//!
//! - `driver`: Public entry point (`Driver`, `Options`)
//! - `error`: Typed errors carrying the offending path and cause
//! - `locks`: Per-collection lock registry
//! - `writer`: Atomic JSON publishing
//! - `paths`: Name-to-path mapping
//! - `logger`: Pluggable leveled logging

pub mod driver;
pub mod error;
pub mod locks;
pub mod logger;
pub mod paths;
pub mod writer;

pub use driver::{Driver, Options};
pub use error::{StoreError, StoreResult};
pub use locks::LockRegistry;
pub use logger::{LogLevel, Logger, NoopLogger, TracingLogger};
