//! Store driver
//!
//! The `Driver` is the entry point for all store operations. Writes and
//! deletes take the collection's lock from the [`LockRegistry`]; reads go
//! straight to disk and rely on atomic publishing for consistency.
//!
//! ## Usage
//!
//! ```no_run
//! use quill_core::{Driver, Options};
//! use serde::{Deserialize, Serialize};
//!
//! #[derive(Serialize, Deserialize)]
//! struct Fish {
//!     #[serde(rename = "type")]
//!     kind: String,
//! }
//!
//! # fn main() -> quill_core::StoreResult<()> {
//! let db = Driver::open("./deep/school", Options::default())?;
//! db.write("fish", "redfish", &Fish { kind: "red".into() })?;
//!
//! let fish: Fish = db.read("fish", "redfish")?;
//! let school = db.read_all("fish")?;
//! db.delete("fish", "")?;
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{StoreError, StoreResult};
use crate::locks::LockRegistry;
use crate::logger::{Logger, TracingLogger};
use crate::paths::{self, Layout};
use crate::writer;

/// Optional driver configuration
#[derive(Clone, Default)]
pub struct Options {
    /// Logger to report through; `TracingLogger` when unset
    pub logger: Option<Arc<dyn Logger>>,
}

impl Options {
    pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
        self.logger = Some(logger);
        self
    }
}

impl fmt::Debug for Options {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Options")
            .field("logger", &self.logger.as_ref().map(|_| "<custom>"))
            .finish()
    }
}

/// Filesystem-backed JSON document store
pub struct Driver {
    layout: Layout,
    locks: LockRegistry,
    log: Arc<dyn Logger>,
}

impl fmt::Debug for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Driver")
            .field("root", &self.layout.root())
            .field("collections", &self.locks.len())
            .finish()
    }
}

impl Driver {
    /// Open the store at `root`, creating the directory if it is absent
    ///
    /// An existing root is reused as-is; nothing in it is removed.
    pub fn open(root: impl AsRef<Path>, options: Options) -> StoreResult<Self> {
        let layout = Layout::new(root);
        let log = options
            .logger
            .unwrap_or_else(|| Arc::new(TracingLogger) as Arc<dyn Logger>);

        let root = layout.root();
        if root.exists() {
            log.debug(&format!(
                "Using '{}' (database already exists)",
                root.display()
            ));
        } else {
            log.debug(&format!("Creating database at '{}'", root.display()));
            fs::create_dir_all(root).map_err(|e| StoreError::file_io(root, e))?;
        }

        Ok(Self {
            layout,
            locks: LockRegistry::new(),
            log,
        })
    }

    /// The cleaned root directory of the store
    pub fn root(&self) -> &Path {
        self.layout.root()
    }

    /// Write `value` as `collection/resource`, replacing any previous version
    pub fn write<T>(&self, collection: &str, resource: &str, value: &T) -> StoreResult<()>
    where
        T: Serialize + ?Sized,
    {
        validate(collection, Some(resource))?;

        let lock = self.locks.acquire(collection);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let dir = self.layout.collection_dir(collection);
        let path = self.layout.resource_path(collection, resource);

        self.log.trace(&format!("Writing '{}/{}'", collection, resource));
        writer::publish(&dir, &path, value).inspect_err(|e| self.report(e))
    }

    /// Read and decode `collection/resource`
    ///
    /// Takes no lock: a concurrent write is observed either before or after
    /// its rename.
    pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> StoreResult<T> {
        validate(collection, Some(resource))?;

        let path = self.layout.resource_path(collection, resource);
        let bytes = fs::read(&path).map_err(|e| StoreError::file_io(&path, e))?;

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Raw contents of every resource in `collection`
    ///
    /// Buffers come back in directory enumeration order, which is not
    /// stable. In-flight temp files and sub-directories are skipped. Any
    /// unreadable file fails the whole call.
    pub fn read_all(&self, collection: &str) -> StoreResult<Vec<Vec<u8>>> {
        validate(collection, None)?;

        let dir = self.layout.collection_dir(collection);
        let entries = fs::read_dir(&dir).map_err(|e| StoreError::file_io(&dir, e))?;

        let mut records = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| StoreError::file_io(&dir, e))?;
            let path = entry.path();

            if paths::is_temp_file(&path) || entry.file_type().is_ok_and(|t| t.is_dir()) {
                continue;
            }

            let bytes = fs::read(&path).map_err(|e| StoreError::file_io(&path, e))?;
            records.push(bytes);
        }

        Ok(records)
    }

    /// Delete one resource, or the whole collection when `resource` is empty
    ///
    /// The bare path is probed first, then the `.json` form. A directory is
    /// removed recursively, a file on its own.
    pub fn delete(&self, collection: &str, resource: &str) -> StoreResult<()> {
        validate(collection, None)?;

        let lock = self.locks.acquire(collection);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let bare = self.layout.bare_path(collection, resource);
        let Some((target, meta)) = paths::probe(&bare) else {
            let logical = paths::logical_path(collection, resource);
            return Err(StoreError::not_found(logical));
        };

        let removed = if meta.is_dir() {
            self.log.debug(&format!("Removing directory '{}'", target.display()));
            fs::remove_dir_all(&target)
        } else {
            self.log.trace(&format!("Removing file '{}'", target.display()));
            fs::remove_file(&target)
        };

        removed
            .map_err(|e| StoreError::file_io(&target, e))
            .inspect_err(|e| self.report(e))
    }

    /// Path of a collection directory under the root
    pub fn collection_path(&self, collection: &str) -> PathBuf {
        self.layout.collection_dir(collection)
    }

    fn report(&self, err: &StoreError) {
        self.log.warn(&err.to_string());
    }
}

fn validate(collection: &str, resource: Option<&str>) -> StoreResult<()> {
    if collection.is_empty() {
        return Err(StoreError::MissingCollection);
    }
    if resource.is_some_and(str::is_empty) {
        return Err(StoreError::MissingResource);
    }
    Ok(())
}
