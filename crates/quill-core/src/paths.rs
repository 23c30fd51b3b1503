//! Path resolution
//!
//! Maps collection and resource names onto the on-disk layout:
//!
//! ```text
//! <root>/<collection>/<resource>.json
//! <root>/<collection>/<resource>.json.tmp   (in-flight write)
//! ```

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::path::{Component, Path, PathBuf};

/// Extension of a published resource file
pub const RESOURCE_EXTENSION: &str = "json";

/// Suffix appended to a resource path while it is being written
pub const TEMP_SUFFIX: &str = ".tmp";

/// Pure mapping from names to paths under a fixed root
#[derive(Debug, Clone)]
pub struct Layout {
    root: PathBuf,
}

impl Layout {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: clean(root.as_ref()),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding every resource of `collection`
    pub fn collection_dir(&self, collection: &str) -> PathBuf {
        self.root.join(collection)
    }

    /// Final path of a resource document
    pub fn resource_path(&self, collection: &str, resource: &str) -> PathBuf {
        self.collection_dir(collection)
            .join(format!("{}.{}", resource, RESOURCE_EXTENSION))
    }

    /// Bare (extension-less) path of a resource, or the collection dir when
    /// `resource` is empty
    pub fn bare_path(&self, collection: &str, resource: &str) -> PathBuf {
        self.root.join(logical_path(collection, resource))
    }
}

/// Root-relative `collection/resource` path used in lookup errors
pub fn logical_path(collection: &str, resource: &str) -> PathBuf {
    if resource.is_empty() {
        PathBuf::from(collection)
    } else {
        Path::new(collection).join(resource)
    }
}

/// Sibling temp path for an atomic write of `final_path`
pub fn temp_path(final_path: &Path) -> PathBuf {
    with_suffix(final_path, TEMP_SUFFIX)
}

/// True for names of in-flight temp files
pub fn is_temp_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.ends_with(TEMP_SUFFIX))
}

/// Resolve a delete target: the bare path first, then the `.json` form.
///
/// Returns the path that exists together with its metadata, or `None` when
/// neither form is present.
pub fn probe(bare: &Path) -> Option<(PathBuf, Metadata)> {
    if let Ok(meta) = fs::metadata(bare) {
        return Some((bare.to_path_buf(), meta));
    }

    let json = with_suffix(bare, ".json");
    fs::metadata(&json).ok().map(|meta| (json, meta))
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Lexically clean a path: drop `.` components, fold `..` into its parent,
/// and collapse repeated separators. An empty result becomes `.`.
pub fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }

    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().collect()
}
