//! Atomic document publishing
//!
//! 1. Create the collection directory if needed
//! 2. Encode the value as tab-indented JSON plus a trailing newline
//! 3. Write the bytes to `<final>.tmp` and sync it
//! 4. Rename the temp file over the final path
//!
//! Readers of the final path see either the previous document or the new
//! one, never a partial write. This relies on rename being atomic within a
//! single filesystem.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{StoreError, StoreResult};
use crate::paths::temp_path;

/// Encode `value` in the on-disk format
pub fn encode<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(b"\t");
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

/// Encode `value` and publish it at `final_path` inside `dir`
///
/// Encoding happens before any filesystem change, so an unencodable value
/// leaves the store untouched.
pub fn publish<T>(dir: &Path, final_path: &Path, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
{
    let bytes = encode(value)?;

    fs::create_dir_all(dir).map_err(|e| StoreError::file_io(dir, e))?;

    let tmp = temp_path(final_path);
    if let Err(e) = write_temp(&tmp, &bytes) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::file_io(&tmp, e));
    }

    fs::rename(&tmp, final_path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        StoreError::file_io(final_path, e)
    })
}

fn write_temp(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
