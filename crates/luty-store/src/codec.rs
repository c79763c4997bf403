//! JSON flat-file codec.
//!
//! Decodes a file into a record tree and encodes a record tree back to disk.
//! Output is pretty-printed with a trailing newline; key order follows struct
//! field order, so repeated saves of the same data are byte-identical.
//!
//! Writes go to a temporary file in the destination directory which is then
//! renamed over the target, so a crash mid-write leaves the previous file
//! intact.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::error::StoreError;

/// Read and decode a record tree.
///
/// # Errors
///
/// Returns [`StoreError::NotFound`] if the file is absent,
/// [`StoreError::Decode`] if the content is malformed, and
/// [`StoreError::Io`] for any other read failure.
pub fn load<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StoreError::NotFound {
                path: path.to_path_buf(),
            });
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Encode a record tree as pretty JSON.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] if serialization fails.
pub fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, StoreError> {
    let mut bytes = serde_json::to_vec_pretty(value).map_err(StoreError::Encode)?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Encode and write a record tree.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] or [`StoreError::Io`].
pub fn save<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let bytes = encode(value)?;
    write_atomic(path, &bytes)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "saved store file");
    Ok(())
}

/// Write `bytes` to `path` via a temporary sibling file and a rename.
///
/// # Errors
///
/// Returns [`StoreError::Io`] if the temporary file cannot be created,
/// written, synced or persisted.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp.write_all(bytes).map_err(io_err)?;
    temp.as_file().sync_all().map_err(io_err)?;
    temp.persist(path).map_err(|e| io_err(e.error))?;
    Ok(())
}
