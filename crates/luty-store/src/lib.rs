//! # luty-store
//!
//! JSON flat-file persistence for lutymaps.
//!
//! Three layers, leaves first:
//! - [`codec`] reads and writes a record tree to disk
//! - [`records`] is the record tree itself, shaped exactly like the file
//! - [`adapters`] maps record trees to `luty-core` stores and back
//!
//! The `load_*`/`save_*` helpers below compose the three. A missing galaxy or
//! account file loads as an empty store; malformed content is an error.

pub mod adapters;
pub mod codec;
pub mod error;
pub mod records;

use std::path::Path;

use luty_core::{AccountStore, GalaxyStore};

pub use error::StoreError;
use records::{AccountsFile, GalaxyFile};

/// Load a galaxy store. A missing file yields an empty store.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] for malformed content and
/// [`StoreError::Io`] for other read failures.
pub fn load_galaxy_store(path: &Path) -> Result<GalaxyStore, StoreError> {
    match codec::load::<GalaxyFile>(path) {
        Ok(file) => {
            let store = adapters::galaxy_to_memory(&file);
            tracing::debug!(path = %path.display(), systems = store.len(), "loaded galaxy");
            Ok(store)
        }
        Err(StoreError::NotFound { path }) => {
            tracing::warn!(path = %path.display(), "galaxy file not found; using empty store");
            Ok(GalaxyStore::new())
        }
        Err(e) => Err(e),
    }
}

/// Save a galaxy store.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] or [`StoreError::Io`].
pub fn save_galaxy_store(path: &Path, store: &GalaxyStore) -> Result<(), StoreError> {
    codec::save(path, &adapters::galaxy_to_persisted(store))
}

/// Load an account store. A missing file yields an empty store.
///
/// # Errors
///
/// Returns [`StoreError::Decode`] for malformed content and
/// [`StoreError::Io`] for other read failures.
pub fn load_account_store(path: &Path) -> Result<AccountStore, StoreError> {
    match codec::load::<AccountsFile>(path) {
        Ok(file) => Ok(adapters::accounts_to_memory(&file)),
        Err(StoreError::NotFound { path }) => {
            tracing::warn!(path = %path.display(), "accounts file not found; using empty store");
            Ok(AccountStore::new())
        }
        Err(e) => Err(e),
    }
}

/// Save an account store in deterministic order.
///
/// # Errors
///
/// Returns [`StoreError::Encode`] or [`StoreError::Io`].
pub fn save_account_store(path: &Path, store: &AccountStore) -> Result<(), StoreError> {
    codec::save(path, &adapters::accounts_to_persisted(store))
}
