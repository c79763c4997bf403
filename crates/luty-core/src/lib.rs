//! # luty-core
//!
//! Core types for lutymaps.
//!
//! This crate provides the in-memory model shared by every other crate:
//! - Star systems placed on an integer 3-D grid, with a closed classification enum
//! - The galaxy store that owns them, in file order
//! - Credential records and the account store keyed by id
//! - Region predicates used to select a sector of the galaxy
//!
//! Nothing here touches the filesystem; persistence lives in `luty-store`.

pub mod accounts;
pub mod errors;
pub mod galaxy;
pub mod region;

pub use accounts::{Account, AccountStore};
pub use errors::CoreError;
pub use galaxy::{GalaxyStore, System, SystemKind};
pub use region::{Region, Sector};
