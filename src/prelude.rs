//! # propkeys Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the propkeys library.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all propkeys operations
pub use crate::Error;

/// The result type used throughout propkeys
pub use crate::Result;

/// Table selection and name matching policy
pub use crate::config::TableConfig;

// ================================================================================================
// Tables
// ================================================================================================

/// Table version tag and version-erased lookups
pub use crate::{PropertyKeyTable, TableVersion};

/// Shared interface of the versioned key enums, and the entry type they yield
pub use crate::tables::{Entry, KeyTable};

// ================================================================================================
// Sets and Wire Encoding
// ================================================================================================

/// Dirty property tracking
pub use crate::keyset::PropertyKeySet;

/// Dirty property message
pub use crate::wire::DirtyProperties;

/// Version comparison and translation
pub use crate::diff::{diff, translate, TableDiff};
