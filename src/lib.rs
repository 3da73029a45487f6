// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # propkeys
//!
//! Stable integer codes for UI component property keys, shared with a native rendering
//! engine across a binding boundary.
//!
//! Each property key is a symbolic name (`kPropertyScrollDirection`) paired with an integer
//! code. The codes are a wire-level contract: the host and the engine must agree on them
//! exactly, version for version. This crate provides those tables and nothing that
//! interprets what the keys mean.
//!
//! ## Features
//!
//! - **Versioned tables** - Each table version is its own enum, so codes of different versions
//!   cannot be mixed without an explicit [`diff::translate`]
//! - **Total, inverse lookups** - `code_of` / `name_of` over a version, `NotFound` outside it
//! - **Dirty sets** - [`keyset::PropertyKeySet`], a `Copy` bitset of keys
//! - **Wire encoding** - JSON arrays of codes via [`wire`]
//!
//! ## Quick Start
//!
//! ### Using the Prelude
//!
//! ```rust
//! use propkeys::prelude::*;
//!
//! let table = PropertyKeyTable::new(TableVersion::Current);
//! assert_eq!(table.code_of("kPropertyOpacity")?, 116);
//! assert_eq!(table.name_of(116)?, "kPropertyOpacity");
//! # Ok::<(), propkeys::Error>(())
//! ```
//!
//! ### Typed keys
//!
//! ```rust
//! use propkeys::tables::{current::PropertyKey, KeyTable};
//!
//! let key: PropertyKey = "kPropertyScrollDirection".parse()?;
//! assert_eq!(key, PropertyKey::ScrollDirection);
//! assert_eq!(key.code(), 0);
//! # Ok::<(), propkeys::Error>(())
//! ```
//!
//! ## Table versions
//!
//! | Version   | Entries | Max code |
//! |-----------|---------|----------|
//! | `Current` | 182     | 181      |
//! | `Legacy`  | 175     | 174      |
//!
//! Which version a host uses is a configuration decision, see [`config::TableConfig`].
//! Codes within a version are never renumbered; new keys are appended.

#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;

/// Shared imports for the common use cases
pub mod prelude;

/// Table selection and name matching policy
pub mod config;
/// Comparison and code translation between table versions
pub mod diff;
/// Fixed-capacity key sets
pub mod keyset;
/// Versioned `PropertyKey` enums
pub mod tables;
/// Encoding of keys at the binding boundary
pub mod wire;

mod table;
mod version;

/// `propkeys` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `propkeys` Error type
///
/// Every fallible operation in this crate returns this type. Failed lookups surface as
/// [`Error::NameNotFound`] or [`Error::CodeNotFound`].
pub use error::Error;

/// Version-erased name and code lookups
pub use table::PropertyKeyTable;

/// Table version tag
pub use version::TableVersion;

/// Table selection and name matching policy
pub use config::TableConfig;
