//! # rickdex-core - Core Domain Types
//!
//! Foundation crate for rickdex. Provides the character domain types, error
//! handling, logging setup, name search and page arithmetic.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`character`, `page`)
//! - [`Character`] - A single character record as returned by the API
//! - [`CharacterStatus`] - Alive / Dead / unknown
//! - [`LocationRef`] - Named link to an origin or location resource
//! - [`CharacterPage`], [`PageInfo`] - One page of the character collection
//!
//! ### List View Logic (`search`, `pagination`)
//! - [`filter_by_name()`] - Case-insensitive substring filter over a loaded page
//! - [`Pagination`] - Current page, cached total and control targets
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use rickdex_core::prelude::*;
//! ```

pub mod character;
pub mod error;
pub mod logging;
pub mod page;
pub mod pagination;
pub mod search;

/// Prelude for common imports used throughout all rickdex crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use character::{Character, CharacterStatus, LocationRef};
pub use error::{Error, Result, ResultExt};
pub use page::{CharacterPage, PageInfo};
pub use pagination::Pagination;
pub use search::filter_by_name;
