//! Fluent in-memory containers over nested dynamic data.
//!
//! This library wraps plain nested data in chainable container types for
//! iteration, transformation, filtering and JSON serialization:
//!
//! * **[`Collection`]**: an ordered, index-addressable sequence with fluent
//!   mutators, an internal cursor for step-wise iteration, and
//!   chunking/merging/sorting operations.
//! * **[`Map`]**: a string-keyed associative container with insertion-order
//!   iteration, an optional locked key set, and optional recursive wrapping of
//!   nested data into containers.
//! * **[`PropertyHolder`]**: a minimal get/set/has/remove property bag, the
//!   simplest sibling of [`Map`].
//! * **[`Value`]**: the dynamically typed value all three containers store.
//!
//! Data flows one direction: raw nested data is wrapped into containers,
//! manipulated through chained calls, and unwrapped back into plain structures
//! or JSON text.
//!
//! ```
//! use arraytools::Collection;
//!
//! let mut ages = Collection::from_values([44, 27, 34]);
//! ages.filter(|age, _| age.as_int().is_some_and(|n| n < 40))
//!     .sort(|a, b| a.as_int().cmp(&b.as_int()));
//! assert_eq!(ages.to_json().unwrap(), "[27,34]");
//! ```
//!
//! The containers are single-threaded conveniences for short-lived
//! request/script contexts. They do no internal locking; callers that share an
//! instance across threads must serialize access themselves.

pub mod collection;
pub mod errors;
pub mod map;
pub mod properties;
pub mod value;

pub use collection::Collection;
pub use errors::ContainerError;
pub use map::{Map, MapOptions};
pub use properties::PropertyHolder;
pub use value::Value;

/// Result type used throughout the library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Structured container errors
    #[error(transparent)]
    Container(ContainerError),
}

impl Error {
    /// Check if this error is a locked-key violation.
    pub fn is_unknown_key(&self) -> bool {
        match self {
            Error::Container(err) => err.is_unknown_key(),
            _ => false,
        }
    }

    /// Check if this error is a type mismatch.
    pub fn is_type_mismatch(&self) -> bool {
        match self {
            Error::Container(err) => err.is_type_mismatch(),
            _ => false,
        }
    }

    /// Check if this error is serialization-related.
    pub fn is_serialization(&self) -> bool {
        matches!(self, Error::Serialize(_))
    }
}
