//! The [`Expected`] container and the types it is built from.
//!
//! # Examples
//!
//! ```
//! use expected_rail::types::{Expected, Payload, State};
//!
//! let loaded: Expected<Vec<u8>> = Expected::from_value(vec![1, 2, 3]);
//! assert_eq!(loaded.state(), State::Value);
//! assert_eq!(loaded.into_payload(), Payload::Value(vec![1, 2, 3]));
//! ```

pub mod alloc_type;
mod bad_access;
mod combinators;
mod expected;
mod iter;
mod payload;
#[cfg(feature = "serde")]
mod serde_impl;
mod unexpected;

pub use bad_access::BadAccess;
pub use expected::Expected;
pub use iter::{IntoIter, Iter};
pub use payload::{Flavor, Payload, State};
pub use unexpected::Unexpected;
