//! # expected-rail
//!
//! A value-or-error container, [`Expected<T, E, H>`], whose behaviour is chosen
//! at compile time by a policy type `H` (a [`Hook`](hook::Hook)).
//!
//! The policy decides how the payload is stored (inline, or in a shared
//! reference counted block), which operations exist (empty construction,
//! cloning, value-less successes) and what happens on contract violations:
//! reading the value of a failed result, flipping the flavor of a
//! flag-constructed result, or dropping a result nobody inspected.
//!
//! # Examples
//!
//! ## Returning and chaining results
//!
//! ```
//! use expected_rail::Expected;
//!
//! fn divide(a: i32, b: i32) -> Expected<i32> {
//!     if b == 0 {
//!         return Expected::from_error("division by zero".to_string());
//!     }
//!     Expected::from_value(a / b)
//! }
//!
//! let quarter = divide(100, 2).and_then(|half| divide(half, 2));
//! assert_eq!(quarter.value(), 25);
//!
//! let message = divide(1, 0).map_or_else(|q| q.to_string(), |e| e);
//! assert_eq!(message, "division by zero");
//! ```
//!
//! ## Choosing a policy
//!
//! ```
//! use expected_rail::hook::{Minimal, RcAbort};
//! use expected_rail::Expected;
//!
//! // Minimal hands out defaults instead of panicking.
//! let failed = Expected::<i32, String, Minimal>::from_error("offline".to_string());
//! assert_eq!(failed.value(), 0);
//!
//! // RcAbort shares one payload between clones and insists it is inspected.
//! let shared = Expected::<i32, String, RcAbort>::from_value(5);
//! let other = shared.clone();
//! assert_eq!(shared.handle_count(), 2);
//! assert!(other.has_value());
//! ```
//!
//! ## Same value and error type
//!
//! ```
//! use expected_rail::{Expected, Flavor};
//!
//! let failed = Expected::<String, String>::with_flavor("disk full".to_string(), Flavor::Failure);
//! assert!(failed.has_error());
//! assert_eq!(failed.error(), "disk full");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Construction helpers, including panic capture under `std`
pub mod convert;
/// Stock and custom behaviour policies
pub mod hook;
/// Early-return macros
pub mod macros;
/// Free-function combinators
pub mod ops;
/// Compile-time policy resolution
pub mod policy;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Payload storage strategies
pub mod storage;
/// Extension traits for `Result` and `Option`
pub mod traits;
/// The container and its payload types
pub mod types;

pub use convert::{err, ok};
pub use hook::{Abort, Hook, Minimal, MustCheck, RcAbort};
pub use traits::{OptionExt, ResultExt};
pub use types::{BadAccess, Expected, Flavor, Payload, State, Unexpected};
