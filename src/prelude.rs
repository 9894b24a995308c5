//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use expected_rail::prelude::*;
//!
//! fn lookup(id: u32) -> Expected<&'static str> {
//!     ensure!(id < 3, format!("unknown id {id}"));
//!     ["root", "admin", "guest"].get(id as usize).copied().ok_or_expected("gap".to_string())
//! }
//!
//! fn greeting(id: u32) -> Expected<String> {
//!     let name = try_value!(lookup(id));
//!     ok(format!("hello, {name}"))
//! }
//!
//! assert_eq!(greeting(1).value(), "hello, admin");
//! assert_eq!(greeting(7).error(), "unknown id 7");
//! ```

// Macros
pub use crate::{ensure, try_value};

// Core types
pub use crate::types::{BadAccess, Expected, Flavor, Payload, State, Unexpected};

// Policies
pub use crate::hook::{Abort, Hook, Minimal, MustCheck, RcAbort};

// Helpers and traits
pub use crate::convert::{err, ok};
pub use crate::traits::{OptionExt, ResultExt};
