//! Extension traits bridging `Result` and `Option` into [`Expected`](crate::Expected).
//!
//! - [`ResultExt`]: `Result<T, E>` to `Expected<T, E, H>`
//! - [`OptionExt`]: `Option<T>` to `Expected<T, E, H>` with a supplied error

pub mod option_ext;
pub mod result_ext;

pub use option_ext::OptionExt;
pub use result_ext::ResultExt;
