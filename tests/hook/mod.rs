pub mod minimal;
#[cfg(feature = "std")]
pub mod throw;
#[cfg(feature = "tracing")]
pub mod traced;
