pub mod hook;
pub mod macros;
pub mod ops;
pub mod policy;
pub mod storage;
