pub mod error;
pub mod mirror;
pub mod pool;
