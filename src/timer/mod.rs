pub mod error;
pub mod timer;
pub mod tracker;
