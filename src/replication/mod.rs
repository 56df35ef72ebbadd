pub mod error;
pub mod snapshot;
pub mod state_sync;
