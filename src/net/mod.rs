pub mod endpoint;
pub mod error;
pub mod message;
pub mod spawner;
