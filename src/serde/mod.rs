pub mod bit_reader;
pub mod bit_writer;
pub mod error;
pub mod serde;
