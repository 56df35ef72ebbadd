use thiserror::Error;

/// Errors that can occur while deserializing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// Ran out of input bits mid-value
    #[error("Unexpected end of input")]
    UnexpectedEnd,

    /// Read an enum discriminant with no matching variant
    #[error("Invalid discriminant {value} for {type_name}")]
    InvalidDiscriminant { type_name: &'static str, value: u8 },
}
