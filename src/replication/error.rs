use thiserror::Error;

/// Errors that can occur during client-state reconciliation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplicationError {
    /// The operation is reserved for the authority
    #[error("Only the authority may {operation} the canonical snapshot")]
    NotAuthority { operation: &'static str },
}
