use crate::types::HostType;

/// What the core needs to know about its place in the session: whether this
/// process is the authority, and whether it owns the entity being operated on.
/// Implemented by the transport layer and injected into operations.
pub trait Endpoint {
    fn host_type(&self) -> HostType;

    /// Whether this process owns the entity this component is attached to.
    fn is_owner(&self) -> bool;

    fn is_authority(&self) -> bool {
        self.host_type().is_authority()
    }
}
