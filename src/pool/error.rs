use thiserror::Error;

use crate::{
    net::error::SpawnError,
    types::{EntityId, SlotIndex},
};

/// Errors that can occur during DynamicPool operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PoolError {
    /// Pool entities can only be acquired or reset under authority control
    #[error("Operation requires authority control of the pool")]
    NotAuthority,

    /// No prefab has been configured
    #[error("No prefab set")]
    NoPrefab,

    /// The handle does not resolve to this pool's slot table
    #[error("Handle (slot {slot}, entity {entity}) does not belong to this pool")]
    ForeignHandle { slot: SlotIndex, entity: EntityId },

    /// The engine failed to build or manipulate a pooled instance
    #[error(transparent)]
    Spawn(#[from] SpawnError),
}
