use thiserror::Error;

use crate::types::{EntityId, PrefabId};

/// Errors reported by an [`crate::EntitySpawner`] collaborator
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    /// The prefab is not registered with the engine
    #[error("Prefab {prefab} is not registered")]
    UnknownPrefab { prefab: PrefabId },

    /// The prefab lacks the networked-entity capability required for pooling
    #[error("Prefab {prefab} does not have a networked-entity capability")]
    MissingCapability { prefab: PrefabId },

    /// The entity no longer exists. Across a network boundary this is a
    /// benign despawn-vs-broadcast race, not a caller bug.
    #[error("Entity {entity} does not exist")]
    UnknownEntity { entity: EntityId },
}
