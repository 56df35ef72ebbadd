use crate::{
    net::error::SpawnError,
    types::{EntityId, PrefabId},
};

/// Where a pooled entity instance is parented.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Container {
    /// Visible/live context, for instances handed out by the pool.
    Live,
    /// Inert pool shelf, for instances returned and awaiting reuse.
    Shelf,
}

/// Engine-side entity lifecycle, injected into the pool. The core never
/// constructs or destroys engine objects itself; it only directs identity and
/// lifecycle through this seam.
pub trait EntitySpawner {
    /// Creates a fresh instance of `prefab` and network-spawns it, returning
    /// its network identity.
    fn instantiate(&mut self, prefab: PrefabId) -> Result<EntityId, SpawnError>;

    /// Network-spawns an existing instance if it is not currently spawned.
    fn spawn(&mut self, entity: EntityId) -> Result<(), SpawnError>;

    /// Destroys the instance and removes it from the session.
    fn despawn(&mut self, entity: EntityId) -> Result<(), SpawnError>;

    fn set_active(&mut self, entity: EntityId, active: bool) -> Result<(), SpawnError>;

    fn attach(&mut self, entity: EntityId, container: Container) -> Result<(), SpawnError>;

    fn is_active(&self, entity: EntityId) -> bool;

    fn is_spawned(&self, entity: EntityId) -> bool;
}
