#![allow(dead_code)]

use std::collections::{HashMap, HashSet};

use vigil::{Container, Endpoint, EntityId, EntitySpawner, HostType, PrefabId, SpawnError};

/// In-memory stand-in for the engine's entity lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeEntity {
    pub prefab: PrefabId,
    pub active: bool,
    pub spawned: bool,
    pub container: Container,
}

pub struct FakeSpawner {
    next_id: EntityId,
    entities: HashMap<EntityId, FakeEntity>,
    broken_prefabs: HashSet<PrefabId>,
}

impl FakeSpawner {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            entities: HashMap::new(),
            broken_prefabs: HashSet::new(),
        }
    }

    /// Marks a prefab as lacking the networked-entity capability, so
    /// `instantiate` fails for it.
    pub fn break_prefab(&mut self, prefab: PrefabId) {
        self.broken_prefabs.insert(prefab);
    }

    pub fn entity(&self, entity: EntityId) -> Option<&FakeEntity> {
        self.entities.get(&entity)
    }

    pub fn instance_count(&self) -> usize {
        self.entities.len()
    }

    /// Simulates the engine destroying an entity out from under the core
    /// (the despawn side of a despawn-vs-broadcast race).
    pub fn destroy(&mut self, entity: EntityId) {
        self.entities.remove(&entity);
    }
}

impl EntitySpawner for FakeSpawner {
    fn instantiate(&mut self, prefab: PrefabId) -> Result<EntityId, SpawnError> {
        if self.broken_prefabs.contains(&prefab) {
            return Err(SpawnError::MissingCapability { prefab });
        }
        let id = self.next_id;
        self.next_id += 1;
        self.entities.insert(
            id,
            FakeEntity {
                prefab,
                active: false,
                spawned: true,
                container: Container::Shelf,
            },
        );
        Ok(id)
    }

    fn spawn(&mut self, entity: EntityId) -> Result<(), SpawnError> {
        match self.entities.get_mut(&entity) {
            Some(record) => {
                record.spawned = true;
                Ok(())
            }
            None => Err(SpawnError::UnknownEntity { entity }),
        }
    }

    fn despawn(&mut self, entity: EntityId) -> Result<(), SpawnError> {
        match self.entities.remove(&entity) {
            Some(_) => Ok(()),
            None => Err(SpawnError::UnknownEntity { entity }),
        }
    }

    fn set_active(&mut self, entity: EntityId, active: bool) -> Result<(), SpawnError> {
        match self.entities.get_mut(&entity) {
            Some(record) => {
                record.active = active;
                Ok(())
            }
            None => Err(SpawnError::UnknownEntity { entity }),
        }
    }

    fn attach(&mut self, entity: EntityId, container: Container) -> Result<(), SpawnError> {
        match self.entities.get_mut(&entity) {
            Some(record) => {
                record.container = container;
                Ok(())
            }
            None => Err(SpawnError::UnknownEntity { entity }),
        }
    }

    fn is_active(&self, entity: EntityId) -> bool {
        self.entities
            .get(&entity)
            .map(|record| record.active)
            .unwrap_or(false)
    }

    fn is_spawned(&self, entity: EntityId) -> bool {
        self.entities
            .get(&entity)
            .map(|record| record.spawned)
            .unwrap_or(false)
    }
}

/// Endpoint with a fixed role, standing in for the transport layer.
pub struct FixedEndpoint {
    host_type: HostType,
    owner: bool,
}

impl FixedEndpoint {
    pub fn new(host_type: HostType, owner: bool) -> Self {
        Self { host_type, owner }
    }

    pub fn authority_owner() -> Self {
        Self::new(HostType::Authority, true)
    }

    pub fn authority() -> Self {
        Self::new(HostType::Authority, false)
    }

    pub fn observer_owner() -> Self {
        Self::new(HostType::Observer, true)
    }

    pub fn observer() -> Self {
        Self::new(HostType::Observer, false)
    }
}

impl Endpoint for FixedEndpoint {
    fn host_type(&self) -> HostType {
        self.host_type
    }

    fn is_owner(&self) -> bool {
        self.owner
    }
}
