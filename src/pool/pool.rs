use std::collections::VecDeque;

use log::{error, warn};

use crate::{
    net::{
        message::{PoolMessage, PoolRequest},
        spawner::{Container, EntitySpawner},
    },
    pool::error::PoolError,
    types::{EntityId, HostType, PrefabId, SlotIndex},
};

/// Back-reference handed out with every pooled instance: enough for the
/// holder to return the instance to its pool later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolHandle {
    slot: SlotIndex,
    entity: EntityId,
}

impl PoolHandle {
    pub(crate) fn new(slot: SlotIndex, entity: EntityId) -> Self {
        Self { slot, entity }
    }

    pub fn slot(&self) -> SlotIndex {
        self.slot
    }

    pub fn entity(&self) -> EntityId {
        self.entity
    }
}

/// Authority-side pool of networked entity instances built from a single
/// prefab template.
///
/// Slots are created lazily when a round-robin scan finds nothing reusable,
/// and a slot is rebuilt (old instance despawned, fresh one instantiated) only
/// when its dirty bit is set or its instance no longer exists — observers hear
/// about slot replacement only when an actual reinstantiation occurs, not on
/// every reuse.
pub struct DynamicPool {
    host_type: HostType,
    prefab: Option<PrefabId>,
    slots: Vec<Option<EntityId>>,
    dirty: Vec<bool>,
    cursor: usize,
    outgoing: VecDeque<PoolMessage>,
}

impl DynamicPool {
    pub fn new(host_type: HostType, initial_capacity: usize) -> Self {
        Self {
            host_type,
            prefab: None,
            slots: Vec::with_capacity(initial_capacity),
            dirty: Vec::with_capacity(initial_capacity),
            cursor: 0,
            outgoing: VecDeque::new(),
        }
    }

    /// Records the template future acquisitions are built from. Changing the
    /// prefab marks every slot dirty so its instance is rebuilt before the
    /// next use; setting the same prefab again is a no-op.
    pub fn set_prefab(&mut self, prefab: PrefabId) {
        if self.prefab == Some(prefab) {
            return;
        }
        self.prefab = Some(prefab);
        for dirty in &mut self.dirty {
            *dirty = true;
        }
    }

    pub fn prefab(&self) -> Option<PrefabId> {
        self.prefab
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn entity_at(&self, slot: SlotIndex) -> Option<EntityId> {
        self.slots.get(slot).copied().flatten()
    }

    pub fn is_dirty(&self, slot: SlotIndex) -> bool {
        self.dirty.get(slot).copied().unwrap_or(false)
    }

    /// Acquires a ready-to-use instance, recycling or creating as needed.
    ///
    /// Scans slots round-robin starting after the last returned index and
    /// reuses the first vacant, inactive, or unspawned one; if the whole scan
    /// comes up empty the pool grows by one slot. The returned handle is
    /// guaranteed active, attached to the live container, and network-spawned.
    pub fn get(&mut self, spawner: &mut dyn EntitySpawner) -> Result<PoolHandle, PoolError> {
        if !self.host_type.is_authority() {
            error!("get() can only be called under authority control");
            return Err(PoolError::NotAuthority);
        }
        let Some(prefab) = self.prefab else {
            error!("No prefab set");
            return Err(PoolError::NoPrefab);
        };

        for _ in 0..self.slots.len() {
            self.cursor = (self.cursor + 1) % self.slots.len();
            let reusable = match self.slots[self.cursor] {
                None => true,
                Some(entity) => !spawner.is_active(entity) || !spawner.is_spawned(entity),
            };
            if reusable {
                return self.prepare(self.cursor, prefab, spawner);
            }
        }

        // Reached capacity, add a new slot
        self.cursor = self.slots.len();
        self.slots.push(None);
        self.dirty.push(true);
        self.prepare(self.cursor, prefab, spawner)
    }

    fn prepare(
        &mut self,
        slot: SlotIndex,
        prefab: PrefabId,
        spawner: &mut dyn EntitySpawner,
    ) -> Result<PoolHandle, PoolError> {
        let existing = self.slots[slot];
        let entity = match existing {
            Some(entity) if !self.dirty[slot] && spawner.is_spawned(entity) => entity,
            _ => {
                // A new instance is needed: the prefab changed, the slot was
                // never populated, or the engine destroyed the instance out
                // from under the pool
                if let Some(old) = existing {
                    if spawner.is_spawned(old) {
                        if let Err(err) = spawner.despawn(old) {
                            warn!("Skipping despawn of stale instance in slot {slot}: {err}");
                        }
                    }
                }

                let fresh = spawner.instantiate(prefab).map_err(|err| {
                    error!("Failed to build instance of prefab {prefab}: {err}");
                    PoolError::Spawn(err)
                })?;

                self.slots[slot] = Some(fresh);
                self.dirty[slot] = false;

                // Inform observers that the slot content has changed
                self.outgoing
                    .push_back(PoolMessage::SlotReplaced { slot, entity: fresh });
                fresh
            }
        };

        spawner.set_active(entity, true)?;
        spawner.attach(entity, Container::Live)?;
        if !spawner.is_spawned(entity) {
            spawner.spawn(entity)?;
        }

        self.outgoing.push_back(PoolMessage::SlotActivated { slot });

        Ok(PoolHandle::new(slot, entity))
    }

    /// Returns an instance to the pool, resetting the slot's shared state
    /// directly: deactivated, reparented to the inert shelf, and broadcast to
    /// observers. The authority always performs the actual reset; a
    /// non-authority owner goes through [`crate::PoolMirror::release`]
    /// instead.
    pub fn release(
        &mut self,
        handle: PoolHandle,
        spawner: &mut dyn EntitySpawner,
    ) -> Result<(), PoolError> {
        if !self.host_type.is_authority() {
            return Err(PoolError::NotAuthority);
        }
        self.check_handle(&handle)?;
        self.reset_slot(handle.slot, spawner);
        Ok(())
    }

    /// Authority-side handling of an observer's pool request.
    pub fn handle_request(
        &mut self,
        request: PoolRequest,
        spawner: &mut dyn EntitySpawner,
    ) -> Result<(), PoolError> {
        if !self.host_type.is_authority() {
            return Err(PoolError::NotAuthority);
        }
        match request {
            PoolRequest::ResetSlot { slot } => {
                // A request racing a despawn is benign
                if self.entity_at(slot).is_none() {
                    warn!("Ignoring reset request for vacant slot {slot}");
                    return Ok(());
                }
                self.reset_slot(slot, spawner);
                Ok(())
            }
        }
    }

    fn reset_slot(&mut self, slot: SlotIndex, spawner: &mut dyn EntitySpawner) {
        if let Some(entity) = self.entity_at(slot) {
            if let Err(err) = spawner.set_active(entity, false) {
                warn!("Skipping deactivation of slot {slot}: {err}");
            }
            if let Err(err) = spawner.attach(entity, Container::Shelf) {
                warn!("Skipping reparent of slot {slot}: {err}");
            }
        }
        self.outgoing.push_back(PoolMessage::SlotReset { slot });
    }

    /// Pool-owner teardown: every live slot is reset and force-despawned.
    pub fn release_all(&mut self, spawner: &mut dyn EntitySpawner) -> Result<(), PoolError> {
        if !self.host_type.is_authority() {
            return Err(PoolError::NotAuthority);
        }
        for slot in 0..self.slots.len() {
            let Some(entity) = self.slots[slot] else {
                continue;
            };
            self.reset_slot(slot, spawner);
            if let Err(err) = spawner.despawn(entity) {
                warn!("Skipping despawn of slot {slot}: {err}");
            }
            self.slots[slot] = None;
            self.dirty[slot] = true;
        }
        Ok(())
    }

    /// Drains the broadcasts queued for observers since the last call.
    pub fn take_outgoing(&mut self) -> Vec<PoolMessage> {
        self.outgoing.drain(..).collect()
    }

    /// Full-state replication for a newly joined observer: slot contents
    /// first, then current occupancy.
    pub fn sync_messages(&self, spawner: &dyn EntitySpawner) -> Vec<PoolMessage> {
        let mut messages = Vec::new();
        for (slot, entity) in self.slots.iter().enumerate() {
            let Some(entity) = *entity else {
                continue;
            };
            messages.push(PoolMessage::SlotReplaced { slot, entity });
            if spawner.is_active(entity) {
                messages.push(PoolMessage::SlotActivated { slot });
            } else {
                messages.push(PoolMessage::SlotReset { slot });
            }
        }
        messages
    }

    fn check_handle(&self, handle: &PoolHandle) -> Result<(), PoolError> {
        if self.entity_at(handle.slot) != Some(handle.entity) {
            return Err(PoolError::ForeignHandle {
                slot: handle.slot,
                entity: handle.entity,
            });
        }
        Ok(())
    }
}
