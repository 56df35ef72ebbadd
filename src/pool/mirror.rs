use log::warn;

use crate::{
    net::{
        message::{PoolMessage, PoolRequest},
        spawner::EntitySpawner,
    },
    pool::{error::PoolError, pool::PoolHandle},
    types::{EntityId, SlotIndex},
};

/// Observer-side replica of a [`crate::DynamicPool`]'s slot table.
///
/// Applies the authority's broadcasts so local slot indices stay consistent
/// with the authority's. A message referencing an entity that has already
/// despawned locally is a benign race and is skipped.
pub struct PoolMirror {
    slots: Vec<Option<EntityId>>,
}

impl PoolMirror {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn entity_at(&self, slot: SlotIndex) -> Option<EntityId> {
        self.slots.get(slot).copied().flatten()
    }

    /// Back-reference for a slot this observer holds an instance of.
    pub fn handle_at(&self, slot: SlotIndex) -> Option<PoolHandle> {
        self.entity_at(slot)
            .map(|entity| PoolHandle::new(slot, entity))
    }

    /// Non-authority return path: deactivates the instance locally and yields
    /// the reset request to transmit to the authority, which performs the
    /// actual slot reset.
    pub fn release(
        &mut self,
        handle: PoolHandle,
        spawner: &mut dyn EntitySpawner,
    ) -> Result<PoolRequest, PoolError> {
        if self.entity_at(handle.slot()) != Some(handle.entity()) {
            return Err(PoolError::ForeignHandle {
                slot: handle.slot(),
                entity: handle.entity(),
            });
        }
        if let Err(err) = spawner.set_active(handle.entity(), false) {
            warn!("Skipping deactivation of slot {}: {err}", handle.slot());
        }
        Ok(PoolRequest::ResetSlot {
            slot: handle.slot(),
        })
    }

    pub fn apply(&mut self, message: &PoolMessage, spawner: &mut dyn EntitySpawner) {
        match *message {
            PoolMessage::SlotReplaced { slot, entity } => {
                if self.slots.len() <= slot {
                    self.slots.resize(slot + 1, None);
                }
                self.slots[slot] = Some(entity);
            }
            PoolMessage::SlotActivated { slot } => self.set_slot_active(slot, true, spawner),
            PoolMessage::SlotReset { slot } => self.set_slot_active(slot, false, spawner),
        }
    }

    fn set_slot_active(&mut self, slot: SlotIndex, active: bool, spawner: &mut dyn EntitySpawner) {
        let Some(entity) = self.entity_at(slot) else {
            warn!("Ignoring activation state for unknown slot {slot}");
            return;
        };
        if let Err(err) = spawner.set_active(entity, active) {
            // The instance raced a local despawn; the next SlotReplaced will
            // rebind this slot
            warn!("Skipping activation state for slot {slot}: {err}");
        }
    }
}

impl Default for PoolMirror {
    fn default() -> Self {
        Self::new()
    }
}
