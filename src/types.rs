/// Network identity of a spawned entity instance, issued by the engine/transport.
pub type EntityId = u64;

/// Identity of an entity template ("prefab") registered with the engine.
pub type PrefabId = u32;

/// Index of a slot inside a [`crate::DynamicPool`].
pub type SlotIndex = usize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HostType {
    Authority,
    Observer,
}

impl HostType {
    pub fn is_authority(self) -> bool {
        self == HostType::Authority
    }
}
