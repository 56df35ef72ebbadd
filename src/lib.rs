//! # Vigil
//! Tick-driven timers, slot-stable object pooling, and client-authoritative
//! state replication for multiplayer games.
//!
//! The crate is transport-agnostic: everything network-facing goes through the
//! [`Endpoint`] and [`EntitySpawner`] collaborator traits, and replicated
//! values cross the wire as plain message enums serialized with [`Serde`].

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod collections;
mod fsm;
mod net;
mod pool;
mod replication;
mod serde;
mod timer;
mod types;

pub use collections::{
    free_list::{FreeList, FreeListError},
    sparse_set::SparseSet,
};
pub use fsm::{StateHooks, StateMachine};
pub use net::{
    endpoint::Endpoint,
    error::SpawnError,
    message::{PoolMessage, PoolRequest, StateMessage},
    spawner::{Container, EntitySpawner},
};
pub use pool::{
    error::PoolError,
    mirror::PoolMirror,
    pool::{DynamicPool, PoolHandle},
};
pub use replication::{
    error::ReplicationError,
    snapshot::ViewSnapshot,
    state_sync::{SnapshotSource, StateSync},
};
pub use serde::{
    bit_reader::BitReader,
    bit_writer::{BitWrite, BitWriter},
    error::SerdeErr,
    serde::Serde,
};
pub use timer::{
    error::{TimerError, TrackerError},
    timer::{CompletionCallback, Timer, TimerState},
    tracker::{TimerId, TimerTracker, TrackerCommands},
};
pub use types::{EntityId, HostType, PrefabId, SlotIndex};
