use crate::{
    net::{endpoint::Endpoint, message::StateMessage},
    replication::{error::ReplicationError, snapshot::ViewSnapshot},
};

/// View-state provider on the owning client, injected instead of reached
/// through a camera singleton. Implemented by the presentation layer.
pub trait SnapshotSource {
    fn capture(&self) -> ViewSnapshot;
}

/// Per-entity client-state reconciliation.
///
/// Exactly one owner captures a [`ViewSnapshot`] each tick and transmits it
/// toward the authority; the authority is the sole writer of the canonical
/// value, which every other participant reads via [`latest`](Self::latest).
/// Writes are last-write-wins per tick, replaced atomically.
pub struct StateSync {
    canonical: ViewSnapshot,
}

impl StateSync {
    pub fn new() -> Self {
        Self {
            canonical: ViewSnapshot::default(),
        }
    }

    /// Owner-side once-per-tick capture. Non-owners do nothing.
    ///
    /// When the owner is also the authority the canonical value is replaced
    /// directly and the returned `Publish` goes out to observers; otherwise
    /// the returned `Submit` goes to the authority.
    pub fn tick(
        &mut self,
        source: &dyn SnapshotSource,
        endpoint: &dyn Endpoint,
    ) -> Option<StateMessage> {
        if !endpoint.is_owner() {
            return None;
        }

        let snapshot = source.capture();
        if endpoint.is_authority() {
            self.canonical = snapshot;
            Some(StateMessage::Publish(snapshot))
        } else {
            Some(StateMessage::Submit(snapshot))
        }
    }

    /// Authority-side ingest of an owner's submission. Returns the `Publish`
    /// rebroadcast for all observers.
    pub fn receive_submit(
        &mut self,
        snapshot: ViewSnapshot,
        endpoint: &dyn Endpoint,
    ) -> Result<StateMessage, ReplicationError> {
        if !endpoint.is_authority() {
            return Err(ReplicationError::NotAuthority { operation: "write" });
        }
        self.canonical = snapshot;
        Ok(StateMessage::Publish(snapshot))
    }

    /// Observer-side ingest of the authority's canonical snapshot.
    pub fn apply_publish(&mut self, snapshot: ViewSnapshot) {
        self.canonical = snapshot;
    }

    /// Dispatches an incoming message by kind: submissions are accepted under
    /// authority control (yielding the rebroadcast), publishes are applied.
    pub fn handle_message(
        &mut self,
        message: StateMessage,
        endpoint: &dyn Endpoint,
    ) -> Result<Option<StateMessage>, ReplicationError> {
        match message {
            StateMessage::Submit(snapshot) => {
                Ok(Some(self.receive_submit(snapshot, endpoint)?))
            }
            StateMessage::Publish(snapshot) => {
                self.apply_publish(snapshot);
                Ok(None)
            }
        }
    }

    /// The last acknowledged canonical snapshot. Non-owners read this and
    /// never compute their own.
    pub fn latest(&self) -> &ViewSnapshot {
        &self.canonical
    }
}

impl Default for StateSync {
    fn default() -> Self {
        Self::new()
    }
}
