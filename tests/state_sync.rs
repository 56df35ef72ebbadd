/// Client-state reconciliation: one owner captures, the authority is the
/// sole writer of the canonical snapshot, observers only read.

mod common;

use common::FixedEndpoint;
use vigil::{ReplicationError, SnapshotSource, StateMessage, StateSync, ViewSnapshot};

struct FixedSource {
    snapshot: ViewSnapshot,
}

impl FixedSource {
    fn new(yaw: f32) -> Self {
        Self {
            snapshot: ViewSnapshot {
                yaw,
                pitch: 10.0,
                first_person_target: [1.0, 2.0, 3.0],
                look_target: [4.0, 5.0, 6.0],
                first_person: true,
                aiming: false,
            },
        }
    }
}

impl SnapshotSource for FixedSource {
    fn capture(&self) -> ViewSnapshot {
        self.snapshot
    }
}

#[test]
fn non_owners_never_capture() {
    let mut sync = StateSync::new();
    let source = FixedSource::new(90.0);

    assert_eq!(sync.tick(&source, &FixedEndpoint::observer()), None);
    assert_eq!(sync.tick(&source, &FixedEndpoint::authority()), None);
    assert_eq!(*sync.latest(), ViewSnapshot::default());
}

#[test]
fn owning_authority_publishes_directly() {
    let mut sync = StateSync::new();
    let source = FixedSource::new(45.0);

    let message = sync.tick(&source, &FixedEndpoint::authority_owner());
    assert_eq!(message, Some(StateMessage::Publish(source.snapshot)));
    assert_eq!(*sync.latest(), source.snapshot);
}

#[test]
fn remote_owner_submits_and_authority_rebroadcasts() {
    let source = FixedSource::new(180.0);

    // Owning client
    let mut owner_sync = StateSync::new();
    let outgoing = owner_sync.tick(&source, &FixedEndpoint::observer_owner());
    let Some(StateMessage::Submit(snapshot)) = outgoing else {
        panic!("owner should submit toward the authority, got {outgoing:?}");
    };

    // Authority ingests and publishes
    let mut authority_sync = StateSync::new();
    let publish = authority_sync
        .receive_submit(snapshot, &FixedEndpoint::authority())
        .unwrap();
    assert_eq!(publish, StateMessage::Publish(snapshot));
    assert_eq!(*authority_sync.latest(), snapshot);

    // Observer applies the canonical value
    let mut observer_sync = StateSync::new();
    let StateMessage::Publish(published) = publish else {
        unreachable!();
    };
    observer_sync.apply_publish(published);
    assert_eq!(*observer_sync.latest(), source.snapshot);
}

#[test]
fn only_the_authority_may_write() {
    let mut sync = StateSync::new();
    let snapshot = FixedSource::new(10.0).snapshot;

    assert_eq!(
        sync.receive_submit(snapshot, &FixedEndpoint::observer()),
        Err(ReplicationError::NotAuthority { operation: "write" })
    );
    assert_eq!(*sync.latest(), ViewSnapshot::default());
}

#[test]
fn writes_are_last_write_wins() {
    let mut sync = StateSync::new();
    let endpoint = FixedEndpoint::authority();

    let first = FixedSource::new(10.0).snapshot;
    let second = FixedSource::new(20.0).snapshot;
    sync.receive_submit(first, &endpoint).unwrap();
    sync.receive_submit(second, &endpoint).unwrap();

    assert_eq!(sync.latest().yaw, 20.0);
}

#[test]
fn handle_message_dispatches_by_kind() {
    let snapshot = FixedSource::new(33.0).snapshot;

    // Submissions are accepted under authority control and rebroadcast
    let mut authority_sync = StateSync::new();
    let rebroadcast = authority_sync
        .handle_message(StateMessage::Submit(snapshot), &FixedEndpoint::authority())
        .unwrap();
    assert_eq!(rebroadcast, Some(StateMessage::Publish(snapshot)));

    // Publishes are applied with nothing further to send
    let mut observer_sync = StateSync::new();
    let nothing = observer_sync
        .handle_message(StateMessage::Publish(snapshot), &FixedEndpoint::observer())
        .unwrap();
    assert_eq!(nothing, None);
    assert_eq!(*observer_sync.latest(), snapshot);

    // Submissions reaching a non-authority are rejected
    let mut stray_sync = StateSync::new();
    assert!(stray_sync
        .handle_message(StateMessage::Submit(snapshot), &FixedEndpoint::observer())
        .is_err());
}
