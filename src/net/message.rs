use crate::{
    replication::snapshot::ViewSnapshot,
    serde::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde},
    types::{EntityId, SlotIndex},
};

/// Authority-to-observer pool replication. Broadcast whenever slot contents
/// actually change, so observer mirrors stay index-consistent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolMessage {
    /// A slot's instance was rebuilt (dirty slot or growth); observers must
    /// rebind the slot to the new entity.
    SlotReplaced { slot: SlotIndex, entity: EntityId },
    /// A slot's instance was handed out and is now active.
    SlotActivated { slot: SlotIndex },
    /// A slot's instance was reset back onto the shelf.
    SlotReset { slot: SlotIndex },
}

/// Observer-to-authority pool traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PoolRequest {
    /// A non-authority owner is done with a slot's instance and asks the
    /// authority to perform the actual reset.
    ResetSlot { slot: SlotIndex },
}

/// Client-state reconciliation traffic.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StateMessage {
    /// Owner-to-authority: a freshly captured snapshot.
    Submit(ViewSnapshot),
    /// Authority-to-observers: the canonical snapshot.
    Publish(ViewSnapshot),
}

fn slot_ser(slot: SlotIndex, writer: &mut dyn BitWrite) {
    (slot as u64).ser(writer);
}

fn slot_de(reader: &mut BitReader) -> Result<SlotIndex, SerdeErr> {
    Ok(u64::de(reader)? as SlotIndex)
}

impl Serde for PoolMessage {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            PoolMessage::SlotReplaced { slot, entity } => {
                0u8.ser(writer);
                slot_ser(*slot, writer);
                entity.ser(writer);
            }
            PoolMessage::SlotActivated { slot } => {
                1u8.ser(writer);
                slot_ser(*slot, writer);
            }
            PoolMessage::SlotReset { slot } => {
                2u8.ser(writer);
                slot_ser(*slot, writer);
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        match u8::de(reader)? {
            0 => Ok(PoolMessage::SlotReplaced {
                slot: slot_de(reader)?,
                entity: EntityId::de(reader)?,
            }),
            1 => Ok(PoolMessage::SlotActivated {
                slot: slot_de(reader)?,
            }),
            2 => Ok(PoolMessage::SlotReset {
                slot: slot_de(reader)?,
            }),
            value => Err(SerdeErr::InvalidDiscriminant {
                type_name: "PoolMessage",
                value,
            }),
        }
    }
}

impl Serde for PoolRequest {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            PoolRequest::ResetSlot { slot } => {
                0u8.ser(writer);
                slot_ser(*slot, writer);
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        match u8::de(reader)? {
            0 => Ok(PoolRequest::ResetSlot {
                slot: slot_de(reader)?,
            }),
            value => Err(SerdeErr::InvalidDiscriminant {
                type_name: "PoolRequest",
                value,
            }),
        }
    }
}

impl Serde for StateMessage {
    fn ser(&self, writer: &mut dyn BitWrite) {
        match self {
            StateMessage::Submit(snapshot) => {
                0u8.ser(writer);
                snapshot.ser(writer);
            }
            StateMessage::Publish(snapshot) => {
                1u8.ser(writer);
                snapshot.ser(writer);
            }
        }
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        match u8::de(reader)? {
            0 => Ok(StateMessage::Submit(ViewSnapshot::de(reader)?)),
            1 => Ok(StateMessage::Publish(ViewSnapshot::de(reader)?)),
            value => Err(SerdeErr::InvalidDiscriminant {
                type_name: "StateMessage",
                value,
            }),
        }
    }
}
