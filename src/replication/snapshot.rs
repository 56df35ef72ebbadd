use crate::serde::{bit_reader::BitReader, bit_writer::BitWrite, error::SerdeErr, serde::Serde};

/// Per-tick snapshot of an owning client's view state: look rotation, camera
/// targets, and view-mode flags. Written only by the authority (directly or on
/// the owner's behalf) and read by every other participant.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewSnapshot {
    /// Horizontal look rotation, degrees.
    pub yaw: f32,
    /// Vertical look rotation, degrees.
    pub pitch: f32,
    /// World-space target the first-person camera anchors to.
    pub first_person_target: [f32; 3],
    /// World-space point the third-person camera is looking at.
    pub look_target: [f32; 3],
    /// Owner is in first-person view.
    pub first_person: bool,
    /// Owner is aiming down sights.
    pub aiming: bool,
}

impl Serde for ViewSnapshot {
    // Scalar fields first, then the boolean flags packed as trailing bits
    fn ser(&self, writer: &mut dyn BitWrite) {
        self.yaw.ser(writer);
        self.pitch.ser(writer);
        self.first_person_target.ser(writer);
        self.look_target.ser(writer);
        self.first_person.ser(writer);
        self.aiming.ser(writer);
    }

    fn de(reader: &mut BitReader) -> Result<Self, SerdeErr> {
        Ok(Self {
            yaw: f32::de(reader)?,
            pitch: f32::de(reader)?,
            first_person_target: <[f32; 3]>::de(reader)?,
            look_target: <[f32; 3]>::de(reader)?,
            first_person: bool::de(reader)?,
            aiming: bool::de(reader)?,
        })
    }
}
