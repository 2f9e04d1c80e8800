//! Telemetry of the inverter, decoded from the 83-word input register block
//! starting at address 0.

pub mod ac_input;
pub mod ac_output;
pub mod battery;
pub mod general;
pub mod pv;

pub use ac_input::AcInputStatus;
pub use ac_output::AcOutputStatus;
pub use battery::BatteryStatus;
pub use general::GeneralStatus;
pub use pv::PvStatus;

use serde::Serialize;

use crate::prelude::*;

/// The full device telemetry for one read of the input register block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Status {
    /// Overall system state and diagnostics.
    pub general: GeneralStatus,
    /// Photovoltaic input telemetry.
    pub pv: PvStatus,
    /// AC input telemetry.
    pub ac_input: AcInputStatus,
    /// AC output telemetry.
    pub ac_output: AcOutputStatus,
    /// Battery telemetry.
    pub battery: BatteryStatus,
}

impl Status {
    /// Decode the device telemetry from the 83 input registers starting at
    /// address 0. Fails only if the block is too short.
    pub fn decode(block: &RegisterBlock) -> Result<Self> {
        block.require_len(INPUT_REGISTER_COUNT, "input")?;
        debug!("decoding status from {} registers", block.len());

        Ok(Self {
            general: GeneralStatus::decode(block),
            pv: PvStatus::decode(block),
            ac_input: AcInputStatus::decode(block),
            ac_output: AcOutputStatus::decode(block),
            battery: BatteryStatus::decode(block),
        })
    }

    /// Write every modeled field back into `block` at its home offset,
    /// leaving unmodeled registers as they are. Telemetry is read-only on
    /// the device; encoding exists so record contents can be verified
    /// against the raw block they came from.
    pub fn encode_into(&self, block: &mut RegisterBlock) -> Result<()> {
        block.require_len(INPUT_REGISTER_COUNT, "input")?;
        self.write(block);
        Ok(())
    }

    /// Encode into a fresh zeroed 83-word block.
    pub fn encode(&self) -> RegisterBlock {
        let mut block = RegisterBlock::zeroed(INPUT_REGISTER_COUNT);
        self.write(&mut block);
        block
    }

    fn write(&self, block: &mut RegisterBlock) {
        self.general.encode_into(block);
        self.pv.encode_into(block);
        self.ac_input.encode_into(block);
        self.ac_output.encode_into(block);
        self.battery.encode_into(block);
    }
}
