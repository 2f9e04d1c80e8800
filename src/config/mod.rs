//! The configuration of the inverter, decoded from the 81-word holding
//! register block starting at address 0.

pub mod ac_output;
pub mod battery;
pub mod device;
pub mod utility;

pub use ac_output::AcOutputConfiguration;
pub use battery::BatteryConfiguration;
pub use device::DeviceConfiguration;
pub use utility::UtilityConfiguration;

use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

use crate::codec::{ByteFlag, Enumerated};
use crate::prelude::*;

// Register 0 packs two independent byte flags: AC output enable in the high
// byte (owned by AcOutputConfiguration) and standby in the low byte.
const STANDBY: ByteFlag = ByteFlag::low_byte(0);
const PV_INPUT_MODE: Enumerated<PvInputMode> = Enumerated::at(7);

/// The full device configuration for one read of the holding register block.
///
/// Immutable snapshot semantics: a record holds no reference back to the
/// block it was decoded from, and changing a setting means decode, modify a
/// copy, encode the whole block back. Several settings share words, so
/// partial writes are not supported.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Configuration {
    /// Utility (grid) connection settings.
    pub utility: UtilityConfiguration,
    /// AC output settings.
    pub ac_output: AcOutputConfiguration,
    /// Battery charging settings.
    pub battery: BatteryConfiguration,
    /// Device identity and firmware information.
    pub device: DeviceConfiguration,
    /// Whether the device is in standby mode.
    pub standby: bool,
    /// PV input mode.
    pub pv_input_mode: PvInputMode,
}

impl Configuration {
    /// Decode the device configuration from the 81 holding registers
    /// starting at address 0. Fails only if the block is too short.
    pub fn decode(block: &RegisterBlock) -> Result<Self> {
        block.require_len(HOLDING_REGISTER_COUNT, "holding")?;
        debug!("decoding configuration from {} registers", block.len());

        Ok(Self {
            utility: UtilityConfiguration::decode(block),
            ac_output: AcOutputConfiguration::decode(block),
            battery: BatteryConfiguration::decode(block),
            device: DeviceConfiguration::decode(block),
            standby: STANDBY.decode(block),
            pv_input_mode: PV_INPUT_MODE.decode(block),
        })
    }

    /// Write every modeled field back into `block` at its home offset.
    ///
    /// Registers this crate does not model, and the system-time words when
    /// `device.system_time` is absent, keep whatever the block already
    /// holds. Encoding into the block a configuration was decoded from
    /// therefore reproduces it bit-for-bit.
    pub fn encode_into(&self, block: &mut RegisterBlock) -> Result<()> {
        block.require_len(HOLDING_REGISTER_COUNT, "holding")?;
        self.write(block);
        Ok(())
    }

    /// Encode into a fresh zeroed 81-word block. Unmodeled registers stay
    /// zero; use [`Configuration::encode_into`] with a previously read block
    /// to preserve them.
    pub fn encode(&self) -> RegisterBlock {
        let mut block = RegisterBlock::zeroed(HOLDING_REGISTER_COUNT);
        self.write(&mut block);
        block
    }

    fn write(&self, block: &mut RegisterBlock) {
        self.utility.encode_into(block);
        self.ac_output.encode_into(block);
        self.battery.encode_into(block);
        self.device.encode_into(block);
        STANDBY.encode(self.standby, block);
        PV_INPUT_MODE.encode(self.pv_input_mode, block);
    }
}

/// PV input mode, register 7.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum PvInputMode {
    Independent = 0,
    Parallel = 1,
    #[num_enum(catch_all)]
    Unknown(u16),
}
