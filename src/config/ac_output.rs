use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

use crate::codec::{ByteFlag, Enumerated, WordPair};
use crate::prelude::*;

const ENABLED: ByteFlag = ByteFlag::high_byte(0);
const PRIORITY: Enumerated<OutputPriority> = Enumerated::at(1);
const VOLTAGE: Enumerated<OutputVoltage> = Enumerated::at(18);
const FREQUENCY: Enumerated<OutputFrequency> = Enumerated::at(19);
const OVERLOAD_RESTART: Enumerated<OverloadRestart> = Enumerated::at(20);
const INVERTER_MODULE: WordPair = WordPair::at(28);

/// The configuration for the AC output of the inverter.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct AcOutputConfiguration {
    /// Whether the AC output is enabled. Shares register 0 with the standby
    /// flag; encoding one never disturbs the other.
    pub enabled: bool,
    /// Which power source feeds the load first.
    pub priority: OutputPriority,
    /// The output voltage setting.
    pub voltage: OutputVoltage,
    /// The output frequency setting.
    pub frequency: OutputFrequency,
    /// The behaviour when an overload is detected.
    pub overload_restart: OverloadRestart,
    /// The inverter module identification words.
    pub inverter_module: InverterModule,
}

impl AcOutputConfiguration {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        let (high, low) = INVERTER_MODULE.decode(block);
        Self {
            enabled: ENABLED.decode(block),
            priority: PRIORITY.decode(block),
            voltage: VOLTAGE.decode(block),
            frequency: FREQUENCY.decode(block),
            overload_restart: OVERLOAD_RESTART.decode(block),
            inverter_module: InverterModule { high, low },
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        ENABLED.encode(self.enabled, block);
        PRIORITY.encode(self.priority, block);
        VOLTAGE.encode(self.voltage, block);
        FREQUENCY.encode(self.frequency, block);
        OVERLOAD_RESTART.encode(self.overload_restart, block);
        INVERTER_MODULE.encode((self.inverter_module.high, self.inverter_module.low), block);
    }
}

/// The inverter module identification, registers 28-29.
///
/// The documented layout (battery type / vendor / power rate / aging mode
/// packed into these two words) has not been reverse-engineered reliably, so
/// the words are preserved verbatim instead of guess-decoded. Can only be
/// set in standby mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct InverterModule {
    pub high: u16,
    pub low: u16,
}

/// Which power source feeds the load first, register 1.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum OutputPriority {
    /// Solar first, battery next; utility only when the battery drops to the
    /// low-level warning voltage or the configured switch point.
    Battery = 0,
    /// Solar first; utility as soon as solar alone is not sufficient, battery
    /// only without utility.
    Pv = 1,
    /// Utility first (factory default); solar and battery only when utility
    /// power is not available.
    Utility = 2,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// AC output voltage setting, register 18.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum OutputVoltage {
    V208 = 0,
    V230 = 1,
    V240 = 2,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// AC output frequency setting, register 19.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum OutputFrequency {
    F50Hz = 0,
    F60Hz = 1,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// Behaviour when an overload is detected, register 20.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum OverloadRestart {
    /// Restart one minute after overload, stop output after three overloads.
    Restart = 0,
    /// Do not restart after overload.
    NoRestart = 1,
    /// Switch the load to utility.
    SwitchToUtility = 2,
    #[num_enum(catch_all)]
    Unknown(u16),
}
