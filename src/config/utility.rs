use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

use crate::codec::{Enumerated, Word};
use crate::prelude::*;

const OUTPUT_START_HOUR: Word = Word::at(3);
const OUTPUT_END_HOUR: Word = Word::at(4);
const CHARGE_START_HOUR: Word = Word::at(5);
const CHARGE_END_HOUR: Word = Word::at(6);
const AC_INPUT_MODE: Enumerated<AcInputMode> = Enumerated::at(8);

/// The configuration of the utility connection of the inverter.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct UtilityConfiguration {
    /// The AC input voltage range mode.
    pub ac_input_mode: AcInputMode,
    /// The hours during which the inverter is allowed to power the load.
    /// Output is prohibited outside this interval.
    pub output_interval: HourInterval,
    /// The hours during which utility is allowed to charge the battery.
    pub charge_interval: HourInterval,
}

/// An interval of whole hours, each 0-23. An interval whose start is after
/// its end wraps past midnight (23..20 means 23:00 until 20:59 next day).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct HourInterval {
    pub start: u16,
    pub end: u16,
}

impl UtilityConfiguration {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            ac_input_mode: AC_INPUT_MODE.decode(block),
            output_interval: HourInterval {
                start: OUTPUT_START_HOUR.decode(block),
                end: OUTPUT_END_HOUR.decode(block),
            },
            charge_interval: HourInterval {
                start: CHARGE_START_HOUR.decode(block),
                end: CHARGE_END_HOUR.decode(block),
            },
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        AC_INPUT_MODE.encode(self.ac_input_mode, block);
        OUTPUT_START_HOUR.encode(self.output_interval.start, block);
        OUTPUT_END_HOUR.encode(self.output_interval.end, block);
        CHARGE_START_HOUR.encode(self.charge_interval.start, block);
        CHARGE_END_HOUR.encode(self.charge_interval.end, block);
    }
}

/// AC input voltage range, register 8.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum AcInputMode {
    /// APL: 90-280 VAC.
    Apl = 0,
    /// UPS: 170-280 VAC.
    Ups = 1,
    #[num_enum(catch_all)]
    Unknown(u16),
}
