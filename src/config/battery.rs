use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

use crate::codec::{Enumerated, Scaled};
use crate::prelude::*;

const CHARGE_SOURCE: Enumerated<ChargeSource> = Enumerated::at(2);
const MAX_CHARGE_CURRENT: Scaled = Scaled::at(34, 10.0);
const BULK_CHARGE_VOLTAGE: Scaled = Scaled::at(35, 10.0);
const FLOAT_CHARGE_VOLTAGE: Scaled = Scaled::at(36, 10.0);
const LOW_VOLTAGE_TO_UTILITY: Scaled = Scaled::at(37, 10.0);
const FLOAT_CHARGE_CURRENT: Scaled = Scaled::at(38, 10.0);
const BATTERY_TYPE: Enumerated<BatteryType> = Enumerated::at(39);
const AGING_MODE: Enumerated<AgingMode> = Enumerated::at(40);

/// The configuration of the battery.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatteryConfiguration {
    /// Which source charges the battery.
    pub charge_source: ChargeSource,
    /// The maximum charge current in A. Documented range 10.0-130.0.
    pub max_charge_current: f64,
    /// The bulk charge voltage in V. Documented range 50.0-58.0.
    pub bulk_charge_voltage: f64,
    /// The floating charge voltage in V. Documented range 50.0-56.0.
    pub float_charge_voltage: f64,
    /// The battery voltage in V below which the load switches to utility.
    /// Documented range 44.4-51.4.
    pub low_voltage_to_utility: f64,
    /// The floating charge current in A. Documented range 0.0-80.0.
    pub float_charge_current: f64,
    pub battery_type: BatteryType,
    pub aging_mode: AgingMode,
}

impl BatteryConfiguration {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            charge_source: CHARGE_SOURCE.decode(block),
            max_charge_current: MAX_CHARGE_CURRENT.decode(block),
            bulk_charge_voltage: BULK_CHARGE_VOLTAGE.decode(block),
            float_charge_voltage: FLOAT_CHARGE_VOLTAGE.decode(block),
            low_voltage_to_utility: LOW_VOLTAGE_TO_UTILITY.decode(block),
            float_charge_current: FLOAT_CHARGE_CURRENT.decode(block),
            battery_type: BATTERY_TYPE.decode(block),
            aging_mode: AGING_MODE.decode(block),
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        CHARGE_SOURCE.encode(self.charge_source, block);
        MAX_CHARGE_CURRENT.encode(self.max_charge_current, block);
        BULK_CHARGE_VOLTAGE.encode(self.bulk_charge_voltage, block);
        FLOAT_CHARGE_VOLTAGE.encode(self.float_charge_voltage, block);
        LOW_VOLTAGE_TO_UTILITY.encode(self.low_voltage_to_utility, block);
        FLOAT_CHARGE_CURRENT.encode(self.float_charge_current, block);
        BATTERY_TYPE.encode(self.battery_type, block);
        AGING_MODE.encode(self.aging_mode, block);
    }
}

/// The source used for battery charging, register 2.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ChargeSource {
    PvFirst = 0,
    PvAndUtility = 1,
    PvOnly = 2,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// The battery chemistry, register 39. Can only be set in standby mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum BatteryType {
    LeadAcid = 0,
    Lithium = 1,
    CustomLeadAcid = 2,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// The aging mode, register 40. Can only be set in standby mode.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum AgingMode {
    Normal = 0,
    Aging = 1,
    #[num_enum(catch_all)]
    Unknown(u16),
}
