use serde::Serialize;

use crate::codec::{Scaled, ScaledU32};
use crate::prelude::*;

const CHARGE_POWER: ScaledU32 = ScaledU32::at(13, 10.0);
const APPARENT_CHARGE_POWER: ScaledU32 = ScaledU32::at(15, 10.0);
const BUS_VOLTAGE: Scaled = Scaled::at(19, 10.0);
const INPUT_VOLTAGE: Scaled = Scaled::at(20, 10.0);
const INPUT_FREQUENCY: Scaled = Scaled::at(21, 100.0);
const INPUT_POWER: ScaledU32 = ScaledU32::at(36, 10.0);
const APPARENT_INPUT_POWER: ScaledU32 = ScaledU32::at(38, 10.0);
const CHARGE_ENERGY_TODAY: ScaledU32 = ScaledU32::at(56, 10.0);
const CHARGE_ENERGY_TOTAL: ScaledU32 = ScaledU32::at(58, 10.0);
const BATTERY_CHARGE_CURRENT: Scaled = Scaled::at(68, 10.0);

/// Telemetry for the AC input (utility side).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AcInputStatus {
    /// The charging power drawn from AC in W.
    pub charge_power: f64,
    /// The apparent charging power drawn from AC in VA.
    pub apparent_charge_power: f64,
    /// The AC input bus voltage in V.
    pub bus_voltage: f64,
    /// The AC input voltage in V.
    pub input_voltage: f64,
    /// The AC input frequency in Hz.
    pub input_frequency: f64,
    /// The power drawn from AC in W.
    pub input_power: f64,
    /// The apparent power drawn from AC in VA.
    pub apparent_input_power: f64,
    /// The energy used for charging from AC today in kWh.
    pub charge_energy_today: f64,
    /// The energy used for charging from AC overall in kWh.
    pub charge_energy_total: f64,
    /// The battery charging current supplied from AC in A.
    pub battery_charge_current: f64,
}

impl AcInputStatus {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            charge_power: CHARGE_POWER.decode(block),
            apparent_charge_power: APPARENT_CHARGE_POWER.decode(block),
            bus_voltage: BUS_VOLTAGE.decode(block),
            input_voltage: INPUT_VOLTAGE.decode(block),
            input_frequency: INPUT_FREQUENCY.decode(block),
            input_power: INPUT_POWER.decode(block),
            apparent_input_power: APPARENT_INPUT_POWER.decode(block),
            charge_energy_today: CHARGE_ENERGY_TODAY.decode(block),
            charge_energy_total: CHARGE_ENERGY_TOTAL.decode(block),
            battery_charge_current: BATTERY_CHARGE_CURRENT.decode(block),
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        CHARGE_POWER.encode(self.charge_power, block);
        APPARENT_CHARGE_POWER.encode(self.apparent_charge_power, block);
        BUS_VOLTAGE.encode(self.bus_voltage, block);
        INPUT_VOLTAGE.encode(self.input_voltage, block);
        INPUT_FREQUENCY.encode(self.input_frequency, block);
        INPUT_POWER.encode(self.input_power, block);
        APPARENT_INPUT_POWER.encode(self.apparent_input_power, block);
        CHARGE_ENERGY_TODAY.encode(self.charge_energy_today, block);
        CHARGE_ENERGY_TOTAL.encode(self.charge_energy_total, block);
        BATTERY_CHARGE_CURRENT.encode(self.battery_charge_current, block);
    }
}
