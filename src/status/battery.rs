use serde::Serialize;

use crate::codec::{Flag, Scaled, ScaledI32, ScaledU32, Word};
use crate::prelude::*;

const VOLTAGE: Scaled = Scaled::at(17, 100.0);
const STATE_OF_CHARGE: Word = Word::at(18);
const DC_OUTPUT_VOLTAGE: Scaled = Scaled::at(24, 10.0);
const DC_CONVERTER_TEMPERATURE: Scaled = Scaled::at(26, 10.0);
const PORT_VOLTAGE: Scaled = Scaled::at(28, 100.0);
const BUS_VOLTAGE: Scaled = Scaled::at(29, 100.0);
const DISCHARGE_ENERGY_TODAY: ScaledU32 = ScaledU32::at(60, 10.0);
const DISCHARGE_ENERGY_TOTAL: ScaledU32 = ScaledU32::at(62, 10.0);
const DISCHARGE_POWER: ScaledU32 = ScaledU32::at(73, 10.0);
const APPARENT_DISCHARGE_POWER: ScaledU32 = ScaledU32::at(75, 10.0);
const POWER: ScaledI32 = ScaledI32::at(77, 10.0);
const OVERCHARGE: Flag = Flag::at(80);

/// Telemetry for the battery.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BatteryStatus {
    /// The battery voltage in V.
    pub voltage: f64,
    /// The state of charge in percent.
    pub state_of_charge: u16,
    /// The DC output voltage in V.
    pub dc_output_voltage: f64,
    /// The DC-DC converter temperature in °C.
    pub dc_converter_temperature: f64,
    /// The voltage at the battery port in V.
    pub port_voltage: f64,
    /// The battery-side bus voltage in V.
    pub bus_voltage: f64,
    /// The energy discharged from the battery today in kWh.
    pub discharge_energy_today: f64,
    /// The energy discharged from the battery overall in kWh.
    pub discharge_energy_total: f64,
    /// The discharging power in W.
    pub discharge_power: f64,
    /// The apparent discharging power in VA.
    pub apparent_discharge_power: f64,
    /// The battery power in W. Positive while discharging, negative while
    /// charging.
    pub power: f64,
    /// Whether the battery is overcharged.
    pub overcharge: bool,
}

impl BatteryStatus {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            voltage: VOLTAGE.decode(block),
            state_of_charge: STATE_OF_CHARGE.decode(block),
            dc_output_voltage: DC_OUTPUT_VOLTAGE.decode(block),
            dc_converter_temperature: DC_CONVERTER_TEMPERATURE.decode(block),
            port_voltage: PORT_VOLTAGE.decode(block),
            bus_voltage: BUS_VOLTAGE.decode(block),
            discharge_energy_today: DISCHARGE_ENERGY_TODAY.decode(block),
            discharge_energy_total: DISCHARGE_ENERGY_TOTAL.decode(block),
            discharge_power: DISCHARGE_POWER.decode(block),
            apparent_discharge_power: APPARENT_DISCHARGE_POWER.decode(block),
            power: POWER.decode(block),
            overcharge: OVERCHARGE.decode(block),
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        VOLTAGE.encode(self.voltage, block);
        STATE_OF_CHARGE.encode(self.state_of_charge, block);
        DC_OUTPUT_VOLTAGE.encode(self.dc_output_voltage, block);
        DC_CONVERTER_TEMPERATURE.encode(self.dc_converter_temperature, block);
        PORT_VOLTAGE.encode(self.port_voltage, block);
        BUS_VOLTAGE.encode(self.bus_voltage, block);
        DISCHARGE_ENERGY_TODAY.encode(self.discharge_energy_today, block);
        DISCHARGE_ENERGY_TOTAL.encode(self.discharge_energy_total, block);
        DISCHARGE_POWER.encode(self.discharge_power, block);
        APPARENT_DISCHARGE_POWER.encode(self.apparent_discharge_power, block);
        POWER.encode(self.power, block);
        OVERCHARGE.encode(self.overcharge, block);
    }
}
