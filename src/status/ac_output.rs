use serde::Serialize;

use crate::codec::{Scaled, ScaledU32, Word};
use crate::prelude::*;

struct BuckFields {
    current: Scaled,
    temperature: Scaled,
}

const BUCK1: BuckFields = BuckFields {
    current: Scaled::at(7, 10.0),
    temperature: Scaled::at(32, 10.0),
};

const BUCK2: BuckFields = BuckFields {
    current: Scaled::at(8, 10.0),
    temperature: Scaled::at(33, 10.0),
};

const ACTIVE_POWER: ScaledU32 = ScaledU32::at(9, 10.0);
const APPARENT_POWER: ScaledU32 = ScaledU32::at(11, 10.0);
const OUTPUT_VOLTAGE: Scaled = Scaled::at(22, 10.0);
const OUTPUT_FREQUENCY: Scaled = Scaled::at(23, 100.0);
const INVERTER_TEMPERATURE: Scaled = Scaled::at(25, 10.0);
const LOAD_PERCENTAGE: Scaled = Scaled::at(27, 10.0);
const OUTPUT_CURRENT: Scaled = Scaled::at(34, 10.0);
const INVERTER_CURRENT: Scaled = Scaled::at(35, 10.0);
const DISCHARGE_ENERGY_TODAY: ScaledU32 = ScaledU32::at(64, 10.0);
const DISCHARGE_ENERGY_TOTAL: ScaledU32 = ScaledU32::at(66, 10.0);
const DISCHARGE_POWER: ScaledU32 = ScaledU32::at(69, 10.0);
const APPARENT_DISCHARGE_POWER: ScaledU32 = ScaledU32::at(71, 10.0);
const FAN_SPEED: Word = Word::at(82);

/// Telemetry for the AC output (load side).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AcOutputStatus {
    /// The first buck converter.
    pub buck1: BuckConverter,
    /// The second buck converter.
    pub buck2: BuckConverter,
    /// The output power in W.
    pub active_power: f64,
    /// The apparent output power in VA.
    pub apparent_power: f64,
    /// The output voltage in V.
    pub output_voltage: f64,
    /// The output frequency in Hz.
    pub output_frequency: f64,
    /// The inverter temperature in °C.
    pub inverter_temperature: f64,
    /// The load on the output in percent.
    pub load_percentage: f64,
    /// The output current in A.
    pub output_current: f64,
    /// The inverter current in A.
    pub inverter_current: f64,
    /// The energy discharged to the load today in kWh.
    pub discharge_energy_today: f64,
    /// The energy discharged to the load overall in kWh.
    pub discharge_energy_total: f64,
    /// The discharging power in W.
    pub discharge_power: f64,
    /// The apparent discharging power in VA.
    pub apparent_discharge_power: f64,
    /// Inverter fan speed in percent.
    pub fan_speed: u16,
}

/// Telemetry for one buck converter.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BuckConverter {
    /// The converter current in A.
    pub current: f64,
    /// The converter temperature in °C.
    pub temperature: f64,
}

impl AcOutputStatus {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            buck1: BuckConverter::decode(&BUCK1, block),
            buck2: BuckConverter::decode(&BUCK2, block),
            active_power: ACTIVE_POWER.decode(block),
            apparent_power: APPARENT_POWER.decode(block),
            output_voltage: OUTPUT_VOLTAGE.decode(block),
            output_frequency: OUTPUT_FREQUENCY.decode(block),
            inverter_temperature: INVERTER_TEMPERATURE.decode(block),
            load_percentage: LOAD_PERCENTAGE.decode(block),
            output_current: OUTPUT_CURRENT.decode(block),
            inverter_current: INVERTER_CURRENT.decode(block),
            discharge_energy_today: DISCHARGE_ENERGY_TODAY.decode(block),
            discharge_energy_total: DISCHARGE_ENERGY_TOTAL.decode(block),
            discharge_power: DISCHARGE_POWER.decode(block),
            apparent_discharge_power: APPARENT_DISCHARGE_POWER.decode(block),
            fan_speed: FAN_SPEED.decode(block),
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        self.buck1.encode_into(&BUCK1, block);
        self.buck2.encode_into(&BUCK2, block);
        ACTIVE_POWER.encode(self.active_power, block);
        APPARENT_POWER.encode(self.apparent_power, block);
        OUTPUT_VOLTAGE.encode(self.output_voltage, block);
        OUTPUT_FREQUENCY.encode(self.output_frequency, block);
        INVERTER_TEMPERATURE.encode(self.inverter_temperature, block);
        LOAD_PERCENTAGE.encode(self.load_percentage, block);
        OUTPUT_CURRENT.encode(self.output_current, block);
        INVERTER_CURRENT.encode(self.inverter_current, block);
        DISCHARGE_ENERGY_TODAY.encode(self.discharge_energy_today, block);
        DISCHARGE_ENERGY_TOTAL.encode(self.discharge_energy_total, block);
        DISCHARGE_POWER.encode(self.discharge_power, block);
        APPARENT_DISCHARGE_POWER.encode(self.apparent_discharge_power, block);
        FAN_SPEED.encode(self.fan_speed, block);
    }
}

impl BuckConverter {
    fn decode(fields: &BuckFields, block: &RegisterBlock) -> Self {
        Self {
            current: fields.current.decode(block),
            temperature: fields.temperature.decode(block),
        }
    }

    fn encode_into(&self, fields: &BuckFields, block: &mut RegisterBlock) {
        fields.current.encode(self.current, block);
        fields.temperature.encode(self.temperature, block);
    }
}
