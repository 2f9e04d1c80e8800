use serde::Serialize;

use crate::codec::{Scaled, ScaledU32, Word};
use crate::prelude::*;

// The two MPPT trackers share a layout but not a base offset: voltages and
// charge powers sit low in the block, energy counters in the 48..55 range.
struct TrackerFields {
    voltage: Scaled,
    charge_power: ScaledU32,
    energy_today: ScaledU32,
    energy_total: ScaledU32,
}

const PV1: TrackerFields = TrackerFields {
    voltage: Scaled::at(1, 10.0),
    charge_power: ScaledU32::at(3, 10.0),
    energy_today: ScaledU32::at(48, 10.0),
    energy_total: ScaledU32::at(50, 10.0),
};

const PV2: TrackerFields = TrackerFields {
    voltage: Scaled::at(2, 10.0),
    charge_power: ScaledU32::at(5, 10.0),
    energy_today: ScaledU32::at(52, 10.0),
    energy_total: ScaledU32::at(54, 10.0),
};

const MPPT_FAN_SPEED: Word = Word::at(81);

/// Telemetry for the photovoltaic inputs.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PvStatus {
    /// The first MPPT tracker.
    pub pv1: PvTracker,
    /// The second MPPT tracker.
    pub pv2: PvTracker,
    /// MPPT charger fan speed in percent.
    pub mppt_fan_speed: u16,
}

/// Telemetry for one MPPT tracker.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PvTracker {
    /// The PV input voltage in V.
    pub voltage: f64,
    /// The charging power from this input in W.
    pub charge_power: f64,
    /// The energy generated today in kWh.
    pub energy_today: f64,
    /// The energy generated overall in kWh.
    pub energy_total: f64,
}

impl PvStatus {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            pv1: PvTracker::decode(&PV1, block),
            pv2: PvTracker::decode(&PV2, block),
            mppt_fan_speed: MPPT_FAN_SPEED.decode(block),
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        self.pv1.encode_into(&PV1, block);
        self.pv2.encode_into(&PV2, block);
        MPPT_FAN_SPEED.encode(self.mppt_fan_speed, block);
    }
}

impl PvTracker {
    fn decode(fields: &TrackerFields, block: &RegisterBlock) -> Self {
        Self {
            voltage: fields.voltage.decode(block),
            charge_power: fields.charge_power.decode(block),
            energy_today: fields.energy_today.decode(block),
            energy_total: fields.energy_total.decode(block),
        }
    }

    fn encode_into(&self, fields: &TrackerFields, block: &mut RegisterBlock) {
        fields.voltage.encode(self.voltage, block);
        fields.charge_power.encode(self.charge_power, block);
        fields.energy_today.encode(self.energy_today, block);
        fields.energy_total.encode(self.energy_total, block);
    }
}
