use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

use crate::codec::{Enumerated, Flag, ScaledU32, Word};
use crate::prelude::*;

const SYSTEM_STATE: Enumerated<SystemState> = Enumerated::at(0);
const WORK_TIME_TOTAL: ScaledU32 = ScaledU32::at(30, 2.0);
const FAULT: Enumerated<FaultCode> = Enumerated::at(40);
const WARNING: Enumerated<WarningCode> = Enumerated::at(41);
const FAULT_VALUE: Word = Word::at(42);
const WARNING_VALUE: Word = Word::at(43);
const DEVICE_TYPE: Enumerated<DeviceType> = Enumerated::at(44);
const CHECK: Word = Word::at(45);
const PRODUCTION_LINE_MODE: Enumerated<ProductionLineMode> = Enumerated::at(46);
const CONSTANT_POWER_OK: Flag = Flag::at(47);

/// Overall device state and diagnostics.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GeneralStatus {
    /// The state the system is currently in.
    pub system_state: SystemState,
    /// Total working time in s.
    pub work_time_total: f64,
    /// The current fault, if any.
    pub fault: FaultCode,
    /// The current warning, if any.
    pub warning: WarningCode,
    /// Raw value accompanying the fault code.
    pub fault_value: u16,
    /// Raw value accompanying the warning code.
    pub warning_value: u16,
    /// The device type as reported in telemetry.
    pub device_type: DeviceType,
    /// Which charge power source is being checked, if a check is running.
    pub check: Option<ChargePowerCheck>,
    /// Production line test mode.
    pub production_line_mode: ProductionLineMode,
    /// Whether constant power operation is OK.
    pub constant_power_ok: bool,
}

impl GeneralStatus {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            system_state: SYSTEM_STATE.decode(block),
            work_time_total: WORK_TIME_TOTAL.decode(block),
            fault: FAULT.decode(block),
            warning: WARNING.decode(block),
            fault_value: FAULT_VALUE.decode(block),
            warning_value: WARNING_VALUE.decode(block),
            device_type: DEVICE_TYPE.decode(block),
            check: match CHECK.decode(block) {
                0 => None,
                raw => Some(ChargePowerCheck::from(raw)),
            },
            production_line_mode: PRODUCTION_LINE_MODE.decode(block),
            constant_power_ok: CONSTANT_POWER_OK.decode(block),
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        SYSTEM_STATE.encode(self.system_state, block);
        WORK_TIME_TOTAL.encode(self.work_time_total, block);
        FAULT.encode(self.fault, block);
        WARNING.encode(self.warning, block);
        FAULT_VALUE.encode(self.fault_value, block);
        WARNING_VALUE.encode(self.warning_value, block);
        DEVICE_TYPE.encode(self.device_type, block);
        // No named variant claims 0, so `Some` always encodes non-zero and
        // the mapping stays bijective.
        CHECK.encode(self.check.map_or(0, u16::from), block);
        PRODUCTION_LINE_MODE.encode(self.production_line_mode, block);
        CONSTANT_POWER_OK.encode(self.constant_power_ok, block);
    }
}

/// The system state, register 0.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum SystemState {
    Standby = 0,
    Discharging = 2,
    Fault = 3,
    Flashing = 4,
    PvCharging = 5,
    AcCharging = 6,
    CombinedCharging = 7,
    CombinedChargingAndBypass = 8,
    PvChargingAndBypass = 9,
    AcChargingAndBypass = 10,
    Bypass = 11,
    PvChargingAndDischarging = 12,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// The fault code, register 40. Zero means no fault.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum FaultCode {
    CpuAToBCommunication = 2,
    BatterySampleInconsistent = 3,
    BuckOvercurrent = 4,
    BmsCommunication = 5,
    BatteryAbnormal = 6,
    BatteryVoltageHigh = 8,
    OverTemperature = 9,
    Overload = 10,
    BatteryReverseConnection = 17,
    BusSoftStartFail = 18,
    DcDcAbnormal = 19,
    DcVoltageHigh = 20,
    CtDetectFailed = 21,
    CpuBToACommunication = 22,
    BusVoltageHigh = 23,
    MovBreak = 25,
    OutputShortCircuit = 26,
    LithiumBatteryOverload = 27,
    OutputVoltageHigh = 28,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// The warning code, register 41.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum WarningCode {
    BatteryVoltageLow = 0,
    OverTemperature = 1,
    Overload = 2,
    EepromReadFailed = 4,
    FirmwareVersionMismatch = 5,
    EepromWriteFailed = 6,
    Bms = 7,
    LithiumBatteryOverload = 8,
    LithiumBatteryAging = 9,
    FanLock = 10,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// The charge source under test during a charge power check, register 45.
/// A zero register means no check is running and decodes to `None` on the
/// containing record.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ChargePowerCheck {
    Pv1 = 1,
    Pv2 = 2,
    Ac = 3,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// The production line test mode, register 46.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum ProductionLineMode {
    Disabled = 0,
    Enabled = 1,
    ClearFault = 2,
    #[num_enum(catch_all)]
    Unknown(u16),
}
