//! Device type codes reported in holding register 43 and input register 44.
//!
//! The code space is carved into ranges rather than single values (one model
//! family per hundred codes), so the classification is derived on demand and
//! the raw code is kept verbatim: re-encoding always reproduces the exact
//! word the device reported, even for codes this crate cannot classify.

use serde::Serialize;

/// A raw device type code with range-based classification.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DeviceType(u16);

impl DeviceType {
    pub fn new(raw: u16) -> Self {
        Self(raw)
    }

    pub fn raw_value(self) -> u16 {
        self.0
    }

    pub fn class(self) -> DeviceClass {
        match self.0 {
            100..=1099 => DeviceClass::Inverter(InverterModel::from_code(self.0)),
            3100..=3199 => DeviceClass::PvStorage,
            3400..=3499 => DeviceClass::OffGridSpf,
            10001 => DeviceClass::DataLogger(DataLogger::RfShine),
            10002 => DeviceClass::DataLogger(DataLogger::WebShinePano),
            10003 => DeviceClass::DataLogger(DataLogger::WebShineWebBox),
            10004 => DeviceClass::DataLogger(DataLogger::WlWifiModule),
            11001 => DeviceClass::ConfluenceBox,
            _ => DeviceClass::Unknown,
        }
    }
}

impl From<u16> for DeviceType {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<DeviceType> for u16 {
    fn from(device_type: DeviceType) -> Self {
        device_type.0
    }
}

/// The device family a type code falls into.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DeviceClass {
    /// Grid-tie PV inverter (codes 100..1100).
    Inverter(InverterModel),
    /// Front 1 tracker PV storage (codes 3100..3200).
    PvStorage,
    /// Off-grid SPF 3-5K (codes 3400..3500).
    OffGridSpf,
    /// Data logger accessory.
    DataLogger(DataLogger),
    /// Confluence box 1 (code 11001).
    ConfluenceBox,
    Unknown,
}

/// Grid connect inverter model, one family per hundred codes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum InverterModel {
    OneTrackerOnePhaseTl,
    TwoTrackerOnePhaseTl,
    OneTrackerOnePhaseHf,
    TwoTrackerOnePhaseHf,
    OneTrackerOnePhaseLf,
    TwoTrackerOnePhaseLf,
    OneTrackerThreePhaseTl,
    TwoTrackerThreePhaseTl,
    OneTrackerThreePhaseLf,
    TwoTrackerThreePhaseLf,
}

impl InverterModel {
    fn from_code(code: u16) -> Self {
        match code {
            100..=199 => Self::OneTrackerOnePhaseTl,
            200..=299 => Self::TwoTrackerOnePhaseTl,
            300..=399 => Self::OneTrackerOnePhaseHf,
            400..=499 => Self::TwoTrackerOnePhaseHf,
            500..=599 => Self::OneTrackerOnePhaseLf,
            600..=699 => Self::TwoTrackerOnePhaseLf,
            700..=799 => Self::OneTrackerThreePhaseTl,
            800..=899 => Self::TwoTrackerThreePhaseTl,
            900..=999 => Self::OneTrackerThreePhaseLf,
            _ => Self::TwoTrackerThreePhaseLf,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum DataLogger {
    RfShine,
    WebShinePano,
    WebShineWebBox,
    WlWifiModule,
}
