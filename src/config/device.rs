use chrono::NaiveDateTime;
use num_enum::{FromPrimitive, IntoPrimitive};
use serde::Serialize;

use crate::codec::{Enumerated, Flag, ScaledU32, Text, Timestamp, Word};
use crate::prelude::*;

const FIRMWARE_VERSION: Text = Text::over(9, 11);
const FIRMWARE_CONTROL_VERSION: Text = Text::over(12, 14);
const LCD_LANGUAGE: Enumerated<Language> = Enumerated::at(15);
const OVER_TEMPERATURE_RESTART: Flag = Flag::at(21);
const BUZZER_ENABLED: Flag = Flag::at(22);
const SERIAL_NUMBER: Text = Text::over(23, 27);
const COMMUNICATION_ADDRESS: Word = Word::at(30);
const FIRMWARE_START: Enumerated<FirmwareStart> = Enumerated::at(31);
const DEVICE_TYPE: Enumerated<DeviceType> = Enumerated::at(43);
const SYSTEM_TIME: Timestamp = Timestamp::at(45);
const MANUFACTURER_INFO: Text = Text::over(59, 66);
const FIRMWARE_BUILD_NUMBER: Text = Text::over(67, 70);
const SYS_WEEKLY: Word = Word::at(72);
const MODBUS_VERSION: Word = Word::at(73);
const RATED_ACTIVE_POWER: ScaledU32 = ScaledU32::at(76, 10.0);
const RATED_APPARENT_POWER: ScaledU32 = ScaledU32::at(78, 10.0);
const FACTORY_CODE: Word = Word::at(80);

/// Device identity, firmware and bus settings.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DeviceConfiguration {
    pub firmware_version: String,
    pub firmware_control_version: String,
    pub lcd_language: Language,
    /// Whether the device restarts after cooling down from over-temperature.
    pub over_temperature_restart: bool,
    pub buzzer_enabled: bool,
    pub serial_number: String,
    /// The modbus bus address of the device.
    pub communication_address: u16,
    pub firmware_start: FirmwareStart,
    pub device_type: DeviceType,
    /// The device clock. Absent when the registers hold an invalid calendar
    /// date; the rest of the record still decodes.
    pub system_time: Option<NaiveDateTime>,
    pub manufacturer_info: String,
    pub firmware_build_number: String,
    /// Day of week, 0-6.
    pub sys_weekly: u16,
    /// Modbus protocol version, e.g. 207 for V2.07.
    pub modbus_version: u16,
    /// Rated active power in W.
    pub rated_active_power: f64,
    /// Rated apparent power in VA.
    pub rated_apparent_power: f64,
    /// The ODM info code.
    pub factory_code: u16,
}

impl DeviceConfiguration {
    pub(crate) fn decode(block: &RegisterBlock) -> Self {
        Self {
            firmware_version: FIRMWARE_VERSION.decode(block),
            firmware_control_version: FIRMWARE_CONTROL_VERSION.decode(block),
            lcd_language: LCD_LANGUAGE.decode(block),
            over_temperature_restart: OVER_TEMPERATURE_RESTART.decode(block),
            buzzer_enabled: BUZZER_ENABLED.decode(block),
            serial_number: SERIAL_NUMBER.decode(block),
            communication_address: COMMUNICATION_ADDRESS.decode(block),
            firmware_start: FIRMWARE_START.decode(block),
            device_type: DEVICE_TYPE.decode(block),
            system_time: SYSTEM_TIME.decode(block),
            manufacturer_info: MANUFACTURER_INFO.decode(block),
            firmware_build_number: FIRMWARE_BUILD_NUMBER.decode(block),
            sys_weekly: SYS_WEEKLY.decode(block),
            modbus_version: MODBUS_VERSION.decode(block),
            rated_active_power: RATED_ACTIVE_POWER.decode(block),
            rated_apparent_power: RATED_APPARENT_POWER.decode(block),
            factory_code: FACTORY_CODE.decode(block),
        }
    }

    pub(crate) fn encode_into(&self, block: &mut RegisterBlock) {
        FIRMWARE_VERSION.encode(&self.firmware_version, block);
        FIRMWARE_CONTROL_VERSION.encode(&self.firmware_control_version, block);
        LCD_LANGUAGE.encode(self.lcd_language, block);
        OVER_TEMPERATURE_RESTART.encode(self.over_temperature_restart, block);
        BUZZER_ENABLED.encode(self.buzzer_enabled, block);
        SERIAL_NUMBER.encode(&self.serial_number, block);
        COMMUNICATION_ADDRESS.encode(self.communication_address, block);
        FIRMWARE_START.encode(self.firmware_start, block);
        DEVICE_TYPE.encode(self.device_type, block);
        SYSTEM_TIME.encode(self.system_time, block);
        MANUFACTURER_INFO.encode(&self.manufacturer_info, block);
        FIRMWARE_BUILD_NUMBER.encode(&self.firmware_build_number, block);
        SYS_WEEKLY.encode(self.sys_weekly, block);
        MODBUS_VERSION.encode(self.modbus_version, block);
        RATED_ACTIVE_POWER.encode(self.rated_active_power, block);
        RATED_APPARENT_POWER.encode(self.rated_apparent_power, block);
        FACTORY_CODE.encode(self.factory_code, block);
    }
}

/// LCD display language, register 15.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum Language {
    English = 0,
    #[num_enum(catch_all)]
    Unknown(u16),
}

/// Which flash the firmware boots from, register 31.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, FromPrimitive, IntoPrimitive)]
#[repr(u16)]
pub enum FirmwareStart {
    OwnFlash = 1,
    ControlBoard = 256,
    #[num_enum(catch_all)]
    Unknown(u16),
}
