mod common;
use common::*;

use chrono::NaiveDate;
use growatt_spf::config::ac_output::{OutputFrequency, OutputPriority, OutputVoltage, OverloadRestart};
use growatt_spf::config::battery::{AgingMode, BatteryType, ChargeSource};
use growatt_spf::config::device::{FirmwareStart, Language};
use growatt_spf::config::utility::AcInputMode;
use growatt_spf::config::PvInputMode;
use growatt_spf::prelude::*;

#[test]
fn decodes_every_configuration_field() -> Result<()> {
    let config = Configuration::decode(&Factory::holding_block())?;

    assert!(!config.standby);
    assert_eq!(config.pv_input_mode, PvInputMode::Parallel);

    assert_eq!(config.utility.ac_input_mode, AcInputMode::Ups);
    assert_eq!(config.utility.output_interval.start, 22);
    assert_eq!(config.utility.output_interval.end, 6);
    assert_eq!(config.utility.charge_interval.start, 1);
    assert_eq!(config.utility.charge_interval.end, 5);

    assert!(config.ac_output.enabled);
    assert_eq!(config.ac_output.priority, OutputPriority::Utility);
    assert_eq!(config.ac_output.voltage, OutputVoltage::V230);
    assert_eq!(config.ac_output.frequency, OutputFrequency::F50Hz);
    assert_eq!(config.ac_output.overload_restart, OverloadRestart::SwitchToUtility);
    assert_eq!(config.ac_output.inverter_module.high, 0x00AA);
    assert_eq!(config.ac_output.inverter_module.low, 0x0055);

    assert_eq!(config.battery.charge_source, ChargeSource::PvAndUtility);
    assert_eq!(config.battery.max_charge_current, 60.0);
    assert_eq!(config.battery.bulk_charge_voltage, 56.4);
    assert_eq!(config.battery.float_charge_voltage, 54.0);
    assert_eq!(config.battery.low_voltage_to_utility, 48.0);
    assert_eq!(config.battery.float_charge_current, 20.0);
    assert_eq!(config.battery.battery_type, BatteryType::Lithium);
    assert_eq!(config.battery.aging_mode, AgingMode::Normal);

    assert_eq!(config.device.firmware_version, "SPF500");
    assert_eq!(config.device.firmware_control_version, "V1.0");
    assert_eq!(config.device.lcd_language, Language::English);
    assert!(config.device.over_temperature_restart);
    assert!(config.device.buzzer_enabled);
    assert_eq!(config.device.serial_number, "XYZ1234567");
    assert_eq!(config.device.communication_address, 1);
    assert_eq!(config.device.firmware_start, FirmwareStart::ControlBoard);
    assert_eq!(config.device.device_type, DeviceType::from(3408));
    assert_eq!(config.device.device_type.class(), DeviceClass::OffGridSpf);
    assert_eq!(
        config.device.system_time,
        NaiveDate::from_ymd_opt(2024, 2, 29).and_then(|d| d.and_hms_opt(13, 59, 7)),
    );
    assert_eq!(config.device.manufacturer_info, "Growatt");
    assert_eq!(config.device.firmware_build_number, "9A1.0");
    assert_eq!(config.device.sys_weekly, 7);
    assert_eq!(config.device.modbus_version, 307);
    assert_eq!(config.device.rated_active_power, 5000.0);
    assert_eq!(config.device.rated_apparent_power, 5500.0);
    assert_eq!(config.device.factory_code, 1);

    Ok(())
}

#[test]
fn encoding_into_the_source_block_reproduces_it() -> Result<()> {
    let original = Factory::holding_block();
    let config = Configuration::decode(&original)?;

    let mut block = original.clone();
    config.encode_into(&mut block)?;

    assert_eq!(block.as_words(), original.as_words());
    Ok(())
}

#[test]
fn encoding_preserves_unmodeled_registers() -> Result<()> {
    let original = Factory::holding_block();
    let mut config = Configuration::decode(&original)?;
    config.battery.max_charge_current = 80.0;
    config.standby = true;

    let mut block = original.clone();
    config.encode_into(&mut block)?;

    for offset in [16, 17, 32, 33, 41, 42, 71, 74, 75] {
        assert_eq!(
            block.get16(offset),
            original.get16(offset),
            "register {} was disturbed",
            offset,
        );
    }
    assert_eq!(block.get16(34), 800);
    Ok(())
}

#[test]
fn standby_and_output_enable_share_register_zero() -> Result<()> {
    let original = Factory::holding_block();
    let mut config = Configuration::decode(&original)?;

    config.standby = true;
    let mut block = original.clone();
    config.encode_into(&mut block)?;
    assert_eq!(block.get16(0), 0x0101);

    config.ac_output.enabled = false;
    let mut block = original.clone();
    config.encode_into(&mut block)?;
    assert_eq!(block.get16(0), 0x0001);

    let decoded = Configuration::decode(&block)?;
    assert!(decoded.standby);
    assert!(!decoded.ac_output.enabled);
    Ok(())
}

#[test]
fn absent_system_time_keeps_prior_words() -> Result<()> {
    let original = Factory::holding_block();
    let mut config = Configuration::decode(&original)?;
    config.device.system_time = None;

    let mut block = original.clone();
    config.encode_into(&mut block)?;

    for offset in 45..=50 {
        assert_eq!(block.get16(offset), original.get16(offset));
    }
    Ok(())
}

#[test]
fn invalid_system_time_decodes_as_absent() -> Result<()> {
    let mut block = Factory::holding_block();
    block.set16(46, 13); // month 13

    let config = Configuration::decode(&block)?;
    assert_eq!(config.device.system_time, None);
    Ok(())
}

#[test]
fn short_block_is_rejected() {
    let block = RegisterBlock::zeroed(HOLDING_REGISTER_COUNT - 1);
    assert!(Configuration::decode(&block).is_err());
}

#[test]
fn encode_without_a_source_block_zeroes_unmodeled_registers() -> Result<()> {
    let config = Configuration::decode(&Factory::holding_block())?;
    let block = config.encode();

    assert_eq!(block.len(), HOLDING_REGISTER_COUNT);
    assert_eq!(block.get16(16), 0);
    assert_eq!(block.get16(34), 600);

    assert_eq!(Configuration::decode(&block)?, config);
    Ok(())
}
