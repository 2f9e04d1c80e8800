use growatt_spf::{RegisterBlock, HOLDING_REGISTER_COUNT, INPUT_REGISTER_COUNT};

pub struct Factory;

impl Factory {
    /// A holding register block with a known value at every documented
    /// offset. Registers the crate does not model carry marker values so
    /// tests can check they survive re-encoding.
    pub fn holding_block() -> RegisterBlock {
        let mut words = vec![0u16; HOLDING_REGISTER_COUNT];

        words[0] = 0x0100; // output enabled, not standby
        words[1] = 2; // output priority: utility
        words[2] = 1; // charge source: PV and utility
        words[3] = 22; // output interval start hour
        words[4] = 6; // output interval end hour
        words[5] = 1; // charge interval start hour
        words[6] = 5; // charge interval end hour
        words[7] = 1; // PV input mode: parallel
        words[8] = 1; // AC input mode: UPS

        // firmware version "SPF500"
        words[9] = 0x5350;
        words[10] = 0x4635;
        words[11] = 0x3030;
        // firmware control version "V1.0"
        words[12] = 0x5631;
        words[13] = 0x2E30;

        words[15] = 0; // LCD language: English
        words[16] = 0xBEEF; // unmodeled
        words[17] = 0x1234; // unmodeled
        words[18] = 1; // output voltage: 230 V
        words[19] = 0; // output frequency: 50 Hz
        words[20] = 2; // overload restart: switch to utility
        words[21] = 1; // over-temperature restart
        words[22] = 1; // buzzer

        // serial number "XYZ1234567"
        words[23] = 0x5859;
        words[24] = 0x5A31;
        words[25] = 0x3233;
        words[26] = 0x3435;
        words[27] = 0x3637;

        words[28] = 0x00AA; // inverter module, high
        words[29] = 0x0055; // inverter module, low
        words[30] = 1; // communication address
        words[31] = 256; // firmware start: control board
        words[32] = 0x0101; // unmodeled
        words[33] = 0x0202; // unmodeled
        words[34] = 600; // max charge current 60.0 A
        words[35] = 564; // bulk charge voltage 56.4 V
        words[36] = 540; // float charge voltage 54.0 V
        words[37] = 480; // low voltage to utility 48.0 V
        words[38] = 200; // float charge current 20.0 A
        words[39] = 1; // battery type: lithium
        words[40] = 0; // aging mode: normal
        words[41] = 0xCAFE; // unmodeled
        words[42] = 0x0042; // unmodeled
        words[43] = 3408; // device type: off-grid SPF

        // system time 2024-02-29 13:59:07
        words[45] = 2024;
        words[46] = 2;
        words[47] = 29;
        words[48] = 13;
        words[49] = 59;
        words[50] = 7;

        // manufacturer info "Growatt"
        words[59] = 0x4772;
        words[60] = 0x6F77;
        words[61] = 0x6174;
        words[62] = 0x7400;

        // firmware build number "9A1.0"
        words[67] = 0x3941;
        words[68] = 0x312E;
        words[69] = 0x3000;

        words[71] = 0x7777; // unmodeled
        words[72] = 7; // sys weekly
        words[73] = 307; // modbus version
        words[74] = 0xAAAA; // unmodeled
        words[75] = 0x5555; // unmodeled
        words[76] = 0; // rated active power, high
        words[77] = 0xC350; // rated active power, low: 5000.0 W
        words[78] = 0; // rated apparent power, high
        words[79] = 0xD6D8; // rated apparent power, low: 5500.0 VA
        words[80] = 1; // factory code

        RegisterBlock::new(words)
    }

    /// An input register block describing a device that is PV charging while
    /// discharging into a load, with an overload warning pending.
    pub fn input_block() -> RegisterBlock {
        let mut words = vec![0u16; INPUT_REGISTER_COUNT];

        words[0] = 5; // system state: PV charging
        words[1] = 2513; // PV1 voltage 251.3 V
        words[2] = 2450; // PV2 voltage 245.0 V
        words[4] = 0x3A98; // PV1 charge power 1500.0 W
        words[6] = 0x2EE0; // PV2 charge power 1200.0 W
        words[7] = 52; // buck1 current 5.2 A
        words[8] = 48; // buck2 current 4.8 A
        words[10] = 0x4E20; // output active power 2000.0 W
        words[12] = 0x5208; // output apparent power 2100.0 VA
        words[17] = 5230; // battery voltage 52.30 V
        words[18] = 77; // state of charge 77 %
        words[19] = 3100; // AC input bus voltage 310.0 V
        words[20] = 2299; // AC input voltage 229.9 V
        words[21] = 4999; // AC input frequency 49.99 Hz
        words[22] = 2301; // output voltage 230.1 V
        words[23] = 5001; // output frequency 50.01 Hz
        words[24] = 541; // DC output voltage 54.1 V
        words[25] = 355; // inverter temperature 35.5 °C
        words[26] = 301; // DC-DC converter temperature 30.1 °C
        words[27] = 425; // load 42.5 %
        words[28] = 5235; // battery port voltage 52.35 V
        words[29] = 5240; // battery bus voltage 52.40 V
        words[30] = 0x006D; // work time, high
        words[31] = 0xDD00; // work time, low: 7200000 half-seconds
        words[32] = 401; // buck1 temperature 40.1 °C
        words[33] = 402; // buck2 temperature 40.2 °C
        words[34] = 87; // output current 8.7 A
        words[35] = 85; // inverter current 8.5 A
        words[40] = 0; // no fault
        words[41] = 2; // warning: overload
        words[42] = 0; // fault value
        words[43] = 120; // warning value
        words[44] = 3415; // device type
        words[45] = 2; // charge power check: PV2
        words[46] = 0; // production line mode disabled
        words[47] = 1; // constant power OK
        words[49] = 85; // PV1 energy today 8.5 kWh
        words[51] = 12345; // PV1 energy total 1234.5 kWh
        words[53] = 76; // PV2 energy today 7.6 kWh
        words[55] = 11111; // PV2 energy total 1111.1 kWh
        words[59] = 999; // AC charge energy total 99.9 kWh
        words[61] = 45; // battery discharge energy today 4.5 kWh
        words[63] = 6789; // battery discharge energy total 678.9 kWh
        words[65] = 91; // output discharge energy today 9.1 kWh
        words[67] = 8888; // output discharge energy total 888.8 kWh
        words[68] = 250; // battery charge current 25.0 A
        words[77] = 0xFFFF; // battery power, high
        words[78] = 0xD120; // battery power, low: -1200.0 W (charging)
        words[79] = 0xDEAD; // unmodeled
        words[80] = 0; // not overcharged
        words[81] = 55; // MPPT fan 55 %
        words[82] = 60; // inverter fan 60 %

        RegisterBlock::new(words)
    }
}
