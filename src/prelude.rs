pub use anyhow::{anyhow, bail, Result};
pub use log::{debug, error, info, trace, warn};

pub use crate::config::Configuration;
pub use crate::device_type::{DeviceClass, DeviceType};
pub use crate::registers::{RegisterBlock, HOLDING_REGISTER_COUNT, INPUT_REGISTER_COUNT};
pub use crate::status::Status;
