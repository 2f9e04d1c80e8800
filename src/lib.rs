// Module declarations for the crate's core components
pub mod codec;       // Scalar and enum field descriptors
pub mod config;      // Configuration record (holding register block)
pub mod device_type; // Device type classification
pub mod prelude;     // Common imports and types
pub mod registers;   // Register block buffers
pub mod status;      // Status record (input register block)

pub use crate::config::Configuration;
pub use crate::device_type::{DeviceClass, DeviceType};
pub use crate::registers::{RegisterBlock, HOLDING_REGISTER_COUNT, INPUT_REGISTER_COUNT};
pub use crate::status::Status;
