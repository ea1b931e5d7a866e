// src/lib.rs

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod master;

// Re-export key types for convenience
pub use common::SensorCode;
pub use common::WeatherBusError;
pub use master::WeatherBus;
