// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod code;
pub mod error;
pub mod frame;
pub mod hal_traits;
pub mod query;
pub mod timing;
pub mod value;

// --- Re-export key types/traits/functions for easier access ---

// From code.rs
pub use code::SensorCode;

// From query.rs
pub use query::Query;

// From error.rs
pub use error::WeatherBusError;

// From frame.rs
pub use frame::{FrameParser, MAX_FRAME_LEN};

// From hal_traits.rs
pub use hal_traits::{BusInstant, BusSerial, BusTimer};

// From value.rs
pub use value::parse_value_prefix;

// From timing.rs (constants - users can access via common::timing::*)
// No re-exports by default.
