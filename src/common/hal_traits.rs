// src/common/hal_traits.rs

use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A monotonic point in time suitable for deadline arithmetic.
///
/// Satisfied automatically by any instant type supporting comparison and
/// `Duration` arithmetic (e.g. `std::time::Instant` behind the `std` feature,
/// or a tick-counter wrapper on embedded targets).
pub trait BusInstant:
    Copy + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> BusInstant for T where
    T: Copy + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

/// Abstraction for timer/delay operations required by the bus driver.
pub trait BusTimer {
    /// Monotonic instant type used for response deadlines.
    type Instant: BusInstant;

    /// Returns the current monotonic time.
    fn now(&self) -> Self::Instant;

    /// Delay for at least the specified number of microseconds.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for the half-duplex serial channel the bus runs over.
///
/// The channel is a shared single resource: callers must follow the strict
/// alternation discipline of transmit-enable, write, flush, then switch to
/// receive-enable before listening. [`crate::master::WeatherBus`] drives this
/// sequence; implementors only need to map each call onto their transceiver.
pub trait BusSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Configures the channel at the given baud rate.
    ///
    /// Pass-through configuration, performed once before any query is issued.
    fn begin(&mut self, baud_rate: u32) -> Result<(), Self::Error>;

    /// Asserts the driver-enable line ahead of writing.
    fn begin_transmission(&mut self) -> Result<(), Self::Error>;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if the write buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Releases the driver-enable line after writing.
    fn end_transmission(&mut self) -> Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer, ensuring all written bytes have
    /// left the wire.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while transmission is in progress.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;

    /// Enables the receiver ahead of listening for a response.
    fn enable_receive(&mut self) -> Result<(), Self::Error>;

    /// Disables the receiver once listening has finished.
    fn disable_receive(&mut self) -> Result<(), Self::Error>;

    /// Attempts to read a single byte from the serial interface.
    ///
    /// Returns `Ok(byte)` if a byte was available, or
    /// `Err(nb::Error::WouldBlock)` if nothing has arrived yet. Other errors
    /// are returned as `Err(nb::Error::Other(Self::Error))`.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;
}
