// src/master/mod.rs

//! Master-side bus driver.
//!
//! Owns the serial interface and sequences the half-duplex discipline for
//! each query: transmit-enable, write, flush, grace delay, then
//! receive-enable for the parse phase. Queries serialize through `&mut self`;
//! the bus has no addressing, so one outstanding query is all the protocol
//! can ever support.

use core::fmt::Debug;
use core::time::Duration;
use nb::Result as NbResult;

use crate::common::{
    code::SensorCode,
    error::WeatherBusError,
    frame::FrameParser,
    hal_traits::{BusSerial, BusTimer},
    query::Query,
    timing,
};

/// A WeatherBus master handle for synchronous (blocking) operation.
#[derive(Debug)]
pub struct WeatherBus<IF>
where
    IF: BusSerial + BusTimer,
    IF::Error: Debug,
{
    interface: IF,
}

impl<IF> WeatherBus<IF>
where
    IF: BusSerial + BusTimer,
    IF::Error: Debug,
{
    pub fn new(interface: IF) -> Self {
        WeatherBus { interface }
    }

    /// Consumes the handle, returning the underlying interface.
    pub fn release(self) -> IF {
        self.interface
    }

    /// Configures the bus at the default 9600 baud.
    pub fn begin(&mut self) -> Result<(), WeatherBusError<IF::Error>> {
        self.begin_at(timing::DEFAULT_BAUD_RATE)
    }

    /// Configures the bus at the given baud rate.
    pub fn begin_at(&mut self, baud_rate: u32) -> Result<(), WeatherBusError<IF::Error>> {
        self.interface.begin(baud_rate).map_err(WeatherBusError::Io)
    }

    // --- Named Sensor Queries ---

    /// Queries the temperature sensor, in degrees Celsius.
    pub fn query_temperature(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::TEMPERATURE)
    }

    /// Queries the humidity sensor, in percent.
    pub fn query_humidity(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::HUMIDITY)
    }

    /// Queries the pressure sensor, in hPa.
    pub fn query_pressure(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::PRESSURE)
    }

    /// Queries the UV sensor, as a UV index.
    pub fn query_uv(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::UV)
    }

    /// Queries the air quality sensor, as an air quality index.
    pub fn query_air_quality(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::AIR_QUALITY)
    }

    /// Queries cumulative rainfall since the last query, in mm.
    pub fn query_rainfall(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::RAINFALL)
    }

    /// Queries the wind speed sensor, in m/s.
    pub fn query_wind_speed(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::WIND_SPEED)
    }

    /// Queries the wind direction sensor, in degrees.
    pub fn query_wind_direction(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::WIND_DIRECTION)
    }

    /// Queries the canopy temperature sensor, in degrees Celsius.
    pub fn query_canopy_temperature(&mut self) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::CANOPY_TEMPERATURE)
    }

    /// Runs a query for an arbitrary sensor code.
    ///
    /// Behaves identically to the named queries: the responder is expected
    /// to open its frame with the same code character. This keeps new sensor
    /// types usable without a library change.
    pub fn query_custom(&mut self, code: char) -> Result<f32, WeatherBusError<IF::Error>> {
        self.query(SensorCode::custom(code))
    }

    // --- Core Transaction Logic (Private Helpers) ---

    fn query(&mut self, code: SensorCode) -> Result<f32, WeatherBusError<IF::Error>> {
        let query = Query::new(code);
        self.send_query(&query)?;
        self.read_response(code)
    }

    /// Transmits one query: driver-enable, query bytes plus line terminator,
    /// driver-release, flush, then the fixed grace delay that gives the
    /// responder time to start replying.
    fn send_query(&mut self, query: &Query) -> Result<(), WeatherBusError<IF::Error>> {
        self.interface
            .begin_transmission()
            .map_err(WeatherBusError::Io)?;

        let formatted = query.format_into();
        for &byte in formatted.as_bytes() {
            self.block_with_timeout(timing::WRITE_TIMEOUT, |iface| iface.write_byte(byte))?;
        }
        self.block_with_timeout(timing::WRITE_TIMEOUT, |iface| iface.write_byte(b'\n'))?;

        self.interface
            .end_transmission()
            .map_err(WeatherBusError::Io)?;
        self.block_with_timeout(timing::FLUSH_TIMEOUT, |iface| iface.flush())?;

        self.interface
            .delay_ms(timing::TRANSMIT_GRACE.as_millis() as u32);
        Ok(())
    }

    /// Listens for the response frame, keeping the receiver enabled for
    /// exactly the duration of the parse phase.
    fn read_response(&mut self, code: SensorCode) -> Result<f32, WeatherBusError<IF::Error>> {
        self.interface
            .enable_receive()
            .map_err(WeatherBusError::Io)?;

        let result = self.receive_frame(code);

        // The receiver is switched off on every exit path
        let disabled = self.interface.disable_receive();
        let value = result?;
        disabled.map_err(WeatherBusError::Io)?;
        Ok(value)
    }

    /// Polls the receive side under the response deadline, feeding bytes to
    /// the frame parser as they arrive.
    ///
    /// The deadline starts when listening starts. A byte that becomes ready
    /// after the deadline has passed is not consumed.
    fn receive_frame(&mut self, code: SensorCode) -> Result<f32, WeatherBusError<IF::Error>> {
        let deadline = self.interface.now() + timing::RESPONSE_TIMEOUT;
        let mut parser = FrameParser::new(code);

        loop {
            if self.interface.now() >= deadline {
                return Err(WeatherBusError::Timeout);
            }
            match self.interface.read_byte() {
                Ok(byte) => {
                    if parser.push(byte) {
                        // A terminated frame with no separator fails
                        // immediately rather than listening on
                        return parser.value().ok_or(WeatherBusError::Malformed);
                    }
                }
                Err(nb::Error::WouldBlock) => {
                    self.interface
                        .delay_us(timing::POLL_INTERVAL.as_micros() as u32);
                }
                Err(nb::Error::Other(e)) => return Err(WeatherBusError::Io(e)),
            }
        }
    }

    // --- Timeout Helper ---

    /// Executes a non-blocking I/O operation (`f`) repeatedly until it stops
    /// returning `WouldBlock`, returning the final result or a timeout error.
    fn block_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, WeatherBusError<IF::Error>>
    where
        FN: FnMut(&mut IF) -> NbResult<T, IF::Error>,
    {
        let start_time = self.interface.now();
        let deadline = start_time + timeout;

        loop {
            match f(&mut self.interface) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(WeatherBusError::Timeout);
                    }
                    self.interface
                        .delay_us(timing::POLL_INTERVAL.as_micros() as u32);
                }
                Err(nb::Error::Other(e)) => return Err(WeatherBusError::Io(e)),
            }
        }
    }
}
