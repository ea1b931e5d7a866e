// src/common/error.rs

#[derive(Debug, thiserror::Error)]
pub enum WeatherBusError<E = ()>
where
    E: core::fmt::Debug, // Needed for the generic Io error
{
    /// Underlying I/O error from the HAL implementation.
    #[error("I/O error: {0:?}")] // Format string requires Debug on E
    Io(E),

    /// No matching, well-terminated frame arrived within the response deadline.
    #[error("Response timed out")]
    Timeout,

    /// A terminated frame was received but carried no `:` separator,
    /// so no value could be extracted from it.
    #[error("Malformed response frame")]
    Malformed,
}

// Allow mapping from the underlying HAL error directly
impl<E: core::fmt::Debug> From<E> for WeatherBusError<E> {
    fn from(e: E) -> Self {
        WeatherBusError::Io(e)
    }
}

// Note: for the Io(E) variant's #[error("...")] message to work in no_std,
// the underlying error type `E` only needs `core::fmt::Debug`.
