// src/common/timing.rs

use core::time::Duration;

// === Bus Configuration ===

/// Default baud rate for the bus.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

// === Query/Response Timing ===

/// Maximum time to wait for a complete response frame, measured from the
/// moment the receiver is enabled.
pub const RESPONSE_TIMEOUT: Duration = Duration::from_millis(1000);

/// Fixed pause after each transmission, giving the responder time to begin
/// replying before the master switches to receive.
pub const TRANSMIT_GRACE: Duration = Duration::from_millis(2);

// === Hosted Polling ===

/// Voluntary yield between receive polls when no byte is available, so the
/// deadline wait does not spin the CPU.
pub const POLL_INTERVAL: Duration = Duration::from_micros(100);

// === Write Allowances ===
// Per-byte and flush operations are non-blocking at the HAL level; these
// bound how long the driver retries them before giving up.

/// Upper bound for a single queued byte to be accepted at 9600 baud.
pub const WRITE_TIMEOUT: Duration = Duration::from_millis(20);

/// Upper bound for the transmit buffer to drain on flush.
pub const FLUSH_TIMEOUT: Duration = Duration::from_millis(10);
