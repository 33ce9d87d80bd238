//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the presentation-state core to a concrete host:
//! - `logging` - Tracing-backed defaults for hosts that wire nothing else

pub mod logging;

pub use logging::{LoggingRegistrationService, LoggingSignals};
