//! # Channel Telemetry
//!
//! Log setup shared by every binary in the workspace.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use channel_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() {
//!     let _guard = init_tracing(&TelemetryConfig::from_env()).expect("Failed to init telemetry");
//!     // Spans and events are now written to stderr
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `SC_SERVICE_NAME` | `state-channels` | Service name attached to startup logs |
//! | `SC_LOG_LEVEL` / `RUST_LOG` | `info` | Log level filter |
//! | `SC_CONSOLE_OUTPUT` | `true` | Emit logs at all |
//! | `SC_JSON_LOGS` | `false` (`true` in containers) | JSON instead of pretty output |

#![warn(missing_docs)]

mod config;
mod logging;
mod tracing_setup;

pub use config::TelemetryConfig;
pub use tracing_setup::{init_tracing, TracingGuard};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    /// The log level string is not a valid filter directive.
    #[error("Invalid log filter: {0}")]
    Filter(String),

    /// A global subscriber is already installed.
    #[error("Failed to install subscriber: {0}")]
    SubscriberInit(String),
}

/// Convenience macro for creating a span with channel context.
///
/// # Example
///
/// ```rust,ignore
/// let _span = channel_span!("close", channel_id = 3).entered();
/// ```
#[macro_export]
macro_rules! channel_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
