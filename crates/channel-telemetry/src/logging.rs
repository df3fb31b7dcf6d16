//! Structured log helpers.
//!
//! Channel logs share a consistent field set so that JSON output can be
//! filtered by channel:
//! - `channel_id`: Channel the event concerns
//! - `party`: Address of the acting party, when there is one
//! - Additional context fields

/// Log a channel-related event with standard fields.
///
/// ```rust,ignore
/// log_channel_event!(info, "Close accepted", channel_id, party = %caller, closed = true);
/// ```
#[macro_export]
macro_rules! log_channel_event {
    ($level:ident, $msg:expr, $channel_id:expr $(, $($field:tt)*)?) => {
        tracing::$level!(
            channel_id = %$channel_id,
            $($($field)*,)?
            $msg
        )
    };
}
