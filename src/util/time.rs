use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Get the current wall-clock time
pub fn now() -> SystemTime {
    SystemTime::now()
}

/// Get a timestamp in milliseconds since the UNIX epoch
pub fn timestamp_millis(time: SystemTime) -> u128 {
    time.duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis()
}
