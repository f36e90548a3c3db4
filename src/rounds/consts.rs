use std::time::Duration;

pub const ROUND_DURATION_SECS: u64 = 600;
pub const URGENT_THRESHOLD_SECS: u64 = 30;
pub const COUNTDOWN_TICK: Duration = Duration::from_secs(1);
