use std::time::Duration;

pub const GAME_ID_LENGTH: usize = 10;
pub const IDLE_SWEEP_PERIOD: Duration = Duration::from_secs(60);
