use crate::storage::interface::IGameStorage;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Periodically drops games that have been idle for longer than `max_idle`.
pub fn spawn<GS>(games: GS, max_idle: Duration, period: Duration) -> JoinHandle<()>
where
    GS: IGameStorage,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        interval.tick().await;
        loop {
            interval.tick().await;
            let evicted = games.evict_idle(max_idle).await;
            if evicted > 0 {
                tracing::info!(task = "games_evicted", evicted, "Dropped idle games.");
            }
        }
    })
}
