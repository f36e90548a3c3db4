use crate::panorama::PanoramaLoader;
use crate::rounds::consts::COUNTDOWN_TICK;
use crate::rounds::countdown::CountdownHandle;
use crate::rounds::models::{GameActionError, TickOutcome};
use crate::sampler::LocationSampler;
use crate::storage::interface::IGameStorage;
use std::sync::Arc;

/// Runs the asynchronous parts of the round lifecycle: waiting for the panorama capability,
/// sampling answers and counting down. All state changes go through the game storage.
#[derive(Clone)]
pub struct RoundDriver<GS> {
    games: GS,
    panoramas: PanoramaLoader,
    sampler: Arc<LocationSampler>,
}

impl<GS> RoundDriver<GS>
where
    GS: IGameStorage,
{
    pub fn new(games: GS, panoramas: PanoramaLoader, sampler: Arc<LocationSampler>) -> Self {
        Self {
            games,
            panoramas,
            sampler,
        }
    }

    /// Starts the first round of a freshly created game in the background.
    pub fn boot(&self, game_id: &str) {
        let driver = self.clone();
        let game_id = game_id.to_string();
        tokio::spawn(async move { driver.await_capability(&game_id).await });
    }

    pub async fn await_capability(&self, game_id: &str) {
        match self.panoramas.ready().await {
            Ok(_) => {
                if let Some(generation) = self.games.capability_ready(game_id).await {
                    self.load_round(game_id, generation).await;
                }
            }
            Err(err) => {
                tracing::error!(game_id = %game_id, "Cannot start a round: {err}");
                self.games.capability_failed(game_id, err.to_string()).await;
            }
        }
    }

    pub async fn load_round(&self, game_id: &str, generation: u64) {
        let result = match self.panoramas.ready().await {
            Ok(lookup) => self.sampler.sample(&*lookup).await,
            Err(err) => Err(err),
        };
        if let Err(err) = &result {
            tracing::error!(game_id = %game_id, generation, "Failed to pick a location: {err}");
        }
        if !self.games.location_resolved(game_id, generation, result).await {
            return;
        }
        tracing::info!(task = "round_started", game_id = %game_id, generation);
        let countdown = self.start_countdown(game_id, generation);
        self.games.attach_countdown(game_id, countdown).await;
    }

    pub async fn next_round(&self, game_id: &str) -> Result<(), GameActionError> {
        let generation = self.games.next_round(game_id).await?;
        self.spawn_load_round(game_id, generation);
        Ok(())
    }

    pub async fn retry(&self, game_id: &str) -> Result<(), GameActionError> {
        match self
            .games
            .retry(game_id, self.panoramas.is_ready())
            .await?
        {
            Some(generation) => self.spawn_load_round(game_id, generation),
            None => self.boot(game_id),
        }
        Ok(())
    }

    fn spawn_load_round(&self, game_id: &str, generation: u64) {
        let driver = self.clone();
        let game_id = game_id.to_string();
        tokio::spawn(async move { driver.load_round(&game_id, generation).await });
    }

    fn start_countdown(&self, game_id: &str, generation: u64) -> CountdownHandle {
        let games = self.games.clone();
        let game_id = game_id.to_string();
        CountdownHandle::spawn(generation, async move {
            let mut interval = tokio::time::interval(COUNTDOWN_TICK);
            // The first tick of an interval completes immediately.
            interval.tick().await;
            loop {
                interval.tick().await;
                match games.tick(&game_id, generation).await {
                    TickOutcome::Running { .. } => {}
                    TickOutcome::Expired(distance) => {
                        tracing::info!(
                            task = "round_finished",
                            game_id = %game_id,
                            reason = "timeout",
                            distance_km = distance.km,
                            distance = %distance.formatted,
                        );
                        break;
                    }
                    TickOutcome::Stopped => break,
                }
            }
        })
    }
}
