use crate::map::models::{DistanceResult, LatLng};
use crate::panorama::{CapabilityError, PanoramaId};
use crate::rounds::countdown::CountdownHandle;
use crate::rounds::models::{
    GameActionError, Round, RoundAnswer, RoundPhase, RoundSnapshot, TickOutcome,
};
use crate::storage::consts::GAME_ID_LENGTH;
use crate::storage::interface::{GameFlowHandler, GameRepo, IGameStorage};
use rand::{distributions::Alphanumeric, Rng};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug)]
struct GameSession {
    round: Round,
    countdown: Option<CountdownHandle>,
    /// Last time the player asked for or did something. Countdown ticks don't count.
    last_activity: Instant,
}

impl GameSession {
    fn new() -> Self {
        Self {
            round: Round::new(),
            countdown: None,
            last_activity: Instant::now(),
        }
    }

    /// Stops the countdown of the current round, if one is running.
    fn release_countdown(&mut self) {
        self.countdown = None;
    }
}

#[derive(Clone, Default)]
pub struct HashMapGamesStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
}

impl HashMapGamesStorage {
    /// For the round driver's own steps, which don't keep a game alive.
    async fn with_session<R: Send>(
        &self,
        game_id: &str,
        action: impl FnOnce(&mut GameSession) -> R + Send,
    ) -> Option<R> {
        self.storage.write().await.get_mut(game_id).map(action)
    }

    /// For player requests.
    async fn with_active_session<R: Send>(
        &self,
        game_id: &str,
        action: impl FnOnce(&mut GameSession) -> R + Send,
    ) -> Option<R> {
        self.with_session(game_id, |session| {
            session.last_activity = Instant::now();
            action(session)
        })
        .await
    }
}

impl IGameStorage for HashMapGamesStorage {}

impl GameRepo for HashMapGamesStorage {
    async fn create(&self) -> String {
        let mut storage_guard = self.storage.write().await;
        let game_id = loop {
            let candidate = generate_game_id();
            if !storage_guard.contains_key(&candidate) {
                break candidate;
            }
        };
        storage_guard.insert(game_id.clone(), GameSession::new());
        game_id
    }

    async fn snapshot(&self, game_id: &str) -> Option<RoundSnapshot> {
        self.with_active_session(game_id, |session| session.round.snapshot())
            .await
    }

    async fn evict_idle(&self, max_idle: Duration) -> usize {
        let mut storage_guard = self.storage.write().await;
        let before = storage_guard.len();
        // Dropped sessions take their countdown handles with them, which stops the countdowns.
        storage_guard.retain(|_, session| session.last_activity.elapsed() < max_idle);
        before - storage_guard.len()
    }
}

impl GameFlowHandler for HashMapGamesStorage {
    async fn capability_ready(&self, game_id: &str) -> Option<u64> {
        self.with_session(game_id, |session| {
            let generation = session.round.on_capability_ready();
            if generation.is_some() {
                session.release_countdown();
            }
            generation
        })
        .await
        .flatten()
    }

    async fn capability_failed(&self, game_id: &str, message: String) {
        self.with_session(game_id, |session| {
            if session.round.on_capability_failed(message) {
                session.release_countdown();
            }
        })
        .await;
    }

    async fn location_resolved(
        &self,
        game_id: &str,
        generation: u64,
        result: Result<RoundAnswer, CapabilityError>,
    ) -> bool {
        self.with_session(game_id, |session| {
            session.round.on_location_resolved(generation, result)
        })
        .await
        .unwrap_or(false)
    }

    async fn attach_countdown(&self, game_id: &str, countdown: CountdownHandle) {
        self.with_session(game_id, move |session| {
            let round = &session.round;
            if round.phase() == RoundPhase::Playing
                && round.generation() == countdown.generation()
            {
                session.countdown = Some(countdown);
            }
            // Otherwise the handle is dropped here, which stops the outdated countdown.
        })
        .await;
    }

    async fn tick(&self, game_id: &str, generation: u64) -> TickOutcome {
        self.with_session(game_id, |session| {
            if session.round.generation() != generation {
                return TickOutcome::Stopped;
            }
            session.round.tick()
        })
        .await
        .unwrap_or(TickOutcome::Stopped)
    }

    async fn set_guess(&self, game_id: &str, guess: LatLng) -> Result<(), GameActionError> {
        self.with_active_session(game_id, |session| session.round.set_guess(guess))
            .await
            .unwrap_or(Err(GameActionError::GameNotFound))
    }

    async fn submit(&self, game_id: &str) -> Result<DistanceResult, GameActionError> {
        self.with_active_session(game_id, |session| -> Result<_, GameActionError> {
            let distance = session.round.submit()?;
            session.release_countdown();
            Ok(distance)
        })
        .await
        .unwrap_or(Err(GameActionError::GameNotFound))
    }

    async fn next_round(&self, game_id: &str) -> Result<u64, GameActionError> {
        self.with_active_session(game_id, |session| -> Result<_, GameActionError> {
            let generation = session.round.next_round()?;
            session.release_countdown();
            Ok(generation)
        })
        .await
        .unwrap_or(Err(GameActionError::GameNotFound))
    }

    async fn retry(
        &self,
        game_id: &str,
        capability_ready: bool,
    ) -> Result<Option<u64>, GameActionError> {
        self.with_active_session(game_id, |session| -> Result<_, GameActionError> {
            let generation = session.round.retry(capability_ready)?;
            session.release_countdown();
            Ok(generation)
        })
        .await
        .unwrap_or(Err(GameActionError::GameNotFound))
    }

    async fn correct_answer(
        &self,
        game_id: &str,
        pano_id: PanoramaId,
        position: LatLng,
    ) -> Result<(), GameActionError> {
        self.with_active_session(game_id, |session| {
            session.round.correct_answer(pano_id, position)
        })
        .await
        .unwrap_or(Err(GameActionError::GameNotFound))
    }
}

fn generate_game_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GAME_ID_LENGTH)
        .map(char::from)
        .collect()
}
