use crate::map::models::{DistanceResult, LatLng};
use crate::panorama::{CapabilityError, PanoramaId};
use crate::rounds::countdown::CountdownHandle;
use crate::rounds::models::{GameActionError, RoundAnswer, RoundSnapshot, TickOutcome};
use std::future::Future;
use std::time::Duration;

// The futures are `Send` so that the round driver can run them on spawned tasks.

pub trait IGameStorage: GameRepo + GameFlowHandler + Clone + Send + Sync + 'static {}

pub trait GameRepo {
    fn create(&self) -> impl Future<Output = String> + Send;

    fn snapshot(&self, game_id: &str) -> impl Future<Output = Option<RoundSnapshot>> + Send;

    /// Drops every game nobody has touched for `max_idle`. Returns how many were dropped.
    fn evict_idle(&self, max_idle: Duration) -> impl Future<Output = usize> + Send;
}

pub trait GameFlowHandler {
    fn capability_ready(&self, game_id: &str) -> impl Future<Output = Option<u64>> + Send;

    fn capability_failed(&self, game_id: &str, message: String) -> impl Future<Output = ()> + Send;

    fn location_resolved(
        &self,
        game_id: &str,
        generation: u64,
        result: Result<RoundAnswer, CapabilityError>,
    ) -> impl Future<Output = bool> + Send;

    fn attach_countdown(
        &self,
        game_id: &str,
        countdown: CountdownHandle,
    ) -> impl Future<Output = ()> + Send;

    fn tick(&self, game_id: &str, generation: u64) -> impl Future<Output = TickOutcome> + Send;

    fn set_guess(
        &self,
        game_id: &str,
        guess: LatLng,
    ) -> impl Future<Output = Result<(), GameActionError>> + Send;

    fn submit(
        &self,
        game_id: &str,
    ) -> impl Future<Output = Result<DistanceResult, GameActionError>> + Send;

    fn next_round(&self, game_id: &str) -> impl Future<Output = Result<u64, GameActionError>> + Send;

    fn retry(
        &self,
        game_id: &str,
        capability_ready: bool,
    ) -> impl Future<Output = Result<Option<u64>, GameActionError>> + Send;

    fn correct_answer(
        &self,
        game_id: &str,
        pano_id: PanoramaId,
        position: LatLng,
    ) -> impl Future<Output = Result<(), GameActionError>> + Send;
}
