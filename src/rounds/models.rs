use crate::map::calculate_distance;
use crate::map::consts::SEOUL_CITY_HALL;
use crate::map::models::{DistanceResult, LatLng};
use crate::panorama::{CapabilityError, PanoramaId};
use crate::rounds::consts::{ROUND_DURATION_SECS, URGENT_THRESHOLD_SECS};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundPhase {
    /// The panorama capability is not confirmed ready yet.
    Init,
    Loading,
    Playing,
    Submitted,
    Error,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundAnswer {
    pub lat: f64,
    pub lng: f64,
    pub pano_id: PanoramaId,
}

impl RoundAnswer {
    pub fn new(position: LatLng, pano_id: PanoramaId) -> Self {
        Self {
            lat: position.lat,
            lng: position.lng,
            pano_id,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
pub enum GameActionError {
    #[error("no game with such id")]
    GameNotFound,
    #[error("the action is not allowed in the current phase")]
    WrongPhase,
    #[error("no guess has been placed yet")]
    GuessMissing,
    #[error("the answer of this round was already corrected")]
    AlreadyCorrected,
    #[error("the panorama is not the one of the current round")]
    StalePanorama,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    Running { remaining_seconds: u64 },
    /// The countdown hit zero and the round was submitted by this tick.
    Expired(DistanceResult),
    /// The round is not being played any more, the countdown should stop.
    Stopped,
}

/// State of the current round of a single game session.
///
/// Every method is one transition of the round lifecycle and checks the phase it is allowed
/// in, so racing intents (a user submission and the countdown expiring in the same second)
/// resolve to exactly one effect.
#[derive(Clone, Debug)]
pub struct Round {
    phase: RoundPhase,
    number: u64,
    /// Bumped every time a new answer is requested; results of older requests are discarded.
    generation: u64,
    answer: Option<RoundAnswer>,
    /// The answer position may be corrected once per round.
    answer_corrected: bool,
    guess: Option<LatLng>,
    distance: Option<DistanceResult>,
    remaining_seconds: u64,
    error_message: Option<String>,
}

impl Default for Round {
    fn default() -> Self {
        Self::new()
    }
}

impl Round {
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Init,
            number: 1,
            generation: 0,
            answer: None,
            answer_corrected: false,
            guess: None,
            distance: None,
            remaining_seconds: ROUND_DURATION_SECS,
            error_message: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts the first round once the capability is usable. Returns the generation of the
    /// answer request, or `None` if the round is past its initial phase.
    pub fn on_capability_ready(&mut self) -> Option<u64> {
        match self.phase {
            RoundPhase::Init => Some(self.begin_loading()),
            _ => None,
        }
    }

    pub fn on_capability_failed(&mut self, message: String) -> bool {
        match self.phase {
            RoundPhase::Init | RoundPhase::Loading => {
                self.fail(message);
                true
            }
            _ => false,
        }
    }

    /// Clears everything of the previous round and waits for a new answer.
    pub fn begin_loading(&mut self) -> u64 {
        self.phase = RoundPhase::Loading;
        self.generation += 1;
        self.answer = None;
        self.answer_corrected = false;
        self.guess = None;
        self.distance = None;
        self.error_message = None;
        self.remaining_seconds = ROUND_DURATION_SECS;
        self.generation
    }

    /// Returns `true` if the round is now being played.
    pub fn on_location_resolved(
        &mut self,
        generation: u64,
        result: Result<RoundAnswer, CapabilityError>,
    ) -> bool {
        if generation != self.generation || self.phase != RoundPhase::Loading {
            return false;
        }
        match result {
            Ok(answer) => {
                self.answer = Some(answer);
                self.guess = None;
                self.distance = None;
                self.remaining_seconds = ROUND_DURATION_SECS;
                self.phase = RoundPhase::Playing;
                true
            }
            Err(err) => {
                self.fail(err.to_string());
                false
            }
        }
    }

    pub fn set_guess(&mut self, guess: LatLng) -> Result<(), GameActionError> {
        if self.phase != RoundPhase::Playing {
            return Err(GameActionError::WrongPhase);
        }
        self.guess = Some(guess);
        Ok(())
    }

    pub fn submit(&mut self) -> Result<DistanceResult, GameActionError> {
        if self.phase != RoundPhase::Playing {
            return Err(GameActionError::WrongPhase);
        }
        let guess = self.guess.ok_or(GameActionError::GuessMissing)?;
        self.finish(guess)
    }

    /// One second of the countdown. Hitting zero submits the round, falling back to
    /// Seoul City Hall if the player never placed a guess.
    pub fn tick(&mut self) -> TickOutcome {
        if self.phase != RoundPhase::Playing {
            return TickOutcome::Stopped;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds > 0 {
            return TickOutcome::Running {
                remaining_seconds: self.remaining_seconds,
            };
        }
        let guess = self.guess.unwrap_or(SEOUL_CITY_HALL);
        match self.finish(guess) {
            Ok(distance) => TickOutcome::Expired(distance),
            Err(_) => TickOutcome::Stopped,
        }
    }

    /// Returns the generation of the answer request for the new round.
    pub fn next_round(&mut self) -> Result<u64, GameActionError> {
        if self.phase != RoundPhase::Submitted {
            return Err(GameActionError::WrongPhase);
        }
        self.number += 1;
        Ok(self.begin_loading())
    }

    /// Leaves the error phase. With a ready capability a new answer is requested right away
    /// (its generation is returned), otherwise the round goes back to waiting for readiness.
    pub fn retry(&mut self, capability_ready: bool) -> Result<Option<u64>, GameActionError> {
        if self.phase != RoundPhase::Error {
            return Err(GameActionError::WrongPhase);
        }
        if capability_ready {
            return Ok(Some(self.begin_loading()));
        }
        self.phase = RoundPhase::Init;
        self.error_message = None;
        Ok(None)
    }

    /// The panorama renderer reports where the panorama `pano_id` actually is. Accepted once per
    /// round and only for the panorama of the current answer, whose id never changes.
    pub fn correct_answer(
        &mut self,
        pano_id: PanoramaId,
        position: LatLng,
    ) -> Result<(), GameActionError> {
        let answer = self.answer.as_mut().ok_or(GameActionError::WrongPhase)?;
        if answer.pano_id != pano_id {
            return Err(GameActionError::StalePanorama);
        }
        if self.answer_corrected {
            return Err(GameActionError::AlreadyCorrected);
        }
        answer.lat = position.lat;
        answer.lng = position.lng;
        self.answer_corrected = true;
        Ok(())
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            phase: self.phase,
            round: self.number,
            remaining_seconds: self.remaining_seconds,
            remaining_display: format_time(self.remaining_seconds),
            is_urgent: self.phase == RoundPhase::Playing
                && self.remaining_seconds <= URGENT_THRESHOLD_SECS,
            pano_id: self.answer.map(|answer| answer.pano_id),
            // The position is revealed with the result.
            answer: self.answer.filter(|_| self.phase == RoundPhase::Submitted),
            guess: self.guess,
            distance: self.distance.clone(),
            error_message: self.error_message.clone(),
        }
    }

    fn finish(&mut self, guess: LatLng) -> Result<DistanceResult, GameActionError> {
        let answer = self.answer.ok_or(GameActionError::WrongPhase)?;
        let distance = calculate_distance(answer.position(), guess);
        self.guess = Some(guess);
        self.distance = Some(distance.clone());
        self.phase = RoundPhase::Submitted;
        Ok(distance)
    }

    fn fail(&mut self, message: String) {
        self.phase = RoundPhase::Error;
        self.error_message = Some(message);
    }
}

#[cfg(test)]
impl Round {
    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn answer(&self) -> Option<RoundAnswer> {
        self.answer
    }

    pub fn guess(&self) -> Option<LatLng> {
        self.guess
    }

    pub fn distance(&self) -> Option<&DistanceResult> {
        self.distance.as_ref()
    }

    pub fn remaining_seconds(&self) -> u64 {
        self.remaining_seconds
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// What clients get to see of a round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub phase: RoundPhase,
    pub round: u64,
    pub remaining_seconds: u64,
    /// `m:ss`
    pub remaining_display: String,
    pub is_urgent: bool,
    /// Panorama to show while the round is played.
    pub pano_id: Option<PanoramaId>,
    pub answer: Option<RoundAnswer>,
    pub guess: Option<LatLng>,
    pub distance: Option<DistanceResult>,
    pub error_message: Option<String>,
}

pub fn format_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
