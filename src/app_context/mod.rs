use crate::cli::Args;
use crate::kakao::{self, KakaoConfig};
use crate::panorama::{self, PanoramaLoader};
use crate::rounds::driver::RoundDriver;
use crate::sampler::consts::KOREA_BOUNDS;
use crate::sampler::LocationSampler;
use crate::storage::consts::IDLE_SWEEP_PERIOD;
use crate::storage::games::HashMapGamesStorage;
use crate::storage::interface::IGameStorage;
use crate::storage::sweeper;
use std::sync::Arc;
use std::time::Duration;

#[derive(Clone)]
pub struct AppContext<GS: IGameStorage> {
    pub games: GS,
    pub rounds: RoundDriver<GS>,
    pub kakao: KakaoConfig,
    pub http_client: reqwest::Client,
}

impl<GS> AppContext<GS>
where
    GS: IGameStorage,
{
    pub fn new(
        games: GS,
        panoramas: PanoramaLoader,
        kakao: KakaoConfig,
        http_client: reqwest::Client,
    ) -> Self {
        let sampler = Arc::new(LocationSampler::new(KOREA_BOUNDS));
        let rounds = RoundDriver::new(games.clone(), panoramas, sampler);
        Self {
            games,
            rounds,
            kakao,
            http_client,
        }
    }
}

pub fn init(args: &Args) -> AppContext<HashMapGamesStorage> {
    let kakao = kakao::init(args);
    let panoramas = panorama::init(args);
    let games = HashMapGamesStorage::default();
    sweeper::spawn(
        games.clone(),
        Duration::from_secs(args.idle_game_ttl_secs),
        IDLE_SWEEP_PERIOD,
    );
    tracing::info!("Initialized the application context.");
    AppContext::new(games, panoramas, kakao, reqwest::Client::new())
}
