//! Access to the Kakao developer platform: the Local search API used by the place search proxy
//! and the JavaScript key handed to map clients.

use crate::cli::Args;
use crate::kakao::env::{read_non_empty, KAKAO_MAP_KEY, KAKAO_REST_API_KEY};
use crate::warn_if_env_var_is_missing;
use url::Url;

pub mod consts;
pub mod env;
pub mod handlers;
pub mod local;
pub mod responses;
#[cfg(test)]
mod tests;

#[derive(Clone, Debug)]
pub struct KakaoConfig {
    pub api_url: Url,
    pub rest_api_key: Option<String>,
    pub map_key: Option<String>,
}

pub fn init(args: &Args) -> KakaoConfig {
    warn_if_env_var_is_missing!(KAKAO_REST_API_KEY, "Place search won't work.");
    warn_if_env_var_is_missing!(KAKAO_MAP_KEY, "Clients won't be able to load the map.");
    KakaoConfig {
        api_url: args.kakao_api_url.clone(),
        rest_api_key: read_non_empty(KAKAO_REST_API_KEY),
        map_key: read_non_empty(KAKAO_MAP_KEY),
    }
}
