use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// NDJSON file with the known panoramas.
    #[arg(long)]
    #[arg(default_value = "panoramas.example.ndjson")]
    pub panoramas: PathBuf,
    #[arg(long)]
    #[arg(default_value = "https://dapi.kakao.com")]
    pub kakao_api_url: Url,
    /// Games without player activity for this many seconds are dropped.
    #[arg(long)]
    #[arg(default_value_t = 1800)]
    pub idle_game_ttl_secs: u64,
    /// May be repeated.
    #[arg(long = "allowed-origin")]
    #[arg(default_values = ["http://127.0.0.1:3000", "http://localhost:3000"])]
    pub allowed_origins: Vec<String>,
}
