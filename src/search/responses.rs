use serde::{Deserialize, Serialize};

/// One place as the map client expects it. `x` is the longitude and `y` the latitude, both as
/// the decimal strings Kakao returns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub place_name: String,
    pub address_name: String,
    pub x: String,
    pub y: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<SearchResult>,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchErrorResponse {
    pub error: String,
}
