pub const KEYWORD_SEARCH_PATH: &str = "/v2/local/search/keyword.json";
pub const ADDRESS_SEARCH_PATH: &str = "/v2/local/search/address.json";
pub const MAX_SEARCH_RESULTS: usize = 5;
