use crate::kakao::consts::{ADDRESS_SEARCH_PATH, KEYWORD_SEARCH_PATH, MAX_SEARCH_RESULTS};
use crate::search::responses::SearchResult;
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
#[serde(bound = "D: DeserializeOwned")]
struct LocalSearchResponse<D> {
    #[serde(default)]
    documents: Vec<D>,
}

#[derive(Debug, Deserialize)]
struct KeywordDocument {
    #[serde(default)]
    place_name: String,
    #[serde(default)]
    address_name: String,
    x: String,
    y: String,
}

#[derive(Debug, Deserialize)]
struct AddressDocument {
    #[serde(default)]
    address_name: String,
    x: String,
    y: String,
}

impl From<KeywordDocument> for SearchResult {
    fn from(document: KeywordDocument) -> Self {
        Self {
            place_name: document.place_name,
            address_name: document.address_name,
            x: document.x,
            y: document.y,
        }
    }
}

impl From<AddressDocument> for SearchResult {
    fn from(document: AddressDocument) -> Self {
        // Address matches have no place name of their own.
        Self {
            place_name: document.address_name.clone(),
            address_name: document.address_name,
            x: document.x,
            y: document.y,
        }
    }
}

/// Client of the Kakao Local search API.
pub struct LocalSearchClient<'a> {
    http: &'a reqwest::Client,
    api_url: &'a Url,
    rest_api_key: &'a str,
}

impl<'a> LocalSearchClient<'a> {
    pub fn new(http: &'a reqwest::Client, api_url: &'a Url, rest_api_key: &'a str) -> Self {
        Self {
            http,
            api_url,
            rest_api_key,
        }
    }

    /// Searches places by keyword and falls back to address search when nothing matches.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResult>, reqwest::Error> {
        let places: Vec<KeywordDocument> = self.documents(KEYWORD_SEARCH_PATH, query).await?;
        if !places.is_empty() {
            return Ok(into_results(places));
        }
        let addresses: Vec<AddressDocument> = self.documents(ADDRESS_SEARCH_PATH, query).await?;
        Ok(into_results(addresses))
    }

    async fn documents<D>(&self, path: &str, query: &str) -> Result<Vec<D>, reqwest::Error>
    where
        D: DeserializeOwned,
    {
        let mut url = self.api_url.clone();
        url.set_path(path);
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("size", &MAX_SEARCH_RESULTS.to_string());

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("KakaoAK {}", self.rest_api_key))
            .send()
            .await?;
        if !response.status().is_success() {
            // A rejected search is reported as "nothing found".
            tracing::warn!(
                status = %response.status(),
                "Kakao Local search at `{path}` was rejected."
            );
            return Ok(Vec::new());
        }
        let body: LocalSearchResponse<D> = response.json().await?;
        Ok(body.documents)
    }
}

fn into_results<D>(documents: Vec<D>) -> Vec<SearchResult>
where
    SearchResult: From<D>,
{
    documents
        .into_iter()
        .take(MAX_SEARCH_RESULTS)
        .map(SearchResult::from)
        .collect()
}
