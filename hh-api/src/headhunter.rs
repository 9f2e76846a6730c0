use async_trait::async_trait;
use reqwest::Client;

use crate::types::{RawVacancy, SearchResponse};
use crate::VacancyApi;

type Result<T> = std::result::Result<T, crate::types::Error>;

const BASE_URL: &str = "https://api.hh.ru";

// hh.ru rejects requests without a User-Agent.
const USER_AGENT: &str = "hh-vacancies/0.1";

/// Client for the hh.ru vacancy search API.
pub struct HeadHunterApi {
    client: Client,
    base_url: String,
}

impl HeadHunterApi {
    pub fn new() -> Self {
        Self::with_base_url(BASE_URL)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    async fn search(&self, query: &str) -> Result<Vec<RawVacancy>> {
        let url = format!("{}/vacancies", self.base_url);
        log::info!("requesting vacancies from hh, search: {}", query);
        let resp = self
            .client
            .get(&url)
            .query(&[("text", query)])
            .header("User-Agent", USER_AGENT)
            .send()
            .await?;
        log::info!("response status to vacancy search: {}", resp.status());
        if !resp.status().is_success() {
            return Err(crate::types::Error::RequestNotOk(url));
        }

        let search: SearchResponse = resp.json().await?;
        Ok(search.items)
    }
}

impl Default for HeadHunterApi {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VacancyApi for HeadHunterApi {
    async fn fetch(&self, query: &str) -> Vec<RawVacancy> {
        match self.search(query).await {
            Ok(items) => items,
            Err(e) => {
                log::warn!("vacancy search failed, treating as empty: {}", e);
                Vec::new()
            }
        }
    }
}
