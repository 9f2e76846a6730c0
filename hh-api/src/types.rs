use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Request error: '{0}'")]
    Request(#[from] reqwest::Error),
    #[error("Failed to fetch vacancies from: '{0}'")]
    RequestNotOk(String),
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub items: Vec<RawVacancy>,
}

/// A vacancy as it appears in the hh.ru search response. Only the fields
/// this system consumes are listed; serde drops the rest.
#[derive(Serialize, Deserialize, Debug)]
pub struct RawVacancy {
    pub name: String,
    pub url: Option<String>,
    pub salary: Option<SalaryRange>,
    pub snippet: Option<Snippet>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SalaryRange {
    pub from: Option<u32>,
    pub to: Option<u32>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct Snippet {
    pub responsibility: Option<String>,
}
