pub mod headhunter;
pub mod types;

pub use headhunter::HeadHunterApi;
pub use types::{RawVacancy, SalaryRange};

use async_trait::async_trait;

/// Contract for a job-board search backend.
#[async_trait]
pub trait VacancyApi {
    /// Returns the raw vacancy records matching `query`. A failed request
    /// and a genuine zero-result search both come back as an empty list.
    async fn fetch(&self, query: &str) -> Vec<RawVacancy>;
}
