use hh_api::{RawVacancy, SalaryRange};
use serde::{Deserialize, Serialize};

/// Display form used when the API reports no salary at all.
pub const SALARY_NOT_SPECIFIED: &str = "Зарплата не указана";

/// A normalized job posting. The salary is kept in display form; the
/// numeric sort key is derived from it on demand.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Vacancy {
    pub title: String,
    pub link: String,
    pub salary: String,
    pub description: String,
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        link: impl Into<String>,
        salary: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
            salary: salary.into(),
            description: description.into(),
        }
    }

    /// Renders a structured salary range into one of the four canonical
    /// display forms.
    pub fn parse_salary(salary: Option<&SalaryRange>) -> String {
        match salary {
            Some(SalaryRange {
                from: Some(from),
                to: Some(to),
            }) => format!("{} - {}", from, to),
            Some(SalaryRange {
                from: Some(from),
                to: None,
            }) => format!("От {}", from),
            Some(SalaryRange {
                from: None,
                to: Some(to),
            }) => format!("До {}", to),
            _ => SALARY_NOT_SPECIFIED.to_string(),
        }
    }

    /// The numeric ranking key: the first number in the display salary.
    /// "Зарплата не указана" and anything unparseable rank as 0. Note that
    /// for "До {to}" this returns the upper bound, which then acts as the
    /// minimum for sorting purposes.
    pub fn min_salary(&self) -> u32 {
        if self.salary == SALARY_NOT_SPECIFIED {
            return 0;
        }
        let stripped = self
            .salary
            .strip_prefix("От ")
            .or_else(|| self.salary.strip_prefix("До "))
            .unwrap_or(&self.salary);
        stripped
            .split('-')
            .next()
            .unwrap_or_default()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

impl From<RawVacancy> for Vacancy {
    fn from(raw: RawVacancy) -> Self {
        let salary = Vacancy::parse_salary(raw.salary.as_ref());
        Self {
            title: raw.name,
            link: raw.url.unwrap_or_default(),
            salary,
            description: raw
                .snippet
                .and_then(|snippet| snippet.responsibility)
                .unwrap_or_default(),
        }
    }
}
