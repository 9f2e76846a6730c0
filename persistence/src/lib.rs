pub mod vacancy;

pub use vacancy::{Vacancy, SALARY_NOT_SPECIFIED};

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Storage file error: '{0}'")]
    Io(#[from] std::io::Error),
    #[error("Malformed storage file: '{0}'")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Contract for a local vacancy store. Mutations persist before returning.
pub trait VacancyStorage {
    fn add(&mut self, vacancy: Vacancy) -> Result<()>;

    /// Removes the first structurally equal vacancy, if any. Absence is not
    /// an error.
    fn delete(&mut self, vacancy: &Vacancy) -> Result<()>;

    /// Case-insensitive substring match on title or description, in
    /// insertion order. An empty keyword matches every vacancy.
    fn filter(&self, keyword: &str) -> Vec<Vacancy>;
}

/// Vacancy store backed by a single JSON file, rewritten in full on every
/// mutation.
pub struct JsonStorage {
    path: PathBuf,
    vacancies: Vec<Vacancy>,
}

impl JsonStorage {
    /// Loads the store from `path`. A missing file is an empty store; a
    /// file that exists but does not parse is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let vacancies: Vec<Vacancy> = match fs::read_to_string(&path) {
            Ok(data) => serde_json::from_str(&data)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        log::info!(
            "loaded {} vacancies from {}",
            vacancies.len(),
            path.display()
        );
        Ok(Self { path, vacancies })
    }

    pub fn vacancies(&self) -> &[Vacancy] {
        &self.vacancies
    }

    fn save(&self) -> Result<()> {
        let data = serde_json::to_string_pretty(&self.vacancies)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

impl VacancyStorage for JsonStorage {
    fn add(&mut self, vacancy: Vacancy) -> Result<()> {
        self.vacancies.push(vacancy);
        self.save()
    }

    fn delete(&mut self, vacancy: &Vacancy) -> Result<()> {
        if let Some(index) = self.vacancies.iter().position(|v| v == vacancy) {
            self.vacancies.remove(index);
            self.save()?;
        }
        Ok(())
    }

    fn filter(&self, keyword: &str) -> Vec<Vacancy> {
        let keyword = keyword.to_lowercase();
        self.vacancies
            .iter()
            .filter(|v| {
                v.title.to_lowercase().contains(&keyword)
                    || v.description.to_lowercase().contains(&keyword)
            })
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> JsonStorage {
        JsonStorage::open(dir.path().join("vacancies.json")).unwrap()
    }

    fn python_vacancy() -> Vacancy {
        Vacancy::new(
            "Python Developer",
            "https://example.com/python",
            "1000-2000 руб.",
            "Python experience required",
        )
    }

    fn java_vacancy() -> Vacancy {
        Vacancy::new(
            "Java Developer",
            "https://example.com/java",
            "2000-3000 руб.",
            "Java experience required",
        )
    }

    #[test]
    fn missing_file_is_an_empty_store() {
        let dir = tempfile::tempdir().unwrap();
        assert!(storage_in(&dir).vacancies().is_empty());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.json");
        fs::write(&path, "not json at all").unwrap();
        assert!(matches!(JsonStorage::open(path), Err(Error::Json(_))));
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(&dir);
        storage.add(python_vacancy()).unwrap();
        storage.add(java_vacancy()).unwrap();
        assert_eq!(storage.vacancies().len(), 2);
        assert_eq!(storage.vacancies()[0].title, "Python Developer");
        assert_eq!(storage.vacancies()[1].title, "Java Developer");
    }

    #[test]
    fn add_then_delete_restores_prior_state_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.json");
        let mut storage = JsonStorage::open(&path).unwrap();
        let vacancy = python_vacancy();
        storage.add(vacancy.clone()).unwrap();
        storage.delete(&vacancy).unwrap();
        assert!(storage.vacancies().is_empty());

        let reloaded = JsonStorage::open(&path).unwrap();
        assert!(reloaded.vacancies().is_empty());
    }

    #[test]
    fn delete_of_absent_vacancy_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(&dir);
        storage.add(python_vacancy()).unwrap();
        storage.delete(&java_vacancy()).unwrap();
        assert_eq!(storage.vacancies().len(), 1);
    }

    #[test]
    fn persisted_store_reloads_equal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vacancies.json");
        let mut storage = JsonStorage::open(&path).unwrap();
        storage.add(python_vacancy()).unwrap();
        storage.add(java_vacancy()).unwrap();

        let reloaded = JsonStorage::open(&path).unwrap();
        assert_eq!(reloaded.vacancies(), storage.vacancies());
    }

    #[test]
    fn empty_keyword_matches_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(&dir);
        storage.add(python_vacancy()).unwrap();
        storage.add(java_vacancy()).unwrap();
        let all = storage.filter("");
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].title, "Python Developer");
        assert_eq!(all[1].title, "Java Developer");
    }

    #[test]
    fn filter_matches_title_or_description_case_insensitively() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = storage_in(&dir);
        storage.add(python_vacancy()).unwrap();
        storage.add(java_vacancy()).unwrap();

        let matches = storage.filter("python");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title, "Python Developer");

        let matches = storage.filter("EXPERIENCE");
        assert_eq!(matches.len(), 2);

        assert!(storage.filter("haskell").is_empty());
    }
}
