use std::cmp::Reverse;
use std::io::{self, Write};

use hh_api::VacancyApi;
use persistence::{Vacancy, VacancyStorage};

fn prompt(text: &str) -> String {
    print!("{}", text);
    io::stdout().flush().expect("Failed to flush stdout");
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .expect("Failed to read line");
    line.trim().to_string()
}

/// Fetches vacancies for `query` and stores all of them. Returns `false`
/// without touching the store when the API came back empty, which covers
/// both "no results" and "request failed".
async fn ingest(
    api: &dyn VacancyApi,
    storage: &mut dyn VacancyStorage,
    query: &str,
) -> Result<bool, persistence::Error> {
    let raw = api.fetch(query).await;
    if raw.is_empty() {
        return Ok(false);
    }
    log::info!("storing {} fetched vacancies", raw.len());
    for vacancy in raw.into_iter().map(Vacancy::from) {
        storage.add(vacancy)?;
    }
    Ok(true)
}

/// Sorts descending by minimum salary (stable for ties) and keeps the
/// first `top_n` entries.
fn top_ranked(mut vacancies: Vec<Vacancy>, top_n: usize) -> Vec<Vacancy> {
    vacancies.sort_by_key(|v| Reverse(v.min_salary()));
    vacancies.truncate(top_n);
    vacancies
}

pub async fn run(api: &dyn VacancyApi, storage: &mut dyn VacancyStorage) {
    let query = prompt("Введите ваш поисковый запрос: ");
    let fetched = ingest(api, storage, &query)
        .await
        .expect("Failed to persist vacancies");
    if !fetched {
        println!("Не удалось получить вакансии с сервера");
        return;
    }

    let top_n: usize = prompt("Введите количество вакансий для отображения в топе: ")
        .parse()
        .expect("Expected a number of vacancies to display");
    let keyword = prompt("Введите ключевые слова для фильтрации вакансий: ");

    let ranked = top_ranked(storage.filter(&keyword), top_n);
    if ranked.is_empty() {
        println!("По заданным критериям вакансии не найдены");
    } else {
        println!("Топ вакансий:");
        for vacancy in &ranked {
            println!("{}: {}", vacancy.title, vacancy.salary);
        }
    }
}
