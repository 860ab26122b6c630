use anyhow::{Context, Result};
use common::Vacancy;
use common::config::{Paths, ScrapeConfig};
use common::store::{load_vacancies, save_vacancies};
use tracing::info;

/// Uses the cached vacancies when the cache file exists, otherwise scrapes
/// with `scrape` and writes the result to the cache.
///
/// The cache is never refreshed here; delete it to force a new scrape.
pub fn load_or_scrape<F>(paths: &Paths, config: &ScrapeConfig, scrape: F) -> Result<Vec<Vacancy>>
where
    F: FnOnce(&ScrapeConfig) -> vacancy_scraper::Result<Vec<Vacancy>>,
{
    let cache = &paths.vacancies_json;

    if cache.is_file() {
        info!("📂 Loading vacancies from {:?}", cache);
        return load_vacancies(cache).with_context(|| format!("Failed to read {}", cache.display()));
    }

    info!("⚠️  No cache at {:?}, scraping hh.ru", cache);
    let vacancies = scrape(config).context("Failed to scrape vacancies")?;
    save_vacancies(cache, &vacancies)
        .with_context(|| format!("Failed to write {}", cache.display()))?;
    info!("💾 Saved {} vacancies to {:?}", vacancies.len(), cache);

    Ok(vacancies)
}
