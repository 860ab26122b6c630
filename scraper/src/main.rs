//! hh.ru vacancy scraper
//!
//! Always scrapes from scratch and overwrites data/hh.json, which is how a
//! stale cache gets refreshed.

use anyhow::{Context, Result};
use common::config::{Paths, ScrapeConfig};
use common::store::save_vacancies;
use tracing::info;

fn main() -> Result<()> {
    common::logger::init();
    info!("🔍 Starting hh.ru vacancy scraper...");

    let paths = Paths::default();
    let config = ScrapeConfig::default();

    let vacancies = vacancy_scraper::scrape(&config).context("Failed to scrape vacancies")?;

    save_vacancies(&paths.vacancies_json, &vacancies)
        .with_context(|| format!("Failed to write {}", paths.vacancies_json.display()))?;

    info!("💾 Saved {} vacancies to {:?}", vacancies.len(), paths.vacancies_json);
    info!("✨ Scraping complete!");
    Ok(())
}
