//! hh-stats
//!
//! Loads data/hh.json (scraping hh.ru first if it doesn't exist) and prints
//! which technologies data-engineer vacancies ask for.

use analyzer::{analyze_vacancies, load_or_scrape};
use anyhow::{Context, Result};
use common::config::{AnalysisConfig, Paths, ScrapeConfig};
use common::store::load_languages;
use common::tokenizer::Tokenizer;
use tracing::info;

fn main() -> Result<()> {
    common::logger::init();
    info!("🚀 Starting hh-stats...");

    let paths = Paths::default();
    let scrape_config = ScrapeConfig::default();
    let analysis_config = AnalysisConfig::default();

    let vacancies = load_or_scrape(&paths, &scrape_config, vacancy_scraper::scrape)?;
    info!("📊 Loaded {} vacancies", vacancies.len());

    let languages = load_languages(&paths.languages_txt)
        .with_context(|| format!("Failed to read {}", paths.languages_txt.display()))?;

    let report = analyze_vacancies(&vacancies, &languages, &Tokenizer::default(), &analysis_config);
    print!("{report}");

    Ok(())
}
