//! hh.ru vacancy scraper
//!
//! Walks the paginated search results, collects vacancy links and turns
//! every detail page into a `common::Vacancy`. Everything runs sequentially
//! on one blocking HTTP client; the first transport error ends the run.

pub mod crawl;
pub mod error;
pub mod markup;
pub mod source;

use common::config::ScrapeConfig;
use common::Vacancy;

pub use crawl::{collect_vacancy_urls, fetch_vacancies, fetch_vacancy, vacancy_from_document};
pub use error::{Error, Result};
pub use markup::{HhMarkup, VacancyMarkup};
pub use source::{HttpPageSource, Page, PageSource};

/// Scrapes every vacancy reachable from `config.search_url` on hh.ru.
///
/// The HTTP client lives only for the duration of this call and is dropped
/// on every return path, including errors.
pub fn scrape(config: &ScrapeConfig) -> Result<Vec<Vacancy>> {
    let source = HttpPageSource::new(&config.user_agent)?;
    let markup = HhMarkup::new()?;
    fetch_vacancies(&source, &markup, config)
}
