//! Pagination walk and per-vacancy fetch.

use common::config::ScrapeConfig;
use common::Vacancy;
use scraper::Html;
use tracing::{debug, info, warn};

use crate::markup::VacancyMarkup;
use crate::source::PageSource;
use crate::Result;

/// Follows the "next page" links from `config.search_url` and returns every
/// vacancy link in listing order. Duplicates are kept.
///
/// A results page answered with a non-2xx status ends the walk.
pub fn collect_vacancy_urls(
    source: &impl PageSource,
    markup: &impl VacancyMarkup,
    config: &ScrapeConfig,
) -> Result<Vec<String>> {
    let mut urls = Vec::new();
    let mut next_url = Some(config.search_url.clone());

    while let Some(page_url) = next_url.take() {
        info!("📡 Fetching results page: {}", page_url);
        let page = source.get(&page_url)?;
        if !page.is_success() {
            warn!(status = page.status, url = %page_url, "results page not OK, stopping");
            break;
        }

        let document = Html::parse_document(&page.html);
        let found = markup.vacancy_urls(&document);
        debug!(count = found.len(), "listings on page");

        urls.extend(found.iter().map(|href| absolute_url(&config.site_origin, href)));
        next_url = markup
            .next_page(&document)
            .map(|href| absolute_url(&config.site_origin, &href));
    }

    Ok(urls)
}

/// Fetches one detail page. Fields the page doesn't carry stay empty.
pub fn fetch_vacancy(
    source: &impl PageSource,
    markup: &impl VacancyMarkup,
    url: &str,
) -> Result<Vacancy> {
    let page = source.get(url)?;
    if !page.is_success() {
        // Still parsed: whatever markup came back is better than nothing
        warn!(status = page.status, url, "vacancy page not OK");
    }

    let document = Html::parse_document(&page.html);
    Ok(vacancy_from_document(markup, url, &document))
}

pub fn vacancy_from_document(markup: &impl VacancyMarkup, url: &str, document: &Html) -> Vacancy {
    Vacancy {
        url: url.to_string(),
        company_title: markup.company_title(document),
        company_name: markup.company_name(document),
        company_location: markup.company_location(document),
        salary: markup.salary(document),
        experience: markup.experience(document),
        employment_mode: markup.employment_mode(document),
        text: markup.text(document),
        skills: markup.skills(document),
    }
}

/// Collects all vacancy links, then fetches them one by one.
pub fn fetch_vacancies(
    source: &impl PageSource,
    markup: &impl VacancyMarkup,
    config: &ScrapeConfig,
) -> Result<Vec<Vacancy>> {
    let urls = collect_vacancy_urls(source, markup, config)?;
    info!("Vacancies to fetch: {}", urls.len());

    let mut vacancies = Vec::with_capacity(urls.len());
    for (i, url) in urls.iter().enumerate() {
        debug!(n = i + 1, total = urls.len(), url = %url, "fetching vacancy");
        vacancies.push(fetch_vacancy(source, markup, url)?);
    }
    Ok(vacancies)
}

fn absolute_url(origin: &str, href: &str) -> String {
    if href.starts_with("http") {
        href.to_string()
    } else {
        format!("{}{}", origin, href)
    }
}
