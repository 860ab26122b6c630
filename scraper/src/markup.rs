//! The site-specific markup contract.
//!
//! `VacancyMarkup` answers "given a parsed document, give me field X".
//! `HhMarkup` is the hh.ru implementation; the `data-qa` attributes and
//! class names in it must match the live site exactly.

use scraper::{ElementRef, Html, Selector};

use crate::{Error, Result};

pub trait VacancyMarkup {
    /// Raw `href`s of the vacancies listed on a search-results page.
    fn vacancy_urls(&self, document: &Html) -> Vec<String>;

    /// Raw `href` of the "next page" control, if the page has one.
    fn next_page(&self, document: &Html) -> Option<String>;

    fn company_title(&self, document: &Html) -> Option<String>;
    fn company_name(&self, document: &Html) -> Option<String>;
    fn company_location(&self, document: &Html) -> Option<String>;
    fn salary(&self, document: &Html) -> Option<String>;
    fn experience(&self, document: &Html) -> Option<String>;
    fn employment_mode(&self, document: &Html) -> Option<String>;

    /// Free-text vacancy description.
    fn text(&self, document: &Html) -> Option<String>;

    /// Skill tags in document order.
    fn skills(&self, document: &Html) -> Vec<String>;
}

/// Selectors for hh.ru, compiled once and reused for every page.
pub struct HhMarkup {
    listing_item: Selector,
    listing_link: Selector,
    pager_next: Selector,
    title: Selector,
    company_name: Selector,
    location: Selector,
    salary: Selector,
    experience: Selector,
    employment_mode: Selector,
    branded_text: Selector,
    section_text: Selector,
    skill: Selector,
}

impl HhMarkup {
    pub fn new() -> Result<Self> {
        Ok(Self {
            listing_item: create_selector("div.vacancy-serp-item")?,
            listing_link: create_selector("a.bloko-link")?,
            pager_next: create_selector(r#"a[data-qa="pager-next"]"#)?,
            title: create_selector(r#"h1[data-qa="vacancy-title"]"#)?,
            company_name: create_selector(r#"a[data-qa="vacancy-company-name"]"#)?,
            location: create_selector(r#"p[data-qa="vacancy-view-location"]"#)?,
            salary: create_selector("p.vacancy-salary")?,
            experience: create_selector(r#"span[data-qa="vacancy-experience"]"#)?,
            employment_mode: create_selector(r#"p[data-qa="vacancy-view-employment-mode"]"#)?,
            branded_text: create_selector("div.vacancy-branded-user-content")?,
            section_text: create_selector("div.vacancy-section")?,
            skill: create_selector("span.bloko-tag__section")?,
        })
    }
}

impl VacancyMarkup for HhMarkup {
    fn vacancy_urls(&self, document: &Html) -> Vec<String> {
        let mut urls = Vec::new();
        for item in document.select(&self.listing_item) {
            let href = item
                .select(&self.listing_link)
                .next()
                .and_then(|link| link.value().attr("href"));

            match href {
                Some(href) => urls.push(href.to_string()),
                None => tracing::warn!("⚠️  Listing without a vacancy link, skipping"),
            }
        }
        urls
    }

    fn next_page(&self, document: &Html) -> Option<String> {
        document
            .select(&self.pager_next)
            .next()
            .and_then(|el| el.value().attr("href"))
            .map(str::to_owned)
    }

    fn company_title(&self, document: &Html) -> Option<String> {
        first_text(document, &self.title)
    }

    fn company_name(&self, document: &Html) -> Option<String> {
        first_text(document, &self.company_name)
    }

    fn company_location(&self, document: &Html) -> Option<String> {
        first_text(document, &self.location)
    }

    fn salary(&self, document: &Html) -> Option<String> {
        first_text(document, &self.salary)
    }

    fn experience(&self, document: &Html) -> Option<String> {
        first_text(document, &self.experience)
    }

    fn employment_mode(&self, document: &Html) -> Option<String> {
        first_text(document, &self.employment_mode)
    }

    fn text(&self, document: &Html) -> Option<String> {
        // Branded vacancies carry their own layout
        first_text(document, &self.branded_text)
            .or_else(|| first_text(document, &self.section_text))
    }

    fn skills(&self, document: &Html) -> Vec<String> {
        document.select(&self.skill).map(element_text).collect()
    }
}

#[inline]
fn create_selector(sel_str: &str) -> Result<Selector> {
    Selector::parse(sel_str).map_err(|_| Error::InvalidSelector(sel_str.into()))
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(element_text)
}

/// Elements whose boundaries separate words; everything else is inline.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "blockquote", "br", "dd", "div", "dl", "dt", "footer", "h1", "h2",
    "h3", "h4", "h5", "h6", "header", "hr", "li", "ol", "p", "pre", "section", "table", "td",
    "th", "tr", "ul",
];

/// Visible text of an element, whitespace collapsed.
///
/// Inline markup doesn't break words (`Java<b>Script</b>` is `JavaScript`);
/// block boundaries do. Anything inside `<script>` or `<style>` is left out.
fn element_text(element: ElementRef<'_>) -> String {
    let mut raw = String::new();
    push_text(element, &mut raw);
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn push_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        if let Some(text) = child.value().as_text() {
            out.push_str(text);
            continue;
        }
        let Some(child) = ElementRef::wrap(child) else {
            continue;
        };

        let name = child.value().name();
        if matches!(name, "script" | "style") {
            continue;
        }
        let block = BLOCK_ELEMENTS.contains(&name);
        if block {
            out.push(' ');
        }
        push_text(child, out);
        if block {
            out.push(' ');
        }
    }
}
