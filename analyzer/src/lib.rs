//! Vacancy keyword statistics
//!
//! Counts how many hh.ru vacancies mention each programming language and
//! each technology keyword, and renders the rankings as a text report.

pub mod frequency;
pub mod pipeline;
pub mod report;

pub use frequency::{RankedItem, analyze_languages, analyze_technologies};
pub use pipeline::load_or_scrape;
pub use report::{Report, Section, analyze_vacancies};
