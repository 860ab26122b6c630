//! Configuration values for every stage of the pipeline.
//!
//! `Default` reproduces the fixed constants the tool has always run with;
//! tests construct their own values instead of touching shared state.

use std::path::{Path, PathBuf};

/// Characters stripped from both ends of a word before it is counted.
pub const DEFAULT_PUNCTUATION: &[char] = &['(', ')', ',', ';', '.', '?', '!', '-'];

/// Words that show up in nearly every English-language vacancy and say
/// nothing about the technology stack.
pub const DEFAULT_STOP_WORDS: &[&str] = &[
    "data", "engineer", "big", "and", "apache", "a", "with", "of", "to", "the", "experience", "in",
    "team", "for", "science", "is", "work", "we", "on", "engineering", "working", "knowledge",
    "development", "our", "or", "be", "are", "skills", "an", "from", "software", "new", "have",
    "design", "code", "years", "pipelines", "that", "will", "api", "english", "services", "cloud",
    "processing", "solutions",
];

pub const DEFAULT_SEARCH_URL: &str =
    "https://hh.ru/search/vacancy?search_field=name&text=data+engineer";

pub const DEFAULT_SITE_ORIGIN: &str = "https://hh.ru";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_12_6) \
    AppleWebKit/603.3.8 (KHTML, like Gecko) Version/10.1.2 Safari/603.3.8";

/// Where the vacancy cache and the languages list live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub vacancies_json: PathBuf,
    pub languages_txt: PathBuf,
}

impl Paths {
    /// `hh.json` and `languages.txt` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            vacancies_json: dir.join("hh.json"),
            languages_txt: dir.join("languages.txt"),
        }
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::in_dir("data")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    /// First search-results page.
    pub search_url: String,
    /// Prefix for relative links found on results pages.
    pub site_origin: String,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            search_url: DEFAULT_SEARCH_URL.to_string(),
            site_origin: DEFAULT_SITE_ORIGIN.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub stop_words: Vec<String>,
    pub top_languages: usize,
    pub top_technologies: usize,
    /// Adds the per-language ranking to the report. Off by default.
    pub include_languages: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            stop_words: DEFAULT_STOP_WORDS.iter().map(|w| w.to_string()).collect(),
            top_languages: 10,
            top_technologies: 20,
            include_languages: false,
        }
    }
}
