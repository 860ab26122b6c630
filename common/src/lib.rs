//! Shared pieces of the hh.ru vacancy statistics workspace: the `Vacancy`
//! record, the JSON cache it lives in, the word tokenizer and the
//! configuration values every stage is parameterised with.

pub mod config;
pub mod error;
pub mod logger;
pub mod store;
pub mod tokenizer;

use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// One job posting scraped from a vacancy detail page.
///
/// Only `url` is guaranteed; every other field is whatever the page markup
/// happened to contain. Records are never deduplicated by URL.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Vacancy {
    pub url: String,
    #[serde(default)]
    pub company_title: Option<String>,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub company_location: Option<String>,
    #[serde(default)]
    pub salary: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub employment_mode: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl Vacancy {
    /// Empty record for `url`, every other field at its default.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }
}
