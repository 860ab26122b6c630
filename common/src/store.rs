//! Flat-file persistence: the vacancy cache and the languages list.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result, Vacancy};

/// Writes every vacancy to `path` as one JSON array, replacing the file.
pub fn save_vacancies(path: &Path, vacancies: &[Vacancy]) -> Result<()> {
    // Create the parent directory if needed
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(Error::io(dir))?;
    }

    let json_output = serde_json::to_string_pretty(vacancies).map_err(Error::json(path))?;
    fs::write(path, json_output).map_err(Error::io(path))?;

    debug!(path = %path.display(), count = vacancies.len(), "vacancies saved");
    Ok(())
}

pub fn load_vacancies(path: &Path) -> Result<Vec<Vacancy>> {
    let content = fs::read_to_string(path).map_err(Error::io(path))?;
    let vacancies: Vec<Vacancy> = serde_json::from_str(&content).map_err(Error::json(path))?;

    debug!(path = %path.display(), count = vacancies.len(), "vacancies loaded");
    Ok(vacancies)
}

/// Reads the known-languages list: one name per line, trimmed.
///
/// Blank lines are skipped and a repeated name is kept only at its first
/// position, so each language is counted at most once per vacancy.
pub fn load_languages(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(Error::io(path))?;

    let mut languages: Vec<String> = Vec::new();
    for line in content.lines().map(str::trim).filter(|line| !line.is_empty()) {
        if !languages.iter().any(|known| known == line) {
            languages.push(line.to_string());
        }
    }
    Ok(languages)
}
