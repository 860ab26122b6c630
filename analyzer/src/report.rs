//! The plain-text report printed at the end of a run.

use std::fmt;

use common::Vacancy;
use common::config::AnalysisConfig;
use common::tokenizer::Tokenizer;

use crate::frequency::{RankedItem, analyze_languages, analyze_technologies};

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub title: String,
    pub items: Vec<RankedItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub vacancy_count: usize,
    pub sections: Vec<Section>,
}

/// Runs the enabled passes over `vacancies`.
///
/// The technology ranking is always present; the language ranking only
/// when `config.include_languages` is set.
pub fn analyze_vacancies(
    vacancies: &[Vacancy],
    languages: &[String],
    tokenizer: &Tokenizer,
    config: &AnalysisConfig,
) -> Report {
    let mut sections = Vec::new();

    if config.include_languages {
        sections.push(Section {
            title: format!("TOP {} Languages", config.top_languages),
            items: analyze_languages(vacancies, languages, tokenizer, config.top_languages),
        });
    }

    sections.push(Section {
        title: format!("TOP {} Technologies", config.top_technologies),
        items: analyze_technologies(
            vacancies,
            languages,
            tokenizer,
            &config.stop_words,
            config.top_technologies,
        ),
    });

    Report {
        vacancy_count: vacancies.len(),
        sections,
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vacancies: {}", self.vacancy_count)?;
        for section in &self.sections {
            writeln!(f, "## {}", section.title)?;
            for item in &section.items {
                writeln!(f, "{item}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Vacancy> {
        ["Python, Spark and Kafka", "Go and Spark"]
            .iter()
            .enumerate()
            .map(|(i, text)| Vacancy {
                text: Some(text.to_string()),
                ..Vacancy::new(format!("https://hh.ru/vacancy/{i}"))
            })
            .collect()
    }

    fn languages() -> Vec<String> {
        vec!["python".to_string(), "go".to_string()]
    }

    #[test]
    fn test_default_report_has_only_technologies() {
        let report = analyze_vacancies(
            &corpus(),
            &languages(),
            &Tokenizer::default(),
            &AnalysisConfig::default(),
        );

        assert_eq!(
            report.to_string(),
            "Vacancies: 2\n\
             ## TOP 20 Technologies\n\
             spark: 2 вакансий (100.00%)\n\
             kafka: 1 вакансий (50.00%)\n"
        );
    }

    #[test]
    fn test_report_with_languages_section() {
        let config = AnalysisConfig {
            include_languages: true,
            top_technologies: 1,
            ..AnalysisConfig::default()
        };

        let report = analyze_vacancies(&corpus(), &languages(), &Tokenizer::default(), &config);

        assert_eq!(report.sections.len(), 2);
        assert_eq!(
            report.to_string(),
            "Vacancies: 2\n\
             ## TOP 10 Languages\n\
             python: 1 вакансий (50.00%)\n\
             go: 1 вакансий (50.00%)\n\
             ## TOP 1 Technologies\n\
             spark: 2 вакансий (100.00%)\n"
        );
    }
}
