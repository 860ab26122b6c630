//! Keyword frequency passes over vacancy descriptions.
//!
//! Each vacancy contributes at most one to a word's count, so a count is
//! "number of vacancies mentioning it".

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::sync::LazyLock;

use common::Vacancy;
use common::tokenizer::Tokenizer;
use regex::Regex;

/// Words must start with a run of ASCII letters (`c++` and `k8s` pass,
/// `3d` and Cyrillic words don't).
static ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[a-zA-Z]+").expect("alphabetic pattern is valid"));

/// One row of a ranking.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedItem {
    pub name: String,
    pub count: usize,
    /// Share of all vacancies, 0..=100.
    pub percentage: f64,
}

impl fmt::Display for RankedItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} вакансий ({:.2}%)", self.name, self.count, self.percentage)
    }
}

/// How many vacancies mention each known language, best first.
///
/// Languages with equal counts keep the order of `languages`. At most
/// `top_n` rows are returned, fewer if fewer languages are known.
pub fn analyze_languages(
    vacancies: &[Vacancy],
    languages: &[String],
    tokenizer: &Tokenizer,
    top_n: usize,
) -> Vec<RankedItem> {
    let mut counts: Vec<(String, usize)> = languages.iter().map(|l| (l.clone(), 0)).collect();

    for vacancy in vacancies {
        let words = body_words(vacancy, tokenizer);
        for (language, count) in counts.iter_mut() {
            if words.contains(language.as_str()) {
                *count += 1;
            }
        }
    }

    rank(counts, vacancies.len(), top_n)
}

/// How many vacancies mention each non-language word, best first.
///
/// Known languages are dropped before the alphabetic filter runs, and stop
/// words after counting. Equal counts are ordered alphabetically.
pub fn analyze_technologies(
    vacancies: &[Vacancy],
    languages: &[String],
    tokenizer: &Tokenizer,
    stop_words: &[String],
    top_n: usize,
) -> Vec<RankedItem> {
    let languages: HashSet<&str> = languages.iter().map(String::as_str).collect();
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for vacancy in vacancies {
        let words = body_words(vacancy, tokenizer);
        for word in words {
            if languages.contains(word.as_str()) || !ALPHABETIC.is_match(&word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    let counts = counts
        .into_iter()
        .filter(|(word, _)| !stop_words.contains(word))
        .collect();

    rank(counts, vacancies.len(), top_n)
}

/// Stable sort by descending count, clipped to `top_n`.
pub fn rank(mut counts: Vec<(String, usize)>, vacancy_count: usize, top_n: usize) -> Vec<RankedItem> {
    counts.sort_by_key(|(_, count)| Reverse(*count));
    counts
        .into_iter()
        .take(top_n)
        .map(|(name, count)| RankedItem {
            percentage: percentage(count, vacancy_count),
            name,
            count,
        })
        .collect()
}

/// `count` as a percentage of `total`; an empty corpus gives 0.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 / total as f64 * 100.0
}

fn body_words(vacancy: &Vacancy, tokenizer: &Tokenizer) -> HashSet<String> {
    vacancy
        .text
        .as_deref()
        .map(|text| tokenizer.extract_words(text))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::AnalysisConfig;

    fn vacancies(texts: &[&str]) -> Vec<Vacancy> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Vacancy {
                text: Some(text.to_string()),
                ..Vacancy::new(format!("https://hh.ru/vacancy/{i}"))
            })
            .collect()
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn tally(items: &[RankedItem]) -> Vec<(&str, usize)> {
        items.iter().map(|item| (item.name.as_str(), item.count)).collect()
    }

    #[test]
    fn test_languages_ranking_keeps_file_order_on_ties() {
        let corpus = vacancies(&["I love Python and Go", "Go is great", "Java and Python"]);
        let languages = strings(&["python", "go", "java"]);

        let ranking = analyze_languages(&corpus, &languages, &Tokenizer::default(), 10);

        assert_eq!(tally(&ranking), vec![("python", 2), ("go", 2), ("java", 1)]);
        assert_eq!(ranking[0].to_string(), "python: 2 вакансий (66.67%)");
        assert_eq!(ranking[1].to_string(), "go: 2 вакансий (66.67%)");
        assert_eq!(ranking[2].to_string(), "java: 1 вакансий (33.33%)");
    }

    #[test]
    fn test_languages_match_exact_names_only() {
        let corpus = vacancies(&["Golang, JavaScript and C++.", "scala/java"]);
        let languages = strings(&["go", "java", "c++", "scala", "Scala"]);

        let ranking = analyze_languages(&corpus, &languages, &Tokenizer::default(), 10);

        // Tokens are lower-cased, so a capitalized list entry never matches
        assert_eq!(
            tally(&ranking),
            vec![("java", 1), ("c++", 1), ("scala", 1), ("go", 0), ("Scala", 0)]
        );
    }

    #[test]
    fn test_languages_clipped_to_top_n() {
        let corpus = vacancies(&["rust go python"]);
        let languages = strings(&["rust", "go", "python"]);

        let ranking = analyze_languages(&corpus, &languages, &Tokenizer::default(), 2);
        assert_eq!(tally(&ranking), vec![("rust", 1), ("go", 1)]);
    }

    #[test]
    fn test_technologies_manual_tally() {
        let corpus = vacancies(&[
            "Experience with Spark, Kafka and Airflow. Python/Scala is a plus.",
            "We build pipelines on Spark and Hadoop (Kafka) with the team; 3D k8s!",
        ]);
        let languages = strings(&["python", "scala"]);
        let stop_words = AnalysisConfig::default().stop_words;

        let ranking =
            analyze_technologies(&corpus, &languages, &Tokenizer::default(), &stop_words, 20);

        assert_eq!(
            tally(&ranking),
            vec![
                ("kafka", 2),
                ("spark", 2),
                ("airflow", 1),
                ("build", 1),
                ("hadoop", 1),
                ("k8s", 1),
                ("plus", 1),
            ]
        );
        assert_eq!(ranking[0].percentage, 100.0);
        assert_eq!(ranking[2].percentage, 50.0);
    }

    #[test]
    fn test_technologies_exclusion_runs_before_alphabetic_filter() {
        let corpus = vacancies(&["c# c++ 1c sql"]);
        let languages = strings(&["c#", "1c"]);

        let ranking = analyze_technologies(&corpus, &languages, &Tokenizer::default(), &[], 20);

        // c++ passes the prefix filter; 1c was never eligible either way
        assert_eq!(tally(&ranking), vec![("c++", 1), ("sql", 1)]);
    }

    #[test]
    fn test_technologies_skip_vacancies_without_text() {
        let mut corpus = vacancies(&["Kafka"]);
        corpus.push(Vacancy::new("https://hh.ru/vacancy/empty"));

        let ranking = analyze_technologies(&corpus, &[], &Tokenizer::default(), &[], 20);

        assert_eq!(tally(&ranking), vec![("kafka", 1)]);
        assert_eq!(ranking[0].percentage, 50.0);
    }

    #[test]
    fn test_fewer_words_than_top_n_does_not_panic() {
        let corpus = vacancies(&["Spark Kafka"]);
        let ranking = analyze_technologies(&corpus, &[], &Tokenizer::default(), &[], 20);
        assert_eq!(ranking.len(), 2);
    }

    #[test]
    fn test_empty_corpus() {
        let languages = strings(&["python"]);
        let ranking = analyze_languages(&[], &languages, &Tokenizer::default(), 10);

        assert_eq!(tally(&ranking), vec![("python", 0)]);
        assert_eq!(ranking[0].percentage, 0.0);
        assert!(analyze_technologies(&[], &languages, &Tokenizer::default(), &[], 20).is_empty());
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(1, 4), 25.0);
        assert_eq!(percentage(3, 0), 0.0);
        assert_eq!(format!("{:.2}", percentage(2, 3)), "66.67");
    }
}
