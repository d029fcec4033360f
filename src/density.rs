use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::normalize::normalize;
use crate::rules::Rules;

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityRecommendation {
    TooLow,
    Appropriate,
    TooHigh,
}

impl DensityRecommendation {
    pub fn message(self) -> &'static str {
        match self {
            Self::TooLow => "Keyword density is too low; use the keyword a little more often.",
            Self::Appropriate => "Keyword density is within the appropriate range.",
            Self::TooHigh => "Keyword density may be too high; the text can read unnaturally.",
        }
    }
}

impl fmt::Display for DensityRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordDensityResult {
    pub keyword_count: usize,
    pub total_words: usize,
    /// Percentage, rounded to two decimals.
    pub density: f64,
    pub recommendation: DensityRecommendation,
}

/// Number of words (runs of Unicode word characters) in already normalized text.
fn count_words(plain: &str) -> usize {
    WORD_RE.find_iter(plain).count()
}

/// Non-overlapping, case-insensitive substring occurrences of `keyword`.
/// An empty keyword never matches.
fn count_keyword(plain: &str, keyword: &str) -> usize {
    if keyword.is_empty() {
        return 0;
    }
    let needle = keyword.to_lowercase();
    plain.to_lowercase().matches(needle.as_str()).count()
}

fn recommend(density: f64, rules: &Rules) -> DensityRecommendation {
    if density < rules.density_low_percent {
        DensityRecommendation::TooLow
    } else if density > rules.density_high_percent {
        DensityRecommendation::TooHigh
    } else {
        DensityRecommendation::Appropriate
    }
}

pub(crate) fn analyze_density(raw: &str, keyword: &str, rules: &Rules) -> KeywordDensityResult {
    let plain = normalize(raw);
    let total_words = count_words(&plain);
    let keyword_count = count_keyword(&plain, keyword);

    let density = if total_words > 0 {
        keyword_count as f64 / total_words as f64 * 100.0
    } else {
        0.0
    };
    // verdict uses the unrounded figure
    let recommendation = recommend(density, rules);
    let density = (density * 100.0).round_ties_even() / 100.0;

    tracing::debug!(keyword_count, total_words, density, "keyword density");

    KeywordDensityResult {
        keyword_count,
        total_words,
        density,
        recommendation,
    }
}
