use serde::{Deserialize, Serialize};

/// Thresholds and word lists shared by every analyzer.
///
/// `Default` carries the tuned values for Japanese blog copy. Any subset of
/// fields can be overridden from JSON; missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    // Keyword density (percent)
    pub density_low_percent: f64,
    pub density_high_percent: f64,

    // Readability (characters)
    pub long_paragraph_chars: usize,
    pub max_avg_paragraph_chars: f64,
    pub max_avg_sentence_chars: f64,
    pub max_long_paragraph_ratio: f64,

    // Title scoring
    pub title_base_score: i32,
    pub title_max_chars: usize,
    pub title_min_chars: usize,
    pub missing_keyword_penalty: i32,
    pub too_long_penalty: i32,
    pub too_short_penalty: i32,
    pub missing_number_penalty: i32,
    pub missing_power_word_penalty: i32,
    pub power_words: Vec<String>,
    pub tier_good_min: i32,
    pub tier_average_min: i32,

    // Table of contents
    pub toc_heading: String,
    pub toc_markers: Vec<String>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            density_low_percent: 0.5,
            density_high_percent: 3.0,
            long_paragraph_chars: 100,
            max_avg_paragraph_chars: 120.0,
            max_avg_sentence_chars: 50.0,
            max_long_paragraph_ratio: 0.3,
            title_base_score: 100,
            title_max_chars: 35,
            title_min_chars: 10,
            missing_keyword_penalty: 30,
            too_long_penalty: 15,
            too_short_penalty: 10,
            missing_number_penalty: 5,
            missing_power_word_penalty: 5,
            power_words: [
                "方法",
                "コツ",
                "秘訣",
                "完全",
                "ガイド",
                "最高",
                "効果",
                "おすすめ",
                "人気",
                "必須",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            tier_good_min: 80,
            tier_average_min: 60,
            toc_heading: "## 目次".to_string(),
            toc_markers: vec!["## 目次".to_string(), "##目次".to_string()],
        }
    }
}

impl Rules {
    /// Parse a (possibly partial) rule set from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// True when `text` already carries a table-of-contents heading.
    ///
    /// A non-empty `toc_heading` always counts as a marker so that inserting
    /// a TOC stays idempotent even when `toc_markers` is overridden.
    pub(crate) fn has_toc_marker(&self, text: &str) -> bool {
        (!self.toc_heading.is_empty() && text.contains(self.toc_heading.as_str()))
            || self
                .toc_markers
                .iter()
                .any(|m| !m.is_empty() && text.contains(m.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let rules = Rules::from_json(r#"{"title_max_chars": 60, "power_words": ["best"]}"#)
            .expect("valid rules json");
        assert_eq!(rules.title_max_chars, 60);
        assert_eq!(rules.power_words, vec!["best".to_string()]);
        assert_eq!(rules.title_min_chars, 10);
        assert_eq!(rules.density_high_percent, 3.0);
    }

    #[test]
    fn unknown_shape_is_an_error() {
        assert!(Rules::from_json(r#"{"title_max_chars": "long"}"#).is_err());
    }

    #[test]
    fn toc_heading_is_always_a_marker() {
        let rules = Rules {
            toc_heading: "## Contents".to_string(),
            toc_markers: vec![],
            ..Rules::default()
        };
        assert!(rules.has_toc_marker("# T\n\n## Contents\n"));
        assert!(!rules.has_toc_marker("# T\n\n## 目次\n"));
    }

    #[test]
    fn empty_toc_heading_is_not_a_marker() {
        let rules = Rules {
            toc_heading: String::new(),
            ..Rules::default()
        };
        assert!(!rules.has_toc_marker("# T\n\n## A\n"));
        assert!(rules.has_toc_marker("# T\n\n##目次\n"));
    }
}
