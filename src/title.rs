use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::normalize::char_len;
use crate::rules::Rules;

// Unicode decimal digits (Nd), full-width included
static DIGIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TitleScoreResult {
    pub score: i32,
    pub comment: String,
}

/// Individual reasons a title lost points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TitleNote {
    MissingKeyword,
    TooLong,
    TooShort,
    NoNumber,
    NoPowerWord,
}

impl TitleNote {
    fn message(self, rules: &Rules) -> String {
        match self {
            Self::MissingKeyword => "missing the main keyword".to_string(),
            Self::TooLong => format!("too long (keep it within {} characters)", rules.title_max_chars),
            Self::TooShort => "too short".to_string(),
            Self::NoNumber => "consider adding a number to lift click-through".to_string(),
            Self::NoPowerWord => "consider adding a compelling phrase".to_string(),
        }
    }

    fn penalty(self, rules: &Rules) -> i32 {
        match self {
            Self::MissingKeyword => rules.missing_keyword_penalty,
            Self::TooLong => rules.too_long_penalty,
            Self::TooShort => rules.too_short_penalty,
            Self::NoNumber => rules.missing_number_penalty,
            Self::NoPowerWord => rules.missing_power_word_penalty,
        }
    }
}

fn collect_notes(title: &str, main_keyword: &str, rules: &Rules) -> Vec<TitleNote> {
    let mut notes = Vec::new();

    if !title.to_lowercase().contains(&main_keyword.to_lowercase()) {
        notes.push(TitleNote::MissingKeyword);
    }

    let length = char_len(title);
    if length > rules.title_max_chars {
        notes.push(TitleNote::TooLong);
    } else if length < rules.title_min_chars {
        notes.push(TitleNote::TooShort);
    }

    if !DIGIT_RE.is_match(title) {
        notes.push(TitleNote::NoNumber);
    }

    if !rules
        .power_words
        .iter()
        .any(|w| !w.is_empty() && title.contains(w.as_str()))
    {
        notes.push(TitleNote::NoPowerWord);
    }

    notes
}

fn summary(score: i32, has_notes: bool, rules: &Rules) -> &'static str {
    if score >= rules.tier_good_min {
        if has_notes {
            "Good title, with room for improvement"
        } else {
            "Excellent SEO title"
        }
    } else if score >= rules.tier_average_min {
        "Average SEO title; there are points to improve"
    } else {
        "Needs improvement from an SEO standpoint"
    }
}

pub(crate) fn score_title(title: &str, main_keyword: &str, rules: &Rules) -> TitleScoreResult {
    let notes = collect_notes(title, main_keyword, rules);

    let deducted = notes
        .iter()
        .fold(0i32, |acc, n| acc.saturating_add(n.penalty(rules)));
    let score = rules.title_base_score.saturating_sub(deducted).clamp(0, 100);

    let head = summary(score, !notes.is_empty(), rules);
    let comment = if notes.is_empty() {
        head.to_string()
    } else {
        let joined = notes
            .iter()
            .map(|n| n.message(rules))
            .collect::<Vec<_>>()
            .join(" / ");
        format!("{head}: {joined}")
    };

    tracing::debug!(title, score, "title score");

    TitleScoreResult { score, comment }
}
