use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::normalize::{char_len, normalize};
use crate::rules::Rules;

static PARAGRAPH_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n\s*\n").unwrap());

static SENTENCE_SPLIT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[。.!?！？]+").unwrap());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadabilityResult {
    pub paragraph_count: usize,
    pub sentence_count: usize,
    pub long_paragraph_count: usize,
    /// Mean paragraph length in characters.
    pub avg_paragraph_length: f64,
    /// Mean sentence length in characters.
    pub avg_sentence_length: f64,
    pub is_good_readability: bool,
}

fn split_trimmed<'a>(re: &Regex, text: &'a str) -> Vec<&'a str> {
    re.split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn mean_chars(parts: &[&str]) -> f64 {
    if parts.is_empty() {
        return 0.0;
    }
    let total: usize = parts.iter().map(|p| char_len(p)).sum();
    total as f64 / parts.len() as f64
}

pub(crate) fn analyze_readability(raw: &str, rules: &Rules) -> ReadabilityResult {
    let plain = normalize(raw);

    let paragraphs = split_trimmed(&PARAGRAPH_SPLIT_RE, &plain);
    let sentences = split_trimmed(&SENTENCE_SPLIT_RE, &plain);

    let paragraph_count = paragraphs.len();
    let sentence_count = sentences.len();
    let long_paragraph_count = paragraphs
        .iter()
        .filter(|p| char_len(p) > rules.long_paragraph_chars)
        .count();

    let avg_paragraph_length = mean_chars(&paragraphs);
    let avg_sentence_length = mean_chars(&sentences);

    let long_ratio_ok = paragraph_count == 0
        || (long_paragraph_count as f64 / paragraph_count as f64) < rules.max_long_paragraph_ratio;
    let is_good_readability = avg_paragraph_length < rules.max_avg_paragraph_chars
        && avg_sentence_length < rules.max_avg_sentence_chars
        && long_ratio_ok;

    tracing::debug!(
        paragraph_count,
        sentence_count,
        long_paragraph_count,
        avg_paragraph_length,
        avg_sentence_length,
        "readability"
    );

    ReadabilityResult {
        paragraph_count,
        sentence_count,
        long_paragraph_count,
        avg_paragraph_length,
        avg_sentence_length,
        is_good_readability,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(text: &str) -> ReadabilityResult {
        analyze_readability(text, &Rules::default())
    }

    #[test]
    fn empty_text_is_readable() {
        let result = run("");
        assert_eq!(result.paragraph_count, 0);
        assert_eq!(result.sentence_count, 0);
        assert_eq!(result.avg_paragraph_length, 0.0);
        assert_eq!(result.avg_sentence_length, 0.0);
        assert!(result.is_good_readability);
    }

    #[test]
    fn whitespace_only_is_readable() {
        let result = run("  \n\n \t \n");
        assert_eq!(result.paragraph_count, 0);
        assert!(result.is_good_readability);
    }

    #[test]
    fn long_paragraph_is_counted() {
        let text = format!("{}\n\n{}", "a".repeat(50), "b".repeat(150));
        let result = run(&text);
        assert_eq!(result.paragraph_count, 2);
        assert_eq!(result.long_paragraph_count, 1);
        assert_eq!(result.avg_paragraph_length, 100.0);
        // one long paragraph out of two exceeds the ratio
        assert!(!result.is_good_readability);
    }

    #[test]
    fn blank_lines_with_spaces_split_paragraphs() {
        let result = run("first\n   \n\nsecond\n \nthird");
        assert_eq!(result.paragraph_count, 3);
    }

    #[test]
    fn sentences_split_on_full_and_half_width_terminators() {
        let result = run("今日は晴れ。明日は雨！本当？ Yes. Really?! ok");
        assert_eq!(result.sentence_count, 6);
    }

    #[test]
    fn consecutive_terminators_collapse() {
        let result = run("Wait... what?!? fine");
        assert_eq!(result.sentence_count, 3);
    }

    #[test]
    fn lengths_count_characters_not_bytes() {
        let result = run("あいうえお。かきくけこ。");
        assert_eq!(result.sentence_count, 2);
        assert_eq!(result.avg_sentence_length, 5.0);
        assert_eq!(result.avg_paragraph_length, 12.0);
    }

    #[test]
    fn markdown_markers_do_not_count_toward_length() {
        let result = run("**abc**");
        assert_eq!(result.avg_paragraph_length, 3.0);
    }

    #[test]
    fn long_sentences_fail_readability() {
        let sentence = "x".repeat(60);
        let result = run(&format!("{sentence}. {sentence}."));
        assert!(result.avg_sentence_length >= 50.0);
        assert!(!result.is_good_readability);
    }
}
