//! Request and response shapes exchanged with the text-generation service.
//!
//! Nothing here talks to the network. The orchestrator builds a
//! [`GenerationRequest`], sends it however it likes, and hands the raw reply
//! back to [`parse_titles`] or [`strip_code_fence`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// How many title candidates are requested and kept.
pub const DEFAULT_TITLE_LIMIT: usize = 5;

static JSON_FENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)```").unwrap());

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetAudience {
    Beginner,
    Intermediate,
    Advanced,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArticleLength {
    Short,
    #[default]
    Standard,
    Long,
}

impl ArticleLength {
    /// Token budget for the article request.
    pub fn max_tokens(self) -> u32 {
        match self {
            Self::Short => 1500,
            Self::Standard => 2500,
            Self::Long => 3500,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub main_keyword: String,
    #[serde(default)]
    pub related_keywords: Vec<String>,
    #[serde(default)]
    pub audience: TargetAudience,
    #[serde(default)]
    pub length: ArticleLength,
}

/// Split a comma separated keyword list, dropping blanks.
pub fn parse_related_keywords(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .map(String::from)
        .collect()
}

#[derive(Debug, Deserialize)]
struct TitlesPayload {
    #[serde(default)]
    titles: Vec<String>,
}

/// Extract title candidates from a generation reply.
///
/// A fenced ```json block wins; if it does not parse, no titles are returned.
/// Without a fence the whole reply is tried as JSON, then as one title per line.
/// `limit` only caps the line fallback; JSON payloads are returned whole.
pub fn parse_titles(response: &str, limit: usize) -> Vec<String> {
    if let Some(caps) = JSON_FENCE_RE.captures(response) {
        return match serde_json::from_str::<TitlesPayload>(&caps[1]) {
            Ok(payload) => payload.titles,
            Err(err) => {
                tracing::warn!(%err, "fenced title block is not valid JSON");
                Vec::new()
            }
        };
    }

    if let Ok(payload) = serde_json::from_str::<TitlesPayload>(response) {
        return payload.titles;
    }

    tracing::debug!("title reply is not JSON, falling back to lines");
    response
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('{') && !line.starts_with('}'))
        .map(|line| line.trim_matches(|c: char| matches!(c, '"' | '\'' | ',')))
        .filter(|line| !line.is_empty())
        .take(limit)
        .map(String::from)
        .collect()
}

/// Remove a surrounding ```markdown / ``` fence from a generated article.
pub fn strip_code_fence(article: &str) -> String {
    let article = article.trim();
    for open in ["```markdown", "```"] {
        if let Some(inner) = article
            .strip_prefix(open)
            .and_then(|rest| rest.strip_suffix("```"))
        {
            return inner.trim().to_string();
        }
    }
    article.to_string()
}
