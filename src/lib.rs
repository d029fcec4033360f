//! Heuristic SEO checks for generated Markdown blog drafts.
//!
//! Every analyzer is a pure function of its string inputs. Heading analysis
//! and TOC generation read the raw Markdown; keyword density and readability
//! read the [`normalize`]d view with Markdown markers stripped.

use once_cell::sync::Lazy;
use serde::Serialize;

mod density;
pub mod generation;
mod headings;
mod normalize;
mod readability;
mod render;
mod rules;
mod title;
mod toc;

pub use density::{DensityRecommendation, KeywordDensityResult};
pub use headings::{HeadingCounts, HeadingStructureResult};
pub use normalize::normalize;
pub use readability::ReadabilityResult;
pub use render::render_html;
pub use rules::Rules;
pub use title::TitleScoreResult;
pub use toc::{slugify, toc_entries, TocEntry};

// ---------------------------------------------------------------------------
// Analyzer
// ---------------------------------------------------------------------------

/// The three article-level analyses bundled together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleReport {
    pub keyword_density: KeywordDensityResult,
    pub headings: HeadingStructureResult,
    pub readability: ReadabilityResult,
}

/// Runs the analyzers against one rule set.
#[derive(Debug, Clone, Default)]
pub struct SeoAnalyzer {
    rules: Rules,
}

impl SeoAnalyzer {
    pub fn new(rules: Rules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    pub fn analyze_density(&self, raw: &str, keyword: &str) -> KeywordDensityResult {
        density::analyze_density(raw, keyword, &self.rules)
    }

    pub fn analyze_headings(&self, raw: &str) -> HeadingStructureResult {
        headings::analyze_headings(raw)
    }

    pub fn analyze_readability(&self, raw: &str) -> ReadabilityResult {
        readability::analyze_readability(raw, &self.rules)
    }

    pub fn score_title(&self, title: &str, main_keyword: &str) -> TitleScoreResult {
        title::score_title(title, main_keyword, &self.rules)
    }

    /// Insert a table of contents after the title block, unless one exists
    /// or there are no level 2/3 headings. Applying it twice is a no-op.
    pub fn add_toc_if_needed(&self, markdown: &str) -> String {
        toc::add_toc_if_needed(markdown, &self.rules)
    }

    pub fn analyze_article(&self, markdown: &str, keyword: &str) -> ArticleReport {
        ArticleReport {
            keyword_density: self.analyze_density(markdown, keyword),
            headings: self.analyze_headings(markdown),
            readability: self.analyze_readability(markdown),
        }
    }
}

// ---------------------------------------------------------------------------
// Default-rule entry points
// ---------------------------------------------------------------------------

static DEFAULT_ANALYZER: Lazy<SeoAnalyzer> = Lazy::new(SeoAnalyzer::default);

pub fn analyze_density(raw: &str, keyword: &str) -> KeywordDensityResult {
    DEFAULT_ANALYZER.analyze_density(raw, keyword)
}

pub fn analyze_headings(raw: &str) -> HeadingStructureResult {
    DEFAULT_ANALYZER.analyze_headings(raw)
}

pub fn analyze_readability(raw: &str) -> ReadabilityResult {
    DEFAULT_ANALYZER.analyze_readability(raw)
}

pub fn score_title(title: &str, main_keyword: &str) -> TitleScoreResult {
    DEFAULT_ANALYZER.score_title(title, main_keyword)
}

pub fn add_toc_if_needed(markdown: &str) -> String {
    DEFAULT_ANALYZER.add_toc_if_needed(markdown)
}

pub fn analyze_article(markdown: &str, keyword: &str) -> ArticleReport {
    DEFAULT_ANALYZER.analyze_article(markdown, keyword)
}
