use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use seo_draft::generation::{parse_titles, DEFAULT_TITLE_LIMIT};
use seo_draft::{render_html, ArticleReport, Rules, SeoAnalyzer, TitleScoreResult};

#[derive(Parser)]
#[command(
    name = "seo-draft",
    about = "Score generated blog drafts against SEO heuristics",
    version
)]
struct Cli {
    /// JSON file overriding any of the default rule values
    #[arg(long, global = true)]
    rules: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Keyword density, heading structure and readability of an article
    Analyze {
        /// Markdown file (reads stdin if omitted)
        file: Option<PathBuf>,
        #[arg(short, long)]
        keyword: String,
        /// Title candidates to score alongside the article
        #[arg(short, long = "title")]
        titles: Vec<String>,
    },
    /// Score title candidates
    Titles {
        #[arg(short, long)]
        keyword: String,
        #[arg(required = true)]
        titles: Vec<String>,
    },
    /// Print the article with a table of contents inserted
    Toc { file: Option<PathBuf> },
    /// Print an HTML preview of the article
    Html { file: Option<PathBuf> },
    /// Extract title candidates from a raw generation reply
    ParseTitles {
        file: Option<PathBuf>,
        #[arg(long, default_value_t = DEFAULT_TITLE_LIMIT)]
        limit: usize,
    },
}

#[derive(Serialize)]
struct ScoredTitle<'a> {
    title: &'a str,
    #[serde(flatten)]
    result: TitleScoreResult,
}

#[derive(Serialize)]
struct AnalyzeOutput<'a> {
    report: ArticleReport,
    titles: Vec<ScoredTitle<'a>>,
}

fn read_input(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("failed to read stdin")?;
            Ok(input)
        }
    }
}

fn load_rules(path: Option<&Path>) -> Result<Rules> {
    let Some(path) = path else {
        return Ok(Rules::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read rules from {}", path.display()))?;
    let rules = Rules::from_json(&json)
        .with_context(|| format!("invalid rules in {}", path.display()))?;
    tracing::info!(path = %path.display(), "loaded rule overrides");
    Ok(rules)
}

fn score_all<'a>(
    analyzer: &SeoAnalyzer,
    titles: &'a [String],
    keyword: &str,
) -> Vec<ScoredTitle<'a>> {
    titles
        .iter()
        .map(|title| ScoredTitle {
            title,
            result: analyzer.score_title(title, keyword),
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let analyzer = SeoAnalyzer::new(load_rules(cli.rules.as_deref())?);

    match &cli.command {
        Command::Analyze {
            file,
            keyword,
            titles,
        } => {
            let markdown = read_input(file.as_deref())?;
            let output = AnalyzeOutput {
                report: analyzer.analyze_article(&markdown, keyword),
                titles: score_all(&analyzer, titles, keyword),
            };
            print_json(&output)?;
        }
        Command::Titles { keyword, titles } => {
            print_json(&score_all(&analyzer, titles, keyword))?;
        }
        Command::Toc { file } => {
            let markdown = read_input(file.as_deref())?;
            print!("{}", analyzer.add_toc_if_needed(&markdown));
        }
        Command::Html { file } => {
            let markdown = read_input(file.as_deref())?;
            print!("{}", render_html(&markdown));
        }
        Command::ParseTitles { file, limit } => {
            let reply = read_input(file.as_deref())?;
            print_json(&parse_titles(&reply, *limit))?;
        }
    }

    Ok(())
}
