use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::rules::Rules;

static TOC_HEADING_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(#{1,3})\s+(.+)$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TocEntry {
    pub level: usize,
    pub text: String,
    pub anchor: String,
}

/// Lowercase and turn spaces into hyphens. Nothing else is touched.
pub fn slugify(text: &str) -> String {
    text.to_lowercase().replace(' ', "-")
}

/// Level 2 and 3 headings of `markdown`, in document order.
pub fn toc_entries(markdown: &str) -> Vec<TocEntry> {
    markdown
        .split('\n')
        .filter_map(|line| {
            let caps = TOC_HEADING_RE.captures(line)?;
            let level = caps[1].len();
            // level 1 is the document title
            if level < 2 {
                return None;
            }
            let text = caps[2].trim().replace(['[', ']'], "");
            let anchor = slugify(&text);
            Some(TocEntry {
                level,
                text,
                anchor,
            })
        })
        .collect()
}

fn render_toc(entries: &[TocEntry], rules: &Rules) -> String {
    let mut lines = vec![rules.toc_heading.clone(), String::new()];
    for entry in entries {
        let indent = "  ".repeat(entry.level - 2);
        lines.push(format!("{indent}- [{}](#{})", entry.text, entry.anchor));
    }
    lines.push(String::new());
    lines.join("\n")
}

pub(crate) fn add_toc_if_needed(markdown: &str, rules: &Rules) -> String {
    if rules.has_toc_marker(markdown) {
        return markdown.to_string();
    }

    let entries = toc_entries(markdown);
    if entries.is_empty() {
        return markdown.to_string();
    }
    tracing::debug!(entries = entries.len(), "inserting table of contents");

    let toc = render_toc(&entries, rules);
    match markdown.split_once("\n\n") {
        Some((title, body)) => format!("{title}\n\n{toc}\n\n{body}"),
        None => format!("{markdown}\n\n{toc}"),
    }
}
