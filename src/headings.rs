use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HeadingCounts {
    pub h1: usize,
    pub h2: usize,
    pub h3: usize,
    pub h4: usize,
    pub h5: usize,
    pub h6: usize,
}

impl HeadingCounts {
    fn bump(&mut self, level: usize) {
        let slot = match level {
            1 => &mut self.h1,
            2 => &mut self.h2,
            3 => &mut self.h3,
            4 => &mut self.h4,
            5 => &mut self.h5,
            6 => &mut self.h6,
            _ => return,
        };
        *slot += 1;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeadingStructureResult {
    pub counts: HeadingCounts,
    pub has_h1: bool,
    pub has_h2: bool,
    pub too_many_h1: bool,
    pub is_good_structure: bool,
}

/// ATX heading level of a raw line: exactly `n` leading `#` (1..=6) followed
/// by a space. Leading whitespace disqualifies the line.
pub(crate) fn atx_level(line: &str) -> Option<usize> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if (1..=6).contains(&hashes) && line.as_bytes().get(hashes) == Some(&b' ') {
        Some(hashes)
    } else {
        None
    }
}

/// Runs on the raw Markdown; heading markers must still be present.
pub(crate) fn analyze_headings(raw: &str) -> HeadingStructureResult {
    let mut counts = HeadingCounts::default();
    for level in raw.lines().filter_map(atx_level) {
        counts.bump(level);
    }

    let has_h1 = counts.h1 > 0;
    let has_h2 = counts.h2 > 0;
    let too_many_h1 = counts.h1 > 1;

    tracing::debug!(?counts, "heading structure");

    HeadingStructureResult {
        counts,
        has_h1,
        has_h2,
        too_many_h1,
        is_good_structure: has_h1 && has_h2 && !too_many_h1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_exact() {
        let result = analyze_headings("#### Title");
        assert_eq!(result.counts.h1, 0);
        assert_eq!(result.counts.h2, 0);
        assert_eq!(result.counts.h3, 0);
        assert_eq!(result.counts.h4, 1);
    }

    #[test]
    fn requires_space_and_line_start() {
        assert_eq!(atx_level("#Title"), None);
        assert_eq!(atx_level(" # Title"), None);
        assert_eq!(atx_level("####### seven"), None);
        assert_eq!(atx_level("###### six"), Some(6));
        assert_eq!(atx_level("## "), Some(2));
    }

    #[test]
    fn counts_every_level() {
        let text = "# A\n## B\n### C\n#### D\n##### E\n###### F\n## G\n";
        let result = analyze_headings(text);
        assert_eq!(
            result.counts,
            HeadingCounts {
                h1: 1,
                h2: 2,
                h3: 1,
                h4: 1,
                h5: 1,
                h6: 1,
            }
        );
    }

    #[test]
    fn structure_verdicts() {
        assert!(analyze_headings("# T\n## A\n## B").is_good_structure);

        let no_h1 = analyze_headings("## A");
        assert!(!no_h1.has_h1);
        assert!(!no_h1.is_good_structure);

        let two_h1 = analyze_headings("# T\n# U\n## A");
        assert!(two_h1.too_many_h1);
        assert!(!two_h1.is_good_structure);

        let no_h2 = analyze_headings("# T\n### A");
        assert!(!no_h2.has_h2);
        assert!(!no_h2.is_good_structure);
    }

    #[test]
    fn handles_crlf_lines() {
        let result = analyze_headings("# T\r\n## A\r\n");
        assert!(result.is_good_structure);
    }

    #[test]
    fn empty_input_has_no_headings() {
        let result = analyze_headings("");
        assert_eq!(result.counts, HeadingCounts::default());
        assert!(!result.is_good_structure);
    }
}
