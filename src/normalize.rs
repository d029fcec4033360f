use once_cell::sync::Lazy;
use regex::Regex;

static MARKDOWN_MARKER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[#*_\-\[\]()`]").unwrap());

/// Strip Markdown marker characters (`# * _ - [ ] ( )` and backticks) from `raw`.
///
/// The removal is not context sensitive: markers inside words go too. Every
/// other character, whitespace included, is kept as is.
pub fn normalize(raw: &str) -> String {
    MARKDOWN_MARKER_RE.replace_all(raw, "").into_owned()
}

/// Length in characters (not bytes).
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_markers_everywhere() {
        assert_eq!(
            normalize("# Title\n**bold** _it_ [link](url) `code` well-known"),
            " Title\nbold it linkurl code wellknown"
        );
    }

    #[test]
    fn keeps_japanese_and_whitespace() {
        assert_eq!(normalize("## 見出し\n\n本文です。  "), " 見出し\n\n本文です。  ");
    }

    #[test]
    fn empty_stays_empty() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn char_len_counts_scalars() {
        assert_eq!(char_len("方法"), 2);
        assert_eq!(char_len("abc"), 3);
    }
}
