//! Literal query matching and highlighting
//!
//! Matching is a single case-insensitive scan for the query as a literal
//! substring; there is no tokenization, no ranking, and no pattern syntax,
//! so queries like `10%` or `a.b` match exactly what they say. Highlighting
//! wraps each match in a bold marker pair and never alters the text between
//! matches: stripping the markers from the output reproduces the input.

/// Marker placed on each side of a matched substring
pub const BOLD_MARKER: &str = "**";

/// Check whether a page's content contains the query, case-insensitively.
///
/// A query that trims to nothing matches no page; callers treat an empty
/// query as "no filter", never as "every page".
pub fn page_matches(content: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return false;
    }
    content.to_lowercase().contains(&query.to_lowercase())
}

/// Wrap every case-insensitive occurrence of `query` in bold markers.
///
/// Occurrences are non-overlapping, scanned left to right, and matched as
/// literal substrings ("cat" matches inside "category"). An empty or
/// whitespace-only query returns the text unchanged.
pub fn highlight(text: &str, query: &str) -> String {
    let query = query.trim();
    if query.is_empty() {
        return text.to_string();
    }

    // Matching runs over a case-folded copy; `offsets` maps every folded
    // byte back to the start of the original char it came from, so slices
    // into `text` always land on char boundaries even when a fold changes
    // byte length.
    let (folded, offsets) = fold_with_offsets(text);
    let needle: String = query.chars().flat_map(char::to_lowercase).collect();

    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut from = 0;
    while let Some(pos) = folded[from..].find(&needle) {
        let start = from + pos;
        let end = start + needle.len();
        from = end;

        let orig_start = offsets[start];
        if orig_start < copied {
            // The match begins inside a char already consumed by the
            // previous highlight span.
            continue;
        }
        let last = offsets[end - 1];
        let orig_end = last + text[last..].chars().next().map_or(0, char::len_utf8);

        out.push_str(&text[copied..orig_start]);
        out.push_str(BOLD_MARKER);
        out.push_str(&text[orig_start..orig_end]);
        out.push_str(BOLD_MARKER);
        copied = orig_end;
    }
    out.push_str(&text[copied..]);
    out
}

/// Lowercase `text` char by char, recording for every byte of the folded
/// string the byte offset of the original char that produced it.
fn fold_with_offsets(text: &str) -> (String, Vec<usize>) {
    let mut folded = String::with_capacity(text.len());
    let mut offsets = Vec::with_capacity(text.len());
    for (idx, ch) in text.char_indices() {
        for lower in ch.to_lowercase() {
            folded.push(lower);
        }
        offsets.resize(folded.len(), idx);
    }
    (folded, offsets)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip(marked: &str) -> String {
        marked.replace(BOLD_MARKER, "")
    }

    #[test]
    fn empty_query_returns_text_unchanged() {
        assert_eq!(highlight("Revenue grew 10%", ""), "Revenue grew 10%");
        assert_eq!(highlight("Revenue grew 10%", "   "), "Revenue grew 10%");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(
            highlight("Revenue grew 10%", "revenue"),
            "**Revenue** grew 10%"
        );
        assert_eq!(highlight("no caps here", "CAPS"), "no **caps** here");
    }

    #[test]
    fn all_occurrences_are_wrapped() {
        assert_eq!(
            highlight("cat category concatenate", "cat"),
            "**cat** **cat**egory con**cat**enate"
        );
    }

    #[test]
    fn pattern_special_characters_match_literally() {
        assert_eq!(highlight("grew 10% (net)", "10%"), "grew **10%** (net)");
        assert_eq!(highlight("a.b matches a.b", "a.b"), "**a.b** matches **a.b**");
        assert_eq!(highlight("axb is not a.b", "a.b"), "axb is not **a.b**");
    }

    #[test]
    fn stripping_markers_round_trips() {
        let text = "Revenue grew 10% while expenses fell.\nSecond line, revenue again.";
        let marked = highlight(text, "revenue");
        assert_ne!(marked, text);
        assert_eq!(strip(&marked), text);
    }

    #[test]
    fn non_ascii_text_stays_on_char_boundaries() {
        let text = "Umsätze stiegen um zehn Prozent. UMSÄTZE!";
        let marked = highlight(text, "umsätze");
        assert_eq!(marked, "**Umsätze** stiegen um zehn Prozent. **UMSÄTZE**!");
        assert_eq!(strip(&marked), text);
    }

    #[test]
    fn matches_are_non_overlapping() {
        assert_eq!(highlight("aaaa", "aa"), "**aa****aa**");
    }

    #[test]
    fn page_match_predicate_is_substring_based() {
        assert!(page_matches("Revenue grew 10%", "revenue"));
        assert!(page_matches("the category list", "cat"));
        assert!(!page_matches("Expenses fell", "revenue"));
        assert!(!page_matches("anything", ""));
        assert!(!page_matches("anything", "  \t"));
    }

    #[test]
    fn query_is_trimmed_before_matching() {
        assert_eq!(highlight("Revenue grew", "  revenue "), "**Revenue** grew");
        assert!(page_matches("Revenue grew", " revenue "));
    }
}
