use super::KeywordSet;
use std::ops::Range;

/// A contiguous piece of a line, flagged for emphasis or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub emphasize: bool,
}

impl<'a> Segment<'a> {
    pub fn plain(text: &'a str) -> Self {
        Self {
            text,
            emphasize: false,
        }
    }

    pub fn emphasized(text: &'a str) -> Self {
        Self {
            text,
            emphasize: true,
        }
    }
}

/// Splits `line` into plain and emphasized segments around keyword matches.
///
/// The scan is greedy and leftmost: at each step the keyword whose
/// case-insensitive match starts earliest in the remaining text is taken.
/// When several keywords match at that same position the longest wins, and
/// keywords of equal length are resolved by declaration order. Emphasized
/// segments carry the casing found in `line`, not the keyword's.
///
/// An empty line yields no segments. Concatenating the returned segments
/// always reproduces `line`.
///
/// # Example
///
/// ```rust
/// use boldpress::emphasis::{split, KeywordSet, Segment};
///
/// let keywords = KeywordSet::new(["python"]).unwrap();
/// let segments = split("I use PYTHON daily", &keywords);
/// assert_eq!(
///     segments,
///     vec![
///         Segment::plain("I use "),
///         Segment::emphasized("PYTHON"),
///         Segment::plain(" daily"),
///     ]
/// );
/// ```
pub fn split<'a>(line: &'a str, keywords: &KeywordSet) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut remaining = line;

    while !remaining.is_empty() {
        let mut best: Option<Range<usize>> = None;
        for keyword in keywords.iter() {
            if let Some(found) = find_ignore_case(remaining, keyword) {
                if best.as_ref().map_or(true, |b| found.start < b.start) {
                    best = Some(found);
                }
            }
        }

        let Some(found) = best else {
            segments.push(Segment::plain(remaining));
            break;
        };

        if found.start > 0 {
            segments.push(Segment::plain(&remaining[..found.start]));
        }
        segments.push(Segment::emphasized(&remaining[found.clone()]));
        remaining = &remaining[found.end..];
    }

    segments
}

/// Renders segments with emphasized text wrapped in `**`.
pub fn render_marked(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for segment in segments {
        if segment.emphasize {
            out.push_str("**");
            out.push_str(segment.text);
            out.push_str("**");
        } else {
            out.push_str(segment.text);
        }
    }
    out
}

/// Byte range of the first case-insensitive occurrence of `needle`.
///
/// Characters are compared one to one through their full lowercase mapping,
/// so the returned range always lies on char boundaries of `haystack` even
/// when lowercasing would change byte lengths.
pub(crate) fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }
    haystack
        .char_indices()
        .find_map(|(start, _)| match_len_at(&haystack[start..], needle).map(|len| start..start + len))
}

fn match_len_at(text: &str, needle: &str) -> Option<usize> {
    let mut text_chars = text.char_indices();
    for expected in needle.chars() {
        let (_, actual) = text_chars.next()?;
        if !chars_eq_ignore_case(actual, expected) {
            return None;
        }
    }
    Some(text_chars.next().map_or(text.len(), |(idx, _)| idx))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
