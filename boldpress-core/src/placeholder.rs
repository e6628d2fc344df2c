//! `{name}` substitution for template text.

use crate::error::{BoldpressError, Result};

/// Replaces every `{name}` in `text` with `lookup(name)`.
///
/// `{{` and `}}` produce literal braces. An unknown name or an unbalanced
/// brace is a [`BoldpressError::Template`] error.
pub fn fill<'a, F>(text: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<&'a str>,
{
    let mut out = String::with_capacity(text.len());
    let mut chars = text.char_indices().peekable();

    while let Some((idx, c)) = chars.next() {
        match c {
            '{' if chars.peek().map(|&(_, n)| n) == Some('{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek().map(|&(_, n)| n) == Some('}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let rest = &text[idx + 1..];
                let end = rest.find('}').ok_or_else(|| {
                    BoldpressError::Template(format!("unclosed placeholder at byte {idx}"))
                })?;
                let name = rest[..end].trim();
                let value = lookup(name).ok_or_else(|| {
                    BoldpressError::Template(format!("unknown placeholder {{{name}}}"))
                })?;
                out.push_str(value);
                // skip past the closing brace
                for (i, _) in chars.by_ref() {
                    if i == idx + 1 + end {
                        break;
                    }
                }
            }
            '}' => {
                return Err(BoldpressError::Template(format!(
                    "unmatched '}}' at byte {idx}"
                )));
            }
            c => out.push(c),
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(name: &str) -> Option<&'static str> {
        match name {
            "company" => Some("Acme Ports"),
            "job_title" => Some("Graduate Trainee"),
            _ => None,
        }
    }

    #[test]
    fn test_fill_replaces_names() {
        let out = fill("the {job_title} role at {company}.", vars).unwrap();
        assert_eq!(out, "the Graduate Trainee role at Acme Ports.");
    }

    #[test]
    fn test_no_placeholders_is_identity() {
        assert_eq!(fill("plain — text", vars).unwrap(), "plain — text");
        assert_eq!(fill("", vars).unwrap(), "");
    }

    #[test]
    fn test_escaped_braces() {
        assert_eq!(fill("{{company}}", vars).unwrap(), "{company}");
        assert_eq!(fill("a }} b", vars).unwrap(), "a } b");
    }

    #[test]
    fn test_whitespace_inside_braces() {
        assert_eq!(fill("{ company }", vars).unwrap(), "Acme Ports");
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            fill("{recruiter}", vars),
            Err(BoldpressError::Template(_))
        ));
        assert!(matches!(fill("{company", vars), Err(BoldpressError::Template(_))));
        assert!(matches!(fill("oops }", vars), Err(BoldpressError::Template(_))));
    }

    #[test]
    fn test_multibyte_around_placeholders() {
        let out = fill("café {company} — ok", vars).unwrap();
        assert_eq!(out, "café Acme Ports — ok");
    }
}
