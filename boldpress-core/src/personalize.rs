//! Interactive overrides for letter paragraphs.
//!
//! The core never reads from a terminal itself. Callers supply a
//! [`LineSource`]; the CLI wires one to stdin, tests use [`ScriptedLines`].

use crate::error::Result;
use crate::letter::CoverLetter;
use std::collections::VecDeque;
use tracing::debug;

/// Supplies one line of user input per prompt.
pub trait LineSource {
    /// Shows `prompt` and returns the answer, or `None` at end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// A [`LineSource`] that replays a fixed list of answers.
#[derive(Debug, Clone, Default)]
pub struct ScriptedLines {
    answers: VecDeque<String>,
    prompts: Vec<String>,
}

impl ScriptedLines {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
        }
    }

    /// Prompts shown so far, in order.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }
}

impl LineSource for ScriptedLines {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.answers.pop_front())
    }
}

/// Offers each paragraph of `letter` for replacement.
///
/// A non-blank answer (trimmed) replaces the default; a blank answer or end of
/// input keeps it. Returns how many paragraphs were replaced.
pub fn personalize(letter: &mut CoverLetter, source: &mut dyn LineSource) -> Result<usize> {
    let mut replaced = 0;

    let prompt = format!(
        "Opening paragraph (default shown):\n{}\n\nEnter your custom opening (or press Enter to keep default): ",
        letter.opening
    );
    replaced += offer(&mut letter.opening, &prompt, source)?;

    for (i, paragraph) in letter.body.iter_mut().enumerate() {
        let prompt = format!(
            "\nBody paragraph {} (default):\n{}\n\nEnter custom paragraph (or press Enter to keep default): ",
            i + 1,
            paragraph
        );
        replaced += offer(paragraph, &prompt, source)?;
    }

    let prompt = format!(
        "\nClosing paragraph (default shown):\n{}\n\nEnter custom closing (or press Enter to keep default): ",
        letter.closing
    );
    replaced += offer(&mut letter.closing, &prompt, source)?;

    debug!(replaced, "personalization finished");
    Ok(replaced)
}

fn offer(target: &mut String, prompt: &str, source: &mut dyn LineSource) -> Result<usize> {
    match source.read_line(prompt)? {
        Some(answer) if !answer.trim().is_empty() => {
            *target = answer.trim().to_string();
            Ok(1)
        }
        _ => Ok(0),
    }
}
