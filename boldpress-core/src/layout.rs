//! Data-driven documents: CVs, reports and invitation cards.
//!
//! A [`Layout`] is a JSON description of a document as an ordered list of
//! blocks. Text fields may reference profile fields (`{name}`, `{email}`, ...)
//! and paragraphs can have the layout's keywords emphasized. Optional metrics
//! turn "result" lines into measured outcomes when values are available.
//!
//! ```rust
//! use boldpress::{Layout, Profile};
//!
//! let layout = Layout::from_json_str(r#"{
//!     "title": "CV",
//!     "keywords": ["Python"],
//!     "blocks": [
//!         { "kind": "contact_header" },
//!         { "kind": "heading", "text": "Summary" },
//!         { "kind": "paragraph", "text": "{name} writes Python." }
//!     ]
//! }"#).unwrap();
//!
//! let doc = layout.render(&Profile::new("Jane Doe")).unwrap();
//! assert_eq!(doc.paragraphs().count(), 3);
//! ```

use crate::document::Document;
use crate::emphasis::KeywordSet;
use crate::error::{BoldpressError, Result};
use crate::paragraph::{Alignment, ParagraphStyle};
use crate::placeholder;
use crate::profile::Profile;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

const CONTACT_NAME_SIZE: f64 = 18.0;

fn default_true() -> bool {
    true
}

fn default_heading_level() -> u8 {
    1
}

fn default_header_alignment() -> Alignment {
    Alignment::Center
}

/// A run inside a `rich` paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSpec {
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
}

/// A `label: value` line, label in bold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelledItem {
    pub label: String,
    pub value: String,
}

/// One metric-dependent fragment; `template` contains `{}` for the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricPart {
    pub metric: String,
    pub template: String,
}

/// A project outcome that reads from metrics when any are set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultLine {
    pub fallback: String,
    #[serde(default)]
    pub parts: Vec<MetricPart>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutBlock {
    /// Name in bold followed by the profile's contact lines.
    ContactHeader {
        #[serde(default = "default_header_alignment")]
        align: Alignment,
    },
    Heading {
        text: String,
        #[serde(default = "default_heading_level")]
        level: u8,
    },
    Paragraph {
        text: String,
        #[serde(default = "default_true")]
        emphasize: bool,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
        #[serde(default)]
        align: Alignment,
    },
    Rich {
        runs: Vec<RunSpec>,
        #[serde(default)]
        align: Alignment,
    },
    Labelled {
        items: Vec<LabelledItem>,
    },
    Bullets {
        items: Vec<String>,
        #[serde(default = "default_true")]
        emphasize: bool,
    },
    Project {
        title: String,
        #[serde(default)]
        bullets: Vec<String>,
        #[serde(default)]
        result: Option<ResultLine>,
    },
    /// Emitted only when at least one referenced metric is set.
    MetricLine {
        prefix: String,
        parts: Vec<MetricPart>,
    },
    PageBreak,
}

/// A complete document description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub title: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub metrics: HashMap<String, String>,
    pub blocks: Vec<LayoutBlock>,
}

impl Layout {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Value of a metric, `None` when missing or blank.
    pub fn metric(&self, key: &str) -> Option<&str> {
        self.metrics
            .get(key)
            .map(String::as_str)
            .filter(|v| !v.trim().is_empty())
    }

    /// Formats every part whose metric is set.
    fn present_parts(&self, parts: &[MetricPart]) -> Result<Vec<String>> {
        let mut out = Vec::new();
        for part in parts {
            if let Some(value) = self.metric(&part.metric) {
                out.push(apply_metric(&part.template, value)?);
            }
        }
        Ok(out)
    }

    /// Builds the document for `profile`.
    pub fn render(&self, profile: &Profile) -> Result<Document> {
        let keywords = KeywordSet::new(&self.keywords)?;
        let fill = |text: &str| placeholder::fill(text, |name| profile.field(name));

        let mut doc = Document::new();
        doc.set_title(fill(&self.title)?);
        doc.set_author(profile.full_name.clone());
        if !self.keywords.is_empty() {
            doc.set_keywords(self.keywords.join(", "));
        }

        for block in &self.blocks {
            match block {
                LayoutBlock::ContactHeader { align } => {
                    let paragraph = doc.add_paragraph();
                    paragraph.set_alignment(*align);
                    let contact = profile.contact_lines();
                    let name = if contact.is_empty() {
                        profile.full_name.clone()
                    } else {
                        format!("{}\n", profile.full_name)
                    };
                    paragraph
                        .add_run(name)
                        .set_bold(true)
                        .set_size(CONTACT_NAME_SIZE);
                    if !contact.is_empty() {
                        paragraph.add_run(contact.join("\n"));
                    }
                }
                LayoutBlock::Heading { text, level } => {
                    doc.add_heading(fill(text)?, *level)?;
                }
                LayoutBlock::Paragraph {
                    text,
                    emphasize,
                    bold,
                    italic,
                    align,
                } => {
                    let text = fill(text)?;
                    let paragraph = doc.add_paragraph();
                    paragraph.set_alignment(*align);
                    if *emphasize && !*bold {
                        paragraph.add_emphasized(&text, &keywords);
                        for run in paragraph.runs_mut() {
                            run.italic = *italic;
                        }
                    } else {
                        paragraph.add_run(text).set_bold(*bold).set_italic(*italic);
                    }
                }
                LayoutBlock::Rich { runs, align } => {
                    let paragraph = doc.add_paragraph();
                    paragraph.set_alignment(*align);
                    for spec in runs {
                        paragraph
                            .add_run(fill(&spec.text)?)
                            .set_bold(spec.bold)
                            .set_italic(spec.italic);
                    }
                }
                LayoutBlock::Labelled { items } => {
                    for item in items {
                        let paragraph = doc.add_paragraph();
                        paragraph
                            .add_run(format!("{}: ", fill(&item.label)?))
                            .set_bold(true);
                        paragraph.add_run(fill(&item.value)?);
                    }
                }
                LayoutBlock::Bullets { items, emphasize } => {
                    for item in items {
                        add_bullet(&mut doc, &fill(item)?, *emphasize, &keywords);
                    }
                }
                LayoutBlock::Project {
                    title,
                    bullets,
                    result,
                } => {
                    doc.add_paragraph().add_run(fill(title)?).set_bold(true);
                    for item in bullets {
                        add_bullet(&mut doc, &fill(item)?, true, &keywords);
                    }
                    if let Some(result) = result {
                        let parts = self.present_parts(&result.parts)?;
                        let line = if parts.is_empty() {
                            fill(&result.fallback)?
                        } else {
                            format!("Result: {}.", parts.join("; "))
                        };
                        add_bullet(&mut doc, &line, true, &keywords);
                    }
                }
                LayoutBlock::MetricLine { prefix, parts } => {
                    let parts = self.present_parts(parts)?;
                    if parts.is_empty() {
                        debug!(prefix = %prefix, "skipping metric line without values");
                    } else {
                        doc.add_paragraph_with_text(format!("{}{}.", fill(prefix)?, parts.join("; ")));
                    }
                }
                LayoutBlock::PageBreak => doc.add_page_break(),
            }
        }

        debug!(
            title = %self.title,
            blocks = doc.blocks().len(),
            "rendered layout"
        );
        Ok(doc)
    }
}

fn add_bullet(doc: &mut Document, text: &str, emphasize: bool, keywords: &KeywordSet) {
    let paragraph = doc.add_paragraph_with_style(ParagraphStyle::ListBullet);
    if emphasize {
        paragraph.add_emphasized(text, keywords);
    } else {
        paragraph.add_run(text);
    }
}

/// Substitutes `value` for each `{}` in a metric template.
fn apply_metric(template: &str, value: &str) -> Result<String> {
    if !template.contains("{}") {
        return Err(BoldpressError::Template(format!(
            "metric template {template:?} has no {{}} slot"
        )));
    }
    Ok(template.replace("{}", value))
}
