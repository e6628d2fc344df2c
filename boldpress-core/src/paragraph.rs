use crate::emphasis::{self, KeywordSet};

/// Horizontal alignment of a paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

impl Alignment {
    /// Value of the `w:jc` attribute.
    pub(crate) fn ooxml_value(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Justify => "both",
        }
    }
}

/// Named paragraph style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParagraphStyle {
    #[default]
    Normal,
    /// Heading level 0 (title) through 9.
    Heading(u8),
    ListBullet,
}

impl ParagraphStyle {
    pub(crate) fn style_id(self) -> String {
        match self {
            ParagraphStyle::Normal => "Normal".to_string(),
            ParagraphStyle::Heading(0) => "Title".to_string(),
            ParagraphStyle::Heading(level) => format!("Heading{level}"),
            ParagraphStyle::ListBullet => "ListBullet".to_string(),
        }
    }
}

/// A styled span of text within a paragraph.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Run {
    pub text: String,
    pub bold: bool,
    pub italic: bool,
    /// Font size in points; `None` inherits the paragraph style.
    pub size: Option<f64>,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn set_bold(&mut self, bold: bool) -> &mut Self {
        self.bold = bold;
        self
    }

    pub fn set_italic(&mut self, italic: bool) -> &mut Self {
        self.italic = italic;
        self
    }

    pub fn set_size(&mut self, points: f64) -> &mut Self {
        self.size = Some(points);
        self
    }
}

/// A paragraph made of runs.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Paragraph {
    runs: Vec<Run>,
    alignment: Alignment,
    style: ParagraphStyle,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: ParagraphStyle) -> Self {
        Self {
            style,
            ..Default::default()
        }
    }

    /// Appends a run and returns it for styling.
    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Appends `text` as plain runs with every keyword occurrence in bold.
    pub fn add_emphasized(&mut self, text: &str, keywords: &KeywordSet) -> &mut Self {
        for segment in emphasis::split(text, keywords) {
            self.add_run(segment.text).set_bold(segment.emphasize);
        }
        self
    }

    pub fn set_alignment(&mut self, alignment: Alignment) -> &mut Self {
        self.alignment = alignment;
        self
    }

    pub fn set_style(&mut self, style: ParagraphStyle) -> &mut Self {
        self.style = style;
        self
    }

    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn runs_mut(&mut self) -> &mut [Run] {
        &mut self.runs
    }

    pub fn alignment(&self) -> Alignment {
        self.alignment
    }

    pub fn style(&self) -> ParagraphStyle {
        self.style
    }

    /// Concatenated text of all runs.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.iter().all(|r| r.text.is_empty())
    }
}
