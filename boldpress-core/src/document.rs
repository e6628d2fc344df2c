use crate::error::{BoldpressError, Result};
use crate::paragraph::{Paragraph, ParagraphStyle};
use crate::writer::{DocxWriter, PlainTextWriter, WriterConfig};
use chrono::{DateTime, Local, Utc};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use tracing::{debug, info};

/// Highest heading level a document accepts.
pub const MAX_HEADING_LEVEL: u8 = 9;

/// A top-level element of the document body.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(Paragraph),
    PageBreak,
}

/// A word-processing document made of paragraphs and page breaks.
///
/// # Example
///
/// ```rust
/// use boldpress::Document;
///
/// let mut doc = Document::new();
/// doc.set_title("Curriculum Vitae");
/// doc.add_heading("Education", 1).unwrap();
/// doc.add_paragraph()
///     .add_run("B.Sc. Mathematics and Computer Science")
///     .set_bold(true);
///
/// assert_eq!(doc.blocks().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    blocks: Vec<Block>,
    pub(crate) metadata: DocumentMetadata,
}

/// Metadata stored in the document properties part.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentMetadata {
    /// Document title
    pub title: Option<String>,
    /// Document author
    pub author: Option<String>,
    /// Document subject
    pub subject: Option<String>,
    /// Document keywords
    pub keywords: Option<String>,
    /// Application that produced the file
    pub creator: Option<String>,
    /// Date and time the document was created
    pub creation_date: Option<DateTime<Utc>>,
}

impl Default for DocumentMetadata {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            keywords: None,
            creator: Some(format!("boldpress v{}", env!("CARGO_PKG_VERSION"))),
            creation_date: Some(Utc::now()),
        }
    }
}

/// Output formats understood by [`Document::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Docx,
    PlainText,
}

impl OutputFormat {
    /// Picks the format from a file extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "docx" => Ok(OutputFormat::Docx),
            "txt" => Ok(OutputFormat::PlainText),
            _ => Err(BoldpressError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

impl Document {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self {
            blocks: Vec::new(),
            metadata: DocumentMetadata::default(),
        }
    }

    /// Sets the document title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = Some(title.into());
    }

    /// Sets the document author.
    pub fn set_author(&mut self, author: impl Into<String>) {
        self.metadata.author = Some(author.into());
    }

    /// Sets the document subject.
    pub fn set_subject(&mut self, subject: impl Into<String>) {
        self.metadata.subject = Some(subject.into());
    }

    /// Sets the document keywords.
    pub fn set_keywords(&mut self, keywords: impl Into<String>) {
        self.metadata.keywords = Some(keywords.into());
    }

    /// Sets the document creation date.
    pub fn set_creation_date(&mut self, date: DateTime<Utc>) {
        self.metadata.creation_date = Some(date);
    }

    /// Sets the document creation date using local time.
    pub fn set_creation_date_local(&mut self, date: DateTime<Local>) {
        self.metadata.creation_date = Some(date.with_timezone(&Utc));
    }

    pub fn metadata(&self) -> &DocumentMetadata {
        &self.metadata
    }

    /// Adds a heading paragraph. Level 0 is the document title style.
    ///
    /// # Errors
    ///
    /// Returns [`BoldpressError::InvalidHeadingLevel`] for levels above 9.
    pub fn add_heading(&mut self, text: impl Into<String>, level: u8) -> Result<&mut Paragraph> {
        if level > MAX_HEADING_LEVEL {
            return Err(BoldpressError::InvalidHeadingLevel(level));
        }
        let paragraph = self.push_paragraph(Paragraph::with_style(ParagraphStyle::Heading(level)));
        paragraph.add_run(text);
        Ok(paragraph)
    }

    /// Adds an empty paragraph and returns it for appending runs.
    pub fn add_paragraph(&mut self) -> &mut Paragraph {
        self.push_paragraph(Paragraph::new())
    }

    /// Adds a paragraph holding a single plain run.
    pub fn add_paragraph_with_text(&mut self, text: impl Into<String>) -> &mut Paragraph {
        let paragraph = self.add_paragraph();
        paragraph.add_run(text);
        paragraph
    }

    /// Adds an empty paragraph with the given style.
    pub fn add_paragraph_with_style(&mut self, style: ParagraphStyle) -> &mut Paragraph {
        self.push_paragraph(Paragraph::with_style(style))
    }

    /// Adds a bullet list item.
    pub fn add_bullet(&mut self, text: impl Into<String>) -> &mut Paragraph {
        let paragraph = self.add_paragraph_with_style(ParagraphStyle::ListBullet);
        paragraph.add_run(text);
        paragraph
    }

    pub fn add_page_break(&mut self) {
        self.blocks.push(Block::PageBreak);
    }

    fn push_paragraph(&mut self, paragraph: Paragraph) -> &mut Paragraph {
        self.blocks.push(Block::Paragraph(paragraph));
        match self.blocks.last_mut() {
            Some(Block::Paragraph(p)) => p,
            _ => unreachable!("a paragraph was just pushed"),
        }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Iterates over paragraphs, skipping page breaks.
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.blocks.iter().filter_map(|block| match block {
            Block::Paragraph(p) => Some(p),
            Block::PageBreak => None,
        })
    }

    /// Renders the document as plain text.
    pub fn to_plain_text(&self) -> Result<String> {
        let mut buffer = Vec::new();
        PlainTextWriter::new(&mut buffer).write_document(self)?;
        String::from_utf8(buffer)
            .map_err(|e| BoldpressError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Saves the document, choosing the format from the file extension.
    ///
    /// Parent directories are created when missing.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is not `docx` or `txt`, or if the
    /// file cannot be created or written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        self.save_with_config(path, WriterConfig::default())
    }

    /// Saves the document with explicit writer settings.
    pub fn save_with_config(&self, path: impl AsRef<Path>, config: WriterConfig) -> Result<()> {
        let path = path.as_ref();
        let format = OutputFormat::from_path(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        debug!(
            path = %path.display(),
            blocks = self.blocks.len(),
            ?format,
            "writing document"
        );

        match format {
            OutputFormat::Docx => {
                let file = File::create(path)?;
                DocxWriter::with_config(file, config).write_document(self)?;
            }
            OutputFormat::PlainText => {
                let file = BufWriter::new(File::create(path)?);
                PlainTextWriter::new(file).write_document(self)?;
            }
        }

        info!(path = %path.display(), "saved document");
        Ok(())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
