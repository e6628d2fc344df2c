//! # boldpress
//!
//! Generate CVs, cover letters, reports and invitation cards as `.docx` files,
//! with selected keywords emphasized in bold.
//!
//! ## Features
//!
//! - **Keyword Emphasis**: Split any line into plain and bold segments around
//!   case-insensitive keyword matches, longest phrase first
//! - **Document Model**: Headings, paragraphs of styled runs, bullets, page breaks
//! - **DOCX Output**: Native Office Open XML writer, plus a plain-text writer
//! - **Cover Letters**: Templates with `{job_title}`/`{company}` placeholders
//! - **Layouts**: JSON-described documents with optional metrics
//! - **Injected Data**: Personal details come from a [`Profile`], never constants
//!
//! ## Quick Start
//!
//! ```rust
//! use boldpress::{Document, KeywordSet, Result};
//!
//! # fn main() -> Result<()> {
//! let keywords = KeywordSet::new(["Python", "Senior Python Automation Engineer"])?;
//!
//! let mut doc = Document::new();
//! doc.set_title("Summary");
//! doc.add_heading("Professional Summary", 1)?;
//! doc.add_paragraph()
//!     .add_emphasized("Senior Python Automation Engineer with API experience.", &keywords);
//!
//! let dir = tempfile::tempdir()?;
//! doc.save(dir.path().join("summary.docx"))?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`emphasis`] - Keyword sets and the emphasis splitter
//! - [`document`] / [`paragraph`] - Document model
//! - [`writer`] - DOCX and plain-text writers
//! - [`profile`] - Personal details
//! - [`letter`] - Cover letter composition
//! - [`layout`] - JSON-described documents
//! - [`personalize`] - Interactive paragraph overrides

pub mod document;
pub mod emphasis;
pub mod error;
pub mod layout;
pub mod letter;
pub mod paragraph;
pub mod personalize;
pub mod placeholder;
pub mod profile;
pub mod writer;

pub use document::{Block, Document, DocumentMetadata, OutputFormat};
pub use emphasis::{split, KeywordSet, Segment};
pub use error::{BoldpressError, Result};
pub use layout::{Layout, LayoutBlock};
pub use letter::{Application, CoverLetter, LetterTemplate};
pub use paragraph::{Alignment, Paragraph, ParagraphStyle, Run};
pub use personalize::{personalize, LineSource, ScriptedLines};
pub use profile::Profile;
pub use writer::{DocxWriter, PlainTextWriter, WriterConfig};

/// Current version of boldpress
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
