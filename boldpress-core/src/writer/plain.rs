use crate::document::{Block, Document};
use crate::error::Result;
use crate::paragraph::{Paragraph, ParagraphStyle};
use std::io::Write;

/// Writes a [`Document`] as UTF-8 plain text, one line per paragraph.
///
/// Title and level-1 headings are underlined, bullets get a `- ` prefix with
/// continuation lines indented, and page breaks become a form feed.
pub struct PlainTextWriter<W: Write> {
    writer: W,
}

impl<W: Write> PlainTextWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn write_document(&mut self, document: &Document) -> Result<()> {
        for block in document.blocks() {
            match block {
                Block::Paragraph(paragraph) => self.write_paragraph(paragraph)?,
                Block::PageBreak => self.writer.write_all(b"\x0c\n")?,
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        let text = paragraph.text();
        match paragraph.style() {
            ParagraphStyle::Heading(level @ 0..=1) => {
                let underline = if level == 0 { "=" } else { "-" };
                let width = text.lines().map(|l| l.chars().count()).max().unwrap_or(0);
                writeln!(self.writer, "{text}")?;
                writeln!(self.writer, "{}", underline.repeat(width))?;
            }
            ParagraphStyle::ListBullet => {
                writeln!(self.writer, "- {}", text.replace('\n', "\n  "))?;
            }
            ParagraphStyle::Heading(_) | ParagraphStyle::Normal => {
                writeln!(self.writer, "{text}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(doc: &Document) -> String {
        let mut buffer = Vec::new();
        PlainTextWriter::new(&mut buffer).write_document(doc).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_headings_are_underlined() {
        let mut doc = Document::new();
        doc.add_heading("Report", 0).unwrap();
        doc.add_heading("Skills", 1).unwrap();
        doc.add_heading("Detail", 2).unwrap();

        assert_eq!(render(&doc), "Report\n======\nSkills\n------\nDetail\n");
    }

    #[test]
    fn test_bullets_and_page_breaks() {
        let mut doc = Document::new();
        doc.add_bullet("first\nsecond line");
        doc.add_page_break();
        doc.add_paragraph_with_text("after");

        assert_eq!(render(&doc), "- first\n  second line\n\x0c\nafter\n");
    }

    #[test]
    fn test_empty_paragraph_is_blank_line() {
        let mut doc = Document::new();
        doc.add_paragraph_with_text("Dear Hiring Manager,");
        doc.add_paragraph();
        doc.add_paragraph_with_text("Sincerely,");

        assert_eq!(render(&doc), "Dear Hiring Manager,\n\nSincerely,\n");
    }

    #[test]
    fn test_runs_are_concatenated_without_markup() {
        let mut doc = Document::new();
        let paragraph = doc.add_paragraph();
        paragraph.add_run("Skills: ").set_bold(true);
        paragraph.add_run("Python, SQL");

        assert_eq!(render(&doc), "Skills: Python, SQL\n");
    }
}
