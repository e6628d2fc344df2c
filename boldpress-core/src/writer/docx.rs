use super::{half_points, WriterConfig};
use crate::document::{Block, Document, DocumentMetadata};
use crate::error::Result;
use crate::paragraph::{Alignment, Paragraph, ParagraphStyle, Run};
use std::io::{Seek, Write};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;
const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

const CONTENT_TYPES: &str = concat!(
    r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    r#"<Default Extension="xml" ContentType="application/xml"/>"#,
    r#"<Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#,
    r#"<Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#,
    r#"<Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>"#,
    r#"<Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>"#,
    r#"<Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>"#,
    r#"</Types>"#
);

const PACKAGE_RELS: &str = concat!(
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>"#,
    r#"<Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>"#,
    r#"</Relationships>"#
);

const DOCUMENT_RELS: &str = concat!(
    r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#,
    r#"<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#,
    r#"<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>"#,
    r#"</Relationships>"#
);

// One bullet definition, referenced by the ListBullet style
const NUMBERING: &str = concat!(
    r#"<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">"#,
    r#"<w:abstractNum w:abstractNumId="0"><w:multiLevelType w:val="singleLevel"/>"#,
    r#"<w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="&#8226;"/>"#,
    r#"<w:lvlJc w:val="left"/><w:pPr><w:ind w:left="720" w:hanging="360"/></w:pPr></w:lvl>"#,
    r#"</w:abstractNum><w:num w:numId="1"><w:abstractNumId w:val="0"/></w:num></w:numbering>"#
);

// A4 portrait with one-inch margins, in twentieths of a point
const SECTION_PROPERTIES: &str = concat!(
    r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/>"#,
    r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/>"#,
    r#"</w:sectPr>"#
);

/// Writes a [`Document`] as an Office Open XML (`.docx`) package.
///
/// The package holds the minimal set of parts word processors need: the main
/// document, styles, bullet numbering and the core/app property parts.
pub struct DocxWriter<W: Write + Seek> {
    zip: ZipWriter<W>,
    config: WriterConfig,
}

impl<W: Write + Seek> DocxWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_config(writer, WriterConfig::default())
    }

    pub fn with_config(writer: W, config: WriterConfig) -> Self {
        Self {
            zip: ZipWriter::new(writer),
            config,
        }
    }

    /// Writes every part and finalizes the archive, returning the inner writer.
    pub fn write_document(mut self, document: &Document) -> Result<W> {
        self.write_part("[Content_Types].xml", CONTENT_TYPES)?;
        self.write_part("_rels/.rels", PACKAGE_RELS)?;
        self.write_part("word/_rels/document.xml.rels", DOCUMENT_RELS)?;
        self.write_part("word/document.xml", &document_xml(document))?;
        self.write_part("word/styles.xml", &styles_xml(&self.config))?;
        self.write_part("word/numbering.xml", NUMBERING)?;
        self.write_part("docProps/core.xml", &core_properties_xml(&document.metadata))?;
        self.write_part("docProps/app.xml", &app_properties_xml(&document.metadata))?;

        Ok(self.zip.finish()?)
    }

    fn write_part(&mut self, name: &str, xml: &str) -> Result<()> {
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        self.zip.start_file(name, options)?;
        self.zip.write_all(XML_DECLARATION.as_bytes())?;
        self.zip.write_all(xml.as_bytes())?;
        Ok(())
    }
}

pub(crate) fn document_xml(document: &Document) -> String {
    let mut xml = format!(r#"<w:document xmlns:w="{W_NS}"><w:body>"#);
    for block in document.blocks() {
        match block {
            Block::Paragraph(paragraph) => write_paragraph(&mut xml, paragraph),
            Block::PageBreak => xml.push_str(r#"<w:p><w:r><w:br w:type="page"/></w:r></w:p>"#),
        }
    }
    xml.push_str(SECTION_PROPERTIES);
    xml.push_str("</w:body></w:document>");
    xml
}

fn write_paragraph(xml: &mut String, paragraph: &Paragraph) {
    xml.push_str("<w:p>");

    let style = paragraph.style();
    let alignment = paragraph.alignment();
    if style != ParagraphStyle::Normal || alignment != Alignment::Left {
        xml.push_str("<w:pPr>");
        if style != ParagraphStyle::Normal {
            xml.push_str(&format!(r#"<w:pStyle w:val="{}"/>"#, style.style_id()));
        }
        if alignment != Alignment::Left {
            xml.push_str(&format!(r#"<w:jc w:val="{}"/>"#, alignment.ooxml_value()));
        }
        xml.push_str("</w:pPr>");
    }

    for run in paragraph.runs() {
        write_run(xml, run);
    }
    xml.push_str("</w:p>");
}

fn write_run(xml: &mut String, run: &Run) {
    xml.push_str("<w:r>");
    if run.bold || run.italic || run.size.is_some() {
        xml.push_str("<w:rPr>");
        if run.bold {
            xml.push_str("<w:b/>");
        }
        if run.italic {
            xml.push_str("<w:i/>");
        }
        if let Some(size) = run.size {
            let half = half_points(size);
            xml.push_str(&format!(r#"<w:sz w:val="{half}"/><w:szCs w:val="{half}"/>"#));
        }
        xml.push_str("</w:rPr>");
    }

    for (i, line) in run.text.split('\n').enumerate() {
        if i > 0 {
            xml.push_str("<w:br/>");
        }
        for (j, piece) in line.split('\t').enumerate() {
            if j > 0 {
                xml.push_str("<w:tab/>");
            }
            if !piece.is_empty() {
                xml.push_str(r#"<w:t xml:space="preserve">"#);
                xml.push_str(&escape_xml(piece));
                xml.push_str("</w:t>");
            }
        }
    }
    xml.push_str("</w:r>");
}

pub(crate) fn styles_xml(config: &WriterConfig) -> String {
    let font = escape_xml(&config.font_name);
    let base = half_points(config.font_size);

    let mut xml = format!(r#"<w:styles xmlns:w="{W_NS}">"#);
    xml.push_str(&format!(
        concat!(
            r#"<w:docDefaults><w:rPrDefault><w:rPr>"#,
            r#"<w:rFonts w:ascii="{font}" w:hAnsi="{font}" w:eastAsia="{font}" w:cs="{font}"/>"#,
            r#"<w:sz w:val="{base}"/><w:szCs w:val="{base}"/>"#,
            r#"</w:rPr></w:rPrDefault><w:pPrDefault><w:pPr>"#,
            r#"<w:spacing w:after="120" w:line="264" w:lineRule="auto"/>"#,
            r#"</w:pPr></w:pPrDefault></w:docDefaults>"#
        ),
        font = font,
        base = base
    ));

    xml.push_str(
        r#"<w:style w:type="paragraph" w:default="1" w:styleId="Normal"><w:name w:val="Normal"/><w:qFormat/></w:style>"#,
    );
    xml.push_str(&heading_style("Title", "Title", 28.0));
    for level in 1..=9u8 {
        let size = match level {
            1 => 16.0,
            2 => 13.0,
            _ => 12.0,
        };
        xml.push_str(&heading_style(
            &format!("Heading{level}"),
            &format!("heading {level}"),
            size,
        ));
    }
    xml.push_str(concat!(
        r#"<w:style w:type="paragraph" w:styleId="ListBullet"><w:name w:val="List Bullet"/>"#,
        r#"<w:basedOn w:val="Normal"/><w:pPr><w:numPr><w:numId w:val="1"/></w:numPr>"#,
        r#"<w:ind w:left="720" w:hanging="360"/></w:pPr></w:style>"#
    ));
    xml.push_str("</w:styles>");
    xml
}

fn heading_style(id: &str, name: &str, points: f64) -> String {
    let size = half_points(points);
    format!(
        concat!(
            r#"<w:style w:type="paragraph" w:styleId="{id}"><w:name w:val="{name}"/>"#,
            r#"<w:basedOn w:val="Normal"/><w:next w:val="Normal"/><w:qFormat/>"#,
            r#"<w:pPr><w:keepNext/><w:spacing w:before="240" w:after="80"/></w:pPr>"#,
            r#"<w:rPr><w:b/><w:color w:val="1F3864"/><w:sz w:val="{size}"/><w:szCs w:val="{size}"/></w:rPr>"#,
            r#"</w:style>"#
        ),
        id = id,
        name = name,
        size = size
    )
}

pub(crate) fn core_properties_xml(metadata: &DocumentMetadata) -> String {
    let mut xml = String::from(concat!(
        r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
        r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
        r#"xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
    ));

    let elements = [
        ("dc:title", &metadata.title),
        ("dc:subject", &metadata.subject),
        ("dc:creator", &metadata.author),
        ("cp:keywords", &metadata.keywords),
    ];
    for (tag, value) in elements {
        if let Some(value) = value {
            xml.push_str(&format!("<{tag}>{}</{tag}>", escape_xml(value)));
        }
    }

    if let Some(created) = metadata.creation_date {
        let stamp = created.format("%Y-%m-%dT%H:%M:%SZ");
        xml.push_str(&format!(
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{stamp}</dcterms:created>"#
        ));
        xml.push_str(&format!(
            r#"<dcterms:modified xsi:type="dcterms:W3CDTF">{stamp}</dcterms:modified>"#
        ));
    }
    xml.push_str("</cp:coreProperties>");
    xml
}

fn app_properties_xml(metadata: &DocumentMetadata) -> String {
    let application = metadata.creator.as_deref().unwrap_or("boldpress");
    format!(
        concat!(
            r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#,
            r#"<Application>{}</Application></Properties>"#
        ),
        escape_xml(application)
    )
}

/// Escapes markup characters and drops characters XML 1.0 cannot carry.
pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(c),
            c if (c as u32) < 0x20 => {}
            '\u{FFFE}' | '\u{FFFF}' => {}
            c => out.push(c),
        }
    }
    out
}
