//! Document writing functionality

mod docx;
mod plain;

pub use docx::DocxWriter;
pub use plain::PlainTextWriter;

/// Base character formatting applied to the whole document.
#[derive(Debug, Clone, PartialEq)]
pub struct WriterConfig {
    /// Default font family
    pub font_name: String,
    /// Default font size in points
    pub font_size: f64,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            font_name: "Calibri".to_string(),
            font_size: 11.0,
        }
    }
}

impl WriterConfig {
    pub fn new(font_name: impl Into<String>, font_size: f64) -> Self {
        Self {
            font_name: font_name.into(),
            font_size,
        }
    }
}

/// Converts points to the half-point units used by `w:sz`.
pub(crate) fn half_points(points: f64) -> u32 {
    (points * 2.0).round().max(1.0) as u32
}
