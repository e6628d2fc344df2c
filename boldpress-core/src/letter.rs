//! Cover letter composition.
//!
//! A [`LetterTemplate`] holds the reusable prose, an [`Application`] the
//! per-job details. [`CoverLetter::from_template`] combines them, after which
//! the letter can be rendered as plain text or as a [`Document`] with the job
//! title, company and template keywords in bold.

use crate::document::Document;
use crate::emphasis::KeywordSet;
use crate::error::Result;
use crate::placeholder;
use crate::profile::Profile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

const FILENAME_PART_LIMIT: usize = 60;

/// Reusable letter prose. Text may use `{job_title}`, `{company}`,
/// `{recruiter}` and profile fields such as `{name}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterTemplate {
    pub opening: String,
    #[serde(default)]
    pub body: Vec<String>,
    pub closing: String,
    /// Extra phrases to emphasize besides the job title and company
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub signoff: Option<String>,
}

impl LetterTemplate {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}

/// The position being applied for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Application {
    pub job_title: String,
    pub company: String,
    pub recruiter: Option<String>,
}

impl Application {
    pub fn new(job_title: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            job_title: job_title.into(),
            company: company.into(),
            recruiter: None,
        }
    }

    pub fn with_recruiter(mut self, recruiter: impl Into<String>) -> Self {
        self.recruiter = Some(recruiter.into());
        self
    }

    /// The addressee, falling back to "Hiring Manager".
    pub fn recipient(&self) -> &str {
        self.recruiter
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .unwrap_or("Hiring Manager")
    }
}

/// A fully resolved cover letter.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverLetter {
    pub application: Application,
    pub date: NaiveDate,
    pub opening: String,
    pub body: Vec<String>,
    pub closing: String,
    pub signoff: String,
    pub keywords: KeywordSet,
}

impl CoverLetter {
    /// Resolves template placeholders and builds the emphasis keyword set.
    ///
    /// # Errors
    ///
    /// Fails on unknown placeholders, or when the job title, company or a
    /// template keyword is empty.
    pub fn from_template(
        template: &LetterTemplate,
        application: Application,
        profile: &Profile,
        date: NaiveDate,
    ) -> Result<Self> {
        let fill = |text: &str| {
            placeholder::fill(text, |name| match name {
                "job_title" => Some(application.job_title.as_str()),
                "company" => Some(application.company.as_str()),
                "recruiter" => Some(application.recipient()),
                other => profile.field(other),
            })
        };

        let opening = fill(&template.opening)?;
        let body = template
            .body
            .iter()
            .map(|p| fill(p))
            .collect::<Result<Vec<_>>>()?;
        let closing = fill(&template.closing)?;
        let signoff = match &template.signoff {
            Some(s) => fill(s)?,
            None => "Sincerely,".to_string(),
        };

        let mut keywords = KeywordSet::new([&application.job_title, &application.company])?;
        keywords.extend_from(&KeywordSet::new(&template.keywords)?);
        debug!(
            job_title = %application.job_title,
            company = %application.company,
            keywords = keywords.len(),
            "resolved cover letter template"
        );

        Ok(Self {
            application,
            date,
            opening,
            body,
            closing,
            signoff,
            keywords,
        })
    }

    /// The letter as plain lines joined by `\n`, blank lines between blocks.
    pub fn render_text(&self, profile: &Profile) -> String {
        let recipient = self.application.recipient();
        let mut lines: Vec<String> = Vec::new();

        lines.push(profile.contact_lines().join("\n"));
        lines.push(String::new());
        lines.push(self.date.format("%B %d, %Y").to_string());
        lines.push(String::new());
        lines.push(format!("{recipient}\n{}\n", self.application.company));
        lines.push(format!("Dear {recipient},"));
        lines.push(String::new());
        lines.push(self.opening.clone());
        lines.push(String::new());
        for paragraph in &self.body {
            lines.push(paragraph.clone());
            lines.push(String::new());
        }
        lines.push(self.closing.clone());
        lines.push(String::new());
        lines.push(self.signoff.clone());
        lines.push(String::new());
        lines.push(profile.full_name.clone());
        if let Some(degree) = &profile.degree {
            lines.push(degree.clone());
        }

        lines.join("\n")
    }

    /// Builds the letter document, one paragraph per rendered line.
    pub fn to_document(&self, profile: &Profile) -> Document {
        let mut doc = Document::new();
        doc.set_title(format!("Cover Letter - {}", self.application.job_title));
        doc.set_author(profile.full_name.clone());
        doc.set_subject(self.application.company.clone());

        let text = self.render_text(profile);
        for line in text.split('\n') {
            let paragraph = doc.add_paragraph();
            if !line.trim().is_empty() {
                paragraph.add_emphasized(line, &self.keywords);
            }
        }
        doc
    }

    /// File name stem such as `cover_letter_Acme_Ports_Graduate_Trainee`.
    pub fn output_stem(&self) -> String {
        format!(
            "cover_letter_{}_{}",
            filename_part(&self.application.company),
            filename_part(&self.application.job_title)
        )
    }
}

fn filename_part(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '-' } else { c })
        .take(FILENAME_PART_LIMIT)
        .collect()
}
