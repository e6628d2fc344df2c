//! Personal details injected into every generated document.

use crate::error::{BoldpressError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contact and identity details of the document's author.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub full_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_lines: Vec<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    /// Degree line printed under the signature of a letter
    pub degree: Option<String>,
}

impl Profile {
    pub fn new(full_name: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            ..Default::default()
        }
    }

    /// Parses and validates a profile from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profile: Profile = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Loads a profile from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(BoldpressError::InvalidProfile(
                "full_name must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Address lines followed by labelled contact lines for present fields.
    pub fn contact_lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.address_lines.clone();
        let labelled = [
            ("Email", &self.email),
            ("Phone", &self.phone),
            ("LinkedIn", &self.linkedin),
            ("GitHub", &self.github),
            ("Portfolio", &self.portfolio),
        ];
        for (label, value) in labelled {
            if let Some(value) = value.as_deref().filter(|v| !v.trim().is_empty()) {
                lines.push(format!("{label}: {value}"));
            }
        }
        lines
    }

    /// Looks up a field by the name used in `{placeholder}` templates.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            "name" | "full_name" => Some(self.full_name.as_str()),
            "email" => self.email.as_deref(),
            "phone" => self.phone.as_deref(),
            "linkedin" => self.linkedin.as_deref(),
            "github" => self.github.as_deref(),
            "portfolio" => self.portfolio.as_deref(),
            "degree" => self.degree.as_deref(),
            _ => None,
        }
    }
}
