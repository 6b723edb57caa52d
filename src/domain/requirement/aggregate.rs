//! Requirement entity.
//!
//! A requirement is a free-text feature description submitted either
//! directly or as text extracted from an uploaded file. Analysis results
//! reference requirements by id and are stored separately.

use crate::domain::foundation::{DomainError, RequirementId, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use super::SourceType;

/// A stored requirement.
///
/// # Invariants
///
/// - `title` and `content` are non-blank
/// - `clarity_score`, when present, lies in `0.0..=1.0`
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    id: RequirementId,
    title: String,
    content: String,
    file_name: Option<String>,
    file_type: Option<String>,
    clarity_score: Option<f64>,
    source_type: SourceType,
    created_at: Timestamp,
    updated_at: Timestamp,
}

/// Metadata of the file a requirement was extracted from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
}

impl Requirement {
    /// Create a requirement from directly submitted text.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if title or content is blank
    /// - `OutOfRange` if the clarity score is outside `0.0..=1.0`
    pub fn from_text(
        title: String,
        content: String,
        clarity_score: Option<f64>,
    ) -> Result<Self, DomainError> {
        Self::build(title, content, clarity_score, None, SourceType::Text)
    }

    /// Create a requirement from text already extracted from a file.
    ///
    /// The source type is derived from the file name and content type.
    pub fn from_file(
        title: String,
        content: String,
        source: SourceFile,
    ) -> Result<Self, DomainError> {
        let source_type =
            SourceType::determine(source.file_name.as_deref(), source.content_type.as_deref());
        Self::build(title, content, None, Some(source), source_type)
    }

    fn build(
        title: String,
        content: String,
        clarity_score: Option<f64>,
        source: Option<SourceFile>,
        source_type: SourceType,
    ) -> Result<Self, DomainError> {
        if title.trim().is_empty() {
            return Err(ValidationError::empty_field("title").into());
        }
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content").into());
        }
        if let Some(score) = clarity_score {
            Self::validate_clarity_score(score)?;
        }

        let (file_name, file_type) = match source {
            Some(file) => (file.file_name, file.content_type),
            None => (None, None),
        };
        let now = Timestamp::now();
        Ok(Self {
            id: RequirementId::new(),
            title,
            content,
            file_name,
            file_type,
            clarity_score,
            source_type,
            created_at: now,
            updated_at: now,
        })
    }

    fn validate_clarity_score(score: f64) -> Result<(), ValidationError> {
        if !(0.0..=1.0).contains(&score) {
            return Err(ValidationError::out_of_range("clarity_score", 0.0, 1.0, score));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &RequirementId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    pub fn file_type(&self) -> Option<&str> {
        self.file_type.as_deref()
    }

    pub fn clarity_score(&self) -> Option<f64> {
        self.clarity_score
    }

    pub fn source_type(&self) -> SourceType {
        self.source_type
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutations
    // ─────────────────────────────────────────────────────────────────────────

    /// Record an externally computed clarity score.
    pub fn set_clarity_score(&mut self, score: f64) -> Result<(), DomainError> {
        Self::validate_clarity_score(score)?;
        self.clarity_score = Some(score);
        self.touch();
        Ok(())
    }

    /// Refresh the modification time. Called by repositories on every save.
    pub fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
