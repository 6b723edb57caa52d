//! Classification of where a requirement's text came from.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Origin format of a requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceType {
    Text,
    Pdf,
    Json,
    Excel,
    Word,
    Other,
    Unknown,
}

impl SourceType {
    /// Classifies an uploaded file from its name and declared content type.
    ///
    /// Content type is checked before the file extension; both must be
    /// present for anything but `Unknown`.
    pub fn determine(file_name: Option<&str>, content_type: Option<&str>) -> Self {
        let (Some(name), Some(content_type)) = (file_name, content_type) else {
            return SourceType::Unknown;
        };
        let name = name.to_lowercase();
        let content_type = content_type.to_lowercase();

        if content_type.contains("pdf") {
            SourceType::Pdf
        } else if content_type.contains("text") || name.ends_with(".txt") {
            SourceType::Text
        } else if content_type.contains("json") || name.ends_with(".json") {
            SourceType::Json
        } else if content_type.contains("excel")
            || name.ends_with(".xlsx")
            || name.ends_with(".xls")
        {
            SourceType::Excel
        } else if content_type.contains("word")
            || name.ends_with(".docx")
            || name.ends_with(".doc")
        {
            SourceType::Word
        } else {
            SourceType::Other
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SourceType::Text => "TEXT",
            SourceType::Pdf => "PDF",
            SourceType::Json => "JSON",
            SourceType::Excel => "EXCEL",
            SourceType::Word => "WORD",
            SourceType::Other => "OTHER",
            SourceType::Unknown => "UNKNOWN",
        };
        write!(f, "{}", s)
    }
}
