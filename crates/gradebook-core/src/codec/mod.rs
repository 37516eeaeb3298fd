//! Roster file formats.
//!
//! Each [`Format`] maps to one [`RosterCodec`] that turns a slice of students
//! into text and back. Codecs are pure; file access and roster mutation live in
//! [`crate::roster`].

pub mod csv;
pub mod json;
pub mod text;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;
use crate::model::Student;

pub use self::csv::CsvCodec;
pub use self::json::JsonCodec;
pub use self::text::TextCodec;

/// Supported roster file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// Versioned JSON document with a student array.
    Json,
    /// `ID,Name,GPA,Grades` table.
    Csv,
    /// Line-oriented `STUDENT_DB_V2` text database.
    Text,
}

impl Format {
    /// Guess the format from a file extension, defaulting to [`Format::Text`].
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Format::Json,
            Some("csv") => Format::Csv,
            _ => Format::Text,
        }
    }

    /// The codec that reads and writes this format.
    pub fn codec(self) -> &'static dyn RosterCodec {
        match self {
            Format::Json => &JsonCodec,
            Format::Csv => &CsvCodec,
            Format::Text => &TextCodec,
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Format::Json => write!(f, "json"),
            Format::Csv => write!(f, "csv"),
            Format::Text => write!(f, "text"),
        }
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Format::Json),
            "csv" => Ok(Format::Csv),
            "text" | "txt" | "db" => Ok(Format::Text),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Encodes and decodes a roster in one file format.
pub trait RosterCodec {
    /// The format this codec implements.
    fn format(&self) -> Format;

    /// Render students in roster order.
    fn encode(&self, students: &[Student]) -> String;

    /// Parse students from `input`.
    ///
    /// Per-record problems are counted in [`Decoded::skipped`]; only a document
    /// that cannot be read at all is an error.
    fn decode(&self, input: &str) -> Result<Decoded, CodecError>;
}

/// Students recovered from a document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Decoded {
    pub students: Vec<Student>,
    /// Records that were present but rejected.
    pub skipped: usize,
    /// Set when the document ended before all declared records were read.
    pub truncated: Option<Truncation>,
}

/// How far a truncated document got.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Truncation {
    /// Students the document said it contained.
    pub declared: usize,
    /// Students actually recovered.
    pub loaded: usize,
}

impl fmt::Display for Truncation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "truncated — loaded {} of {}", self.loaded, self.declared)
    }
}

/// Parse a grade token, keeping it only if it is numeric and within 0-100.
pub(crate) fn parse_grade(token: &str) -> Option<f64> {
    token
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|g| crate::model::is_valid_grade(*g))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_display_and_parse() {
        assert_eq!(Format::Json.to_string(), "json");
        assert_eq!("CSV".parse::<Format>().unwrap(), Format::Csv);
        assert_eq!("txt".parse::<Format>().unwrap(), Format::Text);
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(Format::from_path(Path::new("data/roster.JSON")), Format::Json);
        assert_eq!(Format::from_path(Path::new("out.csv")), Format::Csv);
        assert_eq!(Format::from_path(Path::new("student_data.txt")), Format::Text);
        assert_eq!(Format::from_path(Path::new("no_extension")), Format::Text);
    }

    #[test]
    fn codec_dispatch_matches_format() {
        for format in [Format::Json, Format::Csv, Format::Text] {
            assert_eq!(format.codec().format(), format);
        }
    }

    #[test]
    fn grade_tokens() {
        assert_eq!(parse_grade(" 88.5 "), Some(88.5));
        assert_eq!(parse_grade("101"), None);
        assert_eq!(parse_grade("abc"), None);
        assert_eq!(parse_grade("NaN"), None);
    }
}
