//! Versioned JSON roster documents.
//!
//! ```json
//! { "version": "2.0", "saved_at": "...", "students": [ { "id": "s1", "name": "Ada", "grades": [91.0] } ] }
//! ```
//!
//! A document that does not parse is rejected whole. Inside a valid document,
//! records are read leniently and invalid ones are skipped.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;

use super::{Decoded, Format, RosterCodec};
use crate::error::CodecError;
use crate::model::Student;

/// Version tag written into every document.
pub const JSON_VERSION: &str = "2.0";

#[derive(Serialize)]
struct JsonDocument<'a> {
    version: &'static str,
    saved_at: String,
    students: Vec<JsonStudent<'a>>,
}

#[derive(Serialize)]
struct JsonStudent<'a> {
    id: &'a str,
    name: &'a str,
    grades: &'a [f64],
}

/// Codec for [`Format::Json`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl RosterCodec for JsonCodec {
    fn format(&self) -> Format {
        Format::Json
    }

    fn encode(&self, students: &[Student]) -> String {
        let doc = JsonDocument {
            version: JSON_VERSION,
            saved_at: Utc::now().to_rfc3339(),
            students: students
                .iter()
                .map(|s| JsonStudent {
                    id: s.id(),
                    name: s.name(),
                    grades: s.grades(),
                })
                .collect(),
        };
        let mut out = serde_json::to_string_pretty(&doc).unwrap_or_default();
        out.push('\n');
        out
    }

    fn decode(&self, input: &str) -> Result<Decoded, CodecError> {
        let root: Value = serde_json::from_str(input)
            .map_err(|e| CodecError::malformed(Format::Json, e.to_string()))?;
        let root = root
            .as_object()
            .ok_or_else(|| CodecError::malformed(Format::Json, "top-level value is not an object"))?;

        if let Some(version) = root.get("version").and_then(Value::as_str) {
            if version != JSON_VERSION {
                tracing::debug!("reading JSON roster with version {version}");
            }
        }

        let records = root
            .get("students")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();

        let mut decoded = Decoded::default();
        for record in records {
            let student = student_from_value(record);
            if student.is_valid() {
                decoded.students.push(student);
            } else {
                tracing::warn!("skipping JSON record without id or name: {record}");
                decoded.skipped += 1;
            }
        }

        Ok(decoded)
    }
}

/// Read one record the way a loosely typed reader would: missing or mistyped
/// fields become empty, non-numeric grades are dropped.
fn student_from_value(value: &Value) -> Student {
    let text = |key: &str| {
        value
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    let grades = value
        .get("grades")
        .and_then(Value::as_array)
        .map(|grades| grades.iter().filter_map(Value::as_f64).collect::<Vec<_>>())
        .unwrap_or_default();

    Student::with_grades(text("id"), text("name"), grades)
}
