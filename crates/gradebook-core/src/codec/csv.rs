//! Comma-separated roster tables.
//!
//! One header row `ID,Name,GPA,Grades`, then one row per student. The name and
//! the `;`-separated grade list are always quoted, the id only when it holds a
//! comma or quote; embedded quotes are doubled. Grades carry one decimal place
//! and the GPA two. The GPA column is informational and ignored on read.

use super::{parse_grade, Decoded, Format, RosterCodec};
use crate::error::CodecError;
use crate::model::Student;

pub const CSV_HEADER: &str = "ID,Name,GPA,Grades";

/// Codec for [`Format::Csv`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CsvCodec;

impl RosterCodec for CsvCodec {
    fn format(&self) -> Format {
        Format::Csv
    }

    fn encode(&self, students: &[Student]) -> String {
        let mut out = String::new();
        out.push_str(CSV_HEADER);
        out.push('\n');

        for student in students {
            let grades = student
                .grades()
                .iter()
                .map(|g| format!("{g:.1}"))
                .collect::<Vec<_>>()
                .join(";");
            out.push_str(&format!(
                "{},\"{}\",{:.2},\"{}\"\n",
                quote_if_needed(student.id()),
                student.name().replace('"', "\"\""),
                student.gpa(),
                grades
            ));
        }

        out
    }

    fn decode(&self, input: &str) -> Result<Decoded, CodecError> {
        let mut decoded = Decoded::default();

        // First line is the header.
        for (line_no, line) in input.lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let fields = split_fields(line);
            if fields.len() < 3 {
                tracing::warn!("skipping CSV line {}: too few fields", line_no + 1);
                decoded.skipped += 1;
                continue;
            }

            let grades: Vec<f64> = fields
                .get(3)
                .map(|g| g.split(';').filter_map(parse_grade).collect())
                .unwrap_or_default();
            let student = Student::with_grades(fields[0].clone(), fields[1].clone(), grades);

            if student.is_valid() {
                decoded.students.push(student);
            } else {
                tracing::warn!("skipping CSV line {}: missing id or name", line_no + 1);
                decoded.skipped += 1;
            }
        }

        Ok(decoded)
    }
}

/// Quote a field only when it contains a separator or a quote.
fn quote_if_needed(field: &str) -> String {
    if field.contains([',', '"']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Split a row on commas that are not inside double quotes. Each field is
/// trimmed, then a quoted field loses its quotes and `""` becomes `"`.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                current.push(c);
            }
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);

    fields.iter().map(|f| unquote(f.trim())).collect()
}

fn unquote(field: &str) -> String {
    match field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) => inner.replace("\"\"", "\""),
        None => field.replace('"', ""),
    }
}
