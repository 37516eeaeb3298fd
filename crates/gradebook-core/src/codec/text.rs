//! Line-oriented `STUDENT_DB_V2` text database.
//!
//! ```text
//! STUDENT_DB_V2
//! <student count>
//! <id>
//! <name>
//! <grade count>
//! <grade> <grade> ...
//! ```
//!
//! Files written before the header existed start directly with the count and
//! are still accepted. A file that ends early keeps every student read so far
//! and reports how many of the declared students were recovered.

use std::str::Lines;

use super::{Decoded, Format, RosterCodec, Truncation};
use crate::error::CodecError;
use crate::model::{is_valid_grade, Student};

pub const TEXT_HEADER: &str = "STUDENT_DB_V2";

const MAX_PREALLOCATED_GRADES: usize = 64;

/// Codec for [`Format::Text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TextCodec;

impl RosterCodec for TextCodec {
    fn format(&self) -> Format {
        Format::Text
    }

    fn encode(&self, students: &[Student]) -> String {
        let mut out = String::new();
        out.push_str(TEXT_HEADER);
        out.push('\n');
        out.push_str(&format!("{}\n", students.len()));

        for student in students {
            out.push_str(student.id());
            out.push('\n');
            out.push_str(student.name());
            out.push('\n');
            out.push_str(&format!("{}\n", student.grades().len()));
            let grades = student
                .grades()
                .iter()
                .map(|g| g.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            out.push_str(&grades);
            out.push('\n');
        }

        out
    }

    fn decode(&self, input: &str) -> Result<Decoded, CodecError> {
        let mut lines = input.lines();
        let mut decoded = Decoded::default();

        let Some(first) = lines.next() else {
            return Ok(decoded);
        };

        let count_line = if first.trim() == TEXT_HEADER {
            lines
                .next()
                .ok_or_else(|| CodecError::malformed(Format::Text, "missing student count"))?
        } else {
            tracing::debug!("no {TEXT_HEADER} header, reading legacy layout");
            first
        };
        let declared: usize = count_line.trim().parse().map_err(|_| {
            CodecError::malformed(
                Format::Text,
                format!("invalid student count: {:?}", count_line.trim()),
            )
        })?;

        let mut cut_short = false;
        for _ in 0..declared {
            match read_student(&mut lines) {
                Record::Complete(student) => decoded.students.push(student),
                Record::Partial(student) => {
                    decoded.students.push(student);
                    cut_short = true;
                    break;
                }
                Record::Missing => break,
            }
        }

        if cut_short || decoded.students.len() < declared {
            let truncation = Truncation {
                declared,
                loaded: decoded.students.len(),
            };
            tracing::warn!("text roster {truncation}");
            decoded.truncated = Some(truncation);
        }

        Ok(decoded)
    }
}

enum Record {
    Complete(Student),
    /// Input ran out while collecting grades; keeps what was read.
    Partial(Student),
    /// Input ran out before the record's fixed fields were read.
    Missing,
}

fn read_student(lines: &mut Lines<'_>) -> Record {
    let (Some(id), Some(name), Some(count_line)) = (lines.next(), lines.next(), lines.next())
    else {
        return Record::Missing;
    };
    let (id, name) = (id.trim_end_matches('\r'), name.trim_end_matches('\r'));
    let Ok(expected) = count_line.trim().parse::<usize>() else {
        return Record::Missing;
    };
    let Some(first_grades) = lines.next() else {
        return Record::Missing;
    };

    // The count comes from the file; do not trust it for allocation.
    let mut grades = Vec::with_capacity(expected.min(MAX_PREALLOCATED_GRADES));
    collect_grades(first_grades, expected, &mut grades);

    while grades.len() < expected {
        match lines.next() {
            Some(line) if line.trim().is_empty() => continue,
            Some(line) => collect_grades(line, expected, &mut grades),
            None => {
                return Record::Partial(Student::with_grades(id, name, grades));
            }
        }
    }

    Record::Complete(Student::with_grades(id, name, grades))
}

/// Read whitespace-separated grades from `line` until a non-numeric token or
/// until `expected` in-range grades have been collected. Out-of-range values
/// are consumed but not kept.
fn collect_grades(line: &str, expected: usize, grades: &mut Vec<f64>) {
    for token in line.split_whitespace() {
        if grades.len() >= expected {
            break;
        }
        let Ok(grade) = token.parse::<f64>() else {
            break;
        };
        if is_valid_grade(grade) {
            grades.push(grade);
        }
    }
}
