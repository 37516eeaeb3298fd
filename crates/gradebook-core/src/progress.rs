//! Plain-text progress reports, one file per student.

use std::path::Path;

use chrono::Local;

use crate::error::CodecError;
use crate::model::Student;

/// File name of a student's report inside the export directory.
///
/// Path separators in the id are replaced with `_`, so the report always lands
/// directly inside the directory.
pub fn report_file_name(student: &Student) -> String {
    let stem: String = student
        .id()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c => c,
        })
        .collect();
    format!("{stem}_report.txt")
}

/// Render a single student's progress report.
pub fn render_progress_report(student: &Student) -> String {
    let mut out = String::new();

    out.push_str("Student Progress Report\n");
    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!("Name             : {}\n", student.name()));
    out.push_str(&format!("ID               : {}\n", student.id()));
    out.push_str(&format!("GPA              : {:.2}\n", student.gpa()));
    out.push_str(&format!("Grade Trend      : {}\n", student.trend()));
    out.push_str(&format!("Highest Grade    : {:.1}\n", student.highest_grade()));
    out.push_str(&format!("Lowest Grade     : {:.1}\n", student.lowest_grade()));
    out.push_str(&format!("Average Grade    : {:.1}\n", student.average_grade()));
    out.push('\n');

    out.push_str("Grades:\n");
    if student.grades().is_empty() {
        out.push_str("  None\n");
    }
    for (i, grade) in student.grades().iter().enumerate() {
        out.push_str(&format!("  Assignment {}: {:.1}\n", i + 1, grade));
    }

    out.push_str(&"=".repeat(60));
    out.push('\n');
    out.push_str(&format!(
        "Generated {}\n",
        Local::now().format("%Y-%m-%d %H:%M")
    ));

    out
}

/// Write one report per student into `dir`, creating it if needed.
///
/// Returns the number of reports written. The first file that cannot be
/// written stops the export and is named in the error.
pub fn export_progress_reports(students: &[Student], dir: &Path) -> Result<usize, CodecError> {
    std::fs::create_dir_all(dir).map_err(|e| CodecError::io(dir, e))?;

    for student in students {
        let path = dir.join(report_file_name(student));
        std::fs::write(&path, render_progress_report(student))
            .map_err(|e| CodecError::io(&path, e))?;
    }

    tracing::info!(
        "exported {} progress report(s) to {}",
        students.len(),
        dir.display()
    );
    Ok(students.len())
}
