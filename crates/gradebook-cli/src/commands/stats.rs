//! The `gradebook stats` command.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table};

use gradebook_core::statistics::{GradeBand, StudentSummary};

use super::{DataSource, Session};

pub fn execute(source: &DataSource, json: bool) -> Result<()> {
    let session = Session::open(source)?;
    let stats = session.roster.calculate_statistics();

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec![
        Cell::new("Total students"),
        Cell::new(stats.total_students),
    ]);
    table.add_row(vec![
        Cell::new("Average GPA"),
        Cell::new(format!("{:.2}", stats.average_gpa)),
    ]);
    table.add_row(vec![
        Cell::new("Average grade"),
        Cell::new(format!("{:.2}", stats.average_grade)),
    ]);
    table.add_row(vec![Cell::new("Honors (>= 3.5)"), Cell::new(stats.honors_count)]);
    table.add_row(vec![Cell::new("Regular"), Cell::new(stats.regular_count())]);
    table.add_row(vec![
        Cell::new("Probation (< 2.0)"),
        Cell::new(stats.probation_count),
    ]);
    table.add_row(vec![
        Cell::new("Top student"),
        Cell::new(summary(stats.top_student.as_ref())),
    ]);
    table.add_row(vec![
        Cell::new("Lowest GPA"),
        Cell::new(summary(stats.bottom_student.as_ref())),
    ]);
    println!("{table}");

    let mut bands = Table::new();
    bands.set_header(vec!["Grade band", "Grades"]);
    for band in GradeBand::ALL {
        bands.add_row(vec![
            Cell::new(band.label()),
            Cell::new(stats.band_count(band)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{bands}");

    Ok(())
}

fn summary(student: Option<&StudentSummary>) -> String {
    student
        .map(|s| format!("{} ({}) {:.2}", s.name, s.id, s.gpa))
        .unwrap_or_else(|| "-".to_string())
}
