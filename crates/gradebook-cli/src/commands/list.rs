//! Roster listings: `list`, `search`, `top`.

use std::collections::HashMap;

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table};

use gradebook_core::model::MAX_GPA;
use gradebook_core::{Roster, Student};

use super::{DataSource, Session};
use crate::SortKey;

pub fn list(source: &DataSource, sort: SortKey, desc: bool) -> Result<()> {
    let mut session = Session::open(source)?;
    let roster = &mut session.roster;

    match sort {
        SortKey::Name => roster.sort_by_name(!desc),
        SortKey::Id => roster.sort_by_id(!desc),
        // Best first unless reversed.
        SortKey::Gpa => roster.sort_by_gpa(!desc),
    }

    print_students(roster, roster.students());
    Ok(())
}

pub fn search(
    source: &DataSource,
    name: Option<String>,
    min_gpa: Option<f64>,
    max_gpa: Option<f64>,
) -> Result<()> {
    let session = Session::open(source)?;
    let roster = &session.roster;

    let mut found = match &name {
        Some(query) => roster.search_by_name(query),
        None => roster.students().to_vec(),
    };
    if min_gpa.is_some() || max_gpa.is_some() {
        let in_range =
            roster.search_by_gpa_range(min_gpa.unwrap_or(0.0), max_gpa.unwrap_or(MAX_GPA));
        found.retain(|s| in_range.iter().any(|r| r.id() == s.id()));
    }

    print_students(roster, &found);
    Ok(())
}

pub fn top(source: &DataSource, count: Option<usize>) -> Result<()> {
    let session = Session::open(source)?;
    let count = count.unwrap_or(session.config.top_count);

    let best = session.roster.top_performers(count);
    print_students(&session.roster, &best);
    Ok(())
}

/// Print `students` in the given order, with their rank in the whole roster.
fn print_students(roster: &Roster, students: &[Student]) {
    if students.is_empty() {
        println!("No students found.");
        return;
    }

    let ranks: HashMap<String, usize> = roster
        .rankings()
        .into_iter()
        .map(|r| (r.student.id().to_string(), r.rank))
        .collect();

    let mut table = Table::new();
    table.set_header(vec!["Rank", "ID", "Name", "GPA", "Grades", "Trend"]);
    for student in students {
        let rank = ranks
            .get(student.id())
            .map(|r| r.to_string())
            .unwrap_or_default();
        table.add_row(vec![
            Cell::new(rank).set_alignment(CellAlignment::Right),
            Cell::new(student.id()),
            Cell::new(student.name()),
            Cell::new(format!("{:.2}", student.gpa())).set_alignment(CellAlignment::Right),
            Cell::new(student.grades().len()).set_alignment(CellAlignment::Right),
            Cell::new(student.trend()),
        ]);
    }

    println!("{table}");
    println!("{} student(s)", students.len());
}
