//! Student record commands: `add`, `update`, `delete`, `show`.

use anyhow::{Context, Result};

use gradebook_core::Student;

use super::{parse_grades, DataSource, Session};

pub fn add(source: &DataSource, id: String, name: String, grades: Option<String>) -> Result<()> {
    let mut session = Session::open(source)?;

    let grades = grades.as_deref().map(parse_grades).transpose()?;
    let student = Student::with_grades(id, name, grades.unwrap_or_default());
    let label = format!("{} ({})", student.name(), student.id());

    session.roster.add_student(student)?;
    session.save()?;
    println!("Added {label}");
    Ok(())
}

pub fn update(
    source: &DataSource,
    id: &str,
    new_id: Option<String>,
    name: Option<String>,
    grades: Option<String>,
) -> Result<()> {
    let mut session = Session::open(source)?;

    let mut updated = session
        .roster
        .find_student(id)
        .cloned()
        .with_context(|| format!("no student found with id: {id}"))?;
    if let Some(new_id) = new_id {
        updated.set_id(new_id);
    }
    if let Some(name) = name {
        updated.set_name(name);
    }
    if let Some(grades) = grades {
        updated.set_grades(parse_grades(&grades)?);
    }
    let label = format!("{} ({})", updated.name(), updated.id());

    session.roster.update_student(id, updated)?;
    session.save()?;
    println!("Updated {label}");
    Ok(())
}

pub fn delete(source: &DataSource, id: &str) -> Result<()> {
    let mut session = Session::open(source)?;
    let removed = session.roster.delete_student(id)?;
    session.save()?;
    println!("Deleted {} ({})", removed.name(), removed.id());
    Ok(())
}

pub fn show(source: &DataSource, id: &str) -> Result<()> {
    let session = Session::open(source)?;
    let student = session
        .roster
        .find_student(id)
        .with_context(|| format!("no student found with id: {id}"))?;

    println!("{}", gradebook_core::progress::render_progress_report(student));
    Ok(())
}
