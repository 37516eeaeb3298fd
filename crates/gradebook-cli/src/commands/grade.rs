//! The `gradebook grade` commands. Positions are 1-based on the command line.

use anyhow::{Context, Result};

use super::{DataSource, Session};

pub fn add(source: &DataSource, id: &str, grade: f64) -> Result<()> {
    let mut session = Session::open(source)?;
    session.roster.add_grade(id, grade)?;
    session.save()?;
    println!("Added grade {grade} for {id}");
    Ok(())
}

pub fn set(source: &DataSource, id: &str, position: usize, grade: f64) -> Result<()> {
    let mut session = Session::open(source)?;
    session.roster.update_grade(id, to_index(position)?, grade)?;
    session.save()?;
    println!("Set grade {position} for {id} to {grade}");
    Ok(())
}

pub fn remove(source: &DataSource, id: &str, position: usize) -> Result<()> {
    let mut session = Session::open(source)?;
    session.roster.remove_grade(id, to_index(position)?)?;
    session.save()?;
    println!("Removed grade {position} for {id}");
    Ok(())
}

fn to_index(position: usize) -> Result<usize> {
    position
        .checked_sub(1)
        .context("grade positions start at 1")
}
