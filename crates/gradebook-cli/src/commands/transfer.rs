//! File exchange commands: `export-csv`, `import-csv`, `reports`, `summary`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{DataSource, Session};

pub fn export_csv(source: &DataSource, out: &Path) -> Result<()> {
    let session = Session::open(source)?;
    session
        .roster
        .export_csv(out)
        .with_context(|| format!("failed to export {}", out.display()))?;
    println!(
        "Exported {} students to {}",
        session.roster.len(),
        out.display()
    );
    Ok(())
}

pub fn import_csv(source: &DataSource, input: &Path) -> Result<()> {
    let mut session = Session::open(source)?;
    let summary = session
        .roster
        .import_csv(input)
        .with_context(|| format!("failed to import {}", input.display()))?;
    session.save()?;
    println!("Imported from {}: {summary}", input.display());
    Ok(())
}

pub fn reports(source: &DataSource, dir: Option<PathBuf>) -> Result<()> {
    let session = Session::open(source)?;
    let dir = dir.unwrap_or_else(|| session.config.reports_dir.clone());

    let written = session
        .roster
        .export_reports(&dir)
        .context("failed to export progress reports")?;
    println!("Wrote {written} report(s) to {}", dir.display());
    Ok(())
}

pub fn summary(source: &DataSource, out: &Path, title: &str) -> Result<()> {
    let session = Session::open(source)?;
    let stats = session.roster.calculate_statistics();
    let ranked = session.roster.rankings();

    gradebook_report::write_html_report(title, &stats, &ranked, out)?;
    println!("Class summary written to {}", out.display());
    Ok(())
}
