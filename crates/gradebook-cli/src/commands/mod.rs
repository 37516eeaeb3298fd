//! Subcommand implementations.

use std::path::PathBuf;

use anyhow::{Context, Result};

use gradebook_core::config::{load_config_from, GradebookConfig};
use gradebook_core::{Format, Roster, RosterObserver, Student};

pub mod grade;
pub mod init;
pub mod list;
pub mod stats;
pub mod student;
pub mod transfer;

/// Where the roster lives, as given on the command line.
pub struct DataSource {
    pub data: Option<PathBuf>,
    pub format: Option<Format>,
    pub config: Option<PathBuf>,
}

/// A loaded roster together with the file it came from.
pub struct Session {
    pub config: GradebookConfig,
    pub path: PathBuf,
    pub format: Format,
    pub roster: Roster,
}

impl Session {
    /// Resolve the data file and load it. A file that does not exist yet is an
    /// empty roster.
    pub fn open(source: &DataSource) -> Result<Self> {
        let config = load_config_from(source.config.as_deref())?;

        let (path, format) = match &source.data {
            Some(path) => (
                path.clone(),
                source.format.unwrap_or_else(|| Format::from_path(path)),
            ),
            None => (
                config.data_file.clone(),
                source.format.unwrap_or_else(|| config.data_format()),
            ),
        };

        let mut roster = Roster::new();
        match roster.load(&path, format) {
            Ok(summary) => {
                if summary.truncated.is_some() || summary.skipped > 0 {
                    eprintln!("Warning: {} {summary}", path.display());
                }
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!("{} does not exist, starting empty", path.display());
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to load {}", path.display()));
            }
        }
        roster.subscribe(Box::new(ChangeLog));

        Ok(Self {
            config,
            path,
            format,
            roster,
        })
    }

    /// Write the roster back to the file it was opened from.
    pub fn save(&self) -> Result<()> {
        self.roster
            .save(&self.path, self.format)
            .with_context(|| format!("failed to save {}", self.path.display()))
    }
}

/// Logs roster changes as they happen.
struct ChangeLog;

impl RosterObserver for ChangeLog {
    fn on_student_added(&self, student: &Student) {
        tracing::info!("added {} ({})", student.id(), student.name());
    }

    fn on_student_updated(&self, student: &Student) {
        tracing::info!("updated {} ({})", student.id(), student.name());
    }

    fn on_student_deleted(&self, id: &str) {
        tracing::info!("deleted {id}");
    }
}

/// Parse a comma-separated grade list such as `"90, 85.5"`.
pub fn parse_grades(list: &str) -> Result<Vec<f64>> {
    list.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            let grade: f64 = s.parse().with_context(|| format!("invalid grade: {s:?}"))?;
            anyhow::ensure!(
                gradebook_core::model::is_valid_grade(grade),
                "grade {grade} is outside the range 0-100"
            );
            Ok(grade)
        })
        .collect()
}
