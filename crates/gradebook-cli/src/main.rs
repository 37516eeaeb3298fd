//! gradebook CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

use gradebook_core::Format;

mod commands;

#[derive(Parser)]
#[command(name = "gradebook", version, about = "Student roster and grade tracker")]
struct Cli {
    /// Roster file (default: `data_file` from config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// Roster file format: json, csv, text (default: from extension)
    #[arg(long, global = true)]
    format: Option<Format>,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a starter gradebook.toml
    Init,

    /// Add a student
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        name: String,

        /// Comma-separated grades (e.g. "90,85.5")
        #[arg(long)]
        grades: Option<String>,
    },

    /// Change a student's id, name, or grades
    Update {
        /// Current id
        #[arg(long)]
        id: String,

        #[arg(long)]
        new_id: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Comma-separated grades replacing the current list
        #[arg(long)]
        grades: Option<String>,
    },

    /// Delete a student
    Delete {
        #[arg(long)]
        id: String,
    },

    /// Show one student's record
    Show {
        #[arg(long)]
        id: String,
    },

    /// List every student with their rank
    List {
        #[arg(long, value_enum, default_value = "name")]
        sort: SortKey,

        /// Reverse the sort order
        #[arg(long)]
        desc: bool,
    },

    /// Search by name substring and/or GPA range
    Search {
        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        min_gpa: Option<f64>,

        #[arg(long)]
        max_gpa: Option<f64>,
    },

    /// Show the students with the highest GPA
    Top {
        /// How many students (default: `top_count` from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },

    /// Add, change, or remove individual grades
    Grade {
        #[command(subcommand)]
        action: GradeAction,
    },

    /// Print class statistics
    Stats {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Write the roster as CSV
    ExportCsv {
        #[arg(long)]
        out: PathBuf,
    },

    /// Append students from a CSV file
    ImportCsv {
        #[arg(long)]
        input: PathBuf,
    },

    /// Write a progress report per student
    Reports {
        /// Output directory (default: `reports_dir` from config)
        #[arg(long)]
        dir: Option<PathBuf>,
    },

    /// Write an HTML class summary
    Summary {
        #[arg(long)]
        out: PathBuf,

        #[arg(long, default_value = "Class Summary")]
        title: String,
    },
}

#[derive(Subcommand)]
enum GradeAction {
    /// Append a grade
    Add {
        #[arg(long)]
        id: String,

        #[arg(long)]
        grade: f64,
    },

    /// Overwrite the grade at a 1-based position
    Set {
        #[arg(long)]
        id: String,

        #[arg(long)]
        index: usize,

        #[arg(long)]
        grade: f64,
    },

    /// Remove the grade at a 1-based position
    Remove {
        #[arg(long)]
        id: String,

        #[arg(long)]
        index: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum SortKey {
    Name,
    Gpa,
    Id,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gradebook=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let source = commands::DataSource {
        data: cli.data,
        format: cli.format,
        config: cli.config,
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Add { id, name, grades } => commands::student::add(&source, id, name, grades),
        Commands::Update {
            id,
            new_id,
            name,
            grades,
        } => commands::student::update(&source, &id, new_id, name, grades),
        Commands::Delete { id } => commands::student::delete(&source, &id),
        Commands::Show { id } => commands::student::show(&source, &id),
        Commands::List { sort, desc } => commands::list::list(&source, sort, desc),
        Commands::Search {
            name,
            min_gpa,
            max_gpa,
        } => commands::list::search(&source, name, min_gpa, max_gpa),
        Commands::Top { count } => commands::list::top(&source, count),
        Commands::Grade { action } => match action {
            GradeAction::Add { id, grade } => commands::grade::add(&source, &id, grade),
            GradeAction::Set { id, index, grade } => {
                commands::grade::set(&source, &id, index, grade)
            }
            GradeAction::Remove { id, index } => commands::grade::remove(&source, &id, index),
        },
        Commands::Stats { json } => commands::stats::execute(&source, json),
        Commands::ExportCsv { out } => commands::transfer::export_csv(&source, &out),
        Commands::ImportCsv { input } => commands::transfer::import_csv(&source, &input),
        Commands::Reports { dir } => commands::transfer::reports(&source, dir),
        Commands::Summary { out, title } => commands::transfer::summary(&source, &out, &title),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
