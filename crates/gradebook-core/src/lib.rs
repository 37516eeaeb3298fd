//! gradebook-core — Student roster, statistics, and persistence.
//!
//! This crate owns the student data model, the roster manager that enforces
//! identifier uniqueness, class statistics and ranking, and the flat-file
//! codecs every front end reads and writes through.

pub mod codec;
pub mod config;
pub mod error;
pub mod model;
pub mod progress;
pub mod roster;
pub mod statistics;

pub use codec::Format;
pub use error::{CodecError, RosterError};
pub use model::{GradeTrend, Student};
pub use roster::{LoadSummary, Roster, RosterObserver};
pub use statistics::{ClassStatistics, RankedStudent};
