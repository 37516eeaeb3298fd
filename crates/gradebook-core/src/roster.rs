//! The roster manager.
//!
//! [`Roster`] exclusively owns the students. Callers get immutable views or
//! copies and change data only through the methods here, which keeps ids
//! unique and grades in range. Interested parties subscribe a
//! [`RosterObserver`] instead of reaching into the collection.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::codec::{Decoded, Format, Truncation};
use crate::error::{CodecError, RosterError};
use crate::model::{is_valid_grade, Student};
use crate::progress;
use crate::statistics::{self, ClassStatistics, RankedStudent};

/// Receives change notifications from a [`Roster`].
///
/// Every method has an empty default, so observers implement only what they
/// care about.
pub trait RosterObserver {
    /// Contents or order of the roster changed.
    fn on_data_changed(&self) {}
    fn on_student_added(&self, _student: &Student) {}
    fn on_student_updated(&self, _student: &Student) {}
    fn on_student_deleted(&self, _id: &str) {}
}

/// Observer that ignores every notification.
pub struct NoopObserver;

impl RosterObserver for NoopObserver {}

/// Outcome of loading or importing a roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Students now in the roster from this file.
    pub loaded: usize,
    /// Records rejected as invalid or duplicate.
    pub skipped: usize,
    /// Set when the file ended before all declared students were read.
    pub truncated: Option<Truncation>,
}

impl fmt::Display for LoadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.truncated {
            Some(t) => write!(
                f,
                "truncated — loaded {} of {} students",
                self.loaded, t.declared
            )?,
            None => write!(f, "loaded {} students", self.loaded)?,
        }
        if self.skipped > 0 {
            write!(f, " ({} skipped)", self.skipped)?;
        }
        Ok(())
    }
}

/// An ordered collection of students with unique ids.
#[derive(Default)]
pub struct Roster {
    students: Vec<Student>,
    observers: Vec<Box<dyn RosterObserver>>,
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Roster")
            .field("students", &self.students)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an observer for change notifications.
    pub fn subscribe(&mut self, observer: Box<dyn RosterObserver>) {
        self.observers.push(observer);
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.students.iter().position(|s| s.id() == id)
    }

    /// Returns `true` if a student other than the one at position `exclude`
    /// has this id.
    pub fn id_exists(&self, id: &str, exclude: Option<usize>) -> bool {
        self.students
            .iter()
            .enumerate()
            .any(|(i, s)| Some(i) != exclude && s.id() == id)
    }

    fn notify(&self, f: impl Fn(&dyn RosterObserver)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }

    // -----------------------------------------------------------------------
    // CRUD
    // -----------------------------------------------------------------------

    /// Append a student. Invalid students and duplicate ids are refused and
    /// leave the roster unchanged.
    pub fn add_student(&mut self, student: Student) -> Result<(), RosterError> {
        if !student.is_valid() {
            return Err(RosterError::InvalidStudent);
        }
        if self.id_exists(student.id(), None) {
            return Err(RosterError::DuplicateId(student.id().to_string()));
        }

        tracing::debug!("adding student {}", student.id());
        self.students.push(student);
        if let Some(added) = self.students.last() {
            self.notify(|o| {
                o.on_data_changed();
                o.on_student_added(added);
            });
        }
        Ok(())
    }

    /// Replace the student currently identified by `old_id`, keeping its
    /// position. The new id may equal `old_id`; it must not belong to anyone
    /// else.
    pub fn update_student(&mut self, old_id: &str, updated: Student) -> Result<(), RosterError> {
        if !updated.is_valid() {
            return Err(RosterError::InvalidStudent);
        }
        let index = self
            .position(old_id)
            .ok_or_else(|| RosterError::NotFound(old_id.to_string()))?;
        if updated.id() != old_id && self.id_exists(updated.id(), Some(index)) {
            return Err(RosterError::DuplicateId(updated.id().to_string()));
        }

        tracing::debug!("updating student {old_id} -> {}", updated.id());
        self.students[index] = updated;
        self.notify_updated(index);
        Ok(())
    }

    /// Remove the student with this id.
    pub fn delete_student(&mut self, id: &str) -> Result<Student, RosterError> {
        let index = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        tracing::debug!("deleting student {id}");
        let removed = self.students.remove(index);
        self.notify(|o| {
            o.on_data_changed();
            o.on_student_deleted(id);
        });
        Ok(removed)
    }

    /// Remove every student.
    pub fn clear(&mut self) {
        self.students.clear();
        self.notify(|o| o.on_data_changed());
    }

    fn notify_updated(&self, index: usize) {
        let student = &self.students[index];
        self.notify(|o| {
            o.on_data_changed();
            o.on_student_updated(student);
        });
    }

    // -----------------------------------------------------------------------
    // Grades
    // -----------------------------------------------------------------------

    /// Append a grade to a student's record.
    pub fn add_grade(&mut self, id: &str, grade: f64) -> Result<(), RosterError> {
        let index = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        if !is_valid_grade(grade) {
            return Err(RosterError::GradeOutOfRange(grade));
        }

        self.students[index].add_grade(grade);
        self.notify_updated(index);
        Ok(())
    }

    /// Overwrite the grade at `grade_index` (0-based).
    pub fn update_grade(
        &mut self,
        id: &str,
        grade_index: usize,
        grade: f64,
    ) -> Result<(), RosterError> {
        let index = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;
        if !is_valid_grade(grade) {
            return Err(RosterError::GradeOutOfRange(grade));
        }

        let student = &mut self.students[index];
        if !student.update_grade(grade_index, grade) {
            return Err(RosterError::GradeIndexOutOfBounds {
                index: grade_index,
                len: student.grades().len(),
            });
        }
        self.notify_updated(index);
        Ok(())
    }

    /// Remove the grade at `grade_index` (0-based).
    pub fn remove_grade(&mut self, id: &str, grade_index: usize) -> Result<(), RosterError> {
        let index = self
            .position(id)
            .ok_or_else(|| RosterError::NotFound(id.to_string()))?;

        let student = &mut self.students[index];
        if !student.remove_grade(grade_index) {
            return Err(RosterError::GradeIndexOutOfBounds {
                index: grade_index,
                len: student.grades().len(),
            });
        }
        self.notify_updated(index);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn find_student(&self, id: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.id() == id)
    }

    /// Students whose name contains `query`, ignoring case.
    pub fn search_by_name(&self, query: &str) -> Vec<Student> {
        let needle = query.to_lowercase();
        self.students
            .iter()
            .filter(|s| s.name().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Students whose GPA lies in the inclusive range. Reversed bounds are
    /// swapped.
    pub fn search_by_gpa_range(&self, min: f64, max: f64) -> Vec<Student> {
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        self.students
            .iter()
            .filter(|s| (min..=max).contains(&s.gpa()))
            .cloned()
            .collect()
    }

    /// The `count` students with the highest GPA, best first.
    pub fn top_performers(&self, count: usize) -> Vec<Student> {
        let mut sorted = self.students.clone();
        sorted.sort_by(|a, b| b.gpa().total_cmp(&a.gpa()));
        sorted.truncate(count);
        sorted
    }

    /// Every student with their competition rank, best first.
    pub fn rankings(&self) -> Vec<RankedStudent> {
        statistics::rank_students(&self.students)
    }

    pub fn calculate_statistics(&self) -> ClassStatistics {
        statistics::calculate_statistics(&self.students)
    }

    // -----------------------------------------------------------------------
    // Sorting
    // -----------------------------------------------------------------------

    /// Sort by name ignoring case; equal names fall back to id.
    pub fn sort_by_name(&mut self, ascending: bool) {
        self.sort_with(ascending, |a, b| {
            a.name()
                .to_lowercase()
                .cmp(&b.name().to_lowercase())
                .then_with(|| a.id().cmp(b.id()))
        });
    }

    /// Sort by GPA; equal GPAs fall back to name.
    pub fn sort_by_gpa(&mut self, descending: bool) {
        self.sort_with(!descending, |a, b| {
            a.gpa()
                .total_cmp(&b.gpa())
                .then_with(|| b.name().cmp(a.name()))
        });
    }

    pub fn sort_by_id(&mut self, ascending: bool) {
        self.sort_with(ascending, |a, b| a.id().cmp(b.id()));
    }

    fn sort_with(&mut self, ascending: bool, cmp: impl Fn(&Student, &Student) -> Ordering) {
        if ascending {
            self.students.sort_by(|a, b| cmp(a, b));
        } else {
            self.students.sort_by(|a, b| cmp(b, a));
        }
        self.notify(|o| o.on_data_changed());
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Write the roster to `path`, creating missing parent directories.
    pub fn save(&self, path: &Path, format: Format) -> Result<(), CodecError> {
        let content = format.codec().encode(&self.students);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CodecError::io(parent, e))?;
        }
        std::fs::write(path, content).map_err(|e| CodecError::io(path, e))?;

        tracing::info!(
            "saved {} students to {} ({format})",
            self.students.len(),
            path.display()
        );
        Ok(())
    }

    /// Replace the roster with the contents of `path`.
    ///
    /// On error nothing changes. Invalid records and ids already seen earlier in
    /// the file are skipped.
    pub fn load(&mut self, path: &Path, format: Format) -> Result<LoadSummary, CodecError> {
        let decoded = read_decoded(path, format)?;
        let mut skipped = decoded.skipped;

        let mut seen = HashSet::new();
        let mut students = Vec::with_capacity(decoded.students.len());
        for student in decoded.students {
            if !student.is_valid() || !seen.insert(student.id().to_string()) {
                tracing::warn!("skipping duplicate or invalid record {:?}", student.id());
                skipped += 1;
                continue;
            }
            students.push(student);
        }

        let summary = LoadSummary {
            loaded: students.len(),
            skipped,
            truncated: decoded.truncated,
        };
        self.students = students;
        self.notify(|o| o.on_data_changed());

        tracing::info!("{} from {}", summary, path.display());
        Ok(summary)
    }

    /// Append the students from `path` whose ids are not already present.
    ///
    /// Fails without changing anything if not a single student was added.
    pub fn import(&mut self, path: &Path, format: Format) -> Result<LoadSummary, CodecError> {
        let decoded = read_decoded(path, format)?;
        let mut skipped = decoded.skipped;

        let mut imported: Vec<Student> = Vec::new();
        for student in decoded.students {
            let taken = self.id_exists(student.id(), None)
                || imported.iter().any(|s| s.id() == student.id());
            if !student.is_valid() || taken {
                tracing::warn!("not importing {:?}: invalid or id in use", student.id());
                skipped += 1;
                continue;
            }
            imported.push(student);
        }

        if imported.is_empty() {
            return Err(CodecError::NothingImported {
                path: path.to_path_buf(),
            });
        }

        let summary = LoadSummary {
            loaded: imported.len(),
            skipped,
            truncated: decoded.truncated,
        };
        let first_new = self.students.len();
        self.students.extend(imported);
        self.notify(|o| {
            o.on_data_changed();
            for student in &self.students[first_new..] {
                o.on_student_added(student);
            }
        });

        tracing::info!("imported {} from {}", summary, path.display());
        Ok(summary)
    }

    /// Write the roster as CSV.
    pub fn export_csv(&self, path: &Path) -> Result<(), CodecError> {
        self.save(path, Format::Csv)
    }

    /// Append students from a CSV file.
    pub fn import_csv(&mut self, path: &Path) -> Result<LoadSummary, CodecError> {
        self.import(path, Format::Csv)
    }

    /// Write a progress report per student into `dir`.
    pub fn export_reports(&self, dir: &Path) -> Result<usize, CodecError> {
        progress::export_progress_reports(&self.students, dir)
    }
}

fn read_decoded(path: &Path, format: Format) -> Result<Decoded, CodecError> {
    let content = std::fs::read_to_string(path).map_err(|e| CodecError::io(path, e))?;
    format.codec().decode(&content)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn student(id: &str, name: &str, grades: &[f64]) -> Student {
        Student::with_grades(id, name, grades.iter().copied())
    }

    fn sample() -> Roster {
        let mut roster = Roster::new();
        roster.add_student(student("s1", "Charlie", &[70.0, 80.0])).unwrap();
        roster.add_student(student("s2", "alice", &[95.0, 100.0])).unwrap();
        roster.add_student(student("s3", "Bob", &[50.0])).unwrap();
        roster
    }

    fn ids(students: &[Student]) -> Vec<&str> {
        students.iter().map(|s| s.id()).collect()
    }

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl RosterObserver for Recorder {
        fn on_data_changed(&self) {
            self.0.borrow_mut().push("changed".into());
        }
        fn on_student_added(&self, student: &Student) {
            self.0.borrow_mut().push(format!("added {}", student.id()));
        }
        fn on_student_updated(&self, student: &Student) {
            self.0.borrow_mut().push(format!("updated {}", student.id()));
        }
        fn on_student_deleted(&self, id: &str) {
            self.0.borrow_mut().push(format!("deleted {id}"));
        }
    }

    #[test]
    fn add_rejects_invalid_and_duplicates() {
        let mut roster = sample();
        let before: Vec<Student> = roster.students().to_vec();

        assert_eq!(
            roster.add_student(student("s1", "Other", &[])),
            Err(RosterError::DuplicateId("s1".into()))
        );
        assert_eq!(
            roster.add_student(Student::new("", "Nobody")),
            Err(RosterError::InvalidStudent)
        );
        assert_eq!(roster.students(), before.as_slice());
    }

    #[test]
    fn update_replaces_in_place() {
        let mut roster = sample();
        roster
            .update_student("s2", student("s2", "Alice", &[60.0]))
            .unwrap();
        assert_eq!(ids(roster.students()), vec!["s1", "s2", "s3"]);
        let updated = roster.find_student("s2").unwrap();
        assert_eq!(updated.name(), "Alice");
        assert_eq!(updated.grades(), &[60.0]);

        roster
            .update_student("s2", student("s9", "Alice", &[60.0]))
            .unwrap();
        assert_eq!(ids(roster.students()), vec!["s1", "s9", "s3"]);
    }

    #[test]
    fn update_refuses_conflicts() {
        let mut roster = sample();
        assert_eq!(
            roster.update_student("s1", student("s3", "Charlie", &[])),
            Err(RosterError::DuplicateId("s3".into()))
        );
        assert_eq!(
            roster.update_student("nope", student("nope", "X", &[])),
            Err(RosterError::NotFound("nope".into()))
        );
        assert_eq!(
            roster.update_student("s1", Student::new("s1", "")),
            Err(RosterError::InvalidStudent)
        );
        assert_eq!(roster.find_student("s1").unwrap().name(), "Charlie");
    }

    #[test]
    fn delete_removes_in_place() {
        let mut roster = sample();
        let removed = roster.delete_student("s2").unwrap();
        assert_eq!(removed.name(), "alice");
        assert_eq!(ids(roster.students()), vec!["s1", "s3"]);
        assert_eq!(
            roster.delete_student("s2"),
            Err(RosterError::NotFound("s2".into()))
        );
    }

    #[test]
    fn id_exists_honours_exclusion() {
        let roster = sample();
        assert!(roster.id_exists("s2", None));
        assert!(!roster.id_exists("s2", Some(1)));
        assert!(roster.id_exists("s2", Some(0)));
        assert!(!roster.id_exists("s7", None));
    }

    #[test]
    fn grade_operations() {
        let mut roster = sample();
        roster.add_grade("s3", 70.0).unwrap();
        assert_eq!(
            roster.add_grade("s3", 101.0),
            Err(RosterError::GradeOutOfRange(101.0))
        );
        roster.update_grade("s3", 0, 55.0).unwrap();
        assert_eq!(
            roster.update_grade("s3", 5, 55.0),
            Err(RosterError::GradeIndexOutOfBounds { index: 5, len: 2 })
        );
        roster.remove_grade("s3", 1).unwrap();
        assert_eq!(roster.find_student("s3").unwrap().grades(), &[55.0]);
        assert_eq!(
            roster.remove_grade("zz", 0),
            Err(RosterError::NotFound("zz".into()))
        );
    }

    #[test]
    fn searches() {
        let roster = sample();
        assert_eq!(ids(&roster.search_by_name("ALI")), vec!["s2"]);
        assert_eq!(ids(&roster.search_by_name("b")), vec!["s3"]);
        assert_eq!(ids(&roster.search_by_name("")), vec!["s1", "s2", "s3"]);

        // s1: 3.0, s2: 3.9, s3: 2.0
        assert_eq!(ids(&roster.search_by_gpa_range(2.0, 3.0)), vec!["s1", "s3"]);
        assert_eq!(ids(&roster.search_by_gpa_range(4.0, 3.5)), vec!["s2"]);
    }

    #[test]
    fn top_performers_truncates() {
        let roster = sample();
        assert_eq!(ids(&roster.top_performers(2)), vec!["s2", "s1"]);
        assert_eq!(roster.top_performers(10).len(), 3);
        assert!(roster.top_performers(0).is_empty());
        // Roster order is untouched.
        assert_eq!(ids(roster.students()), vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn sorting() {
        let mut roster = sample();
        roster.sort_by_name(true);
        assert_eq!(ids(roster.students()), vec!["s2", "s3", "s1"]);
        roster.sort_by_name(false);
        assert_eq!(ids(roster.students()), vec!["s1", "s3", "s2"]);
        roster.sort_by_gpa(true);
        assert_eq!(ids(roster.students()), vec!["s2", "s1", "s3"]);
        roster.sort_by_gpa(false);
        assert_eq!(ids(roster.students()), vec!["s3", "s1", "s2"]);
        roster.sort_by_id(false);
        assert_eq!(ids(roster.students()), vec!["s3", "s2", "s1"]);
        roster.sort_by_id(true);
        assert_eq!(ids(roster.students()), vec!["s1", "s2", "s3"]);
    }

    #[test]
    fn gpa_sort_breaks_ties_by_name() {
        let mut roster = Roster::new();
        roster.add_student(student("1", "Zoe", &[80.0])).unwrap();
        roster.add_student(student("2", "Amy", &[80.0])).unwrap();
        roster.add_student(student("3", "Max", &[90.0])).unwrap();
        roster.sort_by_gpa(true);
        assert_eq!(ids(roster.students()), vec!["3", "2", "1"]);
    }

    #[test]
    fn observers_see_every_change() {
        let recorder = Recorder::default();
        let log = recorder.0.clone();
        let mut roster = Roster::new();
        roster.subscribe(Box::new(recorder));

        roster.add_student(Student::new("s1", "Ada")).unwrap();
        roster.add_student(Student::new("s1", "Dup")).unwrap_err();
        roster.update_student("s1", Student::new("s1", "Ada L")).unwrap();
        roster.sort_by_id(true);
        roster.delete_student("s1").unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "changed",
                "added s1",
                "changed",
                "updated s1",
                "changed",
                "changed",
                "deleted s1",
            ]
        );
    }

    #[test]
    fn save_and_load_every_format() {
        let dir = tempfile::tempdir().unwrap();
        let roster = sample();

        for format in [Format::Json, Format::Csv, Format::Text] {
            let path = dir.path().join("nested").join(format!("roster.{format}"));
            roster.save(&path, format).unwrap();

            let mut loaded = Roster::new();
            let summary = loaded.load(&path, format).unwrap();
            assert_eq!(summary.loaded, 3);
            assert!(summary.truncated.is_none());
            assert_eq!(loaded.students(), roster.students());
        }
    }

    #[test]
    fn load_failure_leaves_roster_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ definitely not json").unwrap();

        let mut roster = sample();
        assert!(roster.load(&path, Format::Json).is_err());
        assert_eq!(roster.len(), 3);

        let missing = roster
            .load(&dir.path().join("missing.json"), Format::Json)
            .unwrap_err();
        assert!(missing.is_not_found());
        assert_eq!(roster.len(), 3);
    }

    #[test]
    fn load_skips_duplicate_ids_in_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dupes.txt");
        std::fs::write(&path, "STUDENT_DB_V2\n2\ns1\nAda\n0\n\ns1\nBo\n0\n\n").unwrap();

        let mut roster = Roster::new();
        let summary = roster.load(&path, Format::Text).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(roster.find_student("s1").unwrap().name(), "Ada");
    }

    #[test]
    fn truncated_text_load_reports_progress() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("student_data.txt");
        std::fs::write(
            &path,
            "STUDENT_DB_V2\n3\ns1\nAda\n1\n90\ns2\nBo\n2\n70 80\ns3\nCy\n",
        )
        .unwrap();

        let mut roster = Roster::new();
        let summary = roster.load(&path, Format::Text).unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(summary.to_string(), "truncated — loaded 2 of 3 students");
    }

    #[test]
    fn truncated_load_counts_only_kept_students() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("student_data.txt");
        std::fs::write(
            &path,
            "STUDENT_DB_V2\n3\ns1\nAda\n1\n90\ns1\nAda Again\n0\n\ns3\n",
        )
        .unwrap();

        let mut roster = Roster::new();
        let summary = roster.load(&path, Format::Text).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(
            summary.to_string(),
            "truncated — loaded 1 of 3 students (1 skipped)"
        );
    }

    #[test]
    fn import_csv_appends_new_ids_only() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.csv");
        std::fs::write(
            &path,
            "ID,Name,GPA,Grades\ns2,\"Dup\",0,\"\"\ns4,\"Dana\",3.60,\"90.0\"\n",
        )
        .unwrap();

        let mut roster = sample();
        let summary = roster.import_csv(&path).unwrap();
        assert_eq!(summary.loaded, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(ids(roster.students()), vec!["s1", "s2", "s3", "s4"]);
        assert_eq!(roster.find_student("s2").unwrap().name(), "alice");
    }

    #[test]
    fn import_with_nothing_new_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("same.csv");
        let roster = sample();
        roster.export_csv(&path).unwrap();

        let mut target = sample();
        let err = target.import_csv(&path).unwrap_err();
        assert!(matches!(err, CodecError::NothingImported { .. }));
        assert_eq!(target.len(), 3);
    }

    #[test]
    fn export_reports_writes_one_file_each() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        assert_eq!(sample().export_reports(&reports).unwrap(), 3);
        assert!(reports.join("s2_report.txt").is_file());
    }

    #[test]
    fn load_summary_display() {
        let summary = LoadSummary {
            loaded: 4,
            skipped: 1,
            truncated: None,
        };
        assert_eq!(summary.to_string(), "loaded 4 students (1 skipped)");
    }
}
