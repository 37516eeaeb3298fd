//! The student entity and its derived grade metrics.
//!
//! Grades are percentages in the closed range 0-100 and keep the order in
//! which they were entered. GPA, extremes, averages, and trend are computed on
//! demand and never stored.

use std::fmt;

use serde::Serialize;

/// Lowest accepted grade.
pub const MIN_GRADE: f64 = 0.0;
/// Highest accepted grade.
pub const MAX_GRADE: f64 = 100.0;
/// Divisor that maps a 0-100 average onto the 0.0-4.0 GPA scale.
pub const GPA_SCALE: f64 = 25.0;
/// Upper bound of the GPA scale.
pub const MAX_GPA: f64 = 4.0;
/// Consecutive grades closer than this are a steady transition.
pub const TREND_EPSILON: f64 = 1e-3;

/// Returns `true` if `grade` is inside the accepted 0-100 range.
///
/// NaN is never in range.
pub fn is_valid_grade(grade: f64) -> bool {
    (MIN_GRADE..=MAX_GRADE).contains(&grade)
}

fn single_line(s: String) -> String {
    if s.contains(['\n', '\r']) {
        s.replace(['\n', '\r'], " ")
    } else {
        s
    }
}

/// A student and the ordered sequence of grades they have received.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Student {
    id: String,
    name: String,
    grades: Vec<f64>,
}

impl Student {
    /// Create a student with no grades.
    ///
    /// Line breaks in the id or name become spaces; every file format stores
    /// them on a single line.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: single_line(id.into()),
            name: single_line(name.into()),
            grades: Vec::new(),
        }
    }

    /// Create a student with an initial grade sequence.
    ///
    /// Grades outside 0-100 are dropped, exactly as [`Student::add_grade`]
    /// would drop them.
    pub fn with_grades(
        id: impl Into<String>,
        name: impl Into<String>,
        grades: impl IntoIterator<Item = f64>,
    ) -> Self {
        let mut student = Self::new(id, name);
        student.set_grades(grades);
        student
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grades(&self) -> &[f64] {
        &self.grades
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = single_line(id.into());
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = single_line(name.into());
    }

    /// Replace the whole grade sequence, dropping out-of-range values.
    pub fn set_grades(&mut self, grades: impl IntoIterator<Item = f64>) {
        self.grades.clear();
        for grade in grades {
            self.add_grade(grade);
        }
    }

    /// A student is valid when both id and name are non-empty.
    pub fn is_valid(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty()
    }

    /// Append a grade. Values outside 0-100 are ignored.
    pub fn add_grade(&mut self, grade: f64) {
        if is_valid_grade(grade) {
            self.grades.push(grade);
        }
    }

    /// Remove the grade at `index`. Returns `false` if the index is out of bounds.
    pub fn remove_grade(&mut self, index: usize) -> bool {
        if index < self.grades.len() {
            self.grades.remove(index);
            true
        } else {
            false
        }
    }

    /// Overwrite the grade at `index`.
    ///
    /// Returns `false`, leaving the grades untouched, if the index is out of
    /// bounds or the new value is outside 0-100.
    pub fn update_grade(&mut self, index: usize, grade: f64) -> bool {
        match self.grades.get_mut(index) {
            Some(slot) if is_valid_grade(grade) => {
                *slot = grade;
                true
            }
            _ => false,
        }
    }

    /// GPA on the 0.0-4.0 scale: the grade average divided by 25, clamped.
    ///
    /// A student without grades has a GPA of exactly 0.0.
    pub fn gpa(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        (self.average_grade() / GPA_SCALE).clamp(0.0, MAX_GPA)
    }

    pub fn highest_grade(&self) -> f64 {
        self.grades.iter().copied().reduce(f64::max).unwrap_or(0.0)
    }

    pub fn lowest_grade(&self) -> f64 {
        self.grades.iter().copied().reduce(f64::min).unwrap_or(0.0)
    }

    pub fn average_grade(&self) -> f64 {
        if self.grades.is_empty() {
            return 0.0;
        }
        self.grades.iter().sum::<f64>() / self.grades.len() as f64
    }

    /// Summarise how grades moved between consecutive entries.
    pub fn trend(&self) -> GradeTrend {
        GradeTrend::of(&self.grades)
    }
}

/// Direction of travel across consecutive grades, in entry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GradeTrend {
    /// Fewer than two grades; there is no transition to classify.
    NotApplicable,
    Counts {
        ups: usize,
        downs: usize,
        steadies: usize,
    },
}

impl GradeTrend {
    /// Classify each consecutive pair of `grades` as up, down, or steady.
    pub fn of(grades: &[f64]) -> Self {
        if grades.len() < 2 {
            return GradeTrend::NotApplicable;
        }

        let (mut ups, mut downs, mut steadies) = (0, 0, 0);
        for pair in grades.windows(2) {
            let diff = pair[1] - pair[0];
            if diff.abs() < TREND_EPSILON {
                steadies += 1;
            } else if diff > 0.0 {
                ups += 1;
            } else {
                downs += 1;
            }
        }

        GradeTrend::Counts {
            ups,
            downs,
            steadies,
        }
    }
}

impl fmt::Display for GradeTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradeTrend::NotApplicable => write!(f, "N/A"),
            GradeTrend::Counts {
                ups,
                downs,
                steadies,
            } => write!(f, "{ups}↑ {downs}↓ {steadies}→"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gpa_of_empty_grades_is_zero() {
        assert_eq!(Student::new("s1", "Ada").gpa(), 0.0);
    }

    #[test]
    fn gpa_rescales_average() {
        let perfect = Student::with_grades("s1", "Ada", [100.0, 100.0, 100.0]);
        assert_eq!(perfect.gpa(), 4.0);

        let zero = Student::with_grades("s2", "Bo", [0.0, 0.0]);
        assert_eq!(zero.gpa(), 0.0);

        let mid = Student::with_grades("s3", "Cy", [62.5]);
        assert!((mid.gpa() - 2.5).abs() < 1e-9);
    }

    #[test]
    fn add_grade_ignores_out_of_range() {
        let mut s = Student::new("s1", "Ada");
        s.add_grade(-1.0);
        s.add_grade(100.5);
        s.add_grade(f64::NAN);
        s.add_grade(0.0);
        s.add_grade(100.0);
        assert_eq!(s.grades(), &[0.0, 100.0]);
    }

    #[test]
    fn with_grades_filters_like_add_grade() {
        let s = Student::with_grades("s1", "Ada", [90.0, 150.0, 70.0, -3.0]);
        assert_eq!(s.grades(), &[90.0, 70.0]);
    }

    #[test]
    fn remove_and_update_check_bounds() {
        let mut s = Student::with_grades("s1", "Ada", [80.0, 90.0]);
        assert!(!s.remove_grade(2));
        assert!(!s.update_grade(5, 50.0));
        assert!(!s.update_grade(0, 101.0));
        assert_eq!(s.grades(), &[80.0, 90.0]);

        assert!(s.update_grade(0, 85.0));
        assert!(s.remove_grade(1));
        assert_eq!(s.grades(), &[85.0]);
    }

    #[test]
    fn validity_requires_id_and_name() {
        assert!(Student::new("s1", "Ada").is_valid());
        assert!(!Student::new("", "Ada").is_valid());
        assert!(!Student::new("s1", "").is_valid());
    }

    #[test]
    fn line_breaks_in_id_and_name_become_spaces() {
        let mut student = Student::new("s\n1", "Ada\r\nLovelace");
        assert_eq!(student.id(), "s 1");
        assert_eq!(student.name(), "Ada  Lovelace");

        student.set_name("Bo\nPeep");
        student.set_id("s\r2");
        assert_eq!(student.name(), "Bo Peep");
        assert_eq!(student.id(), "s 2");
    }

    #[test]
    fn extremes_and_average() {
        let s = Student::with_grades("s1", "Ada", [70.0, 95.0, 85.0]);
        assert_eq!(s.highest_grade(), 95.0);
        assert_eq!(s.lowest_grade(), 70.0);
        assert!((s.average_grade() - 250.0 / 3.0).abs() < 1e-9);

        let empty = Student::new("s2", "Bo");
        assert_eq!(empty.highest_grade(), 0.0);
        assert_eq!(empty.lowest_grade(), 0.0);
        assert_eq!(empty.average_grade(), 0.0);
    }

    #[test]
    fn trend_needs_two_grades() {
        assert_eq!(Student::new("s1", "Ada").trend(), GradeTrend::NotApplicable);
        assert_eq!(
            Student::with_grades("s1", "Ada", [50.0]).trend(),
            GradeTrend::NotApplicable
        );
        assert_eq!(GradeTrend::NotApplicable.to_string(), "N/A");
    }

    #[test]
    fn trend_is_order_sensitive() {
        let s = Student::with_grades("s1", "Ada", [60.0, 70.0, 70.0005, 65.0, 80.0]);
        assert_eq!(
            s.trend(),
            GradeTrend::Counts {
                ups: 2,
                downs: 1,
                steadies: 1
            }
        );
        assert_eq!(s.trend().to_string(), "2↑ 1↓ 1→");

        let reversed = Student::with_grades("s2", "Bo", [80.0, 65.0, 70.0005, 70.0, 60.0]);
        assert_eq!(
            reversed.trend(),
            GradeTrend::Counts {
                ups: 1,
                downs: 2,
                steadies: 1
            }
        );
    }
}
