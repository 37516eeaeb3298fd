//! Class-wide statistics and competition ranking.
//!
//! Both are pure functions of a slice of students and are recomputed on every
//! request.

use std::fmt;

use serde::Serialize;

use crate::model::Student;

/// GPA at or above which a student is on the honors list.
pub const HONORS_GPA: f64 = 3.5;
/// GPA below which a student is on academic probation.
pub const PROBATION_GPA: f64 = 2.0;
/// GPAs closer than this share a rank.
pub const RANK_EPSILON: f64 = 1e-4;

/// One of the five fixed grade bands, highest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum GradeBand {
    A,
    B,
    C,
    D,
    F,
}

impl GradeBand {
    /// All bands in distribution order.
    pub const ALL: [GradeBand; 5] = [
        GradeBand::A,
        GradeBand::B,
        GradeBand::C,
        GradeBand::D,
        GradeBand::F,
    ];

    /// Band a single grade falls into, by inclusive lower bound.
    pub fn of(grade: f64) -> Self {
        if grade >= 90.0 {
            GradeBand::A
        } else if grade >= 80.0 {
            GradeBand::B
        } else if grade >= 70.0 {
            GradeBand::C
        } else if grade >= 60.0 {
            GradeBand::D
        } else {
            GradeBand::F
        }
    }

    /// Position of this band in [`ClassStatistics::grade_distribution`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            GradeBand::A => "90-100",
            GradeBand::B => "80-89",
            GradeBand::C => "70-79",
            GradeBand::D => "60-69",
            GradeBand::F => "0-59",
        }
    }
}

impl fmt::Display for GradeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity and GPA of a notable student.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub gpa: f64,
}

impl StudentSummary {
    fn of(student: &Student) -> Self {
        Self {
            id: student.id().to_string(),
            name: student.name().to_string(),
            gpa: student.gpa(),
        }
    }
}

/// Aggregate metrics over a whole roster.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ClassStatistics {
    /// Number of students.
    pub total_students: usize,
    /// Mean of per-student GPA, unweighted by grade count.
    pub average_gpa: f64,
    /// Mean of every individual grade across the class.
    pub average_grade: f64,
    /// Students with GPA >= 3.5.
    pub honors_count: usize,
    /// Students with GPA < 2.0.
    pub probation_count: usize,
    /// First student in roster order with the highest GPA.
    pub top_student: Option<StudentSummary>,
    /// First student in roster order with the lowest GPA.
    pub bottom_student: Option<StudentSummary>,
    /// Individual grade counts per [`GradeBand`], highest band first.
    pub grade_distribution: [usize; 5],
}

impl ClassStatistics {
    /// Students who are neither on honors nor on probation.
    pub fn regular_count(&self) -> usize {
        self.total_students - self.honors_count - self.probation_count
    }

    pub fn band_count(&self, band: GradeBand) -> usize {
        self.grade_distribution[band.index()]
    }
}

/// Compute class statistics in a single scan over `students`.
pub fn calculate_statistics(students: &[Student]) -> ClassStatistics {
    let mut stats = ClassStatistics {
        total_students: students.len(),
        ..Default::default()
    };

    if students.is_empty() {
        return stats;
    }

    let mut total_gpa = 0.0;
    let mut total_grades = 0.0;
    let mut grade_count = 0usize;
    let mut top: Option<(&Student, f64)> = None;
    let mut bottom: Option<(&Student, f64)> = None;

    for student in students {
        let gpa = student.gpa();
        total_gpa += gpa;

        // Strict comparisons keep the first student seen on ties.
        if top.map_or(true, |(_, best)| gpa > best) {
            top = Some((student, gpa));
        }
        if bottom.map_or(true, |(_, worst)| gpa < worst) {
            bottom = Some((student, gpa));
        }

        if gpa >= HONORS_GPA {
            stats.honors_count += 1;
        }
        if gpa < PROBATION_GPA {
            stats.probation_count += 1;
        }

        for &grade in student.grades() {
            total_grades += grade;
            grade_count += 1;
            stats.grade_distribution[GradeBand::of(grade).index()] += 1;
        }
    }

    stats.average_gpa = total_gpa / students.len() as f64;
    stats.average_grade = if grade_count > 0 {
        total_grades / grade_count as f64
    } else {
        0.0
    };
    stats.top_student = top.map(|(s, _)| StudentSummary::of(s));
    stats.bottom_student = bottom.map(|(s, _)| StudentSummary::of(s));

    stats
}

/// A student with their competition rank.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedStudent {
    /// 1-based rank; tied GPAs share a rank and the next rank skips.
    pub rank: usize,
    pub student: Student,
}

fn gpa_equal(a: f64, b: f64) -> bool {
    (a - b).abs() <= RANK_EPSILON
}

/// Rank students by GPA descending, ties broken by name ascending.
///
/// Uses competition ranking: GPAs within [`RANK_EPSILON`] share a rank, and the
/// next distinct GPA takes its 1-based position, so `[4.0, 4.0, 3.0]` ranks
/// `[1, 1, 3]`.
pub fn rank_students(students: &[Student]) -> Vec<RankedStudent> {
    let mut order: Vec<(f64, &Student)> = students.iter().map(|s| (s.gpa(), s)).collect();
    // Exact order first: a tolerance-based comparator is not a total order.
    order.sort_by(|(gpa_a, a), (gpa_b, b)| {
        gpa_b
            .total_cmp(gpa_a)
            .then_with(|| a.name().cmp(b.name()))
    });

    let mut ranked = Vec::with_capacity(order.len());
    let mut start = 0;
    while start < order.len() {
        let mut end = start + 1;
        while end < order.len() && gpa_equal(order[end].0, order[end - 1].0) {
            end += 1;
        }

        let tied = &mut order[start..end];
        tied.sort_by(|(_, a), (_, b)| a.name().cmp(b.name()));
        ranked.extend(tied.iter().map(|(_, student)| RankedStudent {
            rank: start + 1,
            student: (*student).clone(),
        }));

        start = end;
    }

    ranked
}
