use criterion::{black_box, criterion_group, criterion_main, Criterion};

use gradebook_core::model::Student;
use gradebook_core::statistics::{calculate_statistics, rank_students};

fn make_roster(n: usize) -> Vec<Student> {
    (0..n)
        .map(|i| {
            let grades = (0..8).map(|j| ((i * 7 + j * 13) % 101) as f64);
            Student::with_grades(format!("s{i:05}"), format!("Student {i}"), grades)
        })
        .collect()
}

fn bench_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_statistics");

    for n in [30, 300, 3000] {
        let roster = make_roster(n);
        group.bench_function(format!("students={n}"), |b| {
            b.iter(|| calculate_statistics(black_box(&roster)))
        });
    }

    group.finish();
}

fn bench_ranking(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_students");

    for n in [30, 300, 3000] {
        let roster = make_roster(n);
        group.bench_function(format!("students={n}"), |b| {
            b.iter(|| rank_students(black_box(&roster)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_statistics, bench_ranking);
criterion_main!(benches);
