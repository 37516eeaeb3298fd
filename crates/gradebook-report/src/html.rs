//! HTML class summary.
//!
//! Produces a self-contained HTML file with all CSS/JS inlined: headline
//! statistics, an SVG bar chart of the grade distribution, the honors/regular/
//! probation split, and the ranked student list.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use gradebook_core::statistics::{ClassStatistics, GradeBand, RankedStudent, StudentSummary};

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

fn summary_cell(student: Option<&StudentSummary>) -> String {
    match student {
        Some(s) => format!(
            "{} ({}) — {:.2}",
            html_escape(&s.name),
            html_escape(&s.id),
            s.gpa
        ),
        None => "-".to_string(),
    }
}

/// Generate an HTML class summary.
pub fn generate_html(title: &str, stats: &ClassStatistics, ranked: &[RankedStudent]) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    // Header
    html.push_str("<header>\n");
    html.push_str(&format!("<h1>{}</h1>\n", html_escape(title)));
    html.push_str(&format!(
        "<p class=\"meta\">{} students | generated {}</p>\n",
        stats.total_students,
        Local::now().format("%Y-%m-%d %H:%M")
    ));
    html.push_str("</header>\n");

    // Summary dashboard
    html.push_str("<section class=\"dashboard\">\n");
    html.push_str("<h2>Class Statistics</h2>\n");
    html.push_str("<table class=\"summary\">\n<tbody>\n");
    let rows = [
        ("Total students", stats.total_students.to_string()),
        ("Average GPA", format!("{:.2}", stats.average_gpa)),
        ("Average grade", format!("{:.2}", stats.average_grade)),
        ("Top student", summary_cell(stats.top_student.as_ref())),
        ("Lowest GPA student", summary_cell(stats.bottom_student.as_ref())),
    ];
    for (label, value) in rows {
        html.push_str(&format!("<tr><th>{label}</th><td>{value}</td></tr>\n"));
    }
    html.push_str("</tbody></table>\n");

    html.push_str("<h2>Grade Distribution</h2>\n");
    html.push_str(&generate_bar_chart(stats));

    html.push_str("<h2>Academic Standing</h2>\n");
    html.push_str("<table class=\"standing\">\n");
    html.push_str("<thead><tr><th>Standing</th><th>Students</th></tr></thead>\n<tbody>\n");
    html.push_str(&format!(
        "<tr class=\"honors\"><td>Honors (&ge;3.5)</td><td>{}</td></tr>\n",
        stats.honors_count
    ));
    html.push_str(&format!(
        "<tr><td>Regular (2.0-3.49)</td><td>{}</td></tr>\n",
        stats.regular_count()
    ));
    html.push_str(&format!(
        "<tr class=\"probation\"><td>Probation (&lt;2.0)</td><td>{}</td></tr>\n",
        stats.probation_count
    ));
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Ranked students
    html.push_str("<section class=\"results\">\n");
    html.push_str("<h2>Students</h2>\n");
    html.push_str("<table class=\"results-table\" id=\"results\">\n");
    html.push_str("<thead><tr><th onclick=\"sortTable(0)\">Rank</th><th onclick=\"sortTable(1)\">Name</th><th onclick=\"sortTable(2)\">ID</th><th onclick=\"sortTable(3)\">GPA</th><th onclick=\"sortTable(4)\">Grades</th><th>Trend</th></tr></thead>\n");
    html.push_str("<tbody>\n");
    for r in ranked {
        let s = &r.student;
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{}</td><td>{}</td></tr>\n",
            r.rank,
            html_escape(s.name()),
            html_escape(s.id()),
            s.gpa(),
            s.grades().len(),
            s.trend()
        ));
    }
    html.push_str("</tbody></table>\n");
    html.push_str("</section>\n");

    // Raw JSON
    html.push_str("<section class=\"raw-data\">\n");
    html.push_str("<details>\n<summary>Raw JSON Data</summary>\n");
    html.push_str("<pre><code>");
    html.push_str(
        &serde_json::to_string_pretty(stats)
            .unwrap_or_default()
            .replace('<', "&lt;")
            .replace('>', "&gt;"),
    );
    html.push_str("</code></pre>\n");
    html.push_str("</details>\n</section>\n");

    html.push_str("<script>\n");
    html.push_str(JS);
    html.push_str("</script>\n");

    html.push_str("</body>\n</html>");
    html
}

/// Write an HTML class summary to a file.
pub fn write_html_report(
    title: &str,
    stats: &ClassStatistics,
    ranked: &[RankedStudent],
    path: &Path,
) -> Result<()> {
    let html = generate_html(title, stats, ranked);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::write(path, html)
        .with_context(|| format!("failed to write summary to {}", path.display()))?;
    Ok(())
}

fn generate_bar_chart(stats: &ClassStatistics) -> String {
    let bar_height = 30;
    let max_width = 400;
    let padding = 10;
    let label_width = 80;

    let max_count = stats.grade_distribution.iter().copied().max().unwrap_or(0).max(1);
    let total_height = GradeBand::ALL.len() * (bar_height + padding) + padding;

    let mut svg = format!(
        "<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
        label_width + max_width + 60,
        total_height
    );

    for (i, band) in GradeBand::ALL.iter().enumerate() {
        let count = stats.band_count(*band);
        let y = i * (bar_height + padding) + padding;
        let width = count * max_width / max_count;

        let color = match band {
            GradeBand::A | GradeBand::B => "#22c55e",
            GradeBand::C | GradeBand::D => "#eab308",
            GradeBand::F => "#ef4444",
        };

        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"14\" fill=\"currentColor\" text-anchor=\"end\" dominant-baseline=\"middle\">{}</text>\n",
            label_width - 10,
            y + bar_height / 2,
            band.label()
        ));
        svg.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\" rx=\"4\"/>\n",
            label_width, y, width, bar_height, color
        ));
        svg.push_str(&format!(
            "  <text x=\"{}\" y=\"{}\" font-size=\"12\" fill=\"currentColor\" dominant-baseline=\"middle\">{}</text>\n",
            label_width + width + 8,
            y + bar_height / 2,
            count
        ));
    }

    svg.push_str("</svg>\n");
    svg
}

const CSS: &str = r#"
:root { --bg: #fff; --fg: #1a1a1a; --border: #e5e7eb; --honors: #dcfce7; --probation: #fde2e2; }
@media (prefers-color-scheme: dark) {
  :root { --bg: #111827; --fg: #f9fafb; --border: #374151; --honors: #064e3b; --probation: #7f1d1d; }
}
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; margin: 0; padding: 2rem; background: var(--bg); color: var(--fg); }
h1, h2 { margin-top: 2rem; }
.meta { color: #6b7280; }
table { border-collapse: collapse; width: 100%; margin: 1rem 0; }
th, td { border: 1px solid var(--border); padding: 0.5rem 1rem; text-align: left; }
th { background: var(--border); }
.results-table th { cursor: pointer; }
.honors { background: var(--honors); }
.probation { background: var(--probation); }
pre { overflow-x: auto; padding: 1rem; background: var(--border); border-radius: 8px; }
code { font-family: 'JetBrains Mono', 'Fira Code', monospace; font-size: 0.85rem; }
details { margin: 1rem 0; }
summary { cursor: pointer; font-weight: bold; }
svg { margin: 1rem 0; }
"#;

const JS: &str = r#"
function sortTable(col) {
  const table = document.getElementById('results');
  const tbody = table.querySelector('tbody');
  const rows = Array.from(tbody.querySelectorAll('tr'));
  const asc = table.dataset.sortCol == col && table.dataset.sortDir == 'asc' ? false : true;
  rows.sort((a, b) => {
    const va = a.cells[col].textContent;
    const vb = b.cells[col].textContent;
    const na = parseFloat(va), nb = parseFloat(vb);
    const cmp = !isNaN(na) && !isNaN(nb) ? na - nb : va.localeCompare(vb);
    return asc ? cmp : -cmp;
  });
  table.dataset.sortCol = col;
  table.dataset.sortDir = asc ? 'asc' : 'desc';
  rows.forEach(r => tbody.appendChild(r));
}
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use gradebook_core::model::Student;
    use gradebook_core::statistics::{calculate_statistics, rank_students};

    fn make_class() -> Vec<Student> {
        vec![
            Student::with_grades("s1", "Ada <Lovelace>", [95.0, 91.0]),
            Student::with_grades("s2", "Bo", [72.0, 64.0]),
            Student::with_grades("s3", "Cy", [40.0]),
        ]
    }

    #[test]
    fn html_summary_contains_required_elements() {
        let students = make_class();
        let stats = calculate_statistics(&students);
        let html = generate_html("Period 3", &stats, &rank_students(&students));

        assert!(html.contains("<html"));
        assert!(html.contains("</html>"));
        assert!(html.contains("Period 3"));
        assert!(html.contains("Ada &lt;Lovelace&gt;"));
        assert!(!html.contains("Ada <Lovelace>"));
        assert!(html.contains("<svg"));
        for band in GradeBand::ALL {
            assert!(html.contains(band.label()));
        }
    }

    #[test]
    fn html_summary_for_empty_class() {
        let html = generate_html("Empty", &ClassStatistics::default(), &[]);
        assert!(html.contains("<td>-</td>"));
        assert!(html.contains("<svg"));
    }

    #[test]
    fn html_summary_write_to_file() {
        let students = make_class();
        let stats = calculate_statistics(&students);
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("summary.html");

        write_html_report("Class", &stats, &rank_students(&students), &path).unwrap();
        assert!(path.exists());

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("<html"));
    }
}
