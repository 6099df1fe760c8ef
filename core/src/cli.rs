use crate::report::ProgressReport;

pub fn print_progress_report(report: &ProgressReport) {
    print!("{}", render_progress_report(report));
}

/// Tekstversjon av rapporten: sammendrag + én linje per dag ("-" for hull).
pub fn render_progress_report(report: &ProgressReport) -> String {
    let st = &report.stats;
    let sign = if st.improvement_pct > 0.0 { "+" } else { "" };

    let mut lines = vec!["--- Progress Report ---".to_string()];
    if let Some(id) = &report.exercise_id {
        lines.push(format!("Exercise: {id}"));
    }
    lines.push(format!(
        "Period: {} - {} ({} days, {} with data)",
        report.interval.start(),
        report.interval.end(),
        report.series.len(),
        report.days_with_data
    ));
    lines.push(format!("Peak: {:.1} kg", st.max));
    lines.push(format!("Average: {:.1} kg", st.avg));
    lines.push(format!("Starting: {:.1} kg", st.min));
    lines.push(format!("Growth: {sign}{:.1}%", st.improvement_pct));

    lines.extend(report.series.iter().map(|s| match s.weight {
        Some(w) => format!("{}  {:>7.1}", s.date, w),
        None => format!("{}  {:>7}", s.date, "-"),
    }));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
