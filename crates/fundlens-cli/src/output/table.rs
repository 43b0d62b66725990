//! GitHub-style summary tables for the console.

use fundlens_core::FundSummary;

const HEADERS: [&str; 6] = [
    "Name",
    "ID",
    "Refund",
    "Raise ratio",
    "Avg Increase",
    "Avg Decrease",
];

/// Placeholder for statistics that cannot be computed (no qualifying
/// change points in the window).
const UNAVAILABLE: &str = "--";

/// Renders one summary table with a title line above it.
pub fn render_summary_table(title: &str, summaries: &[FundSummary]) -> String {
    let rows: Vec<[String; 6]> = summaries.iter().map(summary_row).collect();

    let mut widths: [usize; 6] = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    out.push_str(title);
    out.push('\n');

    push_row(&mut out, &widths, &HEADERS.map(String::from));
    push_separator(&mut out, &widths);
    for row in &rows {
        push_row(&mut out, &widths, row);
    }
    out
}

fn summary_row(summary: &FundSummary) -> [String; 6] {
    [
        summary.name.clone(),
        summary.fund_id.clone(),
        percent(Some(summary.final_return_percent)),
        percent(summary.raise_ratio_percent),
        percent(summary.avg_increase_percent),
        percent(summary.avg_decrease_percent),
    ]
}

fn percent(value: Option<f64>) -> String {
    match value {
        Some(value) => format!("{value:+.2}%"),
        None => UNAVAILABLE.to_string(),
    }
}

fn push_row(out: &mut String, widths: &[usize; 6], cells: &[String; 6]) {
    out.push('|');
    for (cell, width) in cells.iter().zip(widths) {
        out.push(' ');
        out.push_str(cell);
        out.extend(std::iter::repeat(' ').take(width - cell.len()));
        out.push_str(" |");
    }
    out.push('\n');
}

fn push_separator(out: &mut String, widths: &[usize; 6]) {
    out.push('|');
    for width in widths {
        out.push('-');
        out.extend(std::iter::repeat('-').take(*width));
        out.push_str("-|");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_summary() -> FundSummary {
        FundSummary {
            fund_id: "ABC123".into(),
            name: "Sample Fund".into(),
            final_return_percent: 5.0,
            raise_ratio_percent: Some(66.67),
            avg_increase_percent: Some(2.98),
            avg_decrease_percent: Some(-0.98),
        }
    }

    #[test]
    fn renders_title_header_and_signed_percentages() {
        let table = render_summary_table("Last 6 months", &[sample_summary()]);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "Last 6 months");
        assert!(lines[1].contains("| Name"));
        assert!(lines[1].contains("| Raise ratio"));
        assert!(lines[2].chars().all(|c| c == '|' || c == '-'));
        assert!(lines[3].contains("| Sample Fund"));
        assert!(lines[3].contains("| +5.00%"));
        assert!(lines[3].contains("| +66.67%"));
        assert!(lines[3].contains("| -0.98%"));
    }

    #[test]
    fn unavailable_statistics_render_as_placeholder() {
        let mut summary = sample_summary();
        summary.raise_ratio_percent = None;
        summary.avg_increase_percent = None;
        summary.avg_decrease_percent = None;

        let table = render_summary_table("Last 1 months", &[summary]);
        let data_line = table.lines().nth(3).expect("data row");
        assert_eq!(data_line.matches("| --").count(), 3);
    }

    #[test]
    fn columns_align_across_rows() {
        let mut short = sample_summary();
        short.name = "A".into();
        short.fund_id = "B".into();

        let table = render_summary_table("Last 6 months", &[sample_summary(), short]);
        let lines: Vec<&str> = table.lines().collect();
        let width = lines[1].len();
        assert!(lines[2..].iter().all(|line| line.len() == width));
    }
}
