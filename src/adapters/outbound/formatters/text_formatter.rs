use std::fmt::Write;

use owo_colors::OwoColorize;

use crate::application::read_models::ReportView;
use crate::ports::outbound::ReportFormatter;
use crate::report_generation::domain::CreditBadge;
use crate::shared::Result;

/// TextReportFormatter adapter producing the console report.
///
/// The credit badge keeps the dashboard's treatment: green for more than
/// one credit, gray otherwise.
pub struct TextReportFormatter;

impl TextReportFormatter {
    pub fn new() -> Self {
        Self
    }

    fn badge_line(view: &ReportView) -> String {
        let line = format!("LEED Credits: {} points", view.credit.points_label());
        match view.credit.badge {
            CreditBadge::Pass => line.green().bold().to_string(),
            CreditBadge::Fail => line.bright_black().bold().to_string(),
        }
    }

    fn table(out: &mut String, view: &ReportView) {
        let widths = view.spaces.column_widths();

        let mut header = String::new();
        for (i, column) in view.spaces.headers.iter().enumerate() {
            let _ = write!(header, "{:<width$}  ", column, width = widths[i]);
        }
        out.push_str(header.trim_end());
        out.push('\n');
        out.push_str(&"-".repeat(header.trim_end().len()));
        out.push('\n');

        for row in &view.spaces.rows {
            let mut line = String::new();
            for (i, cell) in row.iter().enumerate() {
                let _ = write!(line, "{:<width$}  ", cell, width = widths[i]);
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
}

impl Default for TextReportFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for TextReportFormatter {
    fn format(&self, view: &ReportView) -> Result<String> {
        let mut out = String::new();

        let _ = writeln!(out, "LEED Option II report");
        let _ = writeln!(
            out,
            "Run: {}/{} · job {} · run {}",
            view.run.owner, view.run.project, view.run.job_id, view.run.run_id
        );
        let _ = writeln!(out, "Recipe: {}", view.run.recipe);
        if view.from_cache {
            let _ = writeln!(out, "(served from local cache)");
        }
        out.push('\n');

        let _ = writeln!(out, "{}", Self::badge_line(view));
        let _ = writeln!(
            out,
            "Percentage passing: {:.2}%",
            view.credit.percentage_passing
        );
        out.push('\n');

        if !view.credit.breakdown.is_empty() {
            let _ = writeln!(out, "Model breakdown:");
            for row in &view.credit.breakdown {
                let _ = writeln!(out, "  {}: {}", row.name, row.value);
            }
            out.push('\n');
        }

        let _ = writeln!(out, "Space by space breakdown:");
        Self::table(&mut out, view);
        out.push('\n');

        let _ = writeln!(out, "3D model: {}", view.visualization_file.display());
        let _ = writeln!(
            out,
            "💡 Open the file in a vtkjs viewer, select the Grid layer and use\n   \"Color by\" to switch between hourly illuminance and pass/fail results."
        );

        Ok(out)
    }
}
