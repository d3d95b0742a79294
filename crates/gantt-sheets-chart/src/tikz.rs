//! TikZ (pgfgantt) output

use std::fs;
use std::path::Path;

use crate::chart::GanttChart;

/// Options for pgfgantt markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TikzOptions {
    /// Width of one time slot (one day)
    pub x_unit: String,
    /// Height of one chart row
    pub y_unit_chart: String,
    /// Draw horizontal grid lines
    pub hgrid: bool,
    /// Draw vertical grid lines
    pub vgrid: bool,
    /// Calendar title rows (`\gantttitlecalendar` argument)
    pub title_calendar: String,
}

impl Default for TikzOptions {
    fn default() -> Self {
        Self {
            x_unit: "0.8cm".to_string(),
            y_unit_chart: "0.7cm".to_string(),
            hgrid: true,
            vgrid: true,
            title_calendar: "year, month".to_string(),
        }
    }
}

/// Writes a chart as a `tikzpicture` holding a pgfgantt `ganttchart`
pub struct TikzWriter;

impl TikzWriter {
    /// Render the chart; lines are joined with `\n`, without a trailing newline
    pub fn render(chart: &GanttChart, options: &TikzOptions) -> String {
        let mut lines = vec![
            "\\begin{tikzpicture}".to_string(),
            "  \\begin{ganttchart}[".to_string(),
        ];
        if options.hgrid {
            lines.push("    hgrid,".to_string());
        }
        if options.vgrid {
            lines.push("    vgrid,".to_string());
        }
        lines.push(format!("    x unit={},", options.x_unit));
        lines.push(format!("    y unit chart={},", options.y_unit_chart));
        lines.push("    time slot format=isodate".to_string());
        lines.push(format!(
            "  ]{{{}}}{{{}}}",
            iso(chart.start()),
            iso(chart.end())
        ));
        lines.push(format!(
            "    \\gantttitlecalendar{{{}}} \\\\",
            options.title_calendar
        ));

        for task in chart.tasks() {
            lines.push(format!(
                "    \\ganttbar{{{}}}{{{}}}{{{}}} \\\\",
                escape_latex(&task.name),
                iso(task.start_date()),
                iso(task.end_date())
            ));
        }

        lines.push("  \\end{ganttchart}".to_string());
        lines.push("\\end{tikzpicture}".to_string());
        lines.join("\n")
    }

    /// Render the chart to a file
    pub fn write_file<P: AsRef<Path>>(
        chart: &GanttChart,
        path: P,
        options: &TikzOptions,
    ) -> std::io::Result<()> {
        let path = path.as_ref();
        log::debug!("Writing TikZ chart to {}", path.display());
        fs::write(path, Self::render(chart, options))
    }
}

fn iso(date: chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Escape LaTeX special characters in a task name
pub fn escape_latex(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\\' => out.push_str("\\textbackslash{}"),
            '~' => out.push_str("\\textasciitilde{}"),
            '^' => out.push_str("\\textasciicircum{}"),
            '&' | '%' | '$' | '#' | '_' | '{' | '}' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}
