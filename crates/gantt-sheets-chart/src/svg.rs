//! SVG output
//!
//! A Monday.com style timeline: one rounded bar per task, the task name and its
//! date interval to the left of the plot, a light vertical grid line on the first
//! of every month, and month labels along the bottom axis.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;

use crate::chart::GanttChart;
use crate::color::Color;

/// Monday.com "done" green
pub const MONDAY_GREEN: Color = Color::rgb(0x6A, 0xB5, 0x47);

/// Options for SVG output (sizes in pixels)
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Total image width
    pub width: u32,
    /// Width reserved for task labels, left of the plot
    pub label_width: u32,
    /// Height of one task row
    pub row_height: u32,
    /// Bar thickness
    pub bar_thickness: u32,
    /// Space below the plot for month labels
    pub axis_height: u32,
    /// Space above the first row
    pub margin_top: u32,
    /// Space right of the plot
    pub margin_right: u32,
    /// Font family for all text
    pub font_family: String,
    /// Task name font size
    pub name_font_size: u32,
    /// Interval and tick label font size
    pub label_font_size: u32,
    /// Bar color
    pub bar_color: Color,
    /// Task name color
    pub text_main: Color,
    /// Interval and tick label color
    pub text_sub: Color,
    /// Month grid line color
    pub grid_color: Color,
    /// Bottom axis line color
    pub spine_color: Color,
    /// Background color
    pub background: Color,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 1800,
            label_width: 540,
            row_height: 64,
            bar_thickness: 26,
            axis_height: 110,
            margin_top: 40,
            margin_right: 80,
            font_family: "Helvetica, Arial, sans-serif".to_string(),
            name_font_size: 24,
            label_font_size: 20,
            bar_color: MONDAY_GREEN,
            text_main: Color::rgb(0x33, 0x33, 0x33),
            text_sub: Color::rgb(0x88, 0x88, 0x88),
            grid_color: Color::rgb(0xF4, 0xF4, 0xF4),
            spine_color: Color::rgb(0xCC, 0xCC, 0xCC),
            background: Color::rgb(0xFF, 0xFF, 0xFF),
        }
    }
}

/// Pixel geometry shared by every element of one rendering
struct Layout {
    plot_left: f64,
    plot_right: f64,
    plot_top: f64,
    plot_bottom: f64,
    row_height: f64,
    width: f64,
    height: f64,
}

impl Layout {
    fn new(chart: &GanttChart, options: &SvgOptions) -> Self {
        let title_space = if chart.title.is_some() {
            f64::from(options.name_font_size) * 2.0
        } else {
            0.0
        };
        let rows = chart.tasks().len() as f64;
        let row_height = f64::from(options.row_height);
        let plot_top = f64::from(options.margin_top) + title_space;
        let plot_bottom = plot_top + row_height * (rows + 0.2);
        let width = f64::from(options.width);
        let plot_left = f64::from(options.label_width).min(width);
        let plot_right = (width - f64::from(options.margin_right)).max(plot_left + 1.0);

        Self {
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            row_height,
            width,
            height: plot_bottom + f64::from(options.axis_height),
        }
    }

    fn x(&self, chart: &GanttChart, date: NaiveDate) -> f64 {
        self.plot_left + chart.axis().fraction(date) * (self.plot_right - self.plot_left)
    }

    /// Vertical center of row `index`, first task at the top
    fn row_center(&self, index: usize) -> f64 {
        self.plot_top + self.row_height * (index as f64 + 0.6)
    }
}

/// Writes a chart as a standalone SVG document
pub struct SvgWriter;

impl SvgWriter {
    /// Render the chart to an SVG string
    pub fn render(chart: &GanttChart, options: &SvgOptions) -> String {
        let layout = Layout::new(chart, options);
        let mut svg = String::new();

        // Writing to a String cannot fail.
        let _ = Self::render_into(&mut svg, chart, options, &layout);
        svg
    }

    /// Render the chart to a file
    pub fn write_file<P: AsRef<Path>>(
        chart: &GanttChart,
        path: P,
        options: &SvgOptions,
    ) -> std::io::Result<()> {
        let path = path.as_ref();
        log::debug!("Writing SVG chart to {}", path.display());
        fs::write(path, Self::render(chart, options))
    }

    fn render_into(
        svg: &mut String,
        chart: &GanttChart,
        options: &SvgOptions,
        layout: &Layout,
    ) -> std::fmt::Result {
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w:.0}" height="{h:.0}" viewBox="0 0 {w:.0} {h:.0}" font-family="{font}">"#,
            w = layout.width,
            h = layout.height,
            font = escape_xml(&options.font_family),
        )?;
        writeln!(
            svg,
            r#"  <rect width="100%" height="100%" fill="{}"/>"#,
            options.background
        )?;

        if let Some(title) = &chart.title {
            writeln!(
                svg,
                r#"  <text x="{:.1}" y="{:.1}" font-size="{}" font-weight="bold" fill="{}">{}</text>"#,
                layout.plot_left,
                f64::from(options.margin_top) + f64::from(options.name_font_size),
                options.name_font_size + 4,
                options.text_main,
                escape_xml(title)
            )?;
        }

        // Month grid and tick labels
        writeln!(svg, r#"  <g class="grid">"#)?;
        for tick in chart.axis().month_ticks() {
            let x = layout.x(chart, tick);
            writeln!(
                svg,
                r#"    <line x1="{x:.1}" y1="{:.1}" x2="{x:.1}" y2="{:.1}" stroke="{}" stroke-width="1.5"/>"#,
                layout.plot_top,
                layout.plot_bottom,
                options.grid_color
            )?;
            let y = layout.plot_bottom + f64::from(options.label_font_size) * 1.2;
            writeln!(
                svg,
                r#"    <text transform="translate({x:.1},{y:.1}) rotate(-45)" text-anchor="end" font-size="{}" fill="{}">{}</text>"#,
                options.label_font_size,
                options.text_sub,
                tick.format("%b %Y")
            )?;
        }
        writeln!(svg, "  </g>")?;

        writeln!(
            svg,
            r#"  <line class="spine" x1="{:.1}" y1="{y:.1}" x2="{:.1}" y2="{y:.1}" stroke="{}" stroke-width="1"/>"#,
            layout.plot_left,
            layout.plot_right,
            options.spine_color,
            y = layout.plot_bottom
        )?;

        // Bars and labels
        let label_x = layout.plot_left - 0.02 * (layout.plot_right - layout.plot_left);
        for (index, task) in chart.tasks().iter().enumerate() {
            let y = layout.row_center(index);
            let x1 = layout.x(chart, task.start_date());
            let x2 = layout.x(chart, task.end_date());

            writeln!(svg, r#"  <g class="task">"#)?;
            writeln!(
                svg,
                r#"    <line x1="{x1:.1}" y1="{y:.1}" x2="{x2:.1}" y2="{y:.1}" stroke="{}" stroke-width="{}" stroke-linecap="round"/>"#,
                options.bar_color,
                options.bar_thickness
            )?;
            writeln!(
                svg,
                r#"    <text x="{label_x:.1}" y="{:.1}" text-anchor="end" font-size="{}" font-weight="bold" fill="{}">{}</text>"#,
                y - 4.0,
                options.name_font_size,
                options.text_main,
                escape_xml(&task.name)
            )?;
            writeln!(
                svg,
                r#"    <text x="{label_x:.1}" y="{:.1}" text-anchor="end" font-size="{}" fill="{}">{}</text>"#,
                y + f64::from(options.label_font_size),
                options.label_font_size,
                options.text_sub,
                escape_xml(&task.interval_label())
            )?;
            writeln!(svg, "  </g>")?;
        }

        write!(svg, "</svg>")
    }
}

/// Escape text for use in XML content and attribute values
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
