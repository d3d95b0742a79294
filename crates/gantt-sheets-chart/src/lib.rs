//! # gantt-sheets-chart
//!
//! Gantt chart layout and output for gantt-sheets.
//!
//! A [`GanttChart`] holds the parsed tasks and their shared [`TimeAxis`]; the
//! writers turn it into pgfgantt/TikZ markup ([`TikzWriter`]), a standalone
//! SVG timeline ([`SvgWriter`]) or that timeline rasterized ([`PngWriter`]).

mod axis;
mod chart;
mod color;
mod error;
mod png;
mod svg;
mod tikz;

pub use axis::TimeAxis;
pub use chart::GanttChart;
pub use color::Color;
pub use error::{ChartError, ChartResult};
pub use png::{PngOptions, PngWriter};
pub use svg::{escape_xml, SvgOptions, SvgWriter, MONDAY_GREEN};
pub use tikz::{escape_latex, TikzOptions, TikzWriter};
