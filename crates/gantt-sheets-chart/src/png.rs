//! PNG output
//!
//! Rasterizes the SVG timeline, so both formats share one layout.

use std::fs;
use std::path::Path;

use resvg::tiny_skia::{Pixmap, Transform};
use resvg::usvg;

use crate::chart::GanttChart;
use crate::error::{ChartError, ChartResult};
use crate::svg::{SvgOptions, SvgWriter};

/// Options for PNG output
#[derive(Debug, Clone, PartialEq)]
pub struct PngOptions {
    /// Layout, colors and fonts of the underlying SVG
    pub svg: SvgOptions,
    /// Pixels per SVG unit. The default of 3.0 turns the 1800 px wide
    /// layout into an 18 inch figure at 300 dpi.
    pub scale: f32,
    /// Load the system fonts for labels. Without fonts the bars and grid
    /// are still drawn but text is left out.
    pub system_fonts: bool,
}

impl Default for PngOptions {
    fn default() -> Self {
        Self {
            svg: SvgOptions::default(),
            scale: 3.0,
            system_fonts: true,
        }
    }
}

/// Writes a chart as a PNG image
pub struct PngWriter;

impl PngWriter {
    /// Render the chart to PNG bytes
    pub fn render(chart: &GanttChart, options: &PngOptions) -> ChartResult<Vec<u8>> {
        if !(options.scale.is_finite() && options.scale > 0.0) {
            return Err(ChartError::Render(format!(
                "scale must be positive, got {}",
                options.scale
            )));
        }

        let svg = SvgWriter::render(chart, &options.svg);

        let mut usvg_options = usvg::Options::default();
        if options.system_fonts {
            usvg_options.fontdb_mut().load_system_fonts();
        }
        let tree = usvg::Tree::from_str(&svg, &usvg_options)
            .map_err(|e| ChartError::Render(e.to_string()))?;

        let size = tree.size();
        let width = (size.width() * options.scale).ceil() as u32;
        let height = (size.height() * options.scale).ceil() as u32;
        let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
            ChartError::Render(format!("cannot allocate a {width}x{height} image"))
        })?;

        resvg::render(
            &tree,
            Transform::from_scale(options.scale, options.scale),
            &mut pixmap.as_mut(),
        );
        log::debug!("Rasterized chart to {width}x{height} pixels");

        pixmap
            .encode_png()
            .map_err(|e| ChartError::Render(e.to_string()))
    }

    /// Render the chart to a file
    pub fn write_file<P: AsRef<Path>>(
        chart: &GanttChart,
        path: P,
        options: &PngOptions,
    ) -> ChartResult<()> {
        let path = path.as_ref();
        let png = Self::render(chart, options)?;
        log::debug!("Writing PNG chart to {}", path.display());
        fs::write(path, png)?;
        Ok(())
    }
}
