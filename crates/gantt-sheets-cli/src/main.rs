//! Gantt Sheets CLI - Monday.com export conversion tool

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gantt_sheets::prelude::*;
use gantt_sheets::{default_output_path, extract_tasks, Color, PngOptions, PngWriter};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gantt")]
#[command(
    author,
    version,
    about = "Turn Monday.com spreadsheet exports into CSV and Gantt charts (TikZ, SVG, PNG)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the first worksheet as CSV and output to stdout or file
    #[command(alias = "csv")]
    ToCsv {
        /// Input export file (xlsx, xlsm, csv)
        input: PathBuf,

        /// Output CSV file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Field delimiter (default: comma)
        #[arg(short, long, default_value = ",")]
        delimiter: char,
    },

    /// Write a pgfgantt/TikZ chart
    Tikz {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output file (default: input name with .tikz)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Leave out the horizontal and vertical grid
        #[arg(long)]
        no_grid: bool,

        /// Width of one day
        #[arg(long, default_value = "0.8cm")]
        x_unit: String,
    },

    /// Write an SVG timeline
    Svg {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output file (default: input name with .svg)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Chart title
        #[arg(short, long)]
        title: Option<String>,

        /// Bar color as #RRGGBB (default: Monday green)
        #[arg(long)]
        bar_color: Option<Color>,
    },

    /// Write the SVG timeline as a PNG image
    Png {
        #[command(flatten)]
        chart: ChartArgs,

        /// Output file (default: input name with .png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Chart title
        #[arg(short, long)]
        title: Option<String>,

        /// Bar color as #RRGGBB (default: Monday green)
        #[arg(long)]
        bar_color: Option<Color>,

        /// Pixels per layout unit (3.0 gives 300 dpi on an 18 inch figure)
        #[arg(long, default_value_t = 3.0)]
        scale: f32,
    },

    /// List the rows that parse as tasks
    Tasks {
        #[command(flatten)]
        chart: ChartArgs,
    },

    /// Show information about an export
    Info {
        #[command(flatten)]
        chart: ChartArgs,
    },
}

/// Input and row interpretation shared by the chart commands
#[derive(Args)]
struct ChartArgs {
    /// Input export file (xlsx, xlsm, csv)
    input: PathBuf,

    /// Month names to accept: fr, en or any
    #[arg(short, long, default_value = "any")]
    locale: String,

    /// Task name column (0-based)
    #[arg(long, default_value_t = 0)]
    name_col: usize,

    /// Start date column (0-based)
    #[arg(long, default_value_t = 1)]
    start_col: usize,

    /// End date column (0-based)
    #[arg(long, default_value_t = 2)]
    end_col: usize,
}

impl ChartArgs {
    fn options(&self) -> Result<GanttOptions> {
        let options =
            GanttOptions::for_locale(&self.locale).context("Expected --locale fr, en or any")?;

        Ok(options.with_columns(ColumnMapping {
            name: self.name_col,
            start: self.start_col,
            end: self.end_col,
        }))
    }

    fn open(&self) -> Result<Table> {
        Table::open(&self.input)
            .with_context(|| format!("Failed to open '{}'", self.input.display()))
    }

    /// Build the chart, or `None` when no row holds a task
    fn chart(&self) -> Result<Option<GanttChart>> {
        let table = self.open()?;
        match chart_from_table(&table, &self.options()?) {
            Ok(chart) => Ok(Some(chart)),
            Err(e) if e.is_no_tasks() => {
                eprintln!("No valid tasks found.");
                Ok(None)
            }
            Err(e) => Err(e).context("Failed to build chart"),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::ToCsv {
            input,
            output,
            delimiter,
        } => to_csv(&input, output.as_deref(), delimiter),
        Commands::Tikz {
            chart,
            output,
            no_grid,
            x_unit,
        } => {
            let options = TikzOptions {
                hgrid: !no_grid,
                vgrid: !no_grid,
                x_unit,
                ..Default::default()
            };
            write_tikz(&chart, output, &options)
        }
        Commands::Svg {
            chart,
            output,
            title,
            bar_color,
        } => {
            let mut options = SvgOptions::default();
            if let Some(color) = bar_color {
                options.bar_color = color;
            }
            write_svg(&chart, output, title, &options)
        }
        Commands::Png {
            chart,
            output,
            title,
            bar_color,
            scale,
        } => {
            let mut options = PngOptions {
                scale,
                ..Default::default()
            };
            if let Some(color) = bar_color {
                options.svg.bar_color = color;
            }
            write_png(&chart, output, title, &options)
        }
        Commands::Tasks { chart } => list_tasks(&chart),
        Commands::Info { chart } => show_info(&chart),
    }
}

fn to_csv(input: &Path, output: Option<&Path>, delimiter: char) -> Result<()> {
    let table =
        Table::open(input).with_context(|| format!("Failed to open '{}'", input.display()))?;

    let options = CsvWriteOptions::default()
        .with_delimiter(delimiter)
        .context("Invalid delimiter")?;

    if let Some(output_path) = output {
        CsvWriter::write_file(&table, output_path, &options)
            .with_context(|| format!("Failed to write '{}'", output_path.display()))?;
        eprintln!("Wrote {} rows to '{}'", table.len(), output_path.display());
    } else {
        let csv_output =
            CsvWriter::write_string(&table, &options).context("Failed to format CSV")?;
        io::stdout()
            .write_all(csv_output.as_bytes())
            .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn write_tikz(args: &ChartArgs, output: Option<PathBuf>, options: &TikzOptions) -> Result<()> {
    let Some(chart) = args.chart()? else {
        return Ok(());
    };

    let output = output.unwrap_or_else(|| default_output_path(&args.input, "tikz"));
    TikzWriter::write_file(&chart, &output, options)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!(
        "Wrote {} tasks to '{}'",
        chart.tasks().len(),
        output.display()
    );
    Ok(())
}

fn write_svg(
    args: &ChartArgs,
    output: Option<PathBuf>,
    title: Option<String>,
    options: &SvgOptions,
) -> Result<()> {
    let Some(mut chart) = args.chart()? else {
        return Ok(());
    };
    if let Some(title) = title {
        chart = chart.with_title(title);
    }

    let output = output.unwrap_or_else(|| default_output_path(&args.input, "svg"));
    SvgWriter::write_file(&chart, &output, options)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!(
        "Wrote {} tasks to '{}'",
        chart.tasks().len(),
        output.display()
    );
    Ok(())
}

fn write_png(
    args: &ChartArgs,
    output: Option<PathBuf>,
    title: Option<String>,
    options: &PngOptions,
) -> Result<()> {
    let Some(mut chart) = args.chart()? else {
        return Ok(());
    };
    if let Some(title) = title {
        chart = chart.with_title(title);
    }

    let output = output.unwrap_or_else(|| default_output_path(&args.input, "png"));
    PngWriter::write_file(&chart, &output, options)
        .with_context(|| format!("Failed to write '{}'", output.display()))?;

    eprintln!(
        "Wrote {} tasks to '{}'",
        chart.tasks().len(),
        output.display()
    );
    Ok(())
}

fn list_tasks(args: &ChartArgs) -> Result<()> {
    let Some(chart) = args.chart()? else {
        return Ok(());
    };

    let mut stdout = io::stdout().lock();
    for task in chart.tasks() {
        writeln!(
            stdout,
            "{}\t{}\t{}",
            task.name,
            task.start_date(),
            task.end_date()
        )
        .context("Failed to write to stdout")?;
    }

    Ok(())
}

fn show_info(args: &ChartArgs) -> Result<()> {
    let table = args.open()?;
    let options = args.options()?;
    let tasks = extract_tasks(&table, &options.columns, &options.dates);

    println!("File: {}", args.input.display());
    println!("Rows: {}", table.len());
    println!("Widest row: {} cells", table.max_width());
    println!("Tasks: {}", tasks.len());

    match GanttChart::new(tasks) {
        Ok(chart) => println!(
            "Span: {} to {} ({} days)",
            chart.start(),
            chart.end(),
            chart.axis().span_days()
        ),
        Err(_) => println!("Span: none"),
    }

    Ok(())
}
