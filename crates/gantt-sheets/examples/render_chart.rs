//! Render a small board as TikZ and SVG.
//!
//! Run with: cargo run --example render_chart -p gantt-sheets

use gantt_sheets::prelude::*;

fn main() -> Result<()> {
    let rows = [
        ["Roadmap Q1", "", ""],
        ["Name", "Start", "End"],
        ["Design", "05-janv.-2026", "27-févr.-2026"],
        ["Build", "02-mars-2026", "15-mai-2026"],
        ["Launch", "18-May-2026", "29-May-2026"],
    ];
    let table: Table = rows
        .iter()
        .map(|row| row.iter().map(|cell| cell.to_string()).collect())
        .collect();

    let chart = chart_from_table(&table, &GanttOptions::default())?.with_title("Roadmap Q1");

    println!("{}", TikzWriter::render(&chart, &TikzOptions::default()));

    let svg_path = std::env::temp_dir().join("roadmap.svg");
    SvgWriter::write_file(&chart, &svg_path, &SvgOptions::default())?;
    println!("Wrote {}", svg_path.display());

    for task in chart.tasks() {
        println!("{:<10} {}", task.name, task.interval_label());
    }

    Ok(())
}
