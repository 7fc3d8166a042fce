//! Report rendering: JSON for machines, colored tables for terminals.

use crate::core::{Layer, RepoReport};
use crate::errors::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use std::io::Write;
use std::path::Path;

/// Serialize the full report as pretty JSON to a file or stdout.
pub fn write_json(report: &RepoReport, output: Option<&Path>) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    match output {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{json}")?;
        }
    }
    Ok(())
}

/// Print the layer and module rollups as terminal tables.
pub fn print_terminal(report: &RepoReport) {
    println!("{}", report.root.display().to_string().bold());
    println!("{}", report.description.italic());
    println!(
        "{} files, {} lines\n",
        report.total_files, report.total_loc
    );

    let mut layers = Table::new();
    layers.load_preset(UTF8_FULL);
    layers.set_header(vec!["Layer", "Files", "LOC"]);
    for (layer, totals) in report.layer_stats.iter() {
        layers.add_row(vec![
            Cell::new(colored_layer(layer)),
            Cell::new(totals.count),
            Cell::new(totals.loc),
        ]);
    }
    println!("{layers}\n");

    let mut modules = Table::new();
    modules.load_preset(UTF8_FULL);
    modules.set_header(vec!["Module", "Layer", "Files", "LOC", "Avg churn"]);
    for module in &report.modules {
        modules.add_row(vec![
            Cell::new(&module.name),
            Cell::new(colored_layer(module.layer)),
            Cell::new(module.files),
            Cell::new(module.loc),
            Cell::new(format!("{:.1}", module.churn_avg)),
        ]);
    }
    println!("{modules}");
}

fn colored_layer(layer: Layer) -> String {
    let name = layer.to_string();
    match layer {
        Layer::Presentation => name.magenta().to_string(),
        Layer::Application => name.blue().to_string(),
        Layer::Domain => name.green().to_string(),
        Layer::Infrastructure => name.yellow().to_string(),
        Layer::Tooling => name.white().to_string(),
    }
}
