use anyhow::Result;
use clap::Parser;
use layermap::analysis::{analyze_repository, AnalyzeOptions};
use layermap::cli::{Cli, Commands, OutputFormat};
use layermap::config;
use layermap::io::output;
use layermap::rules::RuleTable;

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            path,
            format,
            output,
            rules,
            no_churn,
            no_parallel,
        } => {
            let table = match rules {
                Some(rules_path) => config::load_rules(&rules_path)?,
                None => RuleTable::builtin().clone(),
            };

            let report = analyze_repository(
                &path,
                &table,
                AnalyzeOptions {
                    no_churn,
                    no_parallel,
                },
            )?;

            match format {
                OutputFormat::Json => output::write_json(&report, output.as_deref())?,
                OutputFormat::Terminal => output::print_terminal(&report),
            }
        }
    }

    Ok(())
}
