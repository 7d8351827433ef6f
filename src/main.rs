use anyhow::{Result, bail};
use clap::Parser;
use tsel::graph::DependencyGraph;
use tsel::{changes, cli, config, impact};

fn load_graph(input: &cli::InputArgs) -> Result<DependencyGraph> {
    if let Some(cmd) = &input.graph_cmd {
        DependencyGraph::from_command(cmd)
    } else if let Some(path) = &input.graph {
        DependencyGraph::from_path(path)
    } else {
        bail!("supply a dependency graph via --graph or --graph-cmd")
    }
}

fn load_changed(input: &cli::InputArgs) -> Result<Vec<String>> {
    let mut changed = input.changed.clone();
    if input.git_diff {
        let base = input
            .base
            .clone()
            .unwrap_or_else(|| config::Config::get().git_base.clone());
        changed.extend(changes::changed_from_git(&input.repo, &base)?);
    } else if let Some(path) = &input.changed_file {
        changed.extend(changes::changed_from_path(path)?);
    } else if input.changed.is_empty() {
        bail!("supply changed files as arguments, --changed-file, or --git-diff");
    }
    Ok(changed)
}

/// Print the report. `lines`/`args` feed the test runner and always carry
/// the full list; the JSON echo is capped at the configured report maximum.
fn emit(format: cli::OutputFormat, report: impact::ImpactReport, select_tests: bool) -> Result<()> {
    match format {
        cli::OutputFormat::Lines => {
            let list = if select_tests {
                &report.tests
            } else {
                &report.impacted
            };
            for path in list {
                println!("{path}");
            }
        }
        cli::OutputFormat::Args => {
            let list = if select_tests {
                &report.tests
            } else {
                &report.impacted
            };
            println!("{}", list.join(" "));
        }
        cli::OutputFormat::Json => {
            let capped = report.capped(config::Config::get().max_report);
            println!("{}", serde_json::to_string_pretty(&capped)?);
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = cli::Args::parse();

    match args.command {
        cli::Command::Select { input, test_prefix } => {
            let graph = load_graph(&input)?;
            let changed = load_changed(&input)?;
            let prefix =
                test_prefix.unwrap_or_else(|| config::Config::get().test_prefix.clone());
            let report = impact::build_report(&graph, &changed, &prefix);
            emit(input.format, report, true)
        }
        cli::Command::Impact { input } => {
            let graph = load_graph(&input)?;
            let changed = load_changed(&input)?;
            let prefix = config::Config::get().test_prefix.clone();
            let report = impact::build_report(&graph, &changed, &prefix);
            emit(input.format, report, false)
        }
    }
}
