use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "tsel",
    version,
    about = "Change-impact test selector",
    after_help = r#"Examples:
  tsel select --graph deps.json src/core.py
  tsel select --graph-cmd 'depscan --json' --git-diff --base origin/main
  tsel select --graph - --changed-file changed.txt --test-prefix tests/
  tsel impact --graph deps.json --changed-file - --format json
"#
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the impacted test files for a set of changed files.
    Select {
        #[command(flatten)]
        input: InputArgs,
        /// Test-path prefix to keep; plain string prefix, not segment-aware.
        #[arg(long)]
        test_prefix: Option<String>,
    },
    /// Print the full impact set without the test-path filter.
    Impact {
        #[command(flatten)]
        input: InputArgs,
    },
}

#[derive(ClapArgs)]
pub struct InputArgs {
    /// Dependency graph JSON file; `-` reads stdin.
    #[arg(long, conflicts_with = "graph_cmd")]
    pub graph: Option<PathBuf>,
    /// Shell command whose stdout is the dependency graph JSON.
    #[arg(long)]
    pub graph_cmd: Option<String>,
    /// Changed file paths, given directly.
    #[arg(value_name = "CHANGED")]
    pub changed: Vec<String>,
    /// Newline-delimited changed file list; `-` reads stdin.
    #[arg(long, conflicts_with = "git_diff")]
    pub changed_file: Option<PathBuf>,
    /// Ask git for the files changed relative to --base.
    #[arg(long)]
    pub git_diff: bool,
    /// Diff base ref for --git-diff.
    #[arg(long)]
    pub base: Option<String>,
    /// Repository root for --git-diff.
    #[arg(long, default_value = ".")]
    pub repo: PathBuf,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// One identifier per line.
    Lines,
    /// Single space-joined line, ready as runner argv.
    Args,
    /// Pretty-printed JSON report.
    Json,
}
