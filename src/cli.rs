use std::path::PathBuf;

use clap::Parser;

use crate::models::Ecosystem;

#[derive(Parser, Debug)]
#[command(
    name = "deps-csv",
    about = "Find dependency manifests under a directory and list their dependencies as CSV",
    version
)]
pub struct Cli {
    /// Directory to scan
    pub root: PathBuf,

    /// Output file [default: dependencies.csv, or dependencies.json with --format json]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, default_value = "csv", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Config file [default: <ROOT>/.deps-csv/config.toml, fallback ~/.config/deps-csv/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip manifests of an ecosystem (repeatable)
    #[arg(long, value_name = "ECOSYSTEM")]
    pub exclude: Vec<EcosystemArg>,

    /// Follow symlinked directories
    #[arg(long)]
    pub follow_links: bool,

    /// Print a per-ecosystem summary table
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

impl Cli {
    /// Explicit output path, or the default file name for the chosen format.
    pub fn output_path(&self) -> PathBuf {
        match (&self.output, self.format) {
            (Some(path), _) => path.clone(),
            (None, OutputFormat::Csv) => PathBuf::from("dependencies.csv"),
            (None, OutputFormat::Json) => PathBuf::from("dependencies.json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum EcosystemArg {
    Npm,
    Pip,
    Go,
    Gem,
    Cargo,
    Maven,
    Gradle,
    Composer,
}

impl From<&EcosystemArg> for Ecosystem {
    fn from(arg: &EcosystemArg) -> Self {
        match arg {
            EcosystemArg::Npm => Ecosystem::Npm,
            EcosystemArg::Pip => Ecosystem::Pip,
            EcosystemArg::Go => Ecosystem::Go,
            EcosystemArg::Gem => Ecosystem::Gem,
            EcosystemArg::Cargo => Ecosystem::Cargo,
            EcosystemArg::Maven => Ecosystem::Maven,
            EcosystemArg::Gradle => Ecosystem::Gradle,
            EcosystemArg::Composer => Ecosystem::Composer,
        }
    }
}
