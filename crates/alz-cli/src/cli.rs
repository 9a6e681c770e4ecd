//! CLI argument definitions.

use std::path::PathBuf;

use alz_cli::{AnalysisConfig, DEFAULT_CHART_DIR, DEFAULT_DATA_PATH};
use alz_model::Hypothesis;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "alz-analysis",
    version,
    about = "Alzheimer's risk factor analysis",
    long_about = "Test four hypotheses about Alzheimer's disease risk factors.\n\n\
                  Smoking (chi-square), education (ANOVA), sleep quality and\n\
                  physical activity (t-tests). Runs `run` when no command is given."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load the dataset, run the hypothesis tests and render their charts.
    Run(RunArgs),

    /// List the hypotheses and their statistical tests.
    Hypotheses,
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to the dataset CSV file.
    #[arg(long = "data", value_name = "PATH", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Directory for the SVG charts.
    #[arg(long = "chart-dir", value_name = "DIR", default_value = DEFAULT_CHART_DIR)]
    pub chart_dir: PathBuf,

    /// Skip chart rendering.
    #[arg(long = "no-charts")]
    pub no_charts: bool,

    /// Run only this hypothesis (repeatable).
    #[arg(long = "only", value_name = "HYPOTHESIS", value_enum)]
    pub only: Vec<HypothesisArg>,

    /// Summary output format on stdout.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            chart_dir: PathBuf::from(DEFAULT_CHART_DIR),
            no_charts: false,
            only: Vec::new(),
            format: OutputFormatArg::Table,
        }
    }
}

impl RunArgs {
    pub fn to_config(&self) -> AnalysisConfig {
        AnalysisConfig {
            data_path: self.data.clone(),
            chart_dir: self.chart_dir.clone(),
            render_charts: !self.no_charts,
            hypotheses: self.only.iter().map(|&arg| Hypothesis::from(arg)).collect(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum HypothesisArg {
    #[value(alias = "h1")]
    Lifestyle,
    #[value(alias = "h4")]
    PhysicalActivity,
    #[value(alias = "h2")]
    Education,
    #[value(alias = "h3")]
    Sleep,
}

impl From<HypothesisArg> for Hypothesis {
    fn from(arg: HypothesisArg) -> Self {
        match arg {
            HypothesisArg::Lifestyle => Hypothesis::Lifestyle,
            HypothesisArg::PhysicalActivity => Hypothesis::PhysicalActivity,
            HypothesisArg::Education => Hypothesis::Education,
            HypothesisArg::Sleep => Hypothesis::Sleep,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormatArg {
    #[default]
    Table,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
