//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for section reports and the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable console output
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for socialflip_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => socialflip_domain::OutputFormat::Text,
            OutputFormat::Json => socialflip_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for socialflip
#[derive(Parser, Debug)]
#[command(name = "socialflip")]
#[command(author, version, about = "Content repurposing assessment - metrics, summary and PDF report")]
#[command(long_about = r#"
SocialFlip walks you through a five-step content repurposing assessment:

1. Baseline:     hours, cost and volume of your content today
2. Workload:     stress, platforms and overtime
3. Repurposing:  primary format, engagement platforms, repurposing rate
4. ROI:          revenue per piece, leads and conversion
5. Time savings: adaptation time, team size and hourly rate

Every answer updates that step's metrics immediately. Once all five steps are
answered you get a summary and can export a PDF report.

Configuration files are loaded from (in priority order):
1. SOCIALFLIP_<SECTION>__<KEY> environment variables
2. --config <path>     Explicit config file
3. ./socialflip.toml   Project-level config
4. ~/.config/socialflip/config.toml   Global config

Example:
  socialflip
  socialflip --answers answers.toml --pdf report.pdf
  socialflip --answers answers.json --output json
"#)]
pub struct Cli {
    /// Evaluate an answers file (.toml or .json) instead of asking interactively
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Export the PDF report, optionally to PATH instead of the configured default
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub pdf: Option<Option<PathBuf>>,

    /// Do not register a lead before the assessment
    #[arg(long)]
    pub skip_lead: bool,

    /// Lead name (prefills the registration prompt)
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Lead email (prefills the registration prompt)
    #[arg(long, value_name = "EMAIL")]
    pub email: Option<String>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Append structured assessment events (JSONL) to this file
    #[arg(long, value_name = "PATH")]
    pub event_log: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

impl Cli {
    /// Both lead fields were given on the command line
    pub fn has_lead(&self) -> bool {
        self.name.is_some() && self.email.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_non_interactive_flags() {
        let cli = Cli::parse_from([
            "socialflip",
            "--answers",
            "answers.toml",
            "--output",
            "json",
            "--pdf",
            "out.pdf",
            "-vv",
            "--skip-lead",
        ]);
        assert_eq!(cli.answers, Some(PathBuf::from("answers.toml")));
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.pdf, Some(Some(PathBuf::from("out.pdf"))));
        assert_eq!(cli.verbose, 2);
        assert!(cli.skip_lead);
        assert!(!cli.has_lead());
    }

    #[test]
    fn test_bare_pdf_flag_uses_default_path() {
        let cli = Cli::parse_from(["socialflip", "--pdf"]);
        assert_eq!(cli.pdf, Some(None));
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["socialflip"]);
        assert!(cli.answers.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }
}
