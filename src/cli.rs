use clap::Parser;
use std::path::PathBuf;

use crate::application::dto::ReportFormat;
use crate::report_generation::domain::DisplayMode;

/// Fetch LEED Daylight Illuminance (Option II) results from Pollination
#[derive(Parser, Debug)]
#[command(name = "leed-report")]
#[command(version)]
#[command(
    about = "Fetch LEED Option II simulation results and build a local report bundle",
    long_about = None
)]
pub struct Args {
    /// Pollination run URL
    /// (https://app.pollination.cloud/projects/<owner>/<project>/jobs/<job-id>/runs/<run-id>)
    pub run_url: Option<String>,

    /// Pollination API key. Only needed for runs in private projects.
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Cache directory for downloaded result bundles
    #[arg(short = 'c', long)]
    pub cache_dir: Option<PathBuf>,

    /// Display mode for the merged model: shaded, surface,
    /// surfacewithedges, wireframe or points
    #[arg(short = 'd', long)]
    pub display_mode: Option<DisplayMode>,

    /// Report output format: text or json
    #[arg(short = 'f', long, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to this file instead of stdout
    #[arg(short = 'o', long)]
    pub output: Option<PathBuf>,

    /// Ignore any cached bundle and download everything again
    #[arg(long)]
    pub refresh: bool,

    /// Exit with code 1 when the run earns 1 credit or fewer
    #[arg(long)]
    pub strict: bool,

    /// Explicit config file path (default: ./leed-report.config.yml)
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_minimal() {
        let args = Args::parse_from(["leed-report", "https://app.pollination.cloud/projects/o/p/jobs/j/runs/r"]);
        assert!(args.run_url.is_some());
        assert_eq!(args.format, ReportFormat::Text);
        assert!(!args.refresh);
        assert!(!args.strict);
    }

    #[test]
    fn test_args_parse_full() {
        let args = Args::parse_from([
            "leed-report",
            "https://app.pollination.cloud/projects/o/p/jobs/j/runs/r",
            "-k",
            "secret",
            "-c",
            "cache",
            "-d",
            "shaded",
            "-f",
            "json",
            "-o",
            "report.json",
            "--refresh",
            "--strict",
        ]);
        assert_eq!(args.api_key.as_deref(), Some("secret"));
        assert_eq!(args.cache_dir, Some(PathBuf::from("cache")));
        assert_eq!(args.display_mode, Some(DisplayMode::Shaded));
        assert_eq!(args.format, ReportFormat::Json);
        assert_eq!(args.output, Some(PathBuf::from("report.json")));
        assert!(args.refresh);
        assert!(args.strict);
    }

    #[test]
    fn test_args_reject_bad_display_mode() {
        let result = Args::try_parse_from(["leed-report", "-d", "solid"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_args_reject_bad_format() {
        let result = Args::try_parse_from(["leed-report", "-f", "yaml"]);
        assert!(result.is_err());
    }
}
