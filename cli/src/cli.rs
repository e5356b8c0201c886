use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use session::DEFAULT_COLUMN;

#[derive(Debug, Parser)]
#[command(name = "crash-predictor", version, about = "Above/under confidence for crash-round multipliers")]
pub struct Cli {
    /// Decision threshold as a multiplier (overrides PREDICTOR_THRESHOLD)
    #[arg(long, global = true)]
    pub threshold: Option<f64>,

    /// Number of recent rounds used for the trend signal (overrides PREDICTOR_TREND_WINDOW)
    #[arg(long, global = true)]
    pub trend_window: Option<usize>,

    /// Emit logs as JSON regardless of APP_ENV
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a history once and print the prediction
    Predict(PredictArgs),

    /// Read entries from stdin line by line (`reset`, `predict`, `quit`)
    Interactive(InteractiveArgs),
}

/// Where the initial history comes from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// CSV file with a header row; its values are used verbatim
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// CSV column holding the multipliers
    #[arg(long, default_value = DEFAULT_COLUMN)]
    pub column: String,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Extra entries appended after the file, e.g. `1.87 187 3.2` (percentages are normalized)
    pub values: Vec<String>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,

    /// Include the per-signal breakdown
    #[arg(long)]
    pub explain: bool,
}

#[derive(Debug, Args)]
pub struct InteractiveArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_predict_with_values_and_globals() {
        let cli = Cli::parse_from([
            "crash-predictor",
            "predict",
            "1.87",
            "187",
            "--threshold",
            "1.5",
            "--explain",
        ]);

        assert_eq!(cli.threshold, Some(1.5));
        assert_eq!(cli.trend_window, None);

        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.values, vec!["1.87", "187"]);
        assert!(args.explain);
        assert!(!args.json);
        assert_eq!(args.source.column, "multiplier");
    }

    #[test]
    fn parses_interactive_with_file() {
        let cli = Cli::parse_from([
            "crash-predictor",
            "--trend-window",
            "5",
            "interactive",
            "--file",
            "rounds.csv",
        ]);

        assert_eq!(cli.trend_window, Some(5));
        let Command::Interactive(args) = cli.command else {
            panic!("expected interactive");
        };
        assert_eq!(args.source.file, Some(PathBuf::from("rounds.csv")));
    }
}
