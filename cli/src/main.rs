pub mod cli;
mod config;
mod interactive;
mod render;

use std::io::{self, BufWriter, Write};

use anyhow::Context;
use clap::Parser;
use common::logger::{LogFormat, TraceId, child_span, init_logger, root_span};
use scorer::ScorerConfig;
use session::PredictionSession;

use cli::{Cli, Command, PredictArgs, SourceArgs};
use config::AppConfig;
use render::Report;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let app_cfg = AppConfig::from_env()?;

    let log_format = if cli.json_logs {
        LogFormat::Json
    } else {
        app_cfg.log_format
    };
    init_logger("crash-predictor", log_format);

    let scorer_cfg = app_cfg.scorer_config(cli.threshold, cli.trend_window)?;
    tracing::debug!(?scorer_cfg, "resolved scorer configuration");

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match cli.command {
        Command::Predict(args) => run_predict(scorer_cfg, args, &mut out)?,
        Command::Interactive(args) => {
            let mut session = open_session(scorer_cfg, &args.source)?;
            interactive::run(&mut session, io::stdin().lock(), &mut out)?;
        }
    }

    out.flush()?;
    Ok(())
}

/// Creates a session, preloaded from `--file` when given.
fn open_session(cfg: ScorerConfig, source: &SourceArgs) -> anyhow::Result<PredictionSession> {
    let mut session = PredictionSession::new(cfg);

    if let Some(path) = &source.file {
        let _span = child_span("load_csv").entered();
        let loaded = session
            .load_csv(path, &source.column)
            .with_context(|| format!("could not load {}", path.display()))?;
        tracing::info!(loaded, "history loaded");
    }

    Ok(session)
}

fn run_predict<W: Write>(cfg: ScorerConfig, args: PredictArgs, out: &mut W) -> anyhow::Result<()> {
    let trace_id = TraceId::new();
    let span = root_span("predict", &trace_id);
    let _guard = span.enter();

    let mut session = open_session(cfg, &args.source)?;
    for raw in &args.values {
        session
            .add_entry(raw)
            .with_context(|| format!("invalid entry {raw:?}"))?;
    }
    span.record("entries", session.history().len());

    let report = Report::from_session(&session, args.explain);
    if args.json {
        report.write_json(out)?;
    } else {
        report.write_text(out)?;
    }

    Ok(())
}
