use std::io::{BufRead, Write};

use common::logger::{TraceId, root_span};
use session::PredictionSession;
use tracing::warn;

use crate::render::Report;

/// One parsed line of interactive input.
#[derive(Debug, PartialEq)]
enum Line<'a> {
    Predict,
    Reset,
    Quit,
    Entry(&'a str),
}

fn parse_line(line: &str) -> Line<'_> {
    match line.trim() {
        "" | "predict" => Line::Predict,
        "reset" => Line::Reset,
        "quit" | "exit" => Line::Quit,
        other => Line::Entry(other),
    }
}

/// Runs the line-oriented session until `quit` or end of input.
///
/// Every accepted entry or reset re-renders the prediction, like a page refresh.
pub fn run<R, W>(session: &mut PredictionSession, input: R, out: &mut W) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        out,
        "Enter a multiplier or percentage (e.g. 1.87 or 187); `reset`, `predict`, `quit`."
    )?;

    for line in input.lines() {
        let line = line?;

        let trace_id = TraceId::new();
        let span = root_span("interactive", &trace_id);
        let _guard = span.enter();

        match parse_line(&line) {
            Line::Quit => break,
            Line::Predict => {}
            Line::Reset => {
                session.reset();
                writeln!(out, "All data cleared.")?;
            }
            Line::Entry(raw) => match session.add_entry(raw) {
                Ok(value) => writeln!(out, "Added {value}x")?,
                Err(e) => {
                    warn!(error = %e, "rejected entry");
                    writeln!(out, "Invalid number.")?;
                    continue;
                }
            },
        }

        span.record("entries", session.history().len());
        Report::from_session(session, false).write_text(out)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use scorer::ScorerConfig;

    fn drive(script: &str) -> (PredictionSession, String) {
        let mut session = PredictionSession::new(ScorerConfig::default());
        let mut out = Vec::new();
        run(&mut session, script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn classifies_lines() {
        assert_eq!(parse_line("  "), Line::Predict);
        assert_eq!(parse_line("predict"), Line::Predict);
        assert_eq!(parse_line("reset\n"), Line::Reset);
        assert_eq!(parse_line("exit"), Line::Quit);
        assert_eq!(parse_line(" 187 "), Line::Entry("187"));
    }

    #[test]
    fn entries_are_normalized_and_scored() {
        let (session, out) = drive("187\n3.5\n");

        assert_eq!(session.history().as_slice(), &[1.87, 3.5]);
        assert!(out.contains("Added 1.87x"));
        assert!(out.contains("Entries so far: 2"));
        assert!(out.contains("Prediction: "));
    }

    #[test]
    fn invalid_input_is_reported_and_skipped() {
        let (session, out) = drive("nope\n2.5\n");

        assert!(out.contains("Invalid number."));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn reset_clears_and_asks_for_data() {
        let (session, out) = drive("2.5\nreset\n");

        assert!(session.history().is_empty());
        assert!(out.contains("All data cleared."));
        assert!(out.trim_end().ends_with("Add data to get prediction."));
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = drive("1.5\nquit\n2.5\n");
        assert_eq!(session.history().as_slice(), &[1.5]);
    }
}
