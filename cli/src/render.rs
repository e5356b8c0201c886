use std::io::Write;

use scorer::{Prediction, ScoreBreakdown};
use serde::Serialize;
use session::PredictionSession;

/// Snapshot of what the presenter shows for a session.
#[derive(Debug, Serialize)]
pub struct Report {
    pub entries: usize,
    pub warmup_progress: f64,
    pub prediction: Option<Prediction>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
}

impl Report {
    pub fn from_session(session: &PredictionSession, explain: bool) -> Self {
        let breakdown = session.explain();
        let prediction = breakdown
            .as_ref()
            .map(|b| Prediction::new(b.result, session.config().threshold));

        Self {
            entries: session.history().len(),
            warmup_progress: session.history().warmup_progress(),
            prediction,
            breakdown: breakdown.filter(|_| explain),
        }
    }

    pub fn write_text<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        let Some(prediction) = &self.prediction else {
            return writeln!(out, "Add data to get prediction.");
        };

        writeln!(out, "Entries so far: {}", self.entries)?;
        writeln!(out, "Warm-up: {:.0}%", self.warmup_progress * 100.0)?;
        writeln!(out, "Prediction: {prediction}")?;

        if let Some(b) = &self.breakdown {
            writeln!(out, "  base score:   {:.4}", b.base_score)?;
            writeln!(out, "  trend score:  {:.4}", b.trend_score)?;
            writeln!(
                out,
                "  streak:       {} ({:+.2})",
                b.streak_length, b.streak_score
            )?;
            writeln!(
                out,
                "  volatility:   {:.4}{}",
                b.volatility,
                if b.dampened { " (dampened)" } else { "" }
            )?;
            writeln!(out, "  above/under:  {:.4} / {:.4}", b.result.above, b.result.under)?;
        }

        Ok(())
    }

    pub fn write_json<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)?;
        Ok(())
    }
}
