//! Command handlers. Each writes its output to the given writer so tests can
//! capture it.

pub mod classify;
pub mod interactive;
pub mod manage;

use std::io::Write;

use moodlift_classifier::ClassificationSource;

use crate::runtime::Response;

/// Plain-text rendering of a response.
pub(crate) fn write_response<W: Write>(
    out: &mut W,
    response: &Response,
    explain: bool,
) -> std::io::Result<()> {
    writeln!(out, "Detected mood: {}", response.mood)?;
    writeln!(out, "Quote: {}", response.message)?;
    if explain {
        match response.source {
            ClassificationSource::Rule { pattern } => {
                writeln!(out, "Decided by: pattern rule {pattern}")?;
            }
            ClassificationSource::Fallback { score, reason } => {
                writeln!(
                    out,
                    "Decided by: sentiment fallback ({}; compound {:.4}, neutral ratio {:.3})",
                    reason.as_str(),
                    score.compound,
                    score.neutral_ratio
                )?;
            }
        }
    }
    Ok(())
}
