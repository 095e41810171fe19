use std::borrow::Cow;
use std::io::{BufRead, Write};

use moodlift_core::traits::{MessageStore, SentimentScorer};
use moodlift_core::AppError;

use super::write_response;
use crate::runtime::Runtime;

const PROMPT: &str = "How are you feeling today? ";

/// Answer each input line until `quit`, `exit`, or end of input.
///
/// Blank lines are skipped. Invalid UTF-8 is decoded lossily. A failed line
/// is reported and the loop continues.
pub fn run_interactive<S, M, R, W>(
    runtime: &Runtime<S, M>,
    mut input: R,
    out: &mut W,
) -> Result<(), AppError>
where
    S: SentimentScorer,
    M: MessageStore,
    R: BufRead,
    W: Write,
{
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        if matches!(line, Cow::Owned(_)) {
            tracing::warn!("input line was not valid UTF-8, decoded lossily");
        }
        let text = line.trim();
        if text.eq_ignore_ascii_case("quit") || text.eq_ignore_ascii_case("exit") {
            break;
        }
        if !text.is_empty() {
            match runtime.respond(text) {
                Ok(response) => write_response(out, &response, false)?,
                Err(err) => {
                    tracing::error!(error = %err, "failed to answer input");
                    writeln!(out, "Sorry, something went wrong: {err}")?;
                }
            }
            writeln!(out)?;
        }
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }
    writeln!(out)?;
    Ok(())
}
