use std::io::Write;

use moodlift_core::traits::{MessageStore, SentimentScorer};
use moodlift_core::AppError;

use super::write_response;
use crate::args::ClassifyArgs;
use crate::runtime::Runtime;

pub fn handle_classify<S, M, W>(
    runtime: &Runtime<S, M>,
    args: &ClassifyArgs,
    out: &mut W,
) -> Result<(), AppError>
where
    S: SentimentScorer,
    M: MessageStore,
    W: Write,
{
    let response = runtime.respond(&args.joined_text())?;
    if args.json {
        let json = serde_json::to_string_pretty(&response).map_err(std::io::Error::from)?;
        writeln!(out, "{json}")?;
    } else {
        write_response(out, &response, args.explain)?;
    }
    Ok(())
}
