//! Quote store maintenance: seed, add, stats.

use std::io::Write;

use moodlift_core::models::NewQuote;
use moodlift_core::AppError;
use moodlift_storage::QuoteStore;

use crate::args::AddArgs;

pub fn handle_seed<W: Write>(store: &QuoteStore, out: &mut W) -> Result<(), AppError> {
    let inserted = store.seed_if_empty()?;
    if inserted == 0 {
        writeln!(out, "Quote store already populated ({} quotes).", store.count()?)?;
    } else {
        writeln!(out, "Inserted {inserted} sample quotes.")?;
    }
    Ok(())
}

pub fn handle_add<W: Write>(store: &QuoteStore, args: AddArgs, out: &mut W) -> Result<(), AppError> {
    let quote = NewQuote {
        mood: args.mood,
        quote: args.quote,
        author: args.author,
        category: args.category,
        keywords: args.keywords,
    };
    let id = store.insert(&quote)?;
    tracing::info!(id, mood = %quote.mood, "added quote");
    writeln!(out, "Added quote #{id}.")?;
    Ok(())
}

pub fn handle_stats<W: Write>(store: &QuoteStore, out: &mut W) -> Result<(), AppError> {
    let counts = store.count_by_mood()?;
    // Counts every row, including moods outside the label set in older databases.
    let total = store.count()?;
    for (mood, n) in counts {
        writeln!(out, "{:<10} {n:>5}", mood.as_str())?;
    }
    writeln!(out, "{:<10} {total:>5}", "total")?;
    Ok(())
}
