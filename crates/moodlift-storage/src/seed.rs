//! Built-in sample quotes, inserted into an empty database.

use moodlift_core::errors::StorageError;
use moodlift_core::models::NewQuote;
use rusqlite::Connection;

use crate::queries::quotes;

/// (mood, quote, author)
const SAMPLE_QUOTES: &[(&str, &str, Option<&str>)] = &[
    ("sad", "It's okay to not be okay. You don't have to be strong all the time.", None),
    ("sad", "This feeling will pass. You've survived 100% of your worst days so far.", None),
    ("sad", "You are stronger than you think. This sadness is temporary, but your strength is permanent.", None),
    ("happy", "The only way to do great work is to love what you do.", Some("Steve Jobs")),
    ("happy", "Happiness is not something ready made. It comes from your own actions.", Some("Dalai Lama")),
    ("angry", "Anger is an acid that can do more harm to the vessel in which it is stored than to anything on which it is poured.", Some("Mark Twain")),
    ("angry", "Breathe first. The words can wait until you have chosen them.", None),
    ("anxious", "Anxiety is the dizziness of freedom.", Some("Søren Kierkegaard")),
    ("anxious", "You don't have to see the whole staircase. Just take the next step.", None),
    ("exhausted", "You can't pour from an empty cup. Take care of yourself first.", None),
    ("exhausted", "Rest is not a reward. It is part of the work.", None),
    ("hopeful", "Hope is the thing with feathers that perches in the soul.", Some("Emily Dickinson")),
    ("hopeful", "Small steps every day still add up to a long way.", None),
    ("grateful", "Gratitude turns what we have into enough.", None),
    ("grateful", "Noticing the good is a habit, and you are practising it right now.", None),
    ("neutral", "A quiet day is still a day well lived.", None),
    ("neutral", "Steady is a perfectly good place to be.", None),
];

/// The built-in quotes as insertable rows.
pub fn sample_quotes() -> Vec<NewQuote> {
    SAMPLE_QUOTES
        .iter()
        .map(|(mood, quote, author)| {
            let q = NewQuote::new(*mood, *quote);
            match author {
                Some(a) => q.with_author(*a),
                None => q,
            }
        })
        .collect()
}

/// Insert the sample quotes when the table is empty. Returns how many were
/// inserted; 0 when the table already had data.
pub fn seed_if_empty(conn: &Connection) -> Result<usize, StorageError> {
    let existing = quotes::count(conn)?;
    if existing > 0 {
        tracing::debug!(existing, "quotes table already populated, skipping seed");
        return Ok(0);
    }
    let inserted = quotes::insert_batch(conn, &sample_quotes())?;
    tracing::info!(inserted, "seeded quotes table");
    Ok(inserted)
}
