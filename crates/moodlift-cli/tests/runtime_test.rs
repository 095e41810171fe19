//! End-to-end behavior of the classify-then-fetch runtime and the command
//! handlers.

use std::io::Cursor;

use moodlift_classifier::{ClassificationSource, FallbackReason, MoodClassifier};
use moodlift_cli::args::{AddArgs, ClassifyArgs};
use moodlift_cli::commands::{classify, interactive, manage};
use moodlift_cli::runtime::open_store;
use moodlift_cli::{exit_code_for_error, CliExitCode, Runtime};
use moodlift_core::constants::DEFAULT_MESSAGE;
use moodlift_core::errors::{ConfigError, StorageError};
use moodlift_core::models::NewQuote;
use moodlift_core::{AppError, MoodLabel, MoodliftConfig};
use moodlift_sentiment::LexiconScorer;
use moodlift_storage::QuoteStore;

fn runtime_with(quotes: &[(&str, &str)]) -> Runtime {
    let store = QuoteStore::open_in_memory().unwrap();
    let batch: Vec<_> = quotes.iter().map(|(m, q)| NewQuote::new(*m, *q)).collect();
    store.insert_batch(&batch).unwrap();
    Runtime::new(MoodClassifier::new(LexiconScorer::new()), store)
}

fn classify_args(text: &str, json: bool, explain: bool) -> ClassifyArgs {
    ClassifyArgs {
        text: text.split_whitespace().map(str::to_string).collect(),
        json,
        explain,
    }
}

#[test]
fn respond_pairs_mood_with_quote() {
    let runtime = runtime_with(&[("sad", "It gets better."), ("happy", "Keep smiling.")]);
    let response = runtime.respond("I am not feeling good today").unwrap();
    assert_eq!(response.mood, MoodLabel::Sad);
    assert_eq!(response.message, "It gets better.");
    assert_eq!(
        response.source,
        ClassificationSource::Rule {
            pattern: "sad_negated_positive"
        }
    );
}

#[test]
fn respond_uses_default_message_for_empty_mood() {
    let runtime = runtime_with(&[]);
    let response = runtime.respond("I feel amazing").unwrap();
    assert_eq!(response.mood, MoodLabel::Happy);
    assert_eq!(response.message, DEFAULT_MESSAGE);
}

#[test]
fn respond_rejects_blank_input() {
    let runtime = runtime_with(&[]);
    assert!(matches!(runtime.respond(""), Err(AppError::EmptyInput)));
    assert!(matches!(runtime.respond("  \n\t"), Err(AppError::EmptyInput)));
}

#[test]
fn respond_reports_fallback_provenance() {
    let runtime = runtime_with(&[]);
    let response = runtime.respond("today was bad").unwrap();
    assert_eq!(response.mood, MoodLabel::Sad);
    match response.source {
        ClassificationSource::Fallback { score, reason } => {
            assert!(score.compound < 0.0);
            assert_eq!(reason, FallbackReason::Negative);
        }
        other => panic!("expected fallback, got {other:?}"),
    }
}

#[test]
fn classify_text_output() {
    let runtime = runtime_with(&[("angry", "Breathe.")]);
    let mut out = Vec::new();
    classify::handle_classify(&runtime, &classify_args("I am so angry", false, false), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "Detected mood: angry\nQuote: Breathe.\n");
}

#[test]
fn classify_explain_names_the_rule() {
    let runtime = runtime_with(&[]);
    let mut out = Vec::new();
    classify::handle_classify(&runtime, &classify_args("so worried", false, true), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Detected mood: anxious"));
    assert!(text.contains("pattern rule anxious_vocabulary"), "{text}");
}

#[test]
fn classify_explain_names_the_fallback_branch() {
    let runtime = runtime_with(&[]);
    let mut out = Vec::new();
    classify::handle_classify(&runtime, &classify_args("today was bad", false, true), &mut out)
        .unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("sentiment fallback (negative;"), "{text}");
}

#[test]
fn classify_json_output() {
    let runtime = runtime_with(&[("grateful", "Thanks back.")]);
    let mut out = Vec::new();
    classify::handle_classify(&runtime, &classify_args("feeling blessed", true, false), &mut out)
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["mood"], "grateful");
    assert_eq!(value["message"], "Thanks back.");
    assert_eq!(value["source"]["kind"], "rule");
    assert_eq!(value["source"]["pattern"], "grateful_vocabulary");
}

#[test]
fn interactive_answers_until_quit() {
    let runtime = runtime_with(&[("happy", "Yay.")]);
    let input = Cursor::new("I feel great\n\n   \nquit\nI feel great\n");
    let mut out = Vec::new();
    interactive::run_interactive(&runtime, input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.matches("Detected mood: happy").count(), 1);
    assert!(text.contains("Quote: Yay."));
}

#[test]
fn interactive_survives_invalid_utf8_line() {
    let runtime = runtime_with(&[("happy", "Yay.")]);
    let mut input = b"I feel great\n".to_vec();
    input.extend_from_slice(&[0xff, 0xfe, b'\n']);
    input.extend_from_slice(b"I am tired\n");
    let mut out = Vec::new();
    interactive::run_interactive(&runtime, Cursor::new(input), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Detected mood: happy"));
    assert!(text.contains("Detected mood: exhausted"), "{text}");
}

#[test]
fn interactive_stops_at_end_of_input() {
    let runtime = runtime_with(&[]);
    let input = Cursor::new("I am tired\nI am calm");
    let mut out = Vec::new();
    interactive::run_interactive(&runtime, input, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Detected mood: exhausted"));
    assert!(text.contains("Detected mood: neutral"));
}

#[test]
fn seed_then_stats() {
    let store = QuoteStore::open_in_memory().unwrap();
    let mut out = Vec::new();
    manage::handle_seed(&store, &mut out).unwrap();
    manage::handle_seed(&store, &mut out).unwrap();
    manage::handle_stats(&store, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("Inserted"));
    assert!(text.contains("already populated"));
    for mood in MoodLabel::ALL {
        assert!(text.contains(mood.as_str()), "stats missing {mood}");
    }
    assert!(text.contains("total"));
}

#[test]
fn stats_total_counts_rows_outside_the_label_set() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quotes.db");
    {
        let conn = rusqlite::Connection::open(&path).unwrap();
        conn.execute_batch(
            "CREATE TABLE quotes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                mood TEXT NOT NULL,
                quote TEXT NOT NULL,
                author TEXT,
                category TEXT,
                keywords TEXT
            );
            INSERT INTO quotes (mood, quote) VALUES ('sad', 'Known.');
            INSERT INTO quotes (mood, quote) VALUES ('motivated', 'Legacy.');",
        )
        .unwrap();
    }

    let store = QuoteStore::open(&path).unwrap();
    let mut out = Vec::new();
    manage::handle_stats(&store, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let total_line = text.lines().find(|l| l.starts_with("total")).unwrap();
    assert_eq!(total_line.split_whitespace().nth(1), Some("2"));
    assert_eq!(store.count().unwrap(), 2);
}

#[test]
fn add_rejects_unknown_mood() {
    let store = QuoteStore::open_in_memory().unwrap();
    let args = AddArgs {
        mood: "bored".into(),
        quote: "Find a hobby.".into(),
        author: None,
        category: None,
        keywords: None,
    };
    let err = manage::handle_add(&store, args, &mut Vec::new()).unwrap_err();
    assert!(matches!(
        err,
        AppError::Storage(StorageError::InvalidMood { .. })
    ));
    assert_eq!(exit_code_for_error(&err), CliExitCode::Failure);
}

#[test]
fn add_stores_metadata() {
    let store = QuoteStore::open_in_memory().unwrap();
    let args = AddArgs {
        mood: "hopeful".into(),
        quote: "Tomorrow is new.".into(),
        author: Some("Anon".into()),
        category: Some("daily".into()),
        keywords: Some("tomorrow".into()),
    };
    let mut out = Vec::new();
    manage::handle_add(&store, args, &mut out).unwrap();
    assert!(String::from_utf8(out).unwrap().starts_with("Added quote #"));
    let row = store.random_quote("hopeful").unwrap().unwrap();
    assert_eq!(row.author.as_deref(), Some("Anon"));
}

#[test]
fn config_errors_exit_with_two() {
    let err: AppError = ConfigError::ValidationFailed {
        field: "storage.database_path".into(),
        message: "must not be empty".into(),
    }
    .into();
    assert_eq!(exit_code_for_error(&err), CliExitCode::Config);
    assert_eq!(CliExitCode::Config.code(), 2);
    assert_eq!(CliExitCode::Success.code(), 0);
}

#[test]
fn from_config_opens_and_seeds_relative_to_root() {
    let dir = tempfile::tempdir().unwrap();
    let config = MoodliftConfig::from_toml(
        r#"
        [storage]
        database_path = "data.db"
        default_message = "You matter."
        "#,
    )
    .unwrap();

    let runtime = Runtime::from_config(&config, dir.path()).unwrap();
    assert!(dir.path().join("data.db").exists());
    assert!(runtime.store().count().unwrap() > 0);
    assert_eq!(runtime.store().default_message(), "You matter.");
}

#[test]
fn from_config_without_seeding_leaves_store_empty() {
    let dir = tempfile::tempdir().unwrap();
    let config = MoodliftConfig::from_toml("[storage]\nseed_on_open = false\n").unwrap();

    let runtime = Runtime::from_config(&config, dir.path()).unwrap();
    assert_eq!(runtime.store().count().unwrap(), 0);
    let response = runtime.respond("I am furious").unwrap();
    assert_eq!(response.message, DEFAULT_MESSAGE);
}

#[test]
fn open_store_does_not_seed() {
    let dir = tempfile::tempdir().unwrap();
    let store = open_store(&MoodliftConfig::default(), dir.path()).unwrap();
    assert_eq!(store.count().unwrap(), 0);
}
