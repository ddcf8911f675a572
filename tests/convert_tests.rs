use markov_convert::config::Config;
use markov_convert::persistence::load_record;
use markov_convert::progress::{ConsoleProgress, Silent};
use markov_convert::{run, ConvertError, Outcome};
use serde_pickle::SerOptions;
use std::collections::HashMap;
use std::path::Path;

fn write_pickle(path: &Path, entries: &[(&str, &[&str])]) {
    let db: HashMap<&str, Vec<&str>> = entries.iter().map(|(k, v)| (*k, v.to_vec())).collect();
    let bytes = serde_pickle::to_vec(&db, SerOptions::new()).unwrap();
    std::fs::write(path, bytes).unwrap();
}

fn input_path(dir: &Path, name: &str) -> String {
    dir.join(name).to_str().unwrap().to_string()
}

#[test]
fn converts_cat_and_dog() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_-42.pkl");
    write_pickle(
        Path::new(&input),
        &[("", &["cat", "dog"]), ("cat", &["dog", "", ""]), ("dog", &[])],
    );

    let outcome = run(&Config::new(&input), &mut Silent).unwrap();
    let expected_path = dir.path().join("-42.json");
    assert_eq!(
        outcome,
        Outcome::Converted {
            output: expected_path.clone(),
            words: 2
        }
    );

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&expected_path).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "words": ["cat", "dog"],
            "probabilities": {
                "cat": {"dog": 1, "": 1},
                "dog": {"": 1}
            }
        })
    );
}

#[test]
fn every_word_can_end_a_message() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_7.pkl");
    write_pickle(
        Path::new(&input),
        &[
            ("", &["", "Hi!", "there", "", "friend"]),
            ("Hi", &["there", "there"]),
            ("there", &["friend", "", ""]),
        ],
    );

    let mut config = Config::new(&input);
    config.verify = true;
    run(&config, &mut Silent).unwrap();

    let record = load_record(&dir.path().join("7.json")).unwrap();
    assert_eq!(record.words, vec!["Hi!", "there", "friend"]);
    for word in &record.words {
        let weights = &record.probabilities[word];
        assert_eq!(weights.get(""), Some(&1));
        assert!(weights.values().all(|&w| w == 1));
    }
    assert_eq!(record.probabilities["Hi!"].len(), 2);
    assert_eq!(record.probabilities["friend"].len(), 1);
}

#[test]
fn empty_word_list_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_3.pkl");
    write_pickle(Path::new(&input), &[("", &[])]);

    assert_eq!(run(&Config::new(&input), &mut Silent).unwrap(), Outcome::NothingToDo);
    assert!(!dir.path().join("3.json").exists());
}

#[test]
fn missing_word_list_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_3.pkl");
    write_pickle(Path::new(&input), &[("cat", &["dog"])]);

    assert_eq!(run(&Config::new(&input), &mut Silent).unwrap(), Outcome::NothingToDo);
    assert!(!dir.path().join("3.json").exists());
}

#[test]
fn missing_input_exits_with_two() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_9.pkl");

    let err = run(&Config::new(&input), &mut Silent).unwrap_err();
    assert!(matches!(err, ConvertError::NotFound(_)));
    assert_eq!(err.exit_code(), 2);
    assert!(err.to_string().contains("does not exist"));
    assert!(!dir.path().join("9.json").exists());
}

#[test]
fn unconventional_name_is_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_foo123.dat");
    write_pickle(Path::new(&input), &[("", &["cat"])]);

    let err = run(&Config::new(&input), &mut Silent).unwrap_err();
    assert_eq!(err.exit_code(), 4);
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn explicit_output_skips_name_convention() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "old-database.pickle");
    write_pickle(Path::new(&input), &[("", &["cat"])]);

    let mut config = Config::new(&input);
    config.output = Some(dir.path().join("converted.json"));
    config.pretty = true;
    run(&config, &mut Silent).unwrap();

    let record = load_record(&dir.path().join("converted.json")).unwrap();
    assert_eq!(record.words, vec!["cat"]);
}

#[test]
fn corrupt_input_is_a_decode_failure() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_5.pkl");
    std::fs::write(&input, b"").unwrap();

    let err = run(&Config::new(&input), &mut Silent).unwrap_err();
    assert_eq!(err.exit_code(), 5);
    assert!(!dir.path().join("5.json").exists());
}

#[test]
fn console_progress_counts_every_word() {
    let dir = tempfile::tempdir().unwrap();
    let input = input_path(dir.path(), "chat_11.pkl");
    write_pickle(Path::new(&input), &[("", &["a", "b", "c"])]);

    let mut progress = ConsoleProgress::new(Vec::new());
    run(&Config::new(&input), &mut progress).unwrap();
    let text = String::from_utf8(progress.into_inner()).unwrap();
    assert!(text.contains("Processing word 3 of 3"));
}
