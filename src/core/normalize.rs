// File: src/core/normalize.rs
use regex::Regex;
use std::sync::OnceLock;

/// Everything that is not a letter (Lu, Ll, Lt, Lm, Lo) or a number (Nd, Nl, No).
fn non_word_chars() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"[^\p{L}\p{N}]+").expect("static pattern compiles"))
}

/// Reduces `input` to its letter and number characters.
///
/// The legacy database keyed successor lists by this form while the word
/// list kept the display form, so this is only ever used to build lookup keys.
pub fn normalize(input: &str) -> String {
    non_word_chars().replace_all(input, "").into_owned()
}
