//! Field tokenizer for SCHEDULE data lines
//!
//! Splits a logical line on whitespace runs outside quoted spans, expands
//! the repeat-count shorthand (`3*0.5` is three fields of `0.5`, `2*` is two
//! absent fields) and removes quote delimiters. The tokenizer knows nothing
//! about what each position means; record builders decide that.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{MAX_REPEAT_COUNT, QUOTE_CHARS, TERMINATOR};

/// `<digits>*<optional value>`
static REPEAT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\*(.*)$").expect("repeat pattern is valid"));

/// Ordered fields of one line; a slot may be absent ("no value supplied")
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    fields: Vec<Option<String>>,
}

impl TokenList {
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field at `index`; `None` when absent or past the end
    pub fn get(&self, index: usize) -> Option<&str> {
        self.fields.get(index).and_then(|field| field.as_deref())
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&str>> {
        self.fields.iter().map(|field| field.as_deref())
    }

    /// Position of the first lone record terminator, if any
    pub fn terminator_position(&self) -> Option<usize> {
        self.fields
            .iter()
            .position(|field| field.as_deref() == Some(TERMINATOR))
    }
}

/// Split a line into fields, padding with absent values up to `min_fields`
///
/// Padding never truncates: a line with more fields keeps all of them.
pub fn tokenize(line: &str, min_fields: usize) -> TokenList {
    let mut fields: Vec<Option<String>> = Vec::with_capacity(min_fields);

    for word in split_words(line) {
        match expand_repeat(word) {
            Some((count, value)) => {
                let value = value.map(unquote);
                fields.extend(std::iter::repeat_n(value, count));
            }
            None => fields.push(Some(unquote(word))),
        }
    }

    if fields.len() < min_fields {
        fields.resize(min_fields, None);
    }

    TokenList { fields }
}

/// Split on whitespace runs, keeping quoted spans (and their delimiters) intact
pub fn split_words(line: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut start: Option<usize> = None;
    let mut open_quote: Option<char> = None;

    for (idx, c) in line.char_indices() {
        if let Some(quote) = open_quote {
            if c == quote {
                open_quote = None;
            }
            continue;
        }

        if c.is_whitespace() {
            if let Some(word_start) = start.take() {
                words.push(&line[word_start..idx]);
            }
            continue;
        }

        if start.is_none() {
            start = Some(idx);
        }
        if QUOTE_CHARS.contains(&c) {
            open_quote = Some(c);
        }
    }

    if let Some(word_start) = start {
        words.push(&line[word_start..]);
    }

    words
}

/// Match the repeat-count shorthand
///
/// Returns the count and the repeated value (`None` for a bare `N*`). A word
/// whose `*` is not preceded by digits only, or whose count exceeds
/// [`MAX_REPEAT_COUNT`], is not a repeat and yields `None`.
pub fn expand_repeat(word: &str) -> Option<(usize, Option<&str>)> {
    let captures = REPEAT_PATTERN.captures(word)?;
    let count = captures
        .get(1)?
        .as_str()
        .parse::<usize>()
        .ok()
        .filter(|count| *count <= MAX_REPEAT_COUNT)?;
    let value = captures
        .get(2)
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty());
    Some((count, value))
}

/// Remove one matching pair of surrounding quotes
pub fn unquote(word: &str) -> String {
    let mut chars = word.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) if first == last && QUOTE_CHARS.contains(&first) => {
            chars.as_str().to_string()
        }
        _ => word.to_string(),
    }
}
