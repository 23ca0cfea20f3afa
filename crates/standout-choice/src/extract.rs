//! Locating an answer list inside free text.
//!
//! A prompt such as `"Proceed? (y/n)"` carries its own answers. Extraction
//! finds the delimited list, picks the separator that occurs most often and
//! splits on it.

use std::ops::{Bound, RangeBounds};

use crate::style::ChoiceStyle;

/// Candidate separators. On equal counts the later entry wins.
const SEPARATORS: [char; 3] = [',', '/', '|'];

/// Characters that end the question part of an undelimited prompt.
const PROMPT_TERMINATORS: [char; 2] = [':', '?'];

const CONNECTIVE: &str = "or";

/// Extract the answers embedded in `text`.
///
/// ```
/// use standout_choice::{extract_answers, ChoiceStyle};
///
/// let answers = extract_answers("Proceed? (y/n)", &ChoiceStyle::default());
/// assert_eq!(answers, ["y", "n"]);
/// ```
pub fn extract_answers(text: &str, style: &ChoiceStyle) -> Vec<String> {
    let mut answers = Vec::new();
    extract_answers_into(text, .., style, &mut answers);
    answers
}

/// Extract the answers found in `range` of `text`, appending them to
/// `answers`.
///
/// The range is in bytes and is clamped to the text. Answers already
/// present in `answers` are not added twice.
pub fn extract_answers_into(
    text: &str,
    range: impl RangeBounds<usize>,
    style: &ChoiceStyle,
    answers: &mut Vec<String>,
) {
    let start = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    };
    let stop = match range.end_bound() {
        Bound::Included(&n) => n.saturating_add(1),
        Bound::Excluded(&n) => n,
        Bound::Unbounded => text.len(),
    };
    let stop = stop.min(text.len());
    let Some(span) = text.get(start.min(stop)..stop) else {
        return;
    };

    let list = answer_list(span, style);
    let separator = SEPARATORS
        .into_iter()
        .max_by_key(|sep| list.matches(*sep).count())
        .unwrap_or('|');

    for piece in list.split(separator) {
        for answer in split_connective(piece) {
            if !answers.contains(&answer) {
                answers.push(answer);
            }
        }
    }
}

/// Narrow `span` down to the text between the answer delimiters.
///
/// Without an opening delimiter the list follows the last `:` or `?`, or is
/// the whole span (minus a trailing `:` or `?`) when nothing follows it.
fn answer_list<'a>(span: &'a str, style: &ChoiceStyle) -> &'a str {
    let mut pos = None;
    let mut end = span.len();

    if let Some(delims) = &style.answers {
        if !delims.open.is_empty() {
            pos = span.find(&delims.open).map(|i| i + delims.open.len());
        }
    }
    let delimited = pos.is_some();
    let pos = pos.unwrap_or_else(|| {
        span.rfind(PROMPT_TERMINATORS)
            .map(|i| i + 1)
            .filter(|&i| !span[i..].trim().is_empty())
            .unwrap_or(0)
    });

    if let Some(delims) = &style.answers {
        if !delims.close.is_empty() {
            if let Some(i) = span[pos..].find(&delims.close) {
                end = pos + i;
            }
        }
    }

    let list = &span[pos..end];
    if delimited {
        list
    } else {
        list.trim_end().trim_end_matches(PROMPT_TERMINATORS)
    }
}

/// Split a piece on the word `or`, trimming and dropping empty parts.
fn split_connective(piece: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    for word in piece.split_whitespace().chain([CONNECTIVE]) {
        if word == CONNECTIVE {
            if !words.is_empty() {
                parts.push(words.join(" "));
                words.clear();
            }
        } else {
            words.push(word);
        }
    }

    parts
}
