//! Rendering an answer set into prompt text.

use std::ops::Range;

use indexmap::IndexMap;

use crate::style::ChoiceStyle;

const CONNECTIVE: &str = " or ";

/// Render `answers` as a prompt suffix such as `([Y]es/[n]o)`.
///
/// The default answer goes through [`ChoiceStyle::default_case`]; each
/// hotkey is bracketed where it occurs in its answer (ignoring case) or
/// appended when it does not occur at all.
///
/// ```
/// use indexmap::IndexMap;
/// use standout_choice::{format_prompt, ChoiceStyle};
///
/// let answers = ["yes".to_string(), "no".to_string()];
/// let hotkeys = IndexMap::from([("y".to_string(), "yes".to_string())]);
/// let prompt = format_prompt(&answers, Some("yes"), &hotkeys, &ChoiceStyle::default());
/// assert_eq!(prompt, "([Y]es/no)");
/// ```
pub fn format_prompt(
    answers: &[String],
    default: Option<&str>,
    hotkeys: &IndexMap<String, String>,
    style: &ChoiceStyle,
) -> String {
    let items: Vec<String> = answers
        .iter()
        .map(|answer| format_answer(answer, default, hotkeys, style))
        .collect();

    let joined = if style.separator.contains(' ') {
        match items.split_last() {
            Some((last, rest)) if !rest.is_empty() => {
                format!("{}{}{}", rest.join(&style.separator), CONNECTIVE, last)
            }
            Some((last, _)) => last.clone(),
            None => String::new(),
        }
    } else {
        items.join(&style.separator)
    };

    match &style.answers {
        Some(delims) => delims.wrap(&joined),
        None => joined,
    }
}

fn format_answer(
    answer: &str,
    default: Option<&str>,
    hotkeys: &IndexMap<String, String>,
    style: &ChoiceStyle,
) -> String {
    let mut item = if default == Some(answer) {
        style.default_case.apply(answer)
    } else {
        answer.to_string()
    };

    let Some(delims) = &style.hotkeys else {
        return item;
    };

    for (hotkey, _) in hotkeys.iter().filter(|(_, target)| *target == answer) {
        item = match find_ignore_case(&item, hotkey) {
            Some(span) => format!(
                "{}{}{}",
                &item[..span.start],
                delims.wrap(&item[span.clone()]),
                &item[span.end..]
            ),
            None => format!("{}{}", item, delims.wrap(hotkey)),
        };
    }

    item
}

/// Byte range of the first case-insensitive occurrence of `needle`.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    if needle.is_empty() {
        return None;
    }

    haystack.char_indices().find_map(|(start, _)| {
        let mut rest = haystack[start..].char_indices();
        let mut end = start;
        for wanted in needle.chars() {
            let (offset, found) = rest.next()?;
            if !found.to_lowercase().eq(wanted.to_lowercase()) {
                return None;
            }
            end = start + offset + found.len_utf8();
        }
        Some(start..end)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{DefaultCase, Delimiters};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn keys(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn plain_answers() {
        let prompt = format_prompt(
            &strings(&["y", "n"]),
            None,
            &IndexMap::new(),
            &ChoiceStyle::default(),
        );
        assert_eq!(prompt, "(y/n)");
    }

    #[test]
    fn default_is_capitalized() {
        let prompt = format_prompt(
            &strings(&["yes", "no"]),
            Some("no"),
            &IndexMap::new(),
            &ChoiceStyle::default(),
        );
        assert_eq!(prompt, "(yes/No)");
    }

    #[test]
    fn hotkey_keeps_the_answer_casing() {
        let prompt = format_prompt(
            &strings(&["yes", "no"]),
            Some("yes"),
            &keys(&[("y", "yes"), ("n", "no")]),
            &ChoiceStyle::default(),
        );
        assert_eq!(prompt, "([Y]es/[n]o)");
    }

    #[test]
    fn hotkey_in_the_middle() {
        let prompt = format_prompt(
            &strings(&["exit"]),
            None,
            &keys(&[("x", "exit")]),
            &ChoiceStyle::default(),
        );
        assert_eq!(prompt, "(e[x]it)");
    }

    #[test]
    fn missing_hotkey_is_appended() {
        let prompt = format_prompt(
            &strings(&["cancel"]),
            None,
            &keys(&[("q", "cancel")]),
            &ChoiceStyle::default(),
        );
        assert_eq!(prompt, "(cancel[q])");
    }

    #[test]
    fn spaced_separator_uses_connective() {
        let style = ChoiceStyle::default().separator(", ");
        let prompt = format_prompt(&strings(&["a", "b", "c"]), None, &IndexMap::new(), &style);
        assert_eq!(prompt, "(a, b or c)");

        let two = format_prompt(&strings(&["a", "b"]), None, &IndexMap::new(), &style);
        assert_eq!(two, "(a or b)");

        let one = format_prompt(&strings(&["a"]), None, &IndexMap::new(), &style);
        assert_eq!(one, "(a)");
    }

    #[test]
    fn delimiters_can_be_disabled() {
        let style = ChoiceStyle::default()
            .answer_delimiters(None)
            .hotkey_delimiters(None)
            .default_case(DefaultCase::Uppercase)
            .separator("|");
        let prompt = format_prompt(
            &strings(&["yes", "no"]),
            Some("yes"),
            &keys(&[("y", "yes")]),
            &style,
        );
        assert_eq!(prompt, "YES|no");
    }

    #[test]
    fn custom_hotkey_delimiters() {
        let style = ChoiceStyle::default().hotkey_delimiters(Some(Delimiters::new("&", "")));
        let prompt = format_prompt(
            &strings(&["save"]),
            None,
            &keys(&[("s", "save")]),
            &style,
        );
        assert_eq!(prompt, "(&save)");
    }

    #[test]
    fn empty_answer_set() {
        let prompt = format_prompt(&[], None, &IndexMap::new(), &ChoiceStyle::default());
        assert_eq!(prompt, "()");
    }

    #[test]
    fn case_insensitive_search_handles_multibyte() {
        assert_eq!(find_ignore_case("Überall", "ü"), Some(0..2));
        assert_eq!(find_ignore_case("abc", "C"), Some(2..3));
        assert_eq!(find_ignore_case("abc", "d"), None);
        assert_eq!(find_ignore_case("abc", ""), None);
    }
}
