//! Normalizing raw answer tokens.
//!
//! Cleaning turns tokens such as `"[Y]es"` into canonical lower-case answers,
//! pulls out hotkeys and treats a capitalized token as the default.

use indexmap::IndexMap;

use crate::error::ConfigError;
use crate::style::Delimiters;

/// The outcome of [`clean_answers`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanedAnswers {
    /// Unique canonical answers in first-seen order.
    pub answers: Vec<String>,
    /// The pre-seeded default, or the first capitalized token.
    pub default: Option<String>,
    /// Lower-cased hotkey to canonical answer, in registration order.
    pub hotkeys: IndexMap<String, String>,
}

/// Clean raw answer tokens.
///
/// `hotkey_delims` marks the hotkey inside a token; pass `None` to disable
/// hotkey extraction.
///
/// ```
/// use standout_choice::{clean_answers, Delimiters};
///
/// let brackets = Delimiters::new("[", "]");
/// let cleaned = clean_answers(["[Y]es", "no"], None, Some(&brackets)).unwrap();
/// assert_eq!(cleaned.answers, ["yes", "no"]);
/// assert_eq!(cleaned.default.as_deref(), Some("yes"));
/// assert_eq!(cleaned.hotkeys["y"], "yes");
/// ```
pub fn clean_answers<I, S>(
    tokens: I,
    default: Option<String>,
    hotkey_delims: Option<&Delimiters>,
) -> Result<CleanedAnswers, ConfigError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut cleaned = CleanedAnswers {
        default,
        ..CleanedAnswers::default()
    };

    for token in tokens {
        let token = token.as_ref().trim();
        if token.is_empty() {
            continue;
        }

        let (token, hotkey) = match hotkey_delims.and_then(|d| split_hotkey(token, d)) {
            Some((spliced, hotkey)) => (spliced, Some(hotkey)),
            None => (token.to_string(), None),
        };
        if token.is_empty() {
            continue;
        }
        let canonical = token.to_lowercase();

        if let Some(hotkey) = hotkey.filter(|hk| !hk.is_empty()) {
            let hotkey = hotkey.to_lowercase();
            if let Some(previous) = cleaned.hotkeys.get(&hotkey) {
                if *previous != canonical {
                    return Err(ConfigError::HotkeyCollision {
                        hotkey,
                        previous: previous.clone(),
                        current: canonical,
                    });
                }
            }
            cleaned.hotkeys.insert(hotkey, canonical.clone());
        }

        if cleaned.default.is_none() && token != canonical {
            cleaned.default = Some(canonical.clone());
        }

        if !cleaned.answers.contains(&canonical) {
            cleaned.answers.push(canonical);
        }
    }

    Ok(cleaned)
}

/// Remove the hotkey delimiters from `token`, returning the spliced token and
/// the hotkey they enclosed.
fn split_hotkey(token: &str, delims: &Delimiters) -> Option<(String, String)> {
    if delims.open.is_empty() || delims.close.is_empty() {
        return None;
    }

    let open = token.find(&delims.open)?;
    let start = open + delims.open.len();
    let end = start + token[start..].find(&delims.close)?;
    let close = end + delims.close.len();

    let hotkey = &token[start..end];
    let spliced = format!("{}{}{}", &token[..open], hotkey, &token[close..]);
    Some((spliced, hotkey.to_string()))
}
