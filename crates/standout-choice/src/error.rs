//! Error types for choice prompts.
//!
//! Construction problems surface as [`ConfigError`] before any prompt is
//! shown. Once a spec exists, invalid input is never an error: only the
//! terminal itself failing produces a [`PromptError`].

use std::io;

/// Errors raised while building a [`ChoiceSpec`](crate::ChoiceSpec).
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An explicit answer list contained an empty entry.
    #[error("answers expects non-empty strings, entry {index} is empty")]
    EmptyAnswer { index: usize },

    /// An option had a value of the wrong shape.
    #[error("{field} expects {expected}, not {value:?}")]
    InvalidOption {
        field: &'static str,
        value: String,
        expected: &'static str,
    },

    /// An option referenced an answer that is not part of the answer set.
    #[error("{field} {value:?} is not an answer")]
    UnknownAnswer { field: &'static str, value: String },

    /// The same hotkey was assigned to two different answers.
    #[error("Hotkey {hotkey:?} collision, previous {previous:?}, current {current:?}")]
    HotkeyCollision {
        hotkey: String,
        previous: String,
        current: String,
    },

    /// The retry limit must be positive.
    #[error("max_tries expects a positive integer, not {0}")]
    InvalidMaxTries(usize),
}

impl ConfigError {
    /// Name of the option that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::EmptyAnswer { .. } => "answers",
            Self::InvalidOption { field, .. } | Self::UnknownAnswer { field, .. } => field,
            Self::HotkeyCollision { .. } => "hotkeys",
            Self::InvalidMaxTries(_) => "max_tries",
        }
    }

    pub(crate) fn unknown(field: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownAnswer {
            field,
            value: value.into(),
        }
    }
}

/// Errors raised by the terminal while a query is running.
#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    /// The input source reached end-of-input (Ctrl+D).
    #[error("Prompt cancelled by user.")]
    Cancelled,

    /// Reading from or writing to the terminal failed.
    #[error("Prompt failed: {0}")]
    Io(#[from] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_names_point_at_the_option() {
        assert_eq!(ConfigError::EmptyAnswer { index: 2 }.field(), "answers");
        assert_eq!(ConfigError::unknown("persistent", "maybe").field(), "persistent");
        assert_eq!(ConfigError::InvalidMaxTries(0).field(), "max_tries");
    }

    #[test]
    fn collision_message_names_both_answers() {
        let err = ConfigError::HotkeyCollision {
            hotkey: "y".into(),
            previous: "yes".into(),
            current: "yup".into(),
        };
        assert_eq!(
            err.to_string(),
            "Hotkey \"y\" collision, previous \"yes\", current \"yup\""
        );
    }
}
