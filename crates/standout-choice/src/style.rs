//! Presentation settings shared by extraction, cleaning and rendering.

/// A pair of opening/closing markers, such as `(` `)` or `[` `]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delimiters {
    pub open: String,
    pub close: String,
}

impl Delimiters {
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Wrap `text` in these delimiters.
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

/// How the default answer is distinguished in a rendered prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultCase {
    /// Upper-case the first letter: `yes` becomes `Yes`.
    #[default]
    Capitalize,
    /// Upper-case the whole answer.
    Uppercase,
    /// Leave the default as is.
    Unchanged,
}

impl DefaultCase {
    pub fn apply(self, answer: &str) -> String {
        match self {
            Self::Capitalize => {
                let mut chars = answer.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Self::Uppercase => answer.to_uppercase(),
            Self::Unchanged => answer.to_string(),
        }
    }
}

/// Immutable presentation record for a choice prompt.
///
/// The same style must be used to extract answers from text and to render
/// them back, otherwise hotkeys and delimiters will not line up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceStyle {
    /// Markers around the answer list, `(` `)` by default.
    pub answers: Option<Delimiters>,
    /// Markers around a hotkey inside an answer, `[` `]` by default.
    pub hotkeys: Option<Delimiters>,
    pub default_case: DefaultCase,
    /// Separator between rendered answers, `/` by default.
    ///
    /// A separator containing a space switches to `a, b or c` phrasing.
    pub separator: String,
}

impl Default for ChoiceStyle {
    fn default() -> Self {
        Self {
            answers: Some(Delimiters::new("(", ")")),
            hotkeys: Some(Delimiters::new("[", "]")),
            default_case: DefaultCase::Capitalize,
            separator: "/".to_string(),
        }
    }
}

impl ChoiceStyle {
    pub fn answer_delimiters(mut self, delimiters: Option<Delimiters>) -> Self {
        self.answers = delimiters;
        self
    }

    pub fn hotkey_delimiters(mut self, delimiters: Option<Delimiters>) -> Self {
        self.hotkeys = delimiters;
        self
    }

    pub fn default_case(mut self, case: DefaultCase) -> Self {
        self.default_case = case;
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }
}
