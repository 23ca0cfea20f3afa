//! Building and validating a [`ChoiceSpec`].

use indexmap::IndexMap;
use tracing::debug;

use crate::clean::clean_answers;
use crate::error::ConfigError;
use crate::extract::extract_answers;
use crate::format::format_prompt;
use crate::hook::{AcceptHook, NotifyHook};
use crate::style::ChoiceStyle;

/// Where the answer set comes from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum AnswerSource {
    /// No answers; every input is rejected.
    #[default]
    Empty,
    /// Prompt text with the answers embedded, e.g. `"Save? ([Y]es/[n]o)"`.
    ///
    /// The text doubles as the prompt unless one is set explicitly.
    Embedded(String),
    /// An explicit ordered list of answer tokens.
    Explicit(Vec<String>),
}

/// A validated set of acceptable answers plus the hooks that react to them.
///
/// Everything except the remembered sticky answer is fixed at construction.
///
/// # Example
///
/// ```
/// use standout_choice::ChoiceSpec;
///
/// let spec = ChoiceSpec::from_answers(["[Y]es", "[n]o", "[c]ancel"])
///     .max_tries(3)
///     .build()
///     .unwrap();
///
/// assert_eq!(spec.answers(), ["yes", "no", "cancel"]);
/// assert_eq!(spec.default(), Some("yes"));
/// assert_eq!(spec.prompt(), "([Y]es/[n]o/[c]ancel)");
/// ```
#[derive(Debug, Clone)]
pub struct ChoiceSpec {
    pub(crate) answers: Vec<String>,
    pub(crate) default: Option<String>,
    pub(crate) hotkeys: IndexMap<String, String>,
    pub(crate) accept: AcceptHook,
    pub(crate) reject: NotifyHook,
    pub(crate) failure: NotifyHook,
    pub(crate) persistent: Vec<String>,
    pub(crate) max_tries: Option<usize>,
    pub(crate) prompt: String,
    pub(crate) style: ChoiceStyle,
    pub(crate) previous: Option<String>,
}

impl ChoiceSpec {
    /// Start building from any [`AnswerSource`].
    pub fn builder(source: AnswerSource) -> ChoiceSpecBuilder {
        ChoiceSpecBuilder::new(source)
    }

    /// Start building from prompt text with embedded answers.
    pub fn from_text(text: impl Into<String>) -> ChoiceSpecBuilder {
        ChoiceSpecBuilder::new(AnswerSource::Embedded(text.into()))
    }

    /// Start building from an explicit list of answer tokens.
    pub fn from_answers<S: Into<String>>(answers: impl IntoIterator<Item = S>) -> ChoiceSpecBuilder {
        ChoiceSpecBuilder::new(AnswerSource::Explicit(
            answers.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn default(&self) -> Option<&str> {
        self.default.as_deref()
    }

    pub fn hotkeys(&self) -> &IndexMap<String, String> {
        &self.hotkeys
    }

    pub fn persistent(&self) -> &[String] {
        &self.persistent
    }

    pub fn max_tries(&self) -> Option<usize> {
        self.max_tries
    }

    /// The prompt template shown when a query does not override it.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn style(&self) -> &ChoiceStyle {
        &self.style
    }

    /// The sticky answer remembered from an earlier query, if any.
    pub fn previous(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// Render the answer set with this spec's style.
    pub fn render_prompt(&self) -> String {
        self.render_prompt_with(&self.style)
    }

    /// Render the answer set with another style.
    pub fn render_prompt_with(&self, style: &ChoiceStyle) -> String {
        format_prompt(&self.answers, self.default(), &self.hotkeys, style)
    }

    /// The canonical answer for a hotkey.
    pub fn hotkey_answer(&self, hotkey: &str) -> Option<&str> {
        self.hotkeys.get(hotkey).map(String::as_str)
    }

    /// The first answer that starts with `input`.
    ///
    /// `input` must already be lower-cased. Empty input matches nothing.
    pub fn match_answer(&self, input: &str) -> Option<&str> {
        if input.is_empty() {
            return None;
        }
        self.answers
            .iter()
            .find(|answer| answer.starts_with(input))
            .map(String::as_str)
    }
}

/// Builder for [`ChoiceSpec`]. All validation happens in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ChoiceSpecBuilder {
    source: AnswerSource,
    default: Option<String>,
    prompt: Option<String>,
    accept: AcceptHook,
    reject: NotifyHook,
    failure: NotifyHook,
    hotkeys: Option<IndexMap<String, String>>,
    persistent: Vec<String>,
    max_tries: Option<usize>,
    style: ChoiceStyle,
}

impl ChoiceSpecBuilder {
    pub fn new(source: AnswerSource) -> Self {
        Self {
            source,
            ..Default::default()
        }
    }

    /// Answer used when the user enters an empty line.
    ///
    /// Without this, a capitalized answer token becomes the default.
    pub fn default(mut self, answer: impl Into<String>) -> Self {
        self.default = Some(answer.into());
        self
    }

    /// Prompt template, replacing the generated one.
    ///
    /// `{default}` and `{default_withbs}` are substituted at query time.
    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn accept(mut self, hook: AcceptHook) -> Self {
        self.accept = hook;
        self
    }

    pub fn reject(mut self, hook: NotifyHook) -> Self {
        self.reject = hook;
        self
    }

    pub fn failure(mut self, hook: NotifyHook) -> Self {
        self.failure = hook;
        self
    }

    /// Assign a hotkey explicitly.
    ///
    /// Once any hotkey is assigned this way, hotkeys found in the answer
    /// tokens are ignored.
    pub fn hotkey(mut self, hotkey: impl Into<String>, answer: impl Into<String>) -> Self {
        self.hotkeys
            .get_or_insert_with(IndexMap::new)
            .insert(hotkey.into(), answer.into());
        self
    }

    pub fn hotkeys<K, V>(mut self, hotkeys: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let map = self.hotkeys.get_or_insert_with(IndexMap::new);
        for (hotkey, answer) in hotkeys {
            map.insert(hotkey.into(), answer.into());
        }
        self
    }

    /// Answers that are remembered and returned by later queries without
    /// prompting.
    pub fn persistent<S: Into<String>>(mut self, answers: impl IntoIterator<Item = S>) -> Self {
        self.persistent.extend(answers.into_iter().map(Into::into));
        self
    }

    /// Whitespace-separated form of [`persistent`](Self::persistent).
    pub fn persistent_str(self, answers: &str) -> Self {
        self.persistent(answers.split_whitespace())
    }

    /// Bound the number of lines read per query.
    pub fn max_tries(mut self, max_tries: usize) -> Self {
        self.max_tries = Some(max_tries);
        self
    }

    pub fn style(mut self, style: ChoiceStyle) -> Self {
        self.style = style;
        self
    }

    /// Validate the configuration and assemble the spec.
    pub fn build(self) -> Result<ChoiceSpec, ConfigError> {
        let mut prompt = self.prompt;
        if let Some(p) = &prompt {
            if p.is_empty() {
                return Err(ConfigError::InvalidOption {
                    field: "prompt",
                    value: p.clone(),
                    expected: "a non-empty string",
                });
            }
        }

        let tokens = match self.source {
            AnswerSource::Empty => Vec::new(),
            AnswerSource::Embedded(text) => {
                let tokens = extract_answers(&text, &self.style);
                prompt.get_or_insert(text);
                tokens
            }
            AnswerSource::Explicit(list) => {
                if let Some(index) = list.iter().position(|answer| answer.is_empty()) {
                    return Err(ConfigError::EmptyAnswer { index });
                }
                list
            }
        };

        let seeded = self
            .default
            .filter(|d| !d.is_empty())
            .map(|d| d.to_lowercase());
        let cleaned = clean_answers(&tokens, seeded, self.style.hotkeys.as_ref())?;
        let answers = cleaned.answers;
        let is_answer = |value: &str| answers.iter().any(|a| a == value);

        let default = cleaned.default;
        if let Some(d) = &default {
            if !is_answer(d.as_str()) {
                return Err(ConfigError::unknown("default", d.as_str()));
            }
        }

        let hotkeys = match self.hotkeys {
            None => cleaned.hotkeys,
            Some(explicit) => {
                let mut hotkeys = IndexMap::with_capacity(explicit.len());
                for (hotkey, answer) in explicit {
                    if hotkey.is_empty() {
                        return Err(ConfigError::InvalidOption {
                            field: "hotkeys",
                            value: hotkey,
                            expected: "a non-empty hotkey",
                        });
                    }
                    let answer = answer.to_lowercase();
                    if !is_answer(answer.as_str()) {
                        return Err(ConfigError::unknown("hotkeys", answer));
                    }
                    hotkeys.insert(hotkey, answer);
                }
                hotkeys
            }
        };

        let accept = match self.accept {
            AcceptHook::PerAnswer(actions) => {
                let mut folded = IndexMap::with_capacity(actions.len());
                for (key, action) in actions {
                    let key = key.to_lowercase();
                    if !is_answer(key.as_str()) {
                        return Err(ConfigError::unknown("accept", key));
                    }
                    folded.insert(key, action);
                }
                AcceptHook::PerAnswer(folded)
            }
            other => other,
        };

        let mut persistent: Vec<String> = Vec::new();
        for token in &self.persistent {
            let token = token.trim().to_lowercase();
            if token.is_empty() || persistent.contains(&token) {
                continue;
            }
            if !is_answer(token.as_str()) {
                return Err(ConfigError::unknown("persistent", token));
            }
            persistent.push(token);
        }

        if let Some(0) = self.max_tries {
            return Err(ConfigError::InvalidMaxTries(0));
        }

        let prompt = match prompt {
            Some(prompt) => prompt,
            None => format_prompt(&answers, default.as_deref(), &hotkeys, &self.style),
        };

        debug!(
            answers = answers.len(),
            default = default.as_deref().unwrap_or(""),
            hotkeys = hotkeys.len(),
            persistent = persistent.len(),
            max_tries = ?self.max_tries,
            "built choice spec"
        );

        Ok(ChoiceSpec {
            answers,
            default,
            hotkeys,
            accept,
            reject: self.reject,
            failure: self.failure,
            persistent,
            max_tries: self.max_tries,
            prompt,
            style: self.style,
            previous: None,
        })
    }
}
