//! The interactive query loop.
//!
//! Each attempt reads a line, falls back to the default on an empty line,
//! resolves hotkeys, then prefix-matches against the answers in order.
//! Unmatched input runs the reject hooks and prompts again; a match runs the
//! accept hooks, any of which may veto it. When the retry budget is spent the
//! failure hook runs and the query returns `None`.

use tracing::{debug, trace};

use crate::error::PromptError;
use crate::hook::{AcceptHook, NotifyHook, Reaction, Verdict};
use crate::spec::ChoiceSpec;
use crate::template;
use crate::terminal::{RealTerminal, TerminalIO};

const BACKSPACE: &str = "\u{8}";

/// Per-call overrides for [`ChoiceSpec::query_with`].
///
/// Accept and reject hooks given here run after the spec's own hooks.
#[derive(Debug, Clone, Default)]
pub struct QueryOptions {
    prompt: Option<String>,
    default: Option<String>,
    accept: AcceptHook,
    reject: NotifyHook,
}

impl QueryOptions {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    pub fn prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn default(mut self, answer: impl Into<String>) -> Self {
        self.default = Some(answer.into());
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
}

impl ChoiceSpec {
    /// Prompt on the real terminal with the spec's own prompt and default.
    ///
    /// Returns `Ok(None)` when the retry budget runs out.
    pub fn ask(&mut self) -> Result<Option<String>, PromptError> {
        self.query_with(&RealTerminal, QueryOptions::new())
    }

    /// Like [`ask`](Self::ask), against the given terminal.
    pub fn ask_with<T: TerminalIO + ?Sized>(
        &mut self,
        terminal: &T,
    ) -> Result<Option<String>, PromptError> {
        self.query_with(terminal, QueryOptions::new())
    }

    /// Prompt on the real terminal with per-call overrides.
    pub fn query(&mut self, options: QueryOptions) -> Result<Option<String>, PromptError> {
        self.query_with(&RealTerminal, options)
    }

    /// Run the query loop against `terminal`.
    ///
    /// Returns the accepted answer, or `Ok(None)` once `max_tries` lines
    /// have been read without an accepted answer. Errors only come from the
    /// terminal itself.
    pub fn query_with<T: TerminalIO + ?Sized>(
        &mut self,
        terminal: &T,
        options: QueryOptions,
    ) -> Result<Option<String>, PromptError> {
        let default = options
            .default
            .clone()
            .or_else(|| self.default.clone())
            .unwrap_or_default();
        let prompt = self.query_prompt(options.prompt.as_deref(), &default);

        let mut pending = self.previous.clone();
        let mut num_tries = 0;
        let mut last = String::new();

        while self.max_tries.map_or(true, |max| num_tries < max) {
            let answer = match pending.take() {
                Some(sticky) => {
                    debug!(answer = %sticky, "reusing sticky answer");
                    sticky
                }
                None => {
                    num_tries += 1;
                    let input = read_input(terminal, &prompt)?;
                    trace!(attempt = num_tries, input = %input, "read answer");

                    let input = if input.is_empty() { default.clone() } else { input };
                    let input = self
                        .hotkey_answer(&input)
                        .or_else(|| self.hotkey_answer(&input.to_lowercase()))
                        .unwrap_or(input.as_str())
                        .to_lowercase();
                    last.clone_from(&input);

                    match self.match_answer(&input) {
                        Some(answer) => answer.to_string(),
                        None => {
                            debug!(attempt = num_tries, input = %input, "rejected answer");
                            self.notify(terminal, &self.reject, &input, num_tries)?;
                            self.notify(terminal, &options.reject, &input, num_tries)?;
                            continue;
                        }
                    }
                }
            };

            let Some(answer) = self.run_accept(terminal, &self.accept, answer, num_tries)? else {
                continue;
            };
            let Some(answer) = self.run_accept(terminal, &options.accept, answer, num_tries)?
            else {
                continue;
            };

            if self.persistent.contains(&answer) {
                self.previous = Some(answer.clone());
            }
            debug!(answer = %answer, attempts = num_tries, "accepted answer");
            return Ok(Some(answer));
        }

        debug!(attempts = num_tries, last = %last, "retry budget exhausted");
        self.notify(terminal, &self.failure, &last, num_tries)?;
        Ok(None)
    }

    /// Substitute `{default}` and `{default_withbs}` into the prompt template.
    fn query_prompt(&self, template: Option<&str>, default: &str) -> String {
        let backspaces = BACKSPACE.repeat(default.chars().count());
        let default_withbs = format!("{}{}", default, backspaces);
        template::render(
            template.unwrap_or(&self.prompt),
            &[("default", default), ("default_withbs", default_withbs.as_str())],
        )
    }

    fn notify<T: TerminalIO + ?Sized>(
        &self,
        terminal: &T,
        hook: &NotifyHook,
        answer: &str,
        num_tries: usize,
    ) -> Result<(), PromptError> {
        match hook.reaction() {
            None => {}
            Some(Reaction::Callback(f)) => f(self, answer),
            Some(Reaction::Message(template)) => {
                terminal.write_line(&hook_message(template, answer, num_tries))?;
            }
        }
        Ok(())
    }

    /// Run one accept hook. `None` means the hook vetoed the answer.
    fn run_accept<T: TerminalIO + ?Sized>(
        &self,
        terminal: &T,
        hook: &AcceptHook,
        answer: String,
        num_tries: usize,
    ) -> Result<Option<String>, PromptError> {
        match hook.reaction(&answer) {
            None => Ok(Some(answer)),
            Some(Reaction::Message(template)) => {
                terminal.write_line(&hook_message(template, &answer, num_tries))?;
                Ok(Some(answer))
            }
            Some(Reaction::Callback(f)) => match f(self, &answer) {
                Verdict::Keep => Ok(Some(answer)),
                Verdict::Replace(replacement) if replacement.is_empty() => Ok(Some(answer)),
                Verdict::Replace(replacement) => {
                    debug!(answer = %answer, replacement = %replacement, "accept hook replaced answer");
                    Ok(Some(replacement))
                }
                Verdict::Reject => {
                    debug!(answer = %answer, "accept hook vetoed answer");
                    Ok(None)
                }
            },
        }
    }
}

fn read_input<T: TerminalIO + ?Sized>(terminal: &T, prompt: &str) -> Result<String, PromptError> {
    terminal.write_prompt(prompt)?;
    let line = terminal.read_line()?;

    // An empty read, not even a newline, is end-of-input.
    if line.is_empty() {
        return Err(PromptError::Cancelled);
    }
    Ok(line.trim().to_string())
}

fn hook_message(template: &str, answer: &str, num_tries: usize) -> String {
    let num_tries = num_tries.to_string();
    template::render(template, &[("num_tries", num_tries.as_str()), ("answer", answer)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::MockTerminal;

    fn yes_no() -> ChoiceSpec {
        ChoiceSpec::from_text("Continue? ([Y]es/[n]o)").build().unwrap()
    }

    #[test]
    fn prefix_is_expanded() {
        let terminal = MockTerminal::with_response("ye");
        assert_eq!(yes_no().ask_with(&terminal).unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn input_is_case_folded() {
        let terminal = MockTerminal::with_response("NO");
        assert_eq!(yes_no().ask_with(&terminal).unwrap().as_deref(), Some("no"));
    }

    #[test]
    fn empty_line_takes_default() {
        let terminal = MockTerminal::with_response("");
        assert_eq!(yes_no().ask_with(&terminal).unwrap().as_deref(), Some("yes"));
    }

    #[test]
    fn hotkey_is_matched_before_case_folding() {
        let mut spec = ChoiceSpec::from_answers(["stay", "leave"])
            .hotkey("L", "leave")
            .hotkey("l", "stay")
            .build()
            .unwrap();
        let terminal = MockTerminal::with_responses(["L", "l"]);
        assert_eq!(spec.ask_with(&terminal).unwrap().as_deref(), Some("leave"));
        assert_eq!(spec.ask_with(&terminal).unwrap().as_deref(), Some("stay"));
    }

    #[test]
    fn prompt_placeholders_are_substituted() {
        let mut spec = ChoiceSpec::from_answers(["yes", "no"])
            .default("no")
            .prompt("Delete? [{default}] {default_withbs}")
            .build()
            .unwrap();
        let terminal = MockTerminal::with_response("");
        spec.ask_with(&terminal).unwrap();
        assert_eq!(terminal.prompts(), ["Delete? [no] no\u{8}\u{8}"]);
    }

    #[test]
    fn call_overrides_prompt_and_default() {
        let mut spec = yes_no();
        let terminal = MockTerminal::with_response("");
        let answer = spec
            .query_with(&terminal, QueryOptions::new().prompt("Sure? ").default("n"))
            .unwrap();
        assert_eq!(answer.as_deref(), Some("no"));
        assert_eq!(terminal.prompts(), ["Sure? "]);
    }

    #[test]
    fn inferred_hotkeys_match_either_case() {
        let mut spec = ChoiceSpec::from_text("([S]ave/e[X]it)")
            .max_tries(1)
            .build()
            .unwrap();
        assert_eq!(spec.hotkey_answer("x"), Some("exit"));

        let terminal = MockTerminal::with_responses(["x", "X", "S"]);
        assert_eq!(spec.ask_with(&terminal).unwrap().as_deref(), Some("exit"));
        assert_eq!(spec.ask_with(&terminal).unwrap().as_deref(), Some("exit"));
        assert_eq!(spec.ask_with(&terminal).unwrap().as_deref(), Some("save"));
    }

    #[test]
    fn ask_uses_spec_prompt_and_default() {
        let mut spec = ChoiceSpec::from_answers(["Keep", "drop"]).build().unwrap();
        let terminal = MockTerminal::with_response("");
        assert_eq!(spec.ask_with(&terminal).unwrap().as_deref(), Some("keep"));
        assert_eq!(terminal.prompts(), ["(Keep/drop)"]);
    }

    #[test]
    fn eof_cancels() {
        let result = yes_no().ask_with(&MockTerminal::eof());
        assert!(matches!(result, Err(PromptError::Cancelled)));
    }

    #[test]
    fn hook_message_substitutes_tries_and_answer() {
        assert_eq!(
            hook_message("#{num_tries}: {answer}?", "maybe", 2),
            "#2: maybe?"
        );
    }
}
