//! Command-line definition for `choose`.

use clap::Parser;
use standout_choice::{AcceptHook, ChoiceSpec, ConfigError, NotifyHook, QueryOptions};

/// Ask the user to pick one answer and print it.
///
/// Exits with status 1 when no acceptable answer was given.
#[derive(Debug, Parser)]
#[command(name = "choose", version)]
pub struct Cli {
    /// Prompt text with embedded answers, e.g. "Proceed? ([Y]es/[n]o)"
    #[arg(required_unless_present = "answers")]
    pub text: Option<String>,

    /// Explicit comma-separated answers; TEXT then becomes the prompt
    #[arg(short, long, value_delimiter = ',')]
    pub answers: Vec<String>,

    /// Answer used for an empty line
    #[arg(short, long)]
    pub default: Option<String>,

    /// Prompt template; {default} and {default_withbs} are substituted
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Assign a hotkey, as KEY=ANSWER
    #[arg(short = 'k', long = "hotkey", value_name = "KEY=ANSWER", value_parser = parse_hotkey)]
    pub hotkeys: Vec<(String, String)>,

    /// Whitespace-separated answers remembered across repeats
    #[arg(long)]
    pub persistent: Option<String>,

    /// Give up after this many attempts
    #[arg(short = 'n', long)]
    pub max_tries: Option<usize>,

    /// Message printed on invalid input; {num_tries} and {answer} are substituted
    #[arg(long)]
    pub reject: Option<String>,

    /// Message printed on an accepted answer
    #[arg(long)]
    pub accept: Option<String>,

    /// Message printed when all attempts are used up
    #[arg(long)]
    pub failure: Option<String>,

    /// Ask this many times with the same spec
    #[arg(long, default_value_t = 1)]
    pub repeat: usize,
}

impl Cli {
    /// Build the choice spec described by the arguments.
    pub fn spec(&self) -> Result<ChoiceSpec, ConfigError> {
        let mut builder = if self.answers.is_empty() {
            ChoiceSpec::from_text(self.text.clone().unwrap_or_default())
        } else {
            let builder = ChoiceSpec::from_answers(&self.answers);
            match &self.text {
                Some(text) => builder.prompt(text.clone()),
                None => builder,
            }
        };

        if let Some(default) = &self.default {
            builder = builder.default(default.clone());
        }
        if let Some(prompt) = &self.prompt {
            builder = builder.prompt(prompt.clone());
        }
        if !self.hotkeys.is_empty() {
            builder = builder.hotkeys(self.hotkeys.iter().cloned());
        }
        if let Some(persistent) = &self.persistent {
            builder = builder.persistent_str(persistent);
        }
        if let Some(max_tries) = self.max_tries {
            builder = builder.max_tries(max_tries);
        }
        if let Some(reject) = &self.reject {
            builder = builder.reject(NotifyHook::message(reject.clone()));
        }
        if let Some(accept) = &self.accept {
            builder = builder.accept(AcceptHook::message(accept.clone()));
        }
        if let Some(failure) = &self.failure {
            builder = builder.failure(NotifyHook::message(failure.clone()));
        }

        builder.build()
    }

    /// Per-query options: the spec's prompt followed by a space.
    pub fn query_options(&self, spec: &ChoiceSpec) -> QueryOptions {
        let prompt = spec.prompt();
        if prompt.ends_with(char::is_whitespace) {
            QueryOptions::new()
        } else {
            QueryOptions::new().prompt(format!("{} ", prompt))
        }
    }
}

fn parse_hotkey(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, answer)) if !key.is_empty() => Ok((key.to_string(), answer.to_string())),
        _ => Err(format!("expected KEY=ANSWER, got {:?}", s)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use standout_choice::MockTerminal;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("choose").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn embedded_answers() {
        let spec = parse(&["Proceed? ([Y]es/[n]o)"]).spec().unwrap();
        assert_eq!(spec.answers(), ["yes", "no"]);
        assert_eq!(spec.default(), Some("yes"));
    }

    #[test]
    fn explicit_answers_use_text_as_prompt() {
        let spec = parse(&["Colour?", "--answers", "red,green,blue", "-d", "green"])
            .spec()
            .unwrap();
        assert_eq!(spec.answers(), ["red", "green", "blue"]);
        assert_eq!(spec.prompt(), "Colour?");
    }

    #[test]
    fn answers_alone_generate_a_prompt() {
        let spec = parse(&["-a", "red,green"]).spec().unwrap();
        assert_eq!(spec.prompt(), "(red/green)");
    }

    #[test]
    fn text_or_answers_is_required() {
        assert!(Cli::try_parse_from(["choose"]).is_err());
    }

    #[test]
    fn hotkeys_are_parsed() {
        let cli = parse(&["(stay/leave)", "-k", "q=leave", "--hotkey", "s=stay"]);
        assert_eq!(
            cli.hotkeys,
            [("q".to_string(), "leave".to_string()), ("s".to_string(), "stay".to_string())]
        );
        let spec = cli.spec().unwrap();
        assert_eq!(spec.hotkey_answer("q"), Some("leave"));
    }

    #[test]
    fn malformed_hotkey_is_a_usage_error() {
        assert!(Cli::try_parse_from(["choose", "(a/b)", "-k", "ab"]).is_err());
        assert!(Cli::try_parse_from(["choose", "(a/b)", "-k", "=a"]).is_err());
    }

    #[test]
    fn zero_max_tries_is_a_config_error() {
        let err = parse(&["(a/b)", "-n", "0"]).spec().unwrap_err();
        assert_eq!(err.field(), "max_tries");
    }

    #[test]
    fn unknown_persistent_answer_is_a_config_error() {
        let err = parse(&["(a/b)", "--persistent", "a c"]).spec().unwrap_err();
        assert_eq!(err.field(), "persistent");
    }

    #[test]
    fn prompt_gets_a_trailing_space() {
        let cli = parse(&["Go? (y/n)"]);
        let mut spec = cli.spec().unwrap();
        let terminal = MockTerminal::with_response("y");
        let answer = spec.query_with(&terminal, cli.query_options(&spec)).unwrap();
        assert_eq!(answer.as_deref(), Some("y"));
        assert_eq!(terminal.prompts(), ["Go? (y/n) "]);
    }

    #[test]
    fn messages_flow_through_to_the_terminal() {
        let cli = parse(&["(a/b)", "--reject", "no {answer}", "--failure", "bye", "-n", "1"]);
        let mut spec = cli.spec().unwrap();
        let terminal = MockTerminal::with_response("c");
        assert_eq!(spec.ask_with(&terminal).unwrap(), None);
        assert_eq!(terminal.messages(), ["no c", "bye"]);
    }
}
