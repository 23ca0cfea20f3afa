//! Interactive choice prompts for CLI applications.
//!
//! `standout-choice` asks the user to pick one of a fixed set of answers,
//! such as yes/no/cancel. Answers can be abbreviated to any prefix, selected
//! by hotkey, or left empty to take the default. Invalid input is re-prompted
//! until an optional retry budget runs out.
//!
//! # Quick Start
//!
//! ```no_run
//! use standout_choice::ChoiceSpec;
//!
//! let mut overwrite = ChoiceSpec::from_text("Overwrite file? ([Y]es/[n]o/[a]lways)")
//!     .persistent(["always"])
//!     .max_tries(3)
//!     .build()?;
//!
//! match overwrite.ask()?.as_deref() {
//!     Some("yes") | Some("always") => { /* overwrite */ }
//!     _ => { /* skip */ }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Answer syntax
//!
//! ```text
//! "Save? ([Y]es/[n]o)"
//!         │└┬┘  │
//!         │ │   └── separator: the most frequent of , / |
//!         │ └────── [x] marks a hotkey
//!         └──────── a capitalized answer is the default
//! ```
//!
//! # Pipeline
//!
//! Construction runs once: [`extract_answers`] finds the answer list in
//! text, [`clean_answers`] canonicalizes tokens and collects hotkeys, and
//! [`format_prompt`] renders a prompt when none was given. The resulting
//! [`ChoiceSpec`] is then queried any number of times.
//!
//! # Testing
//!
//! Queries accept any [`TerminalIO`]; [`MockTerminal`] scripts the input:
//!
//! ```
//! use standout_choice::{ChoiceSpec, MockTerminal};
//!
//! let mut spec = ChoiceSpec::from_text("Proceed? (y/n)").build().unwrap();
//! let terminal = MockTerminal::with_responses(["maybe", "y"]);
//! assert_eq!(spec.ask_with(&terminal).unwrap().as_deref(), Some("y"));
//! ```

mod clean;
mod error;
mod extract;
mod format;
mod hook;
mod query;
mod spec;
mod style;
mod template;
mod terminal;

pub use clean::{clean_answers, CleanedAnswers};
pub use error::{ConfigError, PromptError};
pub use extract::{extract_answers, extract_answers_into};
pub use format::format_prompt;
pub use hook::{AcceptAction, AcceptFn, AcceptHook, NotifyFn, NotifyHook, Verdict};
pub use query::QueryOptions;
pub use spec::{AnswerSource, ChoiceSpec, ChoiceSpecBuilder};
pub use style::{ChoiceStyle, DefaultCase, Delimiters};
pub use terminal::{MockTerminal, RealTerminal, TerminalIO};
