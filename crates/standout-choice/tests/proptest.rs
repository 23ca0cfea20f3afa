//! Property-based tests for answer parsing and matching.

use indexmap::IndexMap;
use proptest::prelude::*;
use standout_choice::{clean_answers, ChoiceSpec, Delimiters, MockTerminal};

// ============================================================================
// Strategies
// ============================================================================

fn word() -> impl Strategy<Value = String> {
    "[a-z]{1,8}".prop_filter("connective is not an answer", |w| w != "or")
}

fn answer_set() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(word(), 1..6).prop_map(|words| {
        let mut unique: Vec<String> = Vec::new();
        for w in words {
            if !unique.contains(&w) {
                unique.push(w);
            }
        }
        unique
    })
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Any prefix that only one answer starts with selects that answer.
    #[test]
    fn unique_prefix_selects_its_answer(answers in answer_set()) {
        let spec = ChoiceSpec::from_answers(&answers).build().unwrap();

        for answer in &answers {
            for end in 1..=answer.len() {
                let prefix = &answer[..end];
                let owners = answers.iter().filter(|a| a.starts_with(prefix)).count();
                if owners == 1 {
                    prop_assert_eq!(spec.match_answer(prefix), Some(answer.as_str()));
                }
            }
        }
    }

    /// A unique prefix typed at the prompt comes back as the full answer.
    #[test]
    fn typed_prefix_is_expanded(answers in answer_set(), pick in any::<prop::sample::Index>()) {
        let answer = pick.get(&answers).clone();
        let shortest = (1..=answer.len())
            .map(|end| &answer[..end])
            .find(|p| answers.iter().filter(|a| a.starts_with(p)).count() == 1);

        if let Some(prefix) = shortest {
            let mut spec = ChoiceSpec::from_answers(&answers).build().unwrap();
            let terminal = MockTerminal::with_response(prefix.to_uppercase());
            prop_assert_eq!(spec.ask_with(&terminal).unwrap(), Some(answer));
        }
    }

    /// Rendering a prompt and extracting it again gives back the answers.
    #[test]
    fn rendered_prompt_round_trips(
        answers in answer_set(),
        default in any::<Option<prop::sample::Index>>(),
        with_hotkeys in any::<bool>(),
    ) {
        let mut builder = ChoiceSpec::from_answers(&answers);
        let default = default.map(|i| i.get(&answers).clone());
        if let Some(d) = &default {
            builder = builder.default(d.clone());
        }
        if with_hotkeys {
            let hotkeys: IndexMap<String, String> = answers
                .iter()
                .map(|a| (a[..1].to_string(), a.clone()))
                .collect();
            builder = builder.hotkeys(hotkeys);
        }
        let spec = builder.build().unwrap();

        let reparsed = ChoiceSpec::from_text(format!("Pick one {}", spec.prompt()))
            .build()
            .unwrap();
        prop_assert_eq!(reparsed.answers(), spec.answers());
        prop_assert_eq!(reparsed.default(), default.as_deref());
    }

    /// Cleaned answers are unique, non-empty and lower-case, and an inferred
    /// default is always one of them.
    #[test]
    fn cleaned_answers_are_canonical(tokens in prop::collection::vec("[a-zA-Z ]{0,6}", 0..8)) {
        let brackets = Delimiters::new("[", "]");
        let cleaned = clean_answers(&tokens, None, Some(&brackets)).unwrap();

        for (i, answer) in cleaned.answers.iter().enumerate() {
            prop_assert!(!answer.is_empty());
            prop_assert_eq!(answer, &answer.to_lowercase());
            prop_assert!(!cleaned.answers[..i].contains(answer));
        }
        if let Some(default) = &cleaned.default {
            prop_assert!(cleaned.answers.contains(default));
        }
    }
}
