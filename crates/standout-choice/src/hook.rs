//! Behaviour hooks run when an answer is accepted, rejected, or when the
//! retry budget runs out.
//!
//! Each hook is either absent, a message template written to the terminal,
//! or a callback receiving the spec and the answer. Accept hooks may also be
//! keyed per answer.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::spec::ChoiceSpec;

/// Callback for reject and failure hooks.
pub type NotifyFn = dyn Fn(&ChoiceSpec, &str) + Send + Sync;

/// Callback for accept hooks.
pub type AcceptFn = dyn Fn(&ChoiceSpec, &str) -> Verdict + Send + Sync;

/// What an accept callback decided about a matched answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Accept the answer unchanged.
    Keep,
    /// Refuse the answer and read a fresh line.
    Reject,
    /// Accept, but return this answer instead. An empty string keeps the
    /// current answer.
    Replace(String),
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Self::Keep
        } else {
            Self::Reject
        }
    }
}

/// Hook used for rejections and failures.
#[derive(Clone, Default)]
pub enum NotifyHook {
    #[default]
    None,
    /// Template written to the terminal; `{num_tries}` and `{answer}` are
    /// substituted.
    Message(String),
    Callback(Arc<NotifyFn>),
}

impl NotifyHook {
    pub fn message(template: impl Into<String>) -> Self {
        Self::Message(template.into())
    }

    pub fn callback(f: impl Fn(&ChoiceSpec, &str) + Send + Sync + 'static) -> Self {
        Self::Callback(Arc::new(f))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    pub(crate) fn reaction(&self) -> Option<Reaction<'_, NotifyFn>> {
        match self {
            Self::None => None,
            Self::Message(template) => Some(Reaction::Message(template)),
            Self::Callback(f) => Some(Reaction::Callback(f.as_ref())),
        }
    }
}

impl fmt::Debug for NotifyHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Message(template) => f.debug_tuple("Message").field(template).finish(),
            Self::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

/// A single accept action, as stored in a per-answer map.
#[derive(Clone)]
pub enum AcceptAction {
    Message(String),
    Callback(Arc<AcceptFn>),
}

impl AcceptAction {
    pub fn message(template: impl Into<String>) -> Self {
        Self::Message(template.into())
    }

    pub fn callback(f: impl Fn(&ChoiceSpec, &str) -> Verdict + Send + Sync + 'static) -> Self {
        Self::Callback(Arc::new(f))
    }

    fn reaction(&self) -> Reaction<'_, AcceptFn> {
        match self {
            Self::Message(template) => Reaction::Message(template),
            Self::Callback(f) => Reaction::Callback(f.as_ref()),
        }
    }
}

impl fmt::Debug for AcceptAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(template) => f.debug_tuple("Message").field(template).finish(),
            Self::Callback(_) => write!(f, "Callback(..)"),
        }
    }
}

/// Hook run on a matched answer.
#[derive(Clone, Default)]
pub enum AcceptHook {
    #[default]
    None,
    /// Template written to the terminal for every accepted answer.
    Message(String),
    /// Callback run for every accepted answer.
    Callback(Arc<AcceptFn>),
    /// Action run only for the listed canonical answers.
    PerAnswer(IndexMap<String, AcceptAction>),
}

impl AcceptHook {
    pub fn message(template: impl Into<String>) -> Self {
        Self::Message(template.into())
    }

    pub fn callback(f: impl Fn(&ChoiceSpec, &str) -> Verdict + Send + Sync + 'static) -> Self {
        Self::Callback(Arc::new(f))
    }

    /// Build a per-answer hook from `(answer, action)` pairs.
    pub fn per_answer<K: Into<String>>(actions: impl IntoIterator<Item = (K, AcceptAction)>) -> Self {
        Self::PerAnswer(actions.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// The action that applies to `answer`, if any.
    pub(crate) fn reaction(&self, answer: &str) -> Option<Reaction<'_, AcceptFn>> {
        match self {
            Self::None => None,
            Self::Message(template) => Some(Reaction::Message(template)),
            Self::Callback(f) => Some(Reaction::Callback(f.as_ref())),
            Self::PerAnswer(actions) => actions.get(answer).map(AcceptAction::reaction),
        }
    }
}

impl fmt::Debug for AcceptHook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Message(template) => f.debug_tuple("Message").field(template).finish(),
            Self::Callback(_) => write!(f, "Callback(..)"),
            Self::PerAnswer(actions) => f.debug_tuple("PerAnswer").field(actions).finish(),
        }
    }
}

/// A resolved hook, borrowed for one invocation.
pub(crate) enum Reaction<'a, F: ?Sized> {
    Message(&'a str),
    Callback(&'a F),
}
