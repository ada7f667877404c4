//! The speech-act conversation-for-action state machine. See `spec.md`
//! §4.2: tracks a single request's status through the standard
//! Winograd–Flores pathway.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::{Action, Exit, Init};

/// The status of one outstanding request, advanced by [`Fruition::trigger`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fruition {
    Inception,
    Elaboration,
    Construction,
    Transition,
    Completion,
    Discussion,
    Withdrawn,
    Defaulted,
    Cancelled,
}

impl Fruition {
    /// Whether no event can move this state further (`spec.md` §4.2: the
    /// terminal states are completion, defaulted, withdrawn, cancelled).
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(
            self,
            Self::Completion | Self::Defaulted | Self::Withdrawn | Self::Cancelled
        )
    }

    /// Advances the state machine per the transition table in `spec.md`
    /// §4.2. Terminal states are a fixed point under `trigger`: every
    /// event leaves them unchanged. An event not listed for the current
    /// state is also a no-op, not an error: "unknown events leave the
    /// state unchanged".
    #[must_use]
    pub fn trigger(self, event: impl Into<Action>) -> Self {
        if self.is_terminal() {
            return self;
        }
        let event = event.into();
        match (self, event) {
            (Self::Inception, Action::Init(Init::Request)) => Self::Elaboration,

            (Self::Elaboration, Action::Init(Init::Promise)) => Self::Construction,
            (Self::Elaboration, Action::Init(Init::Counter)) => Self::Discussion,
            (Self::Elaboration, Action::Init(Init::Abandon | Init::Decline)) => Self::Withdrawn,

            (Self::Construction, Action::Exit(Exit::Deliver)) => Self::Transition,
            (Self::Construction, Action::Exit(Exit::Abandon)) => Self::Cancelled,
            (Self::Construction, Action::Exit(Exit::Decline)) => Self::Defaulted,

            (Self::Transition, Action::Exit(Exit::Confirm)) => Self::Completion,
            (Self::Transition, Action::Exit(Exit::Decline)) => Self::Construction,
            (Self::Transition, Action::Exit(Exit::Abandon)) => Self::Cancelled,

            (Self::Discussion, Action::Init(Init::Promise | Init::Confirm)) => Self::Construction,
            (Self::Discussion, Action::Init(Init::Counter)) => Self::Elaboration,
            (Self::Discussion, Action::Init(Init::Abandon | Init::Decline)) => Self::Withdrawn,

            (unchanged, _) => unchanged,
        }
    }
}

impl Default for Fruition {
    fn default() -> Self {
        Self::Inception
    }
}

impl fmt::Display for Fruition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Inception => "inception",
            Self::Elaboration => "elaboration",
            Self::Construction => "construction",
            Self::Transition => "transition",
            Self::Completion => "completion",
            Self::Discussion => "discussion",
            Self::Withdrawn => "withdrawn",
            Self::Defaulted => "defaulted",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{text}")
    }
}

