//! The two disjoint speech-act label enumerations carried on every
//! [`Performative`](crate::performative::Performative): `Init` labels that
//! open or steer a conversation during construction, and `Exit` labels
//! that close it. See `spec.md` §3.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Labels that open a conversation or steer it during construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Init {
    Request,
    Promise,
    Decline,
    Confirm,
    Counter,
    Abandon,
    Message,
}

/// Labels that close a conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Exit {
    Deliver,
    Decline,
    Confirm,
    Abandon,
    Message,
}

/// Either half of the speech-act vocabulary. A [`Performative`](crate::performative::Performative)
/// carries exactly one `Action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Init(Init),
    Exit(Exit),
}

impl From<Init> for Action {
    fn from(value: Init) -> Self {
        Self::Init(value)
    }
}

impl From<Exit> for Action {
    fn from(value: Exit) -> Self {
        Self::Exit(value)
    }
}

impl fmt::Display for Init {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Request => "request",
            Self::Promise => "promise",
            Self::Decline => "decline",
            Self::Confirm => "confirm",
            Self::Counter => "counter",
            Self::Abandon => "abandon",
            Self::Message => "message",
        };
        write!(f, "init.{text}")
    }
}

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Deliver => "deliver",
            Self::Decline => "decline",
            Self::Confirm => "confirm",
            Self::Abandon => "abandon",
            Self::Message => "message",
        };
        write!(f, "exit.{text}")
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(i) => write!(f, "{i}"),
            Self::Exit(e) => write!(f, "{e}"),
        }
    }
}
