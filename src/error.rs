//! Error kinds for the crate. See `spec.md` §7: mailbox-empty is a
//! recoverable local condition, the flow-control exceptions are
//! propagated unchanged to the host, and malformed-net conditions are
//! logged as warnings rather than aborting.

use std::fmt;

/// Recoverable local condition returned by [`Channel::get`](crate::channel::Channel::get)
/// when a party's mailbox has nothing left to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MailboxEmpty;

impl fmt::Display for MailboxEmpty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mailbox empty")
    }
}

impl std::error::Error for MailboxEmpty {}

/// The two flow-control signals a transition handler may raise. Propagated
/// through [`Proclet::tick`](crate::proclet::Proclet::tick) with `?` to the
/// host unchanged, exactly as the Python original's `Termination`/
/// `Restitution` exceptions propagate past the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowException {
    /// Orderly shutdown of the whole run.
    Termination,
    /// A rollback request.
    Restitution,
}

impl fmt::Display for FlowException {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Termination => write!(f, "termination"),
            Self::Restitution => write!(f, "restitution"),
        }
    }
}

impl std::error::Error for FlowException {}
