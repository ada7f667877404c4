//! An immutable message record with identity, addressing, and conversation
//! correlation. See `spec.md` §3 and §4.1.
//!
//! `Performative<C>` is generic over its opaque `content`, mirroring the
//! teacher crate's own generic `Message<T>` (`message.rs`): a host picks a
//! concrete payload type per application rather than the library
//! prescribing one.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::ids::{next_timestamp, new_uid, Timestamp, Uid};

/// An immutable message exchanged over a [`Channel`](crate::channel::Channel).
///
/// Built via [`PerformativeBuilder`]; once constructed a `Performative`
/// never changes: a reply or rebroadcast is always a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performative<C> {
    pub ts: Timestamp,
    pub uid: Uid,
    pub channel: String,
    pub sender: Uid,
    pub group: HashSet<Uid>,
    pub connect: Option<Uid>,
    pub context: HashSet<Uid>,
    pub action: Action,
    pub content: Option<C>,
}

impl<C> fmt::Display for Performative<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{} {} -> {} recipients on {}]",
            self.action,
            self.sender,
            self.group.len(),
            self.channel
        )
    }
}

/// Builds a [`Performative`], defaulting `ts`/`uid` and filling `connect`
/// with the performative's own `uid` when the caller leaves it unset, the
/// same "connect defaults to self" rule `Channel::put`/`send` apply, kept
/// here too so a performative built outside of `send` still correlates.
#[derive(Debug, Default)]
pub struct PerformativeBuilder<C> {
    channel: String,
    sender: Option<Uid>,
    group: HashSet<Uid>,
    connect: Option<Uid>,
    context: HashSet<Uid>,
    action: Option<Action>,
    content: Option<C>,
}

impl<C> PerformativeBuilder<C> {
    #[must_use]
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            sender: None,
            group: HashSet::new(),
            connect: None,
            context: HashSet::new(),
            action: None,
            content: None,
        }
    }

    #[must_use]
    pub fn sender(mut self, sender: Uid) -> Self {
        self.sender = Some(sender);
        self
    }

    #[must_use]
    pub fn group(mut self, group: HashSet<Uid>) -> Self {
        self.group = group;
        self
    }

    #[must_use]
    pub fn connect(mut self, connect: Uid) -> Self {
        self.connect = Some(connect);
        self
    }

    #[must_use]
    pub fn context(mut self, context: HashSet<Uid>) -> Self {
        self.context = context;
        self
    }

    #[must_use]
    pub fn action(mut self, action: impl Into<Action>) -> Self {
        self.action = Some(action.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }

    /// Finalizes the performative, defaulting `connect` to its own `uid`
    /// when unset.
    #[must_use]
    pub fn build(self) -> Performative<C> {
        let uid = new_uid();
        Performative {
            ts: next_timestamp(),
            uid,
            channel: self.channel,
            sender: self.sender.unwrap_or_else(new_uid),
            group: self.group,
            connect: Some(self.connect.unwrap_or(uid)),
            context: self.context,
            action: self.action.unwrap_or(Action::Init(crate::action::Init::Message)),
            content: self.content,
        }
    }
}

