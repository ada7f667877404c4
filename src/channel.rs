//! Per-recipient, per-party mailbox store. See `spec.md` §4.1.
//!
//! A `Channel<C>` demultiplexes delivered [`Performative<C>`]s by recipient
//! `Uid`, and within a recipient's queue lets more than one *party* read the
//! same physical queue independently, the "multi-cast-read" semantics that
//! lets a proclet transition drain messages without stealing them from a
//! sibling reader on the same proclet.

use std::collections::{HashMap, HashSet};

use crate::action::Action;
use crate::error::MailboxEmpty;
use crate::ids::Uid;
use crate::performative::{Performative, PerformativeBuilder};

/// A logical reader within a recipient's mailbox. `None` is the default
/// reader every proclet uses unless it registers a distinct party.
pub type Party = Option<Uid>;

/// The fields a caller supplies to [`Channel::send`]; `channel` and
/// `connect` are filled in by the channel itself (see `spec.md` §4.1).
#[derive(Debug, Clone, Default)]
pub struct SendRequest<C> {
    pub sender: Uid,
    pub group: HashSet<Uid>,
    pub connect: Option<Uid>,
    pub context: HashSet<Uid>,
    pub action: Option<Action>,
    pub content: Option<C>,
}

impl<C> SendRequest<C> {
    #[must_use]
    pub fn new(sender: Uid, group: HashSet<Uid>, action: impl Into<Action>) -> Self {
        Self {
            sender,
            group,
            connect: None,
            context: HashSet::new(),
            action: Some(action.into()),
            content: None,
        }
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
    pub fn content(mut self, content: C) -> Self {
        self.content = Some(content);
        self
    }
}

/// A broadcast-capable mailbox store: one ordered queue per recipient
/// `Uid`, with an independent read cursor per `(uid, party)` pair.
///
/// Per `SPEC_FULL.md` §4.1, each party stores the *absolute* count of items
/// it has consumed (`read_count`) rather than every party's cursor being
/// bumped on every `put`; `qsize` is `queue.len() - read_count`. This is
/// observably identical to "every party's unread count grows by one on
/// put, shrinks by one on get" while keeping `put` O(recipients) instead of
/// O(recipients × parties).
#[derive(Debug)]
pub struct Channel<C> {
    name: String,
    maxlen: Option<usize>,
    store: HashMap<Uid, Vec<Performative<C>>>,
    parties: HashMap<Uid, HashMap<Party, usize>>,
}

impl<C> Channel<C> {
    /// Creates an unnamed channel. `maxlen`, if set, is advisory only;
    /// `full` always reports `false` per `spec.md` §6, and the crate never
    /// evicts queued items.
    #[must_use]
    pub fn new(maxlen: Option<usize>) -> Self {
        Self::named(String::new(), maxlen)
    }

    /// Creates a channel whose name is stamped onto every `Performative`
    /// it sends, so a host reading a log of performatives can tell which
    /// channel originated each one.
    #[must_use]
    pub fn named(name: impl Into<String>, maxlen: Option<usize>) -> Self {
        Self {
            name: name.into(),
            maxlen,
            store: HashMap::new(),
            parties: HashMap::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    fn queue_len(&self, uid: Uid) -> usize {
        self.store.get(&uid).map_or(0, Vec::len)
    }

    /// Cursor for `(uid, party)`, lazily seeded to the current queue length
    /// on first access so a party that starts reading mid-flight never
    /// sees historical traffic (`spec.md` §3, §4.1).
    fn cursor(&mut self, uid: Uid, party: Party) -> usize {
        let len = self.queue_len(uid);
        *self
            .parties
            .entry(uid)
            .or_default()
            .entry(party)
            .or_insert(len)
    }

    /// Number of unread items for `(uid, party)`.
    pub fn qsize(&mut self, uid: Uid, party: Party) -> usize {
        let len = self.queue_len(uid);
        let read = self.cursor(uid, party);
        len.saturating_sub(read)
    }

    /// Whether `(uid, party)` has nothing left to read.
    pub fn empty(&mut self, uid: Uid, party: Party) -> bool {
        self.qsize(uid, party) == 0
    }

    /// Always `false`: this crate never bounds or evicts a mailbox.
    #[must_use]
    pub const fn full(&self, _uid: Uid) -> bool {
        false
    }

    /// Deposits `msg` into the mailbox of every `Uid` in `msg.group`.
    /// A message with an empty group is a no-op. Returns the fan-out count.
    pub fn put(&mut self, msg: Performative<C>) -> usize
    where
        C: Clone,
    {
        if msg.group.is_empty() {
            return 0;
        }
        let mut n = 0;
        for &uid in &msg.group {
            self.store.entry(uid).or_default().push(msg.clone());
            n += 1;
        }
        n
    }

    /// Returns the next unread message for `(uid, party)`, advancing that
    /// party's cursor. Other parties on the same recipient are unaffected.
    pub fn get(&mut self, uid: Uid, party: Party) -> Result<Performative<C>, MailboxEmpty>
    where
        C: Clone,
    {
        let read = self.cursor(uid, party);
        let msg = self
            .store
            .get(&uid)
            .and_then(|q| q.get(read))
            .cloned()
            .ok_or(MailboxEmpty)?;
        self.parties
            .get_mut(&uid)
            .expect("cursor() just inserted this party")
            .insert(party, read + 1);
        Ok(msg)
    }

    /// Drains `(uid, party)`'s mailbox, returning every unread message in
    /// arrival order.
    pub fn receive(&mut self, uid: Uid, party: Party) -> Vec<Performative<C>>
    where
        C: Clone,
    {
        let mut out = Vec::new();
        while let Ok(m) = self.get(uid, party) {
            out.push(m);
        }
        out
    }

    /// Builds a `Performative` from `req`, filling `channel` and the
    /// `connect` default, puts it, and returns one clone per delivered
    /// recipient (mirroring the Python original's "yield once per
    /// recipient" `send` generator).
    pub fn send(&mut self, req: SendRequest<C>) -> Vec<Performative<C>>
    where
        C: Clone,
    {
        let mut builder = PerformativeBuilder::new(self.name.clone())
            .sender(req.sender)
            .group(req.group)
            .context(req.context);
        if let Some(action) = req.action {
            builder = builder.action(action);
        }
        if let Some(connect) = req.connect {
            builder = builder.connect(connect);
        }
        if let Some(content) = req.content {
            builder = builder.content(content);
        }
        let msg = builder.build();
        let n = self.put(msg.clone());
        std::iter::repeat(msg).take(n).collect()
    }

    /// Replies to `m` addressed to `m.sender` only, inheriting `channel`,
    /// `connect`, and `context` from it. `from` is the replying proclet's
    /// `Uid`.
    pub fn reply(
        &mut self,
        from: Uid,
        m: &Performative<C>,
        action: impl Into<Action>,
        content: Option<C>,
    ) -> Performative<C>
    where
        C: Clone,
    {
        let mut group = HashSet::new();
        group.insert(m.sender);
        let mut builder = PerformativeBuilder::new(m.channel.clone())
            .sender(from)
            .group(group)
            .connect(m.connect.unwrap_or(m.uid))
            .context(m.context.clone())
            .action(action.into());
        if let Some(content) = content {
            builder = builder.content(content);
        }
        let msg = builder.build();
        self.put(msg.clone());
        msg
    }

    /// Drains `(proclet_uid, party)`'s mailbox; for every message whose
    /// `action` is a key of `actions`, emits the incoming message, then (if
    /// the mapped action is `Some`) sends a reply carrying that action, the
    /// content mapped for the incoming action (if any), the union of
    /// `context` and the incoming message's context, and
    /// `connect = m.connect or m.uid`.
    pub fn respond(
        &mut self,
        proclet_uid: Uid,
        party: Party,
        actions: &HashMap<Action, Option<Action>>,
        contents: &HashMap<Action, C>,
        context: &HashSet<Uid>,
    ) -> Vec<Performative<C>>
    where
        C: Clone,
    {
        let mut out = Vec::new();
        while let Ok(m) = self.get(proclet_uid, party) {
            let Some(mapped) = actions.get(&m.action) else {
                continue;
            };
            out.push(m.clone());
            if let Some(reply_action) = mapped {
                let mut ctx = context.clone();
                ctx.extend(m.context.iter().copied());
                let content = contents.get(&m.action).cloned();
                let mut group = HashSet::new();
                group.insert(m.sender);
                let builder = PerformativeBuilder::new(m.channel.clone())
                    .sender(proclet_uid)
                    .group(group)
                    .connect(m.connect.unwrap_or(m.uid))
                    .context(ctx)
                    .action(*reply_action);
                let builder = if let Some(content) = content {
                    builder.content(content)
                } else {
                    builder
                };
                let reply_msg = builder.build();
                self.put(reply_msg.clone());
                out.push(reply_msg);
            }
        }
        out
    }

    /// Every message in the channel that involves `uid` as sender or names
    /// it in `group`, grouped by `connect` id and ordered by ascending
    /// `ts` within each group. Scans the whole store and dedups by
    /// performative `uid` since a broadcast message is cloned into several
    /// recipients' queues.
    pub fn view(&self, uid: Uid) -> HashMap<Uid, Vec<Performative<C>>>
    where
        C: Clone,
    {
        let mut seen = HashSet::new();
        let mut all: Vec<&Performative<C>> = Vec::new();
        for queue in self.store.values() {
            for m in queue {
                if (m.sender == uid || m.group.contains(&uid)) && seen.insert(m.uid) {
                    all.push(m);
                }
            }
        }
        all.sort_by_key(|m| m.ts);

        let mut out: HashMap<Uid, Vec<Performative<C>>> = HashMap::new();
        for m in all {
            out.entry(m.connect.unwrap_or(m.uid))
                .or_default()
                .push(m.clone());
        }
        out
    }
}

