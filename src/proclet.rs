//! The workflow-net execution engine. See `spec.md` §3 ("Proclet") and
//! §4.3 for the tick/firing contract this module implements.
//!
//! `SPEC_FULL.md` §9 resolves the source's dynamic, introspected-callable
//! transitions into static dispatch: each proclet kind implements
//! [`ProcletKind`], a stable `Tag` identifies its transitions, and `net()`
//! returns a `'static` ordered transition table built once. The source's
//! lazy-generator control flow becomes handlers that push [`Emission`]
//! values into a caller-supplied buffer instead of yielding. The
//! "complete" sentinel becomes `Emission::Complete`, a distinct variant
//! rather than a null.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use crate::channel::Channel;
use crate::error::FlowException;
use crate::ids::{new_uid, Uid};
use crate::net::{Declaration, Net};
use crate::performative::Performative;

/// One object a transition handler may push into its output buffer
/// during a tick.
pub enum Emission<C> {
    /// The distinguished "complete" sentinel (`spec.md` §4.3): firing the
    /// transition, retiring its input tokens and depositing its output
    /// tokens. A handler that never pushes this during a tick is
    /// considered blocked for that tick.
    Complete,
    /// A newly created child proclet, joining the caller's `domain` if it
    /// is not already present.
    Spawn(Rc<RefCell<dyn Tickable<C>>>),
    /// Any other yielded value, typically a `Performative` already
    /// deposited into a channel by the handler; passed through to the
    /// host unchanged.
    Performative(Performative<C>),
}

impl<C: Debug> Debug for Emission<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Complete => write!(f, "Emission::Complete"),
            Self::Spawn(child) => write!(f, "Emission::Spawn({})", child.borrow().uid()),
            Self::Performative(m) => write!(f, "Emission::Performative({m:?})"),
        }
    }
}

/// Uniform interface over a heterogeneous domain of child proclets. Every
/// `Proclet<K>` implements this so proclets of different `ProcletKind`s
/// can share one parent's `domain`.
pub trait Tickable<C> {
    /// Drives one tick: recurses into this proclet's own domain, fires
    /// whatever transitions are enabled, and returns the objects its own
    /// transitions emitted this round (not its descendants', see
    /// `SPEC_FULL.md` §4.3's open design decision).
    fn tick(&mut self) -> Result<Vec<Emission<C>>, FlowException>;

    fn uid(&self) -> Uid;

    fn name(&self) -> &str;

    /// Scheduling hint; `None` sorts after any proclet with an explicit
    /// priority, keeping declaration order among untagged siblings
    /// (`spec.md` §3, §4.3's "priority" design note).
    fn priority(&self) -> Option<i64> {
        None
    }
}

/// A proclet kind: the handler table a [`Proclet`] drives. `Tag` stably
/// identifies one transition; `Content` is the opaque payload type carried
/// by this kind's performatives.
pub trait ProcletKind: Sized {
    type Tag: Copy + Eq + Hash + Debug + 'static;
    type Content;

    /// The net's transitions and successor declarations, in declaration
    /// order, built once per kind (`spec.md` §4.3).
    fn net() -> &'static Declaration<Self::Tag>;

    /// Runs transition `this`'s handler for one tick, pushing whatever it
    /// yields into `out`. Called only when `this` is enabled.
    fn handle(
        proclet: &mut Proclet<Self>,
        this: Self::Tag,
        out: &mut Vec<Emission<Self::Content>>,
    ) -> Result<(), FlowException>;
}

/// A stateful workflow-net process: identity, marking, channels, domain,
/// and the handler state of its `ProcletKind`. See `spec.md` §3.
pub struct Proclet<K: ProcletKind> {
    pub uid: Uid,
    pub name: String,
    pub kind: K,
    pub marking: HashSet<usize>,
    pub tally: HashMap<K::Tag, u64>,
    pub slate: HashMap<K::Tag, u64>,
    pub domain: Vec<Rc<RefCell<dyn Tickable<K::Content>>>>,
    pub channels: HashMap<String, Rc<RefCell<Channel<K::Content>>>>,
    pub group: HashSet<Uid>,
    pub priority: Option<i64>,
    net: Net<K::Tag>,
}

impl<K: ProcletKind> Proclet<K> {
    /// Builds a proclet with an auto-assigned uid/name if absent and the
    /// conventional initial marking `{0}` if none is supplied. Does not
    /// register it in a [`Population`](crate::population::Population);
    /// see [`crate::factory::create`] for the registering constructor
    /// hosts are expected to use (`spec.md` §4.4).
    #[must_use]
    pub fn new(
        kind: K,
        uid: Option<Uid>,
        name: Option<String>,
        channels: HashMap<String, Rc<RefCell<Channel<K::Content>>>>,
        group: HashSet<Uid>,
        marking: Option<HashSet<usize>>,
    ) -> Self {
        let uid = uid.unwrap_or_else(new_uid);
        let name = name.unwrap_or_else(|| uid.to_string());
        Self {
            uid,
            name,
            kind,
            marking: marking.unwrap_or_else(|| [0usize].into_iter().collect()),
            tally: HashMap::new(),
            slate: HashMap::new(),
            domain: Vec::new(),
            channels,
            group,
            priority: None,
            net: Net::build(K::net()),
        }
    }

    /// The arc/place numbering derived once at construction (`spec.md` §3
    /// "arcs", §6 external interface). Exposed for introspection, e.g.
    /// pretty printing a net's structure or a host computing its own
    /// enabled-set diagnostics, without recomputing `i_nodes`/`o_nodes`
    /// by hand.
    #[must_use]
    pub const fn arcs(&self) -> &Net<K::Tag> {
        &self.net
    }

    #[must_use]
    pub fn i_nodes(&self, t: K::Tag) -> &[usize] {
        self.net.i_nodes(t)
    }

    #[must_use]
    pub fn o_nodes(&self, t: K::Tag) -> &[usize] {
        self.net.o_nodes(t)
    }

    /// Transitions currently enabled: `i_nodes(t) ⊆ marking`, ordered by
    /// ascending `tally` so long-starved transitions run sooner
    /// (`spec.md` §4.3 step 2: a deterministic fairness proxy, not true
    /// scheduling priority).
    #[must_use]
    pub fn enabled(&self) -> Vec<K::Tag> {
        let mut ts: Vec<K::Tag> = self
            .net
            .order()
            .iter()
            .copied()
            .filter(|t| self.net.enabled(*t, &self.marking))
            .collect();
        ts.sort_by_key(|t| *self.tally.get(t).unwrap_or(&0));
        ts
    }

    /// Drives every direct child's own tick for effect: their
    /// transitions fire, their channel traffic happens, their own domains
    /// recurse, but none of what they emit is re-yielded here (see the
    /// open design decision recorded in `SPEC_FULL.md` §4.3 and `DESIGN.md`).
    fn tick_domain(&mut self) -> Result<(), FlowException> {
        self.domain
            .sort_by_key(|c| c.borrow().priority().unwrap_or(i64::MAX));
        for child in &self.domain {
            child.borrow_mut().tick()?;
        }
        Ok(())
    }

    /// One tick of this proclet: recurse into `domain`, fire every
    /// enabled transition in fairness order, and return what this
    /// proclet's own transitions emitted this round.
    pub fn tick(&mut self) -> Result<Vec<Emission<K::Content>>, FlowException> {
        self.tick_domain()?;

        let mut out = Vec::new();
        for t in self.enabled() {
            let mut buf = Vec::new();
            K::handle(self, t, &mut buf)?;

            let mut fired = false;
            for emission in buf {
                match emission {
                    Emission::Complete => {
                        fired = true;
                        for p in self.net.i_nodes(t) {
                            self.marking.remove(p);
                        }
                        for p in self.net.o_nodes(t) {
                            self.marking.insert(*p);
                        }
                        self.slate.insert(t, 0);
                    }
                    Emission::Spawn(child) => {
                        let child_uid = child.borrow().uid();
                        let already_known = self.domain.iter().any(|c| c.borrow().uid() == child_uid);
                        if !already_known {
                            self.domain.push(Rc::clone(&child));
                        }
                        out.push(Emission::Spawn(child));
                    }
                    other @ Emission::Performative(_) => out.push(other),
                }
            }

            if !fired {
                *self.slate.entry(t).or_insert(0) += 1;
            }
            *self.tally.entry(t).or_insert(0) += 1;
        }
        Ok(out)
    }
}

impl<K: ProcletKind + 'static> Tickable<K::Content> for Proclet<K>
where
    K::Content: 'static,
{
    fn tick(&mut self) -> Result<Vec<Emission<K::Content>>, FlowException> {
        Self::tick(self)
    }

    fn uid(&self) -> Uid {
        self.uid
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn priority(&self) -> Option<i64> {
        self.priority
    }
}

