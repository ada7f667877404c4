//! A weak, process-independent registry mapping `Uid` to proclet, used
//! only for symbolic lookup (pretty printing, cross-proclet discovery by
//! id). See `spec.md` §3 ("Population") and §4.4, and `SPEC_FULL.md` §3:
//! this is an explicit, host-owned value rather than the Python original's
//! class-level global dict (`Proclet.population`), which keeps the crate
//! free of implicit process-wide mutable state while preserving the "weak
//! index, no leaks" behavior.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::ids::Uid;
use crate::proclet::Tickable;

/// An entry in the population: enough to look a proclet back up by id
/// without the registry itself keeping it alive.
struct Entry<C> {
    name: String,
    proclet: Weak<RefCell<dyn Tickable<C>>>,
}

/// Weak UID → proclet index. Entries vanish once nothing else holds the
/// `Rc` (typically once the owning domain drops it).
pub struct Population<C> {
    entries: HashMap<Uid, Entry<C>>,
}

impl<C> Default for Population<C> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<C> Population<C> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `proclet` under `uid`, keeping only a weak reference.
    pub fn register(&mut self, uid: Uid, name: impl Into<String>, proclet: &Rc<RefCell<dyn Tickable<C>>>) {
        self.entries.insert(
            uid,
            Entry {
                name: name.into(),
                proclet: Rc::downgrade(proclet),
            },
        );
    }

    /// Looks up a live proclet by `uid`, dropping the entry if its
    /// referent has already gone away.
    pub fn get(&mut self, uid: Uid) -> Option<Rc<RefCell<dyn Tickable<C>>>> {
        let upgraded = self.entries.get(&uid)?.proclet.upgrade();
        if upgraded.is_none() {
            self.entries.remove(&uid);
        }
        upgraded
    }

    /// The human label a proclet was registered under, for pretty
    /// printing, without requiring the proclet itself still be alive.
    #[must_use]
    pub fn name(&self, uid: Uid) -> Option<&str> {
        self.entries.get(&uid).map(|e| e.name.as_str())
    }

    /// Drops registry entries whose proclet has already been dropped.
    pub fn prune(&mut self) {
        self.entries.retain(|_, e| e.proclet.strong_count() > 0);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

