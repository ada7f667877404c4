//! The proclet factory. See `spec.md` §4.4: builds a proclet, auto-assigns
//! a name if absent, clones the supplied initial marking so defaults are
//! never shared across instances, and registers the new proclet in the
//! population keyed by `Uid`.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::channel::Channel;
use crate::ids::Uid;
use crate::population::Population;
use crate::proclet::{Proclet, ProcletKind, Tickable};

/// The fields a caller supplies to [`create`]; anything left `None`/empty
/// gets the same defaults `Proclet::new` applies.
pub struct Spec<K: ProcletKind> {
    pub kind: K,
    pub uid: Option<Uid>,
    pub name: Option<String>,
    pub channels: HashMap<String, Rc<RefCell<Channel<K::Content>>>>,
    pub group: HashSet<Uid>,
    pub marking: Option<HashSet<usize>>,
}

impl<K: ProcletKind> Spec<K> {
    #[must_use]
    pub fn new(kind: K) -> Self {
        Self {
            kind,
            uid: None,
            name: None,
            channels: HashMap::new(),
            group: HashSet::new(),
            marking: None,
        }
    }

    #[must_use]
    pub fn uid(mut self, uid: Uid) -> Self {
        self.uid = Some(uid);
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn channels(mut self, channels: HashMap<String, Rc<RefCell<Channel<K::Content>>>>) -> Self {
        self.channels = channels;
        self
    }

    #[must_use]
    pub fn group(mut self, group: HashSet<Uid>) -> Self {
        self.group = group;
        self
    }

    #[must_use]
    pub fn marking(mut self, marking: HashSet<usize>) -> Self {
        self.marking = Some(marking);
        self
    }
}

/// Builds a proclet from `spec`, registers it in `population` keyed by its
/// `Uid`, and returns a shared handle so it can be placed into another
/// proclet's `domain` or driven directly by the host.
///
/// `spec.marking` (if present) is cloned into the new instance rather than
/// shared: two proclets created from the same `Spec` template never
/// alias each other's marking.
pub fn create<K>(spec: Spec<K>, population: &mut Population<K::Content>) -> Rc<RefCell<Proclet<K>>>
where
    K: ProcletKind + 'static,
    K::Content: 'static,
{
    let proclet = Proclet::new(
        spec.kind,
        spec.uid,
        spec.name,
        spec.channels,
        spec.group,
        spec.marking.clone(),
    );
    let uid = proclet.uid;
    let name = proclet.name.clone();
    let shared = Rc::new(RefCell::new(proclet));
    let dynamic: Rc<RefCell<dyn Tickable<K::Content>>> = shared.clone();
    population.register(uid, name, &dynamic);
    shared
}

