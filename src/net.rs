//! Arc/place derivation for a proclet's workflow net. See `spec.md` §4.3
//! and `SPEC_FULL.md` §4.3 for the carve-outs this implements: the naive
//! "one fresh place per declared edge" algorithm from
//! `examples/original_source/proclets/proclet.py`'s `build_arcs` would let
//! a self-loop transition's own input place depend on a place only that
//! same transition's firing can produce, deadlocking it forever. This
//! module special-cases self-loops and back-edges instead.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A net's transitions and their successor declarations, in declaration
/// order. `Tag` identifies a transition (an enum variant in practice).
pub type Declaration<Tag> = [(Tag, &'static [Tag])];

/// The derived place numbering for one net: which places enable each
/// transition (`i_nodes`) and which places it produces on firing
/// (`o_nodes`). Computed once at proclet construction and cached for the
/// proclet's lifetime (Testable Properties, `spec.md` §8).
#[derive(Debug, Clone)]
pub struct Net<Tag> {
    order: Vec<Tag>,
    i_nodes: Vec<(Tag, Vec<usize>)>,
    o_nodes: Vec<(Tag, Vec<usize>)>,
}

impl<Tag: Copy + Eq + Hash + Debug> Net<Tag> {
    /// Derives place numbers for `declaration` per the algorithm in
    /// `SPEC_FULL.md` §4.3:
    ///
    /// 1. Index every transition by its position in `declaration`.
    /// 2. Seed a fresh input place for every transition that is never the
    ///    destination of a *forward* edge (one whose source is declared
    ///    earlier); this includes the conventional first transition,
    ///    whose seed becomes place `0`, matching the initial marking `{0}`.
    /// 3. For each forward edge `t -> s`, allocate a fresh place and add it
    ///    to both `o_nodes(t)` and `i_nodes(s)`.
    /// 4. For each self-loop (`s == t`) or back-edge (`s` declared at or
    ///    before `t`), push `t`'s own earliest input place onto
    ///    `o_nodes(t)` without allocating a new place or touching
    ///    `i_nodes(t)`.
    ///
    /// An edge naming a transition absent from `declaration` is logged as
    /// a warning and skipped; the net remains operable but that branch
    /// will never advance (`spec.md` §7).
    #[must_use]
    pub fn build(declaration: &Declaration<Tag>) -> Self {
        let position: std::collections::HashMap<Tag, usize> = declaration
            .iter()
            .enumerate()
            .map(|(i, (t, _))| (*t, i))
            .collect();

        let mut forward_dest: HashSet<Tag> = HashSet::new();
        for (t, succs) in declaration {
            let tp = position[t];
            for s in *succs {
                match position.get(s) {
                    Some(&sp) if sp > tp => {
                        forward_dest.insert(*s);
                    }
                    Some(_) => {}
                    None => tracing::warn!(
                        from = ?t, to = ?s,
                        "net declares an edge to a transition absent from the declaration; skipping"
                    ),
                }
            }
        }

        let mut i_nodes: std::collections::HashMap<Tag, Vec<usize>> = declaration
            .iter()
            .map(|(t, _)| (*t, Vec::new()))
            .collect();
        let mut o_nodes: std::collections::HashMap<Tag, Vec<usize>> = declaration
            .iter()
            .map(|(t, _)| (*t, Vec::new()))
            .collect();

        let mut next_place = 0usize;
        for (t, _) in declaration {
            if !forward_dest.contains(t) {
                let place = next_place;
                next_place += 1;
                i_nodes.get_mut(t).expect("seeded above").push(place);
            }
        }

        for (t, succs) in declaration {
            let tp = position[t];
            for s in *succs {
                let Some(&sp) = position.get(s) else {
                    continue;
                };
                if sp > tp && s != t {
                    let place = next_place;
                    next_place += 1;
                    o_nodes.get_mut(t).expect("seeded above").push(place);
                    i_nodes.get_mut(s).expect("seeded above").push(place);
                } else {
                    let seed = *i_nodes[t]
                        .first()
                        .expect("t must already have an input place before its own self-loop/back-edge is processed");
                    o_nodes.get_mut(t).expect("seeded above").push(seed);
                }
            }
        }

        Self {
            order: declaration.iter().map(|(t, _)| *t).collect(),
            i_nodes: declaration
                .iter()
                .map(|(t, _)| (*t, i_nodes.remove(t).unwrap_or_default()))
                .collect(),
            o_nodes: declaration
                .iter()
                .map(|(t, _)| (*t, o_nodes.remove(t).unwrap_or_default()))
                .collect(),
        }
    }

    /// Transitions in declaration order.
    #[must_use]
    pub fn order(&self) -> &[Tag] {
        &self.order
    }

    /// Places that must all be marked to enable `t`.
    #[must_use]
    pub fn i_nodes(&self, t: Tag) -> &[usize] {
        self.i_nodes
            .iter()
            .find(|(k, _)| *k == t)
            .map_or(&[], |(_, v)| v.as_slice())
    }

    /// Places deposited when `t` fires.
    #[must_use]
    pub fn o_nodes(&self, t: Tag) -> &[usize] {
        self.o_nodes
            .iter()
            .find(|(k, _)| *k == t)
            .map_or(&[], |(_, v)| v.as_slice())
    }

    /// Whether `t` is enabled under `marking`: `i_nodes(t) ⊆ marking`.
    #[must_use]
    pub fn enabled(&self, t: Tag, marking: &HashSet<usize>) -> bool {
        self.i_nodes(t).iter().all(|p| marking.contains(p))
    }
}

