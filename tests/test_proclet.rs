use proclets::error::FlowException;
use proclets::net::Declaration;
use proclets::proclet::{Emission, Proclet, ProcletKind};
use std::collections::{HashMap, HashSet};
use test_log::test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tag {
    T1,
    T2,
}

struct SelfLoop {
    fired_t1: u32,
}

impl ProcletKind for SelfLoop {
    type Tag = Tag;
    type Content = ();

    fn net() -> &'static Declaration<Tag> {
        static DECL: [(Tag, &[Tag]); 2] = [(Tag::T1, &[Tag::T1, Tag::T2]), (Tag::T2, &[])];
        &DECL
    }

    fn handle(proclet: &mut Proclet<Self>, this: Tag, out: &mut Vec<Emission<()>>) -> Result<(), FlowException> {
        match this {
            Tag::T1 => {
                proclet.kind.fired_t1 += 1;
                out.push(Emission::Complete);
            }
            Tag::T2 => out.push(Emission::Complete),
        }
        Ok(())
    }
}

#[test]
fn self_loop_transition_stays_enabled_after_firing() {
    let mut p = Proclet::new(SelfLoop { fired_t1: 0 }, None, None, HashMap::new(), HashSet::new(), None);
    assert_eq!(p.marking, [0].into_iter().collect());

    p.tick().expect("tick does not terminate");
    assert_eq!(p.kind.fired_t1, 1);
    assert_eq!(p.marking, [0, 1].into_iter().collect());

    p.tick().expect("tick does not terminate");
    assert_eq!(p.kind.fired_t1, 2);
}

struct NeverFires;

impl ProcletKind for NeverFires {
    type Tag = Tag;
    type Content = ();

    fn net() -> &'static Declaration<Tag> {
        static DECL: [(Tag, &[Tag]); 1] = [(Tag::T1, &[])];
        &DECL
    }

    fn handle(_proclet: &mut Proclet<Self>, _this: Tag, _out: &mut Vec<Emission<()>>) -> Result<(), FlowException> {
        Ok(())
    }
}

#[test]
fn blocked_transition_increments_slate_and_tally() {
    let mut p = Proclet::new(NeverFires, None, None, HashMap::new(), HashSet::new(), None);
    p.tick().expect("tick does not terminate");
    p.tick().expect("tick does not terminate");
    assert_eq!(p.slate[&Tag::T1], 2);
    assert_eq!(p.tally[&Tag::T1], 2);
    assert_eq!(p.marking, [0].into_iter().collect());
}

struct Terminates;

impl ProcletKind for Terminates {
    type Tag = Tag;
    type Content = ();

    fn net() -> &'static Declaration<Tag> {
        static DECL: [(Tag, &[Tag]); 1] = [(Tag::T1, &[])];
        &DECL
    }

    fn handle(_proclet: &mut Proclet<Self>, _this: Tag, _out: &mut Vec<Emission<()>>) -> Result<(), FlowException> {
        Err(FlowException::Termination)
    }
}

#[test]
fn termination_propagates_through_tick() {
    let mut p = Proclet::new(Terminates, None, None, HashMap::new(), HashSet::new(), None);
    let err = p.tick().unwrap_err();
    assert_eq!(err, FlowException::Termination);
}
