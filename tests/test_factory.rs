use proclets::error::FlowException;
use proclets::factory::{create, Spec};
use proclets::net::Declaration;
use proclets::population::Population;
use proclets::proclet::{Emission, Proclet, ProcletKind};
use std::collections::HashSet;
use test_log::test;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Tag {
    T1,
}

struct Idle;

impl ProcletKind for Idle {
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
fn created_proclet_is_registered_and_markings_are_independent() {
    let mut population: Population<()> = Population::new();
    let template: HashSet<usize> = [0].into_iter().collect();

    let a = create(Spec::new(Idle).marking(template.clone()), &mut population);
    let b = create(Spec::new(Idle).marking(template.clone()), &mut population);

    a.borrow_mut().marking.insert(7);
    assert!(!b.borrow().marking.contains(&7));

    let a_uid = a.borrow().uid;
    assert!(population.get(a_uid).is_some());
    assert_eq!(population.name(a_uid), Some(a.borrow().name.as_str()));
}

#[test]
fn auto_assigned_name_defaults_to_the_uid() {
    let mut population: Population<()> = Population::new();
    let p = create(Spec::new(Idle), &mut population);
    assert_eq!(p.borrow().name, p.borrow().uid.to_string());
}
