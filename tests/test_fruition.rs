use proclets::action::{Action, Exit, Init};
use proclets::fruition::Fruition;
use test_log::test;

#[test]
fn round_trip_to_completion() {
    let f = Fruition::default();
    let f = f.trigger(Init::Request);
    assert_eq!(f, Fruition::Elaboration);
    let f = f.trigger(Init::Promise);
    assert_eq!(f, Fruition::Construction);
    let f = f.trigger(Exit::Deliver);
    assert_eq!(f, Fruition::Transition);
    let f = f.trigger(Exit::Confirm);
    assert_eq!(f, Fruition::Completion);
}

#[test]
fn discussion_detour() {
    let f = Fruition::Elaboration.trigger(Init::Counter);
    assert_eq!(f, Fruition::Discussion);
    let f = f.trigger(Init::Promise);
    assert_eq!(f, Fruition::Construction);
}

#[test]
fn counter_only_meaningful_in_elaboration_or_discussion() {
    assert_eq!(
        Fruition::Construction.trigger(Init::Counter),
        Fruition::Construction
    );
}

#[test]
fn terminal_states_are_fixed_points() {
    for terminal in [
        Fruition::Completion,
        Fruition::Defaulted,
        Fruition::Withdrawn,
        Fruition::Cancelled,
    ] {
        for event in [
            Action::from(Init::Request),
            Action::from(Exit::Confirm),
            Action::from(Exit::Abandon),
        ] {
            assert_eq!(terminal.trigger(event), terminal);
        }
    }
}

#[test]
fn unknown_event_leaves_state_unchanged() {
    assert_eq!(Fruition::Inception.trigger(Exit::Confirm), Fruition::Inception);
}
