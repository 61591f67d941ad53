//! Tests for the group selection policy.

mod common;

use std::sync::Arc;

use common::{Event, Gate, PressOnly, Recorder, buttons, pressed_count};
use radiogroup::{GroupConfig, RadioGroup, SelectionMode};

fn single_group(n: usize) -> (RadioGroup, Vec<radiogroup::RadioButton>, Arc<Recorder>) {
    let group = RadioGroup::new(SelectionMode::Single);
    let members = buttons(n);
    group.add_members(&members);
    let recorder = Arc::new(Recorder::default());
    group.set_delegate(&recorder);
    (group, members, recorder)
}

#[test]
fn test_default_group_config() {
    let group = RadioGroup::default();
    assert_eq!(group.selection_mode(), SelectionMode::Single);
    assert!(!group.keep_one_pressed());
    assert!(group.is_empty());
}

#[test]
fn test_single_mode_scenario() {
    let (group, m, recorder) = single_group(3);

    m[0].request_state_change();
    assert!(m[0].is_pressed());
    assert_eq!(group.pressed_indexes(), vec![0]);
    assert_eq!(recorder.take(), vec![Event::Pressed(0)]);

    m[1].request_state_change();
    assert_eq!(recorder.take(), vec![Event::Unpressed(0), Event::Pressed(1)]);
    assert_eq!(group.pressed_indexes(), vec![1]);

    m[1].request_state_change();
    assert_eq!(recorder.take(), vec![Event::Unpressed(1)]);
    assert!(group.pressed_indexes().is_empty());
}

#[test]
fn test_keep_one_scenario() {
    let (group, m, recorder) = single_group(3);
    group.set_keep_one_pressed(true);

    m[0].request_state_change();
    m[1].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![1]);
    recorder.take();

    m[1].request_state_change();
    assert!(m[1].is_pressed());
    assert_eq!(group.pressed_indexes(), vec![1]);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_unpress_emitted_before_press() {
    let (group, m, recorder) = single_group(3);

    m[0].set_pressed(true);
    recorder.take();

    m[2].request_state_change();
    assert_eq!(recorder.take(), vec![Event::Unpressed(0), Event::Pressed(2)]);
    assert_eq!(group.pressed_indexes(), vec![2]);
}

#[test]
fn test_delegate_sees_settled_cascade() {
    let (_group, m, recorder) = single_group(3);

    m[0].set_pressed(true);
    m[2].request_state_change();
    // The cascade is settled before either callback of the second press runs.
    assert_eq!(recorder.snapshots(), vec![vec![0], vec![2], vec![2]]);
}

#[test]
fn test_single_cascade_in_ascending_order() {
    let group = RadioGroup::new(SelectionMode::Multiple);
    let m = buttons(4);
    group.add_members(&m);
    m[3].set_pressed(true);
    m[0].set_pressed(true);
    m[2].set_pressed(true);

    let recorder = Arc::new(Recorder::default());
    group.set_delegate(&recorder);
    group.set_selection_mode(SelectionMode::Single);
    assert_eq!(group.pressed_indexes(), vec![0, 2, 3], "mode change is not retroactive");

    m[1].request_state_change();
    assert_eq!(
        recorder.take(),
        vec![
            Event::Unpressed(0),
            Event::Unpressed(2),
            Event::Unpressed(3),
            Event::Pressed(1),
        ]
    );
    assert_eq!(group.pressed_indexes(), vec![1]);
}

#[test]
fn test_single_mode_mutual_exclusion() {
    let (group, m, _recorder) = single_group(4);
    let script = [0, 2, 2, 3, 1, 1, 0, 3, 3, 2, 0, 1];

    for index in script {
        m[index].request_state_change();
        assert!(pressed_count(&group) <= 1);
    }
}

#[test]
fn test_keep_one_invariant_holds() {
    let group = RadioGroup::with_config(GroupConfig::multiple().keep_one_pressed());
    let m = buttons(3);
    group.add_members(&m);
    group.set_default_pressed_members([&m[0]]);
    let script = [0, 1, 0, 1, 2, 1, 2, 2, 0];

    for index in script {
        m[index].request_state_change();
        assert!(pressed_count(&group) >= 1);
    }
}

#[test]
fn test_multiple_mode_is_independent() {
    let group = RadioGroup::new(SelectionMode::Multiple);
    let m = buttons(3);
    group.add_members(&m);
    let recorder = Arc::new(Recorder::default());
    group.set_delegate(&recorder);

    m[0].request_state_change();
    m[2].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![0, 2]);
    assert_eq!(recorder.take(), vec![Event::Pressed(0), Event::Pressed(2)]);

    m[0].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![2]);
    assert_eq!(recorder.take(), vec![Event::Unpressed(0)]);
}

#[test]
fn test_keep_one_allows_unpress_when_others_pressed() {
    let group = RadioGroup::with_config(GroupConfig::multiple().keep_one_pressed());
    let m = buttons(2);
    group.add_members(&m);
    group.set_default_pressed_members([&m[0], &m[1]]);
    let recorder = Arc::new(Recorder::default());
    group.set_delegate(&recorder);

    m[0].request_state_change();
    assert_eq!(recorder.take(), vec![Event::Unpressed(0)]);

    m[1].request_state_change();
    assert!(m[1].is_pressed());
    assert!(recorder.take().is_empty());
}

#[test]
fn test_veto_on_member_blocks_group() {
    let (group, m, recorder) = single_group(2);
    let gate = Arc::new(Gate::denying());
    m[1].set_delegate(&gate);
    m[0].set_pressed(true);
    recorder.take();

    m[1].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![0]);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_cascade_bypasses_veto() {
    let (group, m, recorder) = single_group(2);
    let gate = Arc::new(Gate::denying());
    m[0].set_pressed(true);
    m[0].set_delegate(&gate);
    recorder.take();

    m[1].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![1]);
    assert_eq!(gate.asked(), 0);
    assert_eq!(recorder.take(), vec![Event::Unpressed(0), Event::Pressed(1)]);
}

#[test]
fn test_set_pressed_twice_notifies_once() {
    let (_group, m, recorder) = single_group(2);

    m[0].set_pressed(true);
    m[0].set_pressed(true);
    assert_eq!(recorder.take(), vec![Event::Pressed(0)]);

    m[0].set_pressed(false);
    m[0].set_pressed(false);
    assert_eq!(recorder.take(), vec![Event::Unpressed(0)]);
}

#[test]
fn test_set_pressed_applies_policy() {
    let (group, m, recorder) = single_group(2);

    m[0].set_pressed(true);
    m[1].set_pressed(true);
    assert_eq!(group.pressed_indexes(), vec![1]);
    assert_eq!(
        recorder.take(),
        vec![Event::Pressed(0), Event::Unpressed(0), Event::Pressed(1)]
    );
}

#[test]
fn test_keep_one_rejects_set_pressed() {
    let (group, m, recorder) = single_group(2);
    group.set_keep_one_pressed(true);
    m[0].set_pressed(true);
    recorder.take();

    m[0].set_pressed(false);
    assert!(m[0].is_pressed());
    assert!(recorder.take().is_empty());
}

#[test]
fn test_keep_one_not_enforced_without_pressed_members() {
    let (group, m, recorder) = single_group(2);
    group.set_keep_one_pressed(true);

    // Nothing pressed yet: the rule only guards unpresses.
    assert!(group.pressed_indexes().is_empty());
    m[0].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![0]);
    assert_eq!(recorder.take(), vec![Event::Pressed(0)]);
}

#[test]
fn test_partial_delegate() {
    let (group, m, _recorder) = single_group(2);
    let presses = Arc::new(PressOnly::default());
    group.set_delegate(&presses);

    m[0].request_state_change();
    m[1].request_state_change();
    m[1].request_state_change();
    assert_eq!(*presses.presses.lock().unwrap(), vec![0, 1]);
    assert!(group.pressed_indexes().is_empty());
}

#[test]
fn test_dropped_group_delegate_is_ignored() {
    let (group, m, recorder) = single_group(2);
    drop(recorder);

    m[0].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![0]);
}

#[test]
fn test_clear_group_delegate() {
    let (group, m, recorder) = single_group(2);
    group.clear_delegate();

    m[0].request_state_change();
    assert_eq!(group.pressed_indexes(), vec![0]);
    assert!(recorder.take().is_empty());
}

#[test]
fn test_dropped_group_stops_policy() {
    let (group, m, _recorder) = single_group(2);
    drop(group);

    m[0].request_state_change();
    m[1].request_state_change();
    assert!(m[0].is_pressed());
    assert!(m[1].is_pressed());
    assert!(m[0].groups().is_empty());
}
