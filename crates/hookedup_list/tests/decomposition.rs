//! Tests for how compound operations decompose into elementary steps.
//!
//! Each test records the hook traffic with `StepRecorder` and asserts on the
//! exact sequence of notifications.


use hookedup_list::dev::StepRecorder;
use hookedup_list::hooks::{HookEvent, Notification};
use hookedup_list::{HookedList, SliceSpec};
use test_utils::init_tracing;

use Notification::{PostAdd, PostRemove, PostReplace, PreAdd, PreRemove, PreReplace};

fn recorded(seed: &[i32]) -> (HookedList<i32>, StepRecorder<i32>) {
    init_tracing();
    let recorder = StepRecorder::new();
    let list = HookedList::with_items(seed.iter().copied(), recorder.hooks()).unwrap();
    let _ = recorder.take();
    (list, recorder)
}

// ═══════════════════════════════════════════════════════════════════════════════
// ADDING
// ═══════════════════════════════════════════════════════════════════════════════

/// Seed elements go through the add pipeline.
#[test]
fn construction_fires_add_hooks_for_seed() {
    let recorder = StepRecorder::new();
    let list = HookedList::with_items([1, 2], recorder.hooks()).unwrap();

    assert_eq!(list, [1, 2]);
    assert_eq!(
        recorder.take(),
        vec![PreAdd(1), PostAdd(1), PreAdd(2), PostAdd(2)]
    );
}

#[test]
fn append_and_insert_are_single_adds() {
    let (mut list, recorder) = recorded(&[1, 3]);

    list.append(4).unwrap();
    list.insert(1, 2).unwrap();

    assert_eq!(list, [1, 2, 3, 4]);
    assert_eq!(
        recorder.take(),
        vec![PreAdd(4), PostAdd(4), PreAdd(2), PostAdd(2)]
    );
}

#[test]
fn extend_adds_each_value_in_order() {
    let (mut list, recorder) = recorded(&[]);

    list.extend([7, 8, 9]).unwrap();

    assert_eq!(list, [7, 8, 9]);
    assert_eq!(
        recorder.events(),
        vec![
            HookEvent::PreAdd,
            HookEvent::PostAdd,
            HookEvent::PreAdd,
            HookEvent::PostAdd,
            HookEvent::PreAdd,
            HookEvent::PostAdd,
        ]
    );
}

#[test]
fn concat_in_place_matches_extend() {
    let (mut list, recorder) = recorded(&[0]);
    list.concat_in_place([1, 2]).unwrap();
    assert_eq!(list, [0, 1, 2]);
    assert_eq!(recorder.count(HookEvent::PostAdd), 2);
}

/// `concat` builds a new list through the add pipeline and leaves the source alone.
#[test]
fn concat_seeds_a_new_list_with_shared_hooks() {
    let (list, recorder) = recorded(&[1, 2]);

    let joined = list.concat([3]).unwrap();

    assert_eq!(list, [1, 2]);
    assert_eq!(joined, [1, 2, 3]);
    assert_eq!(recorder.count(HookEvent::PreAdd), 3);
    assert!(joined.hooks().is_registered(HookEvent::PreAdd));
}

#[test]
fn repeat_in_place_appends_copies() {
    let (mut list, recorder) = recorded(&[1, 2]);

    list.repeat_in_place(3).unwrap();

    assert_eq!(list, [1, 2, 1, 2, 1, 2]);
    assert_eq!(recorder.count(HookEvent::PreAdd), 4);
    assert_eq!(recorder.count(HookEvent::PreRemove), 0);
}

#[test]
fn repeat_zero_clears() {
    let (mut list, recorder) = recorded(&[1, 2]);

    list.repeat_in_place(0).unwrap();

    assert!(list.is_empty());
    assert_eq!(
        recorder.take(),
        vec![PreRemove(2), PostRemove(2), PreRemove(1), PostRemove(1)]
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// REPLACING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn set_is_a_single_replace() {
    let (mut list, recorder) = recorded(&[1, 2, 3]);

    list.set(-2, 20).unwrap();

    assert_eq!(list, [1, 20, 3]);
    assert_eq!(
        recorder.take(),
        vec![
            PreReplace { old: 2, new: 20 },
            PostReplace { old: 2, new: 20 }
        ]
    );
}

/// `seq[1:3] = [x, y, z]` on `[0, 1, 2, 3]`: two replaces, then one add.
#[test]
fn growing_slice_assignment_replaces_then_adds() {
    let (mut list, recorder) = recorded(&[0, 1, 2, 3]);

    list.set_slice(1..3, [10, 20, 30]).unwrap();

    assert_eq!(list, [0, 10, 20, 30, 3]);
    assert_eq!(
        recorder.take(),
        vec![
            PreReplace { old: 1, new: 10 },
            PostReplace { old: 1, new: 10 },
            PreReplace { old: 2, new: 20 },
            PostReplace { old: 2, new: 20 },
            PreAdd(30),
            PostAdd(30),
        ]
    );
}

#[test]
fn shrinking_slice_assignment_replaces_then_removes() {
    let (mut list, recorder) = recorded(&[0, 1, 2, 3, 4]);

    list.set_slice(1..4, [10]).unwrap();

    assert_eq!(list, [0, 10, 4]);
    assert_eq!(
        recorder.take(),
        vec![
            PreReplace { old: 1, new: 10 },
            PostReplace { old: 1, new: 10 },
            PreRemove(2),
            PostRemove(2),
            PreRemove(3),
            PostRemove(3),
        ]
    );
}

#[test]
fn empty_slice_assignment_inserts() {
    let (mut list, recorder) = recorded(&[0, 3]);

    list.set_slice(1..1, [1, 2]).unwrap();

    assert_eq!(list, [0, 1, 2, 3]);
    assert_eq!(
        recorder.take(),
        vec![PreAdd(1), PostAdd(1), PreAdd(2), PostAdd(2)]
    );
}

#[test]
fn extended_slice_assignment_replaces_in_slice_order() {
    let (mut list, recorder) = recorded(&[0, 1, 2, 3, 4]);

    list.set_slice(SliceSpec::full().with_step(-2), [40, 20, 0])
        .unwrap();

    assert_eq!(list, [0, 1, 20, 3, 40]);
    assert_eq!(
        recorder.events(),
        vec![
            HookEvent::PreReplace,
            HookEvent::PostReplace,
            HookEvent::PreReplace,
            HookEvent::PostReplace,
            HookEvent::PreReplace,
            HookEvent::PostReplace,
        ]
    );
    assert_eq!(
        recorder.take()[0],
        PreReplace { old: 4, new: 40 },
        "negative step starts from the end"
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// REMOVING
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn remove_pop_and_delete_are_single_removes() {
    let (mut list, recorder) = recorded(&[1, 2, 3, 2]);

    list.remove(&2).unwrap();
    assert_eq!(list.pop().unwrap(), 2);
    list.delete(0).unwrap();

    assert_eq!(list, [3]);
    assert_eq!(
        recorder.take(),
        vec![
            PreRemove(2),
            PostRemove(2),
            PreRemove(2),
            PostRemove(2),
            PreRemove(1),
            PostRemove(1),
        ]
    );
}

#[test]
fn clear_removes_from_last_to_first() {
    let (mut list, recorder) = recorded(&[1, 2, 3]);

    list.clear().unwrap();

    assert!(list.is_empty());
    assert_eq!(
        recorder.take(),
        vec![
            PreRemove(3),
            PostRemove(3),
            PreRemove(2),
            PostRemove(2),
            PreRemove(1),
            PostRemove(1),
        ]
    );
}

#[test]
fn delete_slice_contiguous_removes_left_to_right() {
    let (mut list, recorder) = recorded(&[0, 1, 2, 3]);

    list.delete_slice(1..3).unwrap();

    assert_eq!(list, [0, 3]);
    assert_eq!(
        recorder.take(),
        vec![PreRemove(1), PostRemove(1), PreRemove(2), PostRemove(2)]
    );
}

#[test]
fn delete_slice_extended_removes_highest_first() {
    let (mut list, recorder) = recorded(&[0, 1, 2, 3, 4]);

    list.delete_slice(SliceSpec::full().with_step(2)).unwrap();

    assert_eq!(list, [1, 3]);
    assert_eq!(
        recorder.take(),
        vec![
            PreRemove(4),
            PostRemove(4),
            PreRemove(2),
            PostRemove(2),
            PreRemove(0),
            PostRemove(0),
        ]
    );
}

// ═══════════════════════════════════════════════════════════════════════════════
// REORDERING
// ═══════════════════════════════════════════════════════════════════════════════

/// Sorting only moves values between positions: no add or remove hooks.
#[test]
fn sort_uses_only_replace_hooks() {
    let (mut list, recorder) = recorded(&[3, 1, 2]);

    list.sort().unwrap();

    assert_eq!(list, [1, 2, 3]);
    assert_eq!(recorder.count(HookEvent::PreAdd), 0);
    assert_eq!(recorder.count(HookEvent::PreRemove), 0);
    assert_eq!(
        recorder.take(),
        vec![
            PreReplace { old: 3, new: 1 },
            PostReplace { old: 3, new: 1 },
            PreReplace { old: 1, new: 2 },
            PostReplace { old: 1, new: 2 },
            PreReplace { old: 2, new: 3 },
            PostReplace { old: 2, new: 3 },
        ]
    );
}

#[test]
fn sort_skips_positions_already_in_place() {
    let (mut list, recorder) = recorded(&[1, 3, 2, 4]);

    list.sort().unwrap();

    assert_eq!(list, [1, 2, 3, 4]);
    assert_eq!(recorder.count(HookEvent::PreReplace), 2);
}

/// Duplicates that land on an equal value are not replaced.
#[test]
fn sort_skips_positions_holding_an_equal_value() {
    let (mut list, recorder) = recorded(&[2, 1, 2, 1]);

    list.sort().unwrap();

    assert_eq!(list, [1, 1, 2, 2]);
    assert_eq!(
        recorder.take(),
        vec![
            PreReplace { old: 2, new: 1 },
            PostReplace { old: 2, new: 1 },
            PreReplace { old: 1, new: 2 },
            PostReplace { old: 1, new: 2 },
        ]
    );
}

#[test]
fn sorted_list_fires_nothing() {
    let (mut list, recorder) = recorded(&[1, 2, 3]);
    list.sort().unwrap();
    assert!(recorder.is_empty());
}

#[test]
fn sort_by_key_is_stable() {
    init_tracing();
    let recorder = StepRecorder::new();
    let mut list =
        HookedList::with_items([(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')], recorder.hooks())
            .unwrap();

    list.sort_by_key(|pair| pair.0).unwrap();

    assert_eq!(list, [(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    assert_eq!(recorder.count(HookEvent::PreAdd), 4, "only construction adds");
}

#[test]
fn reverse_uses_only_replace_hooks() {
    let (mut list, recorder) = recorded(&[1, 2, 3, 4, 5]);

    list.reverse().unwrap();

    assert_eq!(list, [5, 4, 3, 2, 1]);
    assert_eq!(
        recorder.events(),
        vec![HookEvent::PreReplace, HookEvent::PostReplace].repeat(4),
        "the middle element does not move"
    );
}

#[test]
fn sort_by_descending() {
    let (mut list, recorder) = recorded(&[1, 3, 2]);
    list.sort_by(|a, b| b.cmp(a)).unwrap();
    assert_eq!(list, [3, 2, 1]);
    assert_eq!(recorder.count(HookEvent::PostReplace), 3);
}
