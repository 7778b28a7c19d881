//! Recording replayed through the display array.

use proptest::prelude::*;
use sortvis_playback::{ArrayKind, DisplayArray};
use sortvis_record::{Algorithm, AnimationEvent, AnimationKind, SublistEntry};

fn display(values: &[i64]) -> DisplayArray {
    DisplayArray::from_values(values, ArrayKind::Random, 0, 100)
}

fn replay(algorithm: Algorithm, values: &[i64]) -> DisplayArray {
    let events = algorithm.record(values, Some(101)).unwrap();
    let mut array = display(values);
    array.apply_all(&events).unwrap();
    array
}

fn sorted(values: &[i64]) -> Vec<i64> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values
}

#[test]
fn fixed_inputs_sort_for_every_algorithm() {
    let inputs: [&[i64]; 6] = [
        &[5, 3, 8, 1],
        &[1, 2, 3, 4, 5, 6],
        &[9, 8, 7, 6, 5, 4, 3],
        &[4, 4, 4, 4],
        &[0, 100, 0, 100, 50],
        &[2, 1],
    ];
    for algorithm in Algorithm::ALL {
        for input in inputs {
            let array = replay(algorithm, input);
            assert_eq!(array.values(), sorted(input), "{} on {:?}", algorithm, input);
            assert!(
                array.elements().iter().all(|e| !e.has_overlay),
                "{} left an overlay behind",
                algorithm
            );
        }
    }
}

#[test]
fn trivial_inputs_record_nothing() {
    for algorithm in Algorithm::ALL {
        assert!(algorithm.record(&[], Some(10)).unwrap().is_empty());
        assert!(algorithm.record(&[7], Some(10)).unwrap().is_empty());
    }
}

#[test]
fn counting_sort_example() {
    let array = replay(Algorithm::Counting, &[4, 2, 2, 0, 3]);
    assert_eq!(array.values(), vec![0, 2, 2, 3, 4]);
    assert!(array
        .elements()
        .iter()
        .all(|e| e.state == AnimationKind::Sorted));
}

#[test]
fn merge_sort_marks_whole_range_sorted_last() {
    let events = Algorithm::Merge.record(&[5, 3, 8, 1], None).unwrap();
    let last_full = events
        .iter()
        .rev()
        .find(|e| {
            let mut indices = e.indices();
            indices.sort_unstable();
            indices == vec![0, 1, 2, 3]
        })
        .unwrap();
    assert_eq!(last_full.kind(), AnimationKind::Sorted);

    let mut array = display(&[5, 3, 8, 1]);
    array.apply_all(&events).unwrap();
    assert_eq!(array.values(), vec![1, 3, 5, 8]);
}

#[test]
fn out_of_range_event_leaves_array_untouched() {
    let mut array = display(&[1, 2, 3]);
    let before = array.clone();
    assert!(array.apply(&AnimationEvent::Swap { a: 0, b: 3 }).is_err());
    assert_eq!(array, before);
}

#[test]
fn events_serialize_with_type_tag() {
    let json = serde_json::to_value(AnimationEvent::Swap { a: 1, b: 2 }).unwrap();
    assert_eq!(json["type"], "Swap");
    assert_eq!(json["a"], 1);
}

proptest! {
    #[test]
    fn every_algorithm_sorts_through_display(values in prop::collection::vec(0i64..=100, 0..48)) {
        for algorithm in Algorithm::ALL {
            let array = replay(algorithm, &values);
            prop_assert_eq!(array.values(), sorted(&values));
        }
    }

    #[test]
    fn double_swap_restores_contents(
        values in prop::collection::vec(0i64..=100, 1..32),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let a = a.index(values.len());
        let b = b.index(values.len());
        let mut array = display(&values);
        let contents: Vec<_> = array.elements().iter().map(|e| e.contents()).collect();

        let swap = AnimationEvent::Swap { a, b };
        array.apply(&swap).unwrap();
        array.apply(&swap).unwrap();

        let after: Vec<_> = array.elements().iter().map(|e| e.contents()).collect();
        prop_assert_eq!(after, contents);
    }

    #[test]
    fn sublist_then_merge_commits_overlay(
        values in prop::collection::vec(0i64..=100, 1..32),
        overlay in prop::collection::vec(0i64..=100, 32),
    ) {
        let mut array = display(&values);
        let entries: Vec<_> = (0..values.len())
            .map(|i| SublistEntry::new(i, overlay[i]))
            .collect();

        array.apply(&AnimationEvent::SetSublist { entries }).unwrap();
        prop_assert_eq!(array.values(), values.clone());
        prop_assert!(array.elements().iter().all(|e| e.has_overlay));

        array
            .apply(&AnimationEvent::MergeSublist { indices: (0..values.len()).collect() })
            .unwrap();
        prop_assert_eq!(array.values(), overlay[..values.len()].to_vec());
        prop_assert!(array.elements().iter().all(|e| !e.has_overlay));
    }
}
