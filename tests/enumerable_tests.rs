//! Integration tests for Enumerable pipelines.

use enumerable::{Enumerable, Error, GroupMap, IntoEnumerable, by_key};
use rstest::rstest;
use std::cell::{Cell, RefCell};
use std::collections::{LinkedList, VecDeque};

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    sensor: &'static str,
    celsius: i32,
}

fn reading(sensor: &'static str, celsius: i32) -> Reading {
    Reading { sensor, celsius }
}

// =============================================================================
// Pipeline composition
// =============================================================================

#[rstest]
fn test_filter_then_select() {
    let result = vec![1, 2, 3, 4, 5]
        .into_enumerable()
        .filter(|value| value % 2 == 0)
        .select(|value| value * 10)
        .to_list();
    assert_eq!(result, vec![20, 40]);
}

#[rstest]
fn test_stages_run_only_when_terminal_pulls() {
    let visited = RefCell::new(Vec::new());

    let pipeline = vec![1, 2, 3]
        .into_enumerable()
        .select(|value| {
            visited.borrow_mut().push(value);
            value + 1
        })
        .filter(|value| *value > 2);
    assert!(visited.borrow().is_empty());

    assert_eq!(pipeline.find_first(), Some(3));
    assert_eq!(*visited.borrow(), vec![1, 2]);
}

#[rstest]
fn test_select_many_flattens_in_order() {
    let result = vec![vec![1, 2], vec![], vec![3]]
        .into_enumerable()
        .select_many(|inner| inner)
        .to_list();
    assert_eq!(result, vec![1, 2, 3]);
}

#[rstest]
fn test_concat_appends_second_source() {
    let result = vec!["a", "b"]
        .into_enumerable()
        .concat(vec!["c"])
        .concat(Vec::new())
        .to_list();
    assert_eq!(result, vec!["a", "b", "c"]);
}

#[rstest]
fn test_pipeline_is_a_plain_iterator() {
    let doubled: Vec<i32> = Enumerable::new([1, 2, 3])
        .select(|value| value * 2)
        .into_iter()
        .rev()
        .collect();
    assert_eq!(doubled, vec![6, 4, 2]);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
fn test_order_by_uses_later_keys_for_ties() {
    let readings = vec![
        reading("b", 20),
        reading("a", 25),
        reading("b", 10),
        reading("a", 5),
    ];

    let ordered = readings
        .into_enumerable()
        .order_by([
            by_key(|entry: &Reading| entry.sensor),
            by_key(|entry: &Reading| entry.celsius),
        ])
        .unwrap()
        .select(|entry| entry.celsius)
        .to_list();
    assert_eq!(ordered, vec![5, 25, 10, 20]);
}

#[rstest]
fn test_order_by_descending_reverses_composite_order() {
    let readings = vec![reading("a", 1), reading("b", 2), reading("a", 3)];

    let ordered = readings
        .into_enumerable()
        .order_by_descending([
            by_key(|entry: &Reading| entry.sensor),
            by_key(|entry: &Reading| entry.celsius),
        ])
        .unwrap()
        .to_list();
    assert_eq!(
        ordered,
        vec![reading("b", 2), reading("a", 3), reading("a", 1)]
    );
}

#[rstest]
fn test_order_by_is_stable() {
    let readings = vec![reading("x", 1), reading("y", 0), reading("z", 1)];

    let ordered = readings
        .into_enumerable()
        .order_by([by_key(|entry: &Reading| entry.celsius)])
        .unwrap()
        .select(|entry| entry.sensor)
        .to_list();
    assert_eq!(ordered, vec!["y", "x", "z"]);
}

#[rstest]
fn test_order_by_defers_buffering() {
    let pulled = Cell::new(0);

    let ordered = vec![3, 1, 2]
        .into_enumerable()
        .select(|value| {
            pulled.set(pulled.get() + 1);
            value
        })
        .order_by([by_key(|value: &i32| *value)])
        .unwrap();
    assert_eq!(pulled.get(), 0);

    assert_eq!(ordered.to_list(), vec![1, 2, 3]);
    assert_eq!(pulled.get(), 3);
}

#[rstest]
fn test_order_by_rejects_empty_keys() {
    let keys: Vec<enumerable::KeySelector<'_, i32>> = Vec::new();
    let result = vec![1].into_enumerable().order_by(keys);
    assert_eq!(result.unwrap_err(), Error::EmptyKeyList);
}

// =============================================================================
// Terminals
// =============================================================================

#[rstest]
#[case(vec![], 0)]
#[case(vec![4], 1)]
#[case(vec![4, 8, 15], 3)]
fn test_count(#[case] values: Vec<i32>, #[case] expected: usize) {
    assert_eq!(values.into_enumerable().count(), expected);
}

#[rstest]
fn test_find_first_variants() {
    let values = vec![7, 8, 9];
    assert_eq!(values.clone().into_enumerable().find_first(), Some(7));
    assert_eq!(
        values.clone().into_enumerable().find_first_by(|value| value % 2 == 0),
        Some(8)
    );
    assert_eq!(
        values.into_enumerable().find_first_or_default_by(|value| *value > 100),
        0
    );
    assert_eq!(Vec::<String>::new().into_enumerable().find_first_or_default(), "");
}

#[rstest]
fn test_min_and_max_on_selected_key() {
    let readings = vec![reading("a", 12), reading("b", -3), reading("c", 40)];
    assert_eq!(
        readings.clone().into_enumerable().max(|entry| entry.celsius),
        Some(40)
    );
    assert_eq!(readings.into_enumerable().min(|entry| entry.celsius), Some(-3));
    assert_eq!(Enumerable::<std::iter::Empty<Reading>>::empty().min(|entry| entry.celsius), None);
}

#[rstest]
fn test_sum_with_identity_and_combiner() {
    let total = vec![reading("a", 2), reading("b", 3)]
        .into_enumerable()
        .sum(|entry| entry.celsius, 0, |left, right| left + right);
    assert_eq!(total, 5);

    let product = vec![2, 3, 4]
        .into_enumerable()
        .sum(|value| value, 1, |left, right| left * right);
    assert_eq!(product, 24);

    let empty = Vec::<i32>::new()
        .into_enumerable()
        .sum(|value| value, 100, |left, right| left + right);
    assert_eq!(empty, 100);
}

#[rstest]
fn test_group_by_keeps_input_order_per_bucket() {
    let groups: GroupMap<&str, Vec<i32>> = vec![("A", 1), ("B", 2), ("A", 3), ("C", 4)]
        .into_enumerable()
        .group_by(|(label, _)| *label)
        .into_iter()
        .map(|(label, bucket)| (label, bucket.into_iter().map(|(_, value)| value).collect()))
        .collect();

    assert_eq!(groups.len(), 3);
    assert_eq!(groups["A"], vec![1, 3]);
    assert_eq!(groups["B"], vec![2]);
    assert_eq!(groups["C"], vec![4]);
}

#[rstest]
fn test_group_by_on_empty_source() {
    let groups = Vec::<i32>::new().into_enumerable().group_by(|value| *value);
    assert!(groups.is_empty());
}

#[rstest]
fn test_to_collection_targets() {
    let queue: VecDeque<i32> = vec![1, 2].into_enumerable().to_collection().unwrap();
    assert_eq!(queue, VecDeque::from(vec![1, 2]));

    let linked: LinkedList<i32> = vec![1, 2].into_enumerable().to_collection().unwrap();
    assert_eq!(linked.into_iter().collect::<Vec<_>>(), vec![1, 2]);

    let list: Vec<i32> = Enumerable::new(1..=3).to_collection().unwrap();
    assert_eq!(list, vec![1, 2, 3]);
}
