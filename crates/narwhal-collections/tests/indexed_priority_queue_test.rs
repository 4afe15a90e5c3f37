use narwhal_collections::{Error, IndexedPriorityQueue};

#[test]
fn indexed_priority_queue_polls_values_in_ascending_order() {
    let mut q: IndexedPriorityQueue<f64> = IndexedPriorityQueue::new(6);
    q.insert(3, 7.0).unwrap();
    q.insert(0, 2.5).unwrap();
    q.insert(5, 9.0).unwrap();
    q.insert(1, -1.0).unwrap();
    q.insert(4, 3.0).unwrap();
    assert!(q.is_consistent());

    let mut polled = Vec::new();
    while let Ok((k, v)) = q.poll() {
        assert!(q.is_consistent());
        polled.push((k, v));
    }
    assert_eq!(
        polled,
        vec![(1, -1.0), (0, 2.5), (4, 3.0), (3, 7.0), (5, 9.0)]
    );
    assert!(q.is_empty());
}

#[test]
fn indexed_priority_queue_decrease_moves_an_index_to_the_front() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new(4);
    q.insert(0, 10).unwrap();
    q.insert(1, 20).unwrap();
    q.insert(2, 30).unwrap();

    q.decrease(2, 5).unwrap();
    assert_eq!(q.peek_index().unwrap(), 2);
    assert_eq!(q.value_of(2).unwrap(), &5);
    assert!(q.is_consistent());
}

#[test]
fn indexed_priority_queue_decrease_ignores_values_that_are_not_smaller() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new(3);
    q.insert(0, 4).unwrap();
    q.decrease(0, 4).unwrap();
    q.decrease(0, 9).unwrap();
    assert_eq!(q.value_of(0).unwrap(), &4);
}

#[test]
fn indexed_priority_queue_increase_sinks_the_value() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new(4);
    q.insert(0, 1).unwrap();
    q.insert(1, 2).unwrap();
    q.insert(2, 3).unwrap();

    q.increase(0, 8).unwrap();
    assert_eq!(q.peek().unwrap(), (1, &2));
    q.increase(0, 3).unwrap();
    assert_eq!(q.value_of(0).unwrap(), &8);
    assert!(q.is_consistent());
}

#[test]
fn indexed_priority_queue_change_returns_the_previous_value() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new(3);
    q.insert(0, 1).unwrap();
    q.insert(1, 2).unwrap();
    assert_eq!(q.change(0, 5).unwrap(), 1);
    assert_eq!(q.peek_index().unwrap(), 1);
    assert!(q.is_consistent());
}

#[test]
fn indexed_priority_queue_remove_keeps_maps_inverse() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::with_degree(10, 3).unwrap();
    for (k, v) in [(0, 50), (1, 10), (2, 40), (3, 20), (4, 30), (5, 60), (6, 5)] {
        q.insert(k, v).unwrap();
    }
    assert_eq!(q.remove(3).unwrap(), 20);
    assert_eq!(q.remove(6).unwrap(), 5);
    assert!(q.is_consistent());
    assert!(!q.contains(3).unwrap());
    assert_eq!(q.len(), 5);
    assert_eq!(q.poll().unwrap(), (1, 10));
}

#[test]
fn indexed_priority_queue_rejects_bad_indices() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new(2);
    assert_eq!(
        q.insert(2, 1),
        Err(Error::IndexOutOfRange {
            index: 2,
            capacity: 2
        })
    );
    q.insert(0, 1).unwrap();
    assert_eq!(q.insert(0, 3), Err(Error::DuplicateIndex { index: 0 }));
    assert_eq!(q.remove(1), Err(Error::MissingIndex { index: 1 }));
    assert_eq!(q.decrease(1, 0), Err(Error::MissingIndex { index: 1 }));
}

#[test]
fn indexed_priority_queue_reports_empty_on_poll_and_peek() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new(2);
    assert!(matches!(q.poll(), Err(Error::Empty { .. })));
    assert!(matches!(q.peek(), Err(Error::Empty { .. })));
}

#[test]
fn indexed_priority_queue_rejects_degree_below_two() {
    assert_eq!(
        IndexedPriorityQueue::<i32>::with_degree(4, 1).unwrap_err(),
        Error::InvalidDegree { degree: 1 }
    );
}

#[test]
fn indexed_priority_queue_clear_releases_every_index() {
    let mut q: IndexedPriorityQueue<i32> = IndexedPriorityQueue::new(3);
    q.insert(0, 1).unwrap();
    q.insert(2, 1).unwrap();
    q.clear();
    assert!(q.is_empty());
    assert!(!q.contains(0).unwrap());
    q.insert(0, 7).unwrap();
    assert_eq!(q.peek().unwrap(), (0, &7));
}
