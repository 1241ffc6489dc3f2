//! Cross-module flows: cursor traversal interleaved with structural
//! mutation, and the full error surface as seen by a caller.

use dynarr::{ArrayError, Cursor, DynArray};

#[test]
fn build_traverse_and_render() {
    let mut array = DynArray::new();
    for word in ["alpha", "beta", "gamma"] {
        array.push(word);
    }
    assert_eq!(array.len(), 3);
    assert!(array.capacity() >= array.len());

    let mut cur = array.begin();
    let mut seen = Vec::new();
    while cur != array.end() {
        seen.push(*cur.get(&array).unwrap());
        cur.advance();
    }
    assert_eq!(seen, vec!["alpha", "beta", "gamma"]);
    assert_eq!(array.to_string(), "[alpha, beta, gamma]");
    assert_eq!(array.lines().to_string(), "alpha\nbeta\ngamma\n");
}

#[test]
fn erase_mid_traversal_requires_reissued_cursor() {
    let mut array = DynArray::from([1, 2, 3, 4]);

    // Walk to the element 3, erase it through a fresh position, and
    // resume from the cursor erase hands back.
    let pos = array.begin().advanced().advanced();
    let resumed = array.erase(pos).unwrap();
    assert_eq!(array.as_slice(), &[1, 2, 4]);
    assert_eq!(*resumed.get(&array).unwrap(), 4);

    // The pre-erase cursor is rejected, not silently rebound.
    assert!(matches!(
        pos.get(&array),
        Err(ArrayError::StaleCursor { .. })
    ));
}

#[test]
fn insert_returns_cursor_on_inserted_element() {
    let mut array = DynArray::from([10, 30]);
    let pos = array.begin().advanced();
    let inserted = array.insert(pos, 20).unwrap();
    assert_eq!(*inserted.get(&array).unwrap(), 20);

    // The returned cursor is mutable: write through it, then demote.
    *inserted.get_mut(&mut array).unwrap() = 25;
    let read_only: Cursor = inserted.into();
    assert_eq!(*read_only.get(&array).unwrap(), 25);
    assert_eq!(array.as_slice(), &[10, 25, 30]);
}

#[test]
fn pop_everything_then_pop_again() {
    let mut array = DynArray::from([1, 2]);
    assert_eq!(array.pop(), Ok(2));
    assert_eq!(array.pop(), Ok(1));
    assert_eq!(array.pop(), Err(ArrayError::Empty));
    // Capacity survives the drain.
    assert_eq!(array.capacity(), 2);
}

#[test]
fn every_error_variant_is_reachable_from_the_public_api() {
    let mut array = DynArray::from([1]);

    assert_eq!(
        array.get(1).err(),
        Some(ArrayError::IndexOutOfBounds { index: 1, len: 1 })
    );

    let end = array.end();
    assert_eq!(
        end.get(&array).err(),
        Some(ArrayError::DereferenceAtEnd { pos: 1 })
    );
    assert_eq!(
        array.erase(end).err(),
        Some(ArrayError::CursorOutOfBounds { offset: 1, len: 1 })
    );

    let stale = array.begin();
    array.push(2);
    assert!(matches!(
        stale.get(&array),
        Err(ArrayError::StaleCursor { .. })
    ));

    array.clear();
    assert_eq!(array.pop(), Err(ArrayError::Empty));
}

#[test]
fn growth_schedule_from_empty() {
    let mut array = DynArray::new();
    let mut caps = Vec::new();
    for i in 0..20 {
        array.push(i);
        caps.push(array.capacity());
    }
    // 0 -> 1 -> 3 -> 7 -> 15 -> 31 under the 2c + 1 rule.
    assert_eq!(caps[0], 1);
    assert_eq!(caps[1], 3);
    assert_eq!(caps[3], 7);
    assert_eq!(caps[7], 15);
    assert_eq!(caps[15], 31);
    assert_eq!(caps[19], 31);
}

#[test]
fn clone_then_diverge() {
    let mut original = DynArray::from([1, 2, 3]);
    let mut copy = original.clone();

    original.push(4);
    let begin = copy.begin();
    copy.erase(begin).unwrap();

    assert_eq!(original.as_slice(), &[1, 2, 3, 4]);
    assert_eq!(copy.as_slice(), &[2, 3]);
}

#[test]
fn reserve_shrink_round_trip_preserves_order() {
    let mut array: DynArray<i32> = (0..10).collect();
    array.reserve(100);
    assert_eq!(array.capacity(), 100);
    array.shrink_to_fit();
    assert_eq!(array.capacity(), 10);
    let collected: Vec<i32> = array.iter().copied().collect();
    assert_eq!(collected, (0..10).collect::<Vec<i32>>());
}
