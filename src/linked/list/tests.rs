#![cfg(test)]

use std::iter;

use super::*;
use crate::traits::{IndexedList, UnsupportedOperation};
use crate::util::alloc::CountedDrop;
use crate::util::error::{ConcurrentModification, IndexOutOfBounds, NoSuchElement};
use crate::util::panic::assert_panics;

#[test]
fn test_push_and_pop_round_trips() {
    let mut list = SinglyLinkedList::new();
    assert!(list.is_empty());

    list.push_back(2);
    list.push_front(1);
    list.push_back(3);
    list.assert_invariants();

    assert_eq!(list.len(), 3);
    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.back(), Some(&3));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);

    assert_eq!(list.pop_front(), Some(1));
    assert_eq!(list.pop_back(), Some(3));
    assert_eq!(list.pop_front(), Some(2));
    list.assert_invariants();

    assert_eq!(list.pop_front(), None, "Popping an empty list should return None.");
    assert_eq!(list.pop_back(), None);
}

#[test]
fn test_pop_back_reseats_tail() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.pop_back(), Some(3));
    list.assert_invariants();
    assert_eq!(list.back(), Some(&2), "The tail should retarget the new last node.");

    list.push_back(4);
    list.assert_invariants();
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![1, 2, 4],
        "Appending after a tail removal should extend the surviving chain."
    );
}

#[test]
fn test_pop_front_clears_tail_on_last() {
    let mut list = SinglyLinkedList::new();
    list.push_back(1);

    assert_eq!(list.pop_front(), Some(1));
    list.assert_invariants();
    assert!(list.back().is_none(), "Emptying the list should clear the tail.");

    list.push_back(2);
    list.assert_invariants();
    assert_eq!(list.back(), Some(&2));
}

#[test]
fn test_remove_middle() {
    let mut list: SinglyLinkedList<_> = ["A", "B", "C"].into_iter().collect();

    assert_eq!(list.remove(1), "B");
    list.assert_invariants();

    assert_eq!(list.len(), 2);
    assert_eq!(list.front(), Some(&"A"));
    assert_eq!(list.back(), Some(&"C"));
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec!["A", "C"],
        "The neighbours of the removed node should be spliced together."
    );
}

#[test]
fn test_remove_last_reseats_tail() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.remove_item(&3), Some(3));
    list.assert_invariants();
    assert_eq!(list.back(), Some(&2));

    list.push_back(4);
    list.assert_invariants();
    assert_eq!(list.back(), Some(&4));
}

#[test]
fn test_remove_first_match_only() {
    let mut list: SinglyLinkedList<_> = [1, 2, 1, 3].into_iter().collect();

    assert_eq!(list.index_of(&1), Some(0), "Searches should find the first match.");
    assert_eq!(list.remove_item(&1), Some(1));
    assert_eq!(
        list.iter().copied().collect::<Vec<_>>(),
        vec![2, 1, 3],
        "Removal should only take the first match."
    );
    assert_eq!(list.remove_item(&100), None, "A search miss should remove nothing.");
    list.assert_invariants();
}

#[test]
fn test_insert_bounds() {
    let mut list: SinglyLinkedList<_> = [0, 2].into_iter().collect();

    list.insert(1, 1);
    list.assert_invariants();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);

    assert_eq!(list.try_insert(3, 3), Ok(()), "Inserting at len should append.");
    assert_eq!(list.back(), Some(&3));
    list.assert_invariants();

    assert_eq!(
        list.try_insert(5, 5),
        Err(IndexOutOfBounds { index: 5, len: 4 }),
        "Inserting past len should be rejected."
    );

    assert_panics!({
        let mut list: SinglyLinkedList<u8> = SinglyLinkedList::new();
        list.insert(1, 1)
    });
}

#[test]
fn test_insert_after_tail_target() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    list.insert_after(9, &2);
    list.assert_invariants();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 9, 3]);

    list.insert_after(4, &3);
    list.assert_invariants();
    assert_eq!(
        list.back(),
        Some(&4),
        "Inserting after the last node should retarget the tail."
    );

    list.push_back(5);
    list.assert_invariants();
    assert_eq!(list.back(), Some(&5));

    assert_eq!(
        list.try_insert_after(0, &100),
        Err(NoSuchElement),
        "A search miss should reject the insertion."
    );
    assert_eq!(list.len(), 6, "A failed insertion shouldn't mutate the list.");
}

#[test]
fn test_replace_rejects_append() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let version = list.version;

    assert_eq!(list.replace(1, 9), 2, "Replace should return the old element.");
    assert_eq!(list.get(1), &9);

    assert_eq!(
        list.try_replace(3, 0),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Replacing at len is not an append."
    );

    assert_eq!(
        list.version, version,
        "Value overwrites aren't structural and shouldn't bump the version."
    );
    list.assert_invariants();
}

#[test]
fn test_indexed_reads() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    assert_eq!(list.try_get(0), Ok(&1));
    assert_eq!(list.try_get(2), Ok(&3));
    assert_eq!(
        list.try_get(3),
        Err(IndexOutOfBounds { index: 3, len: 3 }),
        "Reading at len should be out of bounds."
    );

    *list.get_mut(1) += 10;
    assert_eq!(list[1], 12);

    assert!(list.contains(&12));
    assert!(!list.contains(&2));

    assert_panics!({
        let list: SinglyLinkedList<u8> = SinglyLinkedList::new();
        let _ = list.get(0);
    });
}

#[test]
fn test_front_and_back_mut() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();

    if let Some(front) = list.front_mut() {
        *front = 10;
    }
    if let Some(back) = list.back_mut() {
        *back = 30;
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 2, 30]);
    list.assert_invariants();
}

#[test]
fn test_reads_never_bump_version() {
    let list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let version = list.version;

    assert!(list.contains(&2));
    assert!(!list.contains(&9));
    assert_eq!(list.index_of(&3), Some(2));
    assert_eq!(list.try_get(0), Ok(&1));
    assert_eq!(list.to_string(), "[1, 2, 3]");

    assert_eq!(list.version, version, "Read queries should never bump the version.");
}

#[test]
fn test_display() {
    let mut list: SinglyLinkedList<u8> = SinglyLinkedList::new();
    assert_eq!(list.to_string(), "[]", "An empty list should render as an empty pair.");

    list.push_back(7);
    assert_eq!(list.to_string(), "[7]", "A single element should have no separator.");

    list.extend([8, 9]);
    assert_eq!(list.to_string(), "[7, 8, 9]");
}

#[test]
fn test_iter_mut() {
    let mut list: SinglyLinkedList<_> = (0..5).collect();
    for value in list.iter_mut() {
        *value *= 2;
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![0, 2, 4, 6, 8]);
    list.assert_invariants();
}

#[test]
fn test_into_iter() {
    let list: SinglyLinkedList<_> = (0..5).collect();
    let mut iter = list.into_iter();

    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.collect::<Vec<_>>(), vec![1, 2, 3, 4]);
}

#[test]
fn test_cursor_traversal() {
    let list: SinglyLinkedList<_> = ["A", "B", "C"].into_iter().collect();
    let mut cursor = list.cursor();

    assert_eq!(cursor.has_next(&list), Ok(true));
    assert_eq!(cursor.next(&list), Ok(&"A"));
    assert_eq!(cursor.next(&list), Ok(&"B"));
    assert_eq!(cursor.next(&list), Ok(&"C"));
    assert_eq!(cursor.has_next(&list), Ok(false));
    assert!(
        cursor.next(&list).is_err_and(|e| e.is_no_such_element()),
        "Advancing past the end should fail with NoSuchElement."
    );
}

#[test]
fn test_cursor_remove_each_empties_list() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut cursor = list.cursor();
    let mut removed = Vec::new();

    while cursor.has_next(&list).expect("cursor should stay valid") {
        cursor.next(&list).expect("an element should remain");
        removed.push(cursor.remove(&mut list).expect("removal should follow next"));
    }

    assert_eq!(removed, vec![1, 2, 3], "Elements should be removed in forward order.");
    assert!(list.is_empty(), "Removing at each step should empty the list.");
    list.assert_invariants();
}

#[test]
fn test_cursor_remove_reseats_tail() {
    let mut list: SinglyLinkedList<_> = [1, 2].into_iter().collect();
    let mut cursor = list.cursor();

    cursor.next(&list).expect("first element");
    cursor.next(&list).expect("second element");
    assert_eq!(cursor.remove(&mut list), Ok(2));
    list.assert_invariants();
    assert_eq!(list.back(), Some(&1), "Removing the last node should retarget the tail.");

    list.push_back(3);
    list.assert_invariants();
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_cursor_fail_fast() {
    let mut list: SinglyLinkedList<_> = [1, 2].into_iter().collect();
    let mut cursor = list.cursor();

    list.push_back(3);

    assert_eq!(
        cursor.has_next(&list),
        Err(ConcurrentModification { expected: 2, actual: 3 }),
        "A direct mutation should invalidate the cursor."
    );
    assert!(cursor.next(&list).is_err_and(|e| e.is_concurrent_modification()));
    assert!(cursor.remove(&mut list).is_err_and(|e| e.is_concurrent_modification()));
}

#[test]
fn test_cursor_remove_requires_next() {
    let mut list: SinglyLinkedList<_> = [1, 2].into_iter().collect();
    let mut cursor = list.cursor();

    assert!(
        cursor.remove(&mut list).is_err_and(|e| e.is_invalid_cursor_state()),
        "Removing before any next should be rejected."
    );
    assert_eq!(list.len(), 2, "A rejected removal shouldn't mutate the list.");

    cursor.next(&list).expect("an element should remain");
    assert_eq!(cursor.remove(&mut list), Ok(1));
    assert!(
        cursor.remove(&mut list).is_err_and(|e| e.is_invalid_cursor_state()),
        "The second removal in a row should be rejected."
    );
    list.assert_invariants();
}

#[test]
fn test_cursor_removal_invalidates_others() {
    let mut list: SinglyLinkedList<_> = [1, 2, 3].into_iter().collect();
    let mut first = list.cursor();
    let second = list.cursor();

    first.next(&list).expect("an element should remain");
    first.remove(&mut list).expect("removal should follow next");

    assert_eq!(
        first.has_next(&list),
        Ok(true),
        "A cursor should survive its own removal."
    );
    assert!(
        second.has_next(&list).is_err(),
        "Any other outstanding cursor should be invalidated."
    );
}

#[test]
fn test_positioned_traversal_unsupported() {
    let list: SinglyLinkedList<_> = [1, 2].into_iter().collect();

    assert!(matches!(list.cursor_at(0), Err(UnsupportedOperation)));
    assert!(matches!(list.cursor_back(), Err(UnsupportedOperation)));
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();

    drop(list);
    assert_eq!(counter.take(), 10, "All 10 elements should have been dropped.");

    let list: SinglyLinkedList<_> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = list.into_iter();
    for _ in 0..4 {
        drop(iter.next());
    }
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Consumed and unconsumed elements alike should be dropped exactly once."
    );
}

#[test]
fn test_long_list_drop() {
    // Node ownership is recursive, so Drop has to unlink iteratively to keep the
    // stack flat.
    let mut list = SinglyLinkedList::new();
    for i in 0..100_000 {
        list.push_back(i);
    }
    drop(list);
}

#[test]
fn test_equality_and_clone() {
    let list: SinglyLinkedList<_> = (0..5).collect();
    let mut other = SinglyLinkedList::new();
    other.extend(0..5);

    assert_eq!(
        list, other,
        "Element-by-element construction should produce an equal list."
    );

    let clone = list.clone();
    clone.assert_invariants();
    assert_eq!(clone, list, "A clone should equal its source.");
    assert_ne!(list, (1..6).collect());
}
