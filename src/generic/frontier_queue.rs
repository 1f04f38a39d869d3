/*!
A min-priority queue which holds each item at most once.

Entries are ordered by an explicit priority, then by the order in which they were pushed.
To record push order each entry is paired with a sequence number, taken from a counter which only increases.
So, the item popped from a queue is a function of the pushes made, and nothing else.

While an item is on the queue, further pushes of the item are ignored (and, in particular, do not revise the priority of the item).
Once popped, an item may be pushed again.

```rust
# use cave_logic::generic::frontier_queue::FrontierQueue;
let mut queue = FrontierQueue::default();

assert!(queue.push('a', 5));
assert!(queue.push('b', 3));
assert!(queue.push('c', 3));
assert!(!queue.push('a', 0));

assert_eq!(queue.len(), 3);
assert_eq!(queue.pop(), Some('b'));
assert_eq!(queue.pop(), Some('c'));
assert_eq!(queue.pop(), Some('a'));
assert_eq!(queue.pop(), None);
```
*/

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
    hash::Hash,
};

use crate::misc::log::targets::{self};

/// The frontier queue struct.
#[derive(Clone, Debug)]
pub struct FrontierQueue<T: Ord + Hash + Clone> {
    /// Entries of priority, sequence number, and item, reversed so the heap pops the least entry.
    heap: BinaryHeap<Reverse<(i64, u64, T)>>,

    /// Every item on the heap.
    members: HashSet<T>,

    /// The sequence number for the next push.
    sequence: u64,
}

impl<T: Ord + Hash + Clone> Default for FrontierQueue<T> {
    fn default() -> Self {
        FrontierQueue {
            heap: BinaryHeap::default(),
            members: HashSet::default(),
            sequence: 0,
        }
    }
}

impl<T: Ord + Hash + Clone> FrontierQueue<T> {
    /// Pushes `item` with `priority`, unless `item` is already on the queue.
    ///
    /// Returns true if `item` was pushed.
    pub fn push(&mut self, item: T, priority: i64) -> bool {
        if !self.members.insert(item.clone()) {
            return false;
        }
        self.heap.push(Reverse((priority, self.sequence, item)));
        self.sequence += 1;
        true
    }

    /// Removes and returns the item with least priority, earliest pushed among ties.
    pub fn pop(&mut self) -> Option<T> {
        let Reverse((_, _, item)) = self.heap.pop()?;
        self.members.remove(&item);
        Some(item)
    }

    /// Pops items until some item satisfies `keep`, and returns that item.
    ///
    /// Items popped along the way are discarded.
    pub fn pop_where(&mut self, keep: impl Fn(&T) -> bool) -> Option<T> {
        while let Some(item) = self.pop() {
            if keep(&item) {
                return Some(item);
            }
            log::trace!(target: targets::FRONTIER, "Discarded a stale entry");
        }
        None
    }

    /// Whether `item` is on the queue.
    pub fn contains(&self, item: &T) -> bool {
        self.members.contains(item)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_by_push_order() {
        let mut queue = FrontierQueue::default();
        for item in [9, 4, 7, 1] {
            queue.push(item, 0);
        }
        let popped: Vec<_> = std::iter::from_fn(|| queue.pop()).collect();
        assert_eq!(popped, vec![9, 4, 7, 1]);
    }

    #[test]
    fn priority_before_push_order() {
        let mut queue = FrontierQueue::default();
        queue.push("late", 1);
        queue.push("early", 0);
        assert_eq!(queue.pop(), Some("early"));
        assert_eq!(queue.pop(), Some("late"));
    }

    #[test]
    fn duplicates_are_ignored() {
        let mut queue = FrontierQueue::default();
        assert!(queue.push(1, 10));
        assert!(!queue.push(1, 0));
        assert!(queue.contains(&1));
        assert_eq!(queue.len(), 1);

        assert_eq!(queue.pop(), Some(1));
        assert!(!queue.contains(&1));
        assert!(queue.push(1, 0));
    }

    #[test]
    fn pop_where_discards() {
        let mut queue = FrontierQueue::default();
        queue.push(1, 1);
        queue.push(2, 2);
        queue.push(3, 3);

        assert_eq!(queue.pop_where(|item| *item > 1), Some(2));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.pop_where(|item| *item > 3), None);
        assert!(queue.is_empty());
    }
}
