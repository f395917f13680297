use std::fmt::{self, Debug};

use derivative::Derivative;

use crate::{
    error::{Error, Result},
    tracing_support::info_span,
};

/// A minimum priority queue backed by an array binary heap.
///
/// `pop` always returns a smallest item. Items that compare equal come out in
/// an unspecified order: sifting moves elements around, so the queue is not
/// stable with respect to insertion order. Wrap items with a sequence number
/// if a deterministic tie-break is needed.
#[derive(Derivative)]
#[derivative(Clone(bound = "T: Clone"), Default(bound = ""))]
pub struct PriorityQueue<T> {
    // Invariant: `heap[(i - 1) / 2] <= heap[i]` for every `i > 0`.
    heap: Vec<T>,
}

impl<T: Ord> PriorityQueue<T> {
    pub fn new() -> Self {
        PriorityQueue { heap: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            heap: Vec::with_capacity(capacity),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Insert an item.
    pub fn push(&mut self, item: T) {
        let _span = info_span!("PriorityQueue::push").entered();
        self.heap.push(item);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the smallest item.
    pub fn pop(&mut self) -> Result<T> {
        let _span = info_span!("PriorityQueue::pop").entered();
        if self.heap.is_empty() {
            return Err(Error::EmptyContainer);
        }
        // swap_remove moves the last item into the root slot.
        let min = self.heap.swap_remove(0);
        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        Ok(min)
    }

    /// Returns the smallest item without removing it.
    pub fn peek(&self) -> Result<&T> {
        self.heap.first().ok_or(Error::EmptyContainer)
    }

    /// Consumes the queue, returning its items in heap order.
    pub fn into_vec(self) -> Vec<T> {
        self.heap
    }

    /// Restore heap order upward from `idx`.
    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.heap[idx] < self.heap[parent] {
                self.heap.swap(idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Restore heap order downward from `idx`.
    fn sift_down(&mut self, mut idx: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut smallest = idx;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }

            if smallest == idx {
                break;
            }
            self.heap.swap(idx, smallest);
            idx = smallest;
        }
    }
}

impl<T: Ord> Extend<T> for PriorityQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for PriorityQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = PriorityQueue::new();
        queue.extend(iter);
        queue
    }
}

/// Shows the underlying heap array, which is not sorted.
impl<T: Debug> Debug for PriorityQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.heap, f)
    }
}
