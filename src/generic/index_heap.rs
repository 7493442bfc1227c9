/*!
A max heap on some subset of values with fixed indices.

The heap is backed by a vector of values with a companion vector which tracks the location of each index on the heap, if the index is on the heap.
The backing vector is never reordered, so the structure doubles as a store of values which may be moved on and off the heap.

For example, [IndexHeap] is used as a store of the priority of [atoms](crate::structures::atom), as atoms are indices and it is a useful heuristic to choose an atom without a value with the highest priority when a valuation is partial and nothing is left to propagate.
Likewise, [IndexHeap] is used to order learnt clauses by usefulness, with the least useful clause at the top of the heap.

```rust
# use kestrel_sat::generic::index_heap::IndexHeap;
let mut test_heap = IndexHeap::default();

test_heap.add(600, 10);
test_heap.add(0, 70);

test_heap.activate(600);
test_heap.activate(0);

assert_eq!(test_heap.count(), 601);
assert_eq!(test_heap.value_at(5), &i32::default());

assert_eq!(test_heap.pop_max(), Some(0));
assert_eq!(test_heap.pop_max(), Some(600));

assert!(test_heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// Values, indexed by their (fixed) index.
    values: Vec<V>,

    /// The position of each index on the heap, if the index is on the heap.
    position: Vec<Option<usize>>,

    /// The heap, as a vector of indices of which the first `limit` are active.
    heap: Vec<usize>,

    /// The count of indices on the heap.
    limit: usize,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position: Vec::default(),
            heap: Vec::default(),
            limit: 0,
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Index `value` with `index`.
    /// Returns true if `index` was a fresh index, false otherwise.
    ///
    /// The structure grows to the size required for `index` to be an index, with any skipped index given the default value.
    /// To place `index` on the heap [activate](IndexHeap::activate) should be called after this method.
    pub fn add(&mut self, index: usize, value: V) -> bool {
        if index < self.values.len() {
            self.revalue(index, value);
            self.heapify_if_active(index);
            return false;
        }

        while self.values.len() < index {
            self.values.push(V::default());
            self.position.push(None);
            self.heap.push(usize::MAX);
        }
        self.values.push(value);
        self.position.push(None);
        self.heap.push(usize::MAX);

        true
    }

    /// Reserves space for `additional` fresh indices.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), std::collections::TryReserveError> {
        self.values.try_reserve(additional)?;
        self.position.try_reserve(additional)?;
        self.heap.try_reserve(additional)
    }

    /// Places `index` on the heap, or restores the heap property around `index` if already present.
    /// Returns true if `index` was placed on the heap, false otherwise.
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position[index] {
            None => {
                let heap_index = self.limit;
                self.heap[heap_index] = index;
                self.position[index] = Some(heap_index);
                self.limit += 1;
                self.sift_up(heap_index);
                true
            }

            Some(heap_index) => {
                self.sift_up(heap_index);
                self.sift_down(heap_index);
                false
            }
        }
    }

    /// Remove `index` from the heap, if present.
    /// Returns true if `index` was removed, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(heap_index) = self.position[index] else {
            return false;
        };

        self.limit -= 1;
        self.position[index] = None;

        if heap_index != self.limit {
            let moved = self.heap[self.limit];
            self.heap[heap_index] = moved;
            self.position[moved] = Some(heap_index);

            // The moved index was taken from elsewhere in the heap, and so may need to move either way.
            self.sift_up(heap_index);
            if let Some(moved_heap_index) = self.position[moved] {
                self.sift_down(moved_heap_index);
            }
        }

        true
    }

    /// Restores the heap property around `index`, if `index` is on the heap.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(heap_index) = self.position[index] {
            self.sift_up(heap_index);
            if let Some(heap_index) = self.position[index] {
                self.sift_down(heap_index);
            }
        }
    }

    /// True if `index` is on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(|position| position.is_some())
    }

    /// Peek at the maximum index of the heap.
    pub fn peek_max(&self) -> Option<usize> {
        match self.limit {
            0 => None,
            _ => Some(self.heap[0]),
        }
    }

    /// Pop the maximum index off the heap.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// Restores the heap property across the whole heap.
    pub fn heapify(&mut self) {
        for heap_index in (0..self.limit / 2).rev() {
            self.sift_down(heap_index)
        }
    }

    /// The value indexed by `index`.
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Sets the value of `index` to `value`.
    ///
    /// The heap property is *not* restored, see [heapify_if_active](IndexHeap::heapify_if_active).
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value
    }

    /// Apply `f` to the value at `index`.
    ///
    /// The heap property is *not* restored, see [heapify_if_active](IndexHeap::heapify_if_active).
    pub fn apply_to_index(&mut self, index: usize, f: impl FnOnce(&mut V)) {
        f(&mut self.values[index])
    }

    /// Apply `f` to all (indexed) values.
    ///
    /// The heap property is *not* restored, see [heapify](IndexHeap::heapify).
    pub fn apply_to_all(&mut self, mut f: impl FnMut(&mut V)) {
        for value in self.values.iter_mut() {
            f(value)
        }
    }

    /// A count of values indexed by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of indices on the heap.
    pub fn active_count(&self) -> usize {
        self.limit
    }

    /// True if no index is on the heap.
    pub fn is_empty(&self) -> bool {
        self.limit == 0
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn parent(heap_index: usize) -> usize {
        (heap_index - 1) / 2
    }

    fn left(heap_index: usize) -> usize {
        (2 * heap_index) + 1
    }

    /// The value at `heap_index` on the heap.
    fn heap_value(&self, heap_index: usize) -> &V {
        &self.values[self.heap[heap_index]]
    }

    /// Swaps two locations on the heap, and updates the positions of the indices at those locations.
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    /// Moves the value at `heap_index` towards the root until the parent is at least as large.
    fn sift_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = Self::parent(heap_index);
            if self.heap_value(heap_index) > self.heap_value(parent) {
                self.swap(heap_index, parent);
                heap_index = parent;
            } else {
                break;
            }
        }
    }

    /// Moves the value at `heap_index` away from the root until both children are at most as large.
    fn sift_down(&mut self, mut heap_index: usize) {
        loop {
            let left = Self::left(heap_index);
            if left >= self.limit {
                break;
            }

            let right = left + 1;
            let mut largest = left;
            if right < self.limit && self.heap_value(right) > self.heap_value(left) {
                largest = right;
            }

            if self.heap_value(largest) > self.heap_value(heap_index) {
                self.swap(heap_index, largest);
                heap_index = largest;
            } else {
                break;
            }
        }
    }
}
