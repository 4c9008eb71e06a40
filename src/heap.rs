use std::fmt::{Debug, Display};

use clap::ValueEnum;
use itertools::Itertools;

use crate::errors::HeapError;

/// The ordering discipline of a heap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Mode {
    /// Every parent is no greater than its children.
    Min,
    /// Every parent is no less than its children.
    #[default]
    Max,
}

impl Mode {
    pub fn flipped(self) -> Mode {
        match self {
            Mode::Min => Mode::Max,
            Mode::Max => Mode::Min,
        }
    }

    /// True if `lhs` must sit strictly above `rhs` in a heap of this mode.
    fn precedes<T: Ord>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Mode::Min => lhs < rhs,
            Mode::Max => lhs > rhs,
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Min => write!(f, "min heap"),
            Mode::Max => write!(f, "max heap"),
        }
    }
}

/// An array backed binary heap whose ordering can be switched at runtime.
///
/// The root lives at index 0; the children of `i` are `2i + 1` and `2i + 2`.
/// Popped slots are released back to the `Vec`, which keeps its allocation,
/// so push/pop cycles reuse storage.
pub struct Heap<T: Ord> {
    items: Vec<T>,
    mode: Mode,
}

impl<T: Ord> Heap<T> {
    pub fn new(mode: Mode) -> Heap<T> {
        Heap {
            items: Vec::new(),
            mode,
        }
    }

    pub fn with_capacity(capacity: usize, mode: Mode) -> Heap<T> {
        Heap {
            items: Vec::with_capacity(capacity),
            mode,
        }
    }

    /// Build a heap in linear time, taking ownership of `items`.
    pub fn from_vec(items: Vec<T>, mode: Mode) -> Heap<T> {
        let mut heap = Heap { items, mode };
        log::debug!("building {} from {} items", heap.mode, heap.items.len());
        heap.heapify();
        heap
    }

    /// Build a heap from a copy of `items`; the caller's slice is left untouched.
    pub fn from_slice(items: &[T], mode: Mode) -> Heap<T>
    where
        T: Clone,
    {
        Heap::from_vec(items.to_vec(), mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
        let n = self.items.len();
        self.upheap(n - 1);
    }

    /// Remove and return the extreme element.
    pub fn pop(&mut self) -> std::result::Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::EmptyHeap("pop"));
        }
        // The last item takes the root's slot.
        let res = self.items.swap_remove(0);
        self.downheap(0);
        Ok(res)
    }

    pub fn top(&self) -> std::result::Result<&T, HeapError> {
        self.items.first().ok_or(HeapError::EmptyHeap("top"))
    }

    /// Swap the root for `item`, returning the old root.
    pub fn replace_top(&mut self, item: T) -> std::result::Result<T, HeapError> {
        match self.items.first_mut() {
            Some(front) => {
                let res = std::mem::replace(front, item);
                self.downheap(0);
                Ok(res)
            }
            None => Err(HeapError::EmptyHeap("replace_top")),
        }
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        log::debug!("re-heapifying {} items as {}", self.items.len(), mode);
        self.heapify();
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Consume the heap, returning its items in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut res = Vec::with_capacity(self.items.len());
        while let Ok(item) = self.pop() {
            res.push(item);
        }
        res
    }

    pub fn describe(&self) -> String
    where
        T: Display,
    {
        format!(
            "Heap type: {}\nHeap size: {}\nHeap items: [{}]",
            self.mode,
            self.items.len(),
            self.items.iter().join(", ")
        )
    }

    fn heapify(&mut self) {
        let n = self.items.len();
        for i in (0..n).rev() {
            self.downheap(i);
        }
    }

    fn upheap(&mut self, i: usize) {
        let mut i = i;
        while i > 0 {
            let p = (i - 1) / 2;
            if self.mode.precedes(&self.items[i], &self.items[p]) {
                self.items.swap(i, p);
                i = p;
            } else {
                break;
            }
        }
    }

    fn downheap(&mut self, p: usize) {
        let n = self.items.len();
        let mut p = p;
        let mut c = 2 * p + 1;
        while c < n {
            // Right child only wins on a strict comparison.
            if c + 1 < n && self.mode.precedes(&self.items[c + 1], &self.items[c]) {
                c += 1;
            }
            if self.mode.precedes(&self.items[c], &self.items[p]) {
                self.items.swap(c, p);
                p = c;
                c = 2 * p + 1;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Heap::new(Mode::Max)
    }
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    fn from(value: Vec<T>) -> Self {
        Heap::from_vec(value, Mode::Max)
    }
}

impl<T: Ord> FromIterator<T> for Heap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Heap::from_vec(iter.into_iter().collect(), Mode::Max)
    }
}

impl<T: Ord> Extend<T> for Heap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord + Display> Display for Heap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.describe())
    }
}

impl<T: Ord + Debug> Debug for Heap<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Heap")
            .field("mode", &self.mode)
            .field("items", &self.items)
            .finish()
    }
}
