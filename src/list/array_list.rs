//! Provides the array-backed list.
//!
//! * [ArrayList] - contiguous, capacity-backed list implementing
//!   [List] and [UnorderedList](crate::list::UnorderedList)
//! * [Iter] - borrowing iterator over an [ArrayList]

use crate::error::{CollectionError, CollectionResult};
use crate::iter::{Cursor, ModCount};
use crate::list::List;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::trace;

/// Capacity of a list created with [ArrayList::new].
pub const DEFAULT_CAPACITY: usize = 100;

/// Name reported by errors raised from an [ArrayList].
pub(crate) const LIST: &str = "ArrayList";

/// Source of instance ids; every list, including clones, takes a fresh one.
static NEXT_LIST_ID: AtomicU64 = AtomicU64::new(0);

fn next_list_id() -> u64 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

// =$========================================================================$=
// ARRAY LIST
// =$========================================================================$=
/// An array-backed list keeping its front at position 0.
///
/// # Structure
/// - Elements occupy positions `[0, size)` without gaps.
/// - `size <= capacity`; capacity doubles before an insertion that would
///   exceed it.
/// - Every insertion and removal bumps the modification count, which
///   invalidates outstanding [Cursor]s.
///
/// # Example
/// ```
/// use bintree_collections::list::{ArrayList, List, UnorderedList};
///
/// let mut list = ArrayList::new();
/// list.add_to_rear("Takahe");
/// list.add_to_front("Pukeko");
/// list.add_after("Weka", &"Pukeko").unwrap();
///
/// assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["Pukeko", "Weka", "Takahe"]);
/// assert_eq!(list.remove_last().unwrap(), "Takahe");
/// ```
#[derive(Debug)]
pub struct ArrayList<T> {
    /// Identity of this instance, checked by its [Cursor]s
    id: u64,

    /// Elements of this list, front first
    elements: Vec<T>,

    /// Number of elements this list can hold before expanding
    capacity: usize,

    /// Structural modifications so far
    mod_count: ModCount,
}

// ============================================================================
// New, Getters / Accessors, etc. (pub)
// ============================================================================
impl<T> ArrayList<T> {
    /// Creates an empty list with [DEFAULT_CAPACITY].
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with the given initial capacity.
    ///
    /// # Arguments
    /// * `capacity` - initial capacity; `0` is raised to `1` so that doubling
    ///   makes progress
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        ArrayList {
            id: next_list_id(),
            elements: Vec::with_capacity(capacity),
            capacity,
            mod_count: ModCount::new(),
        }
    }

    /// Returns the number of elements this list can hold before it expands.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Returns the current modification count.
    pub fn mod_count(&self) -> ModCount {
        self.mod_count
    }

    /// Returns an iterator over references to the elements, front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cursor: self.cursor(),
        }
    }

    /// Returns a detached fail-fast [Cursor] positioned before the first element.
    ///
    /// The cursor only walks this list; passing any other list fails.
    pub fn cursor(&self) -> Cursor {
        Cursor::new(self.id, self.mod_count)
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}

// ============================================================================
// Insertion helpers (crate)
// ============================================================================
impl<T> ArrayList<T> {
    /// Inserts `element` at `index`, shifting later elements towards the rear.
    pub(crate) fn insert_at(&mut self, index: usize, element: T) {
        if self.elements.len() == self.capacity {
            self.expand_capacity();
        }
        self.elements.insert(index, element);
        self.mod_count.bump();
    }

    /// Returns the position of the first element equal to `target`.
    pub(crate) fn position_of(&self, target: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.elements.iter().position(|element| element == target)
    }

    /// Doubles the capacity, keeping all elements in place.
    fn expand_capacity(&mut self) {
        let new_capacity = self.capacity * 2;
        self.elements
            .reserve_exact(new_capacity - self.elements.len());
        trace!(
            old_capacity = self.capacity,
            new_capacity, "expanding array list"
        );
        self.capacity = new_capacity;
    }

    /// Removes the element at `index`, shifting later elements towards the front.
    fn remove_at(&mut self, index: usize) -> T {
        let element = self.elements.remove(index);
        self.mod_count.bump();
        element
    }
}

impl<T> List<T> for ArrayList<T> {
    fn remove_first(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::empty_collection(LIST));
        }
        Ok(self.remove_at(0))
    }

    fn remove_last(&mut self) -> CollectionResult<T> {
        if self.is_empty() {
            return Err(CollectionError::empty_collection(LIST));
        }
        Ok(self.remove_at(self.elements.len() - 1))
    }

    fn remove(&mut self, element: &T) -> CollectionResult<T>
    where
        T: PartialEq,
    {
        let index = self
            .position_of(element)
            .ok_or_else(|| CollectionError::element_not_found(LIST))?;
        Ok(self.remove_at(index))
    }

    fn first(&self) -> CollectionResult<&T> {
        self.elements
            .first()
            .ok_or_else(|| CollectionError::empty_collection(LIST))
    }

    fn last(&self) -> CollectionResult<&T> {
        self.elements
            .last()
            .ok_or_else(|| CollectionError::empty_collection(LIST))
    }

    fn contains(&self, target: &T) -> bool
    where
        T: PartialEq,
    {
        self.position_of(target).is_some()
    }

    fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    fn size(&self) -> usize {
        self.elements.len()
    }
}

/// Copies the elements into a new instance; cursors of `self` do not walk the copy.
impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        ArrayList {
            id: next_list_id(),
            elements: self.elements.clone(),
            capacity: self.capacity,
            mod_count: self.mod_count,
        }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Prints each element on its own line.
impl<T: fmt::Display> fmt::Display for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            writeln!(f, "{element}")?;
        }
        Ok(())
    }
}

/// Collects elements in iteration order, each appended at the rear.
impl<T> FromIterator<T> for ArrayList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = ArrayList::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for ArrayList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            let rear = self.elements.len();
            self.insert_at(rear, element);
        }
    }
}

impl<'a, T> IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =$========================================================================$=
// ITERATOR
// =$========================================================================$=
/// Iterator over references to the elements of an [ArrayList], front to rear.
///
/// Borrows the list, so the list cannot change while this iterator is alive.
pub struct Iter<'a, T> {
    list: &'a ArrayList<T>,
    cursor: Cursor,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Only exhaustion can fail while the list is borrowed
        self.cursor.next(self.list).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.size() - self.cursor.position();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
