//! Fail-fast iteration support shared by [ArrayList] and the binary trees.
//!
//! Every collection keeps a [ModCount] that is bumped on each structural
//! change. Iterators capture the count at creation and compare it with the
//! live count on every `has_next`/`next` call; a mismatch fails with
//! [ConcurrentModification](CollectionErrorKind::ConcurrentModification).
//!
//! Borrowing iterators (e.g. [ArrayList::iter]) cannot be outlived by a
//! mutation in safe Rust. A [Cursor] does not borrow its list, which makes the
//! "create iterator, mutate, then advance" sequence possible; the cursor then
//! detects the change at runtime.
//!
//! # Example
//! ```
//! use bintree_collections::list::{ArrayList, UnorderedList};
//! use bintree_collections::CollectionErrorKind;
//!
//! let mut list = ArrayList::new();
//! list.add_to_rear("Kea");
//! let mut cursor = list.cursor();
//! list.add_to_rear("Kaka");
//!
//! let err = cursor.next(&list).unwrap_err();
//! assert_eq!(err.kind(), CollectionErrorKind::ConcurrentModification);
//! ```

use crate::error::{CollectionError, CollectionResult};
use crate::list::{ArrayList, List};
use crate::list::array_list::LIST;
use tracing::debug;

// =#========================================================================#=
// MODIFICATION COUNT
// =#========================================================================#=
/// Counter of structural modifications of a single collection instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModCount(u64);

impl ModCount {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        ModCount(0)
    }

    /// Records one structural modification.
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Returns the current number of recorded modifications.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Compares a count captured by an iterator with the live count.
///
/// # Returns
/// * `Ok(())` if no structural modification happened in between
/// * [CollectionError] of kind `ConcurrentModification` otherwise,
///   naming `collection`
pub fn check_mod_count(
    expected: ModCount,
    live: ModCount,
    collection: &'static str,
) -> CollectionResult<()> {
    if expected == live {
        Ok(())
    } else {
        debug!(
            collection,
            expected = expected.value(),
            live = live.value(),
            "concurrent modification detected"
        );
        Err(CollectionError::concurrent_modification(collection))
    }
}

// =#========================================================================#=
// CURSOR
// =#========================================================================#=
/// Detached fail-fast iterator over an [ArrayList].
///
/// Holds only a position, the id of the list it was created from and that
/// list's modification count at creation, so the list has to be passed to
/// each call.
#[derive(Debug, Clone)]
pub struct Cursor {
    list_id: u64,
    expected_mods: ModCount,
    position: usize,
}

impl Cursor {
    pub(crate) fn new(list_id: u64, expected_mods: ModCount) -> Self {
        Cursor {
            list_id,
            expected_mods,
            position: 0,
        }
    }

    /// Returns whether at least one more element can be delivered.
    ///
    /// # Errors
    /// `ConcurrentModification` if `list` is not the list this cursor was
    /// created from, or changed since then.
    pub fn has_next<T>(&self, list: &ArrayList<T>) -> CollectionResult<bool> {
        if self.list_id != list.id() {
            debug!(
                expected = self.list_id,
                actual = list.id(),
                "cursor used with a foreign list"
            );
            return Err(CollectionError::concurrent_modification(LIST));
        }
        check_mod_count(self.expected_mods, list.mod_count(), LIST)?;
        Ok(self.position < list.size())
    }

    /// Returns the next element and advances the cursor.
    ///
    /// # Errors
    /// * `ConcurrentModification` if `list` is foreign or changed since this
    ///   cursor was created
    /// * `NoSuchElement` if the cursor is exhausted
    pub fn next<'a, T>(&mut self, list: &'a ArrayList<T>) -> CollectionResult<&'a T> {
        if !self.has_next(list)? {
            return Err(CollectionError::no_such_element(LIST));
        }
        let element = list
            .get(self.position)
            .ok_or_else(|| CollectionError::no_such_element(LIST))?;
        self.position += 1;
        Ok(element)
    }

    /// Removal through a cursor is not supported.
    ///
    /// # Errors
    /// Always fails with `UnsupportedOperation`.
    pub fn remove(&mut self) -> CollectionResult<()> {
        Err(CollectionError::unsupported_operation(LIST))
    }

    /// Returns the number of elements delivered so far.
    pub fn position(&self) -> usize {
        self.position
    }
}
