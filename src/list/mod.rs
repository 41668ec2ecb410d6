//! Array-backed list collections.
//!
//! # List representation
//! Lists are represented by [ArrayList], a growable, order-preserving
//! sequence whose front is kept at position 0. Capacity doubles whenever an
//! insertion would exceed it. All removals shift the remaining elements, so
//! their relative order never changes.
//!
//! Operations are split over two traits:
//!
//! | Trait | Operations |
//! |-------|------------|
//! | [List] | removal at front/rear/by value, peeks, membership, size |
//! | [UnorderedList] | insertion at front, rear, or after a target element |
//!
//! # Iteration
//! [ArrayList::iter] borrows the list and yields `&T`. A
//! [Cursor](crate::iter::Cursor) from [ArrayList::cursor] does not borrow the
//! list and instead detects modifications at runtime, see [crate::iter].

pub mod array_list;
pub mod unordered_list;

pub use array_list::ArrayList;
pub use array_list::Iter;
pub use unordered_list::UnorderedList;

use crate::error::CollectionResult;

// =#========================================================================#=
// LIST (Trait)
// =#========================================================================T=
/// Operations shared by all lists.
///
/// Methods comparing elements require `T: PartialEq` only where they are
/// used, so lists of non-comparable items (e.g. node references) still
/// provide the positional operations.
pub trait List<T> {
    /// Removes and returns the first element.
    ///
    /// # Errors
    /// `EmptyCollection` if the list is empty.
    fn remove_first(&mut self) -> CollectionResult<T>;

    /// Removes and returns the last element.
    ///
    /// # Errors
    /// `EmptyCollection` if the list is empty.
    fn remove_last(&mut self) -> CollectionResult<T>;

    /// Removes and returns the first element equal to `element`.
    ///
    /// # Errors
    /// `ElementNotFound` if no element is equal to `element`.
    fn remove(&mut self, element: &T) -> CollectionResult<T>
    where
        T: PartialEq;

    /// Returns a reference to the first element.
    ///
    /// # Errors
    /// `EmptyCollection` if the list is empty.
    fn first(&self) -> CollectionResult<&T>;

    /// Returns a reference to the last element.
    ///
    /// # Errors
    /// `EmptyCollection` if the list is empty.
    fn last(&self) -> CollectionResult<&T>;

    /// Returns whether some element is equal to `target`.
    fn contains(&self, target: &T) -> bool
    where
        T: PartialEq;

    /// Returns `true` if the list holds no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the list.
    fn size(&self) -> usize;
}
