//! Insertion operations of a list whose order is chosen by the caller.

use crate::error::{CollectionError, CollectionResult};
use crate::list::{ArrayList, List};

/// Name reported when an insertion target is missing.
const UNORDERED_LIST: &str = "UnorderedList";

// =#========================================================================#=
// UNORDERED LIST (Trait)
// =#========================================================================T=
/// A [List] that stores elements in any order the caller desires.
pub trait UnorderedList<T>: List<T> {
    /// Adds `element` at the front, shifting all others one position back.
    fn add_to_front(&mut self, element: T);

    /// Adds `element` at the rear.
    fn add_to_rear(&mut self, element: T);

    /// Adds `element` directly after the first element equal to `target`.
    ///
    /// # Errors
    /// `ElementNotFound` if no element is equal to `target`; the list is
    /// left unchanged.
    fn add_after(&mut self, element: T, target: &T) -> CollectionResult<()>
    where
        T: PartialEq;
}

impl<T> UnorderedList<T> for ArrayList<T> {
    fn add_to_front(&mut self, element: T) {
        self.insert_at(0, element);
    }

    fn add_to_rear(&mut self, element: T) {
        let rear = self.size();
        self.insert_at(rear, element);
    }

    fn add_after(&mut self, element: T, target: &T) -> CollectionResult<()>
    where
        T: PartialEq,
    {
        let index = self
            .position_of(target)
            .ok_or_else(|| CollectionError::element_not_found(UNORDERED_LIST))?;
        self.insert_at(index + 1, element);
        Ok(())
    }
}
