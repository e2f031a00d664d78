use crate::error::{InputError, LookupError, Result};
use crate::geometry::PointSet;

/// An ordered list of unique point indices.
///
/// Used both for the boundary order of a contour and for the pool of
/// points not yet placed. Values are not checked against any point set;
/// that happens when a value is used to look a point up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexSequence {
    values: Vec<usize>,
}

impl IndexSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the sequence `0..len`.
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self {
            values: (0..len).collect(),
        }
    }

    /// Creates the sequence of every index of `points`, in order.
    #[must_use]
    pub fn from_point_set(points: &PointSet) -> Self {
        Self::identity(points.len())
    }

    /// Appends `value` as the last element.
    ///
    /// # Errors
    ///
    /// Returns `InputError::DuplicateValue` if `value` is already present.
    pub fn append(&mut self, value: usize) -> Result<()> {
        self.check_unique(value)?;
        self.values.push(value);
        Ok(())
    }

    /// Inserts `value` right after the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `position >= len()`, or
    /// `InputError::DuplicateValue` if `value` is already present.
    pub fn insert_after(&mut self, position: usize, value: usize) -> Result<()> {
        self.check_position(position)?;
        self.check_unique(value)?;
        self.values.insert(position + 1, value);
        Ok(())
    }

    /// Removes the element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::ValueNotFound` if no element equals `value`.
    pub fn remove_by_value(&mut self, value: usize) -> Result<()> {
        let position = self
            .position_of(value)
            .ok_or(LookupError::ValueNotFound { value })?;
        self.values.remove(position);
        Ok(())
    }

    /// Removes and returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `position >= len()`.
    pub fn remove(&mut self, position: usize) -> Result<usize> {
        self.check_position(position)?;
        Ok(self.values.remove(position))
    }

    /// Returns the element at `position`.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::IndexOutOfRange` if `position >= len()`.
    pub fn get_value(&self, position: usize) -> Result<usize> {
        self.check_position(position)?;
        Ok(self.values[position])
    }

    /// Returns the position of `value`, if present.
    #[must_use]
    pub fn position_of(&self, value: usize) -> Option<usize> {
        self.values.iter().position(|&v| v == value)
    }

    #[must_use]
    pub fn contains(&self, value: usize) -> bool {
        self.values.contains(&value)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.values.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    fn check_position(&self, position: usize) -> Result<()> {
        if position >= self.values.len() {
            return Err(LookupError::IndexOutOfRange {
                container: "IndexSequence",
                index: position,
                len: self.values.len(),
            }
            .into());
        }
        Ok(())
    }

    fn check_unique(&self, value: usize) -> Result<()> {
        if self.contains(value) {
            return Err(InputError::DuplicateValue { value }.into());
        }
        Ok(())
    }
}
