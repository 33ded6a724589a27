//! Record Identifiers
//!
//! Integer primary keys wrapped per entity so a person id cannot be passed
//! where a podcast id is expected. Zero is the "not assigned yet" id.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Typed integer ID.
///
/// ```
/// use kernel::id::PersonId;
///
/// let id = PersonId::new(7);
/// assert_eq!(id.get(), 7);
/// assert!(PersonId::UNASSIGNED.is_unassigned());
/// ```
pub struct Id<T> {
    value: i64,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub const UNASSIGNED: Self = Self::new(0);

    pub const fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    pub const fn get(&self) -> i64 {
        self.value
    }

    pub const fn is_unassigned(&self) -> bool {
        self.value == 0
    }
}

// Manual impls: derives would put bounds on the marker type.

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::UNASSIGNED
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<i64> for Id<T> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<T> From<Id<T>> for i64 {
    fn from(id: Id<T>) -> Self {
        id.value
    }
}

impl<T> Serialize for Id<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.value)
    }
}

impl<'de, T> Deserialize<'de> for Id<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Self::new)
    }
}

/// Marker types for entity IDs
pub mod markers {
    pub struct Person;

    pub struct Podcast;
}

pub type PersonId = Id<markers::Person>;
pub type PodcastId = Id<markers::Podcast>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unassigned_default() {
        let id = PersonId::default();
        assert!(id.is_unassigned());
        assert!(!PersonId::new(3).is_unassigned());
    }

    #[test]
    fn test_serde_is_transparent() {
        let id = PodcastId::new(42);
        assert_eq!(serde_json::to_string(&id).unwrap(), "42");

        let back: PodcastId = serde_json::from_str("42").unwrap();
        assert_eq!(back, id);
    }

    #[test]
    fn test_ordering() {
        let mut ids = vec![PersonId::new(3), PersonId::new(1), PersonId::new(2)];
        ids.sort();
        assert_eq!(ids, vec![PersonId::new(1), PersonId::new(2), PersonId::new(3)]);
    }
}
