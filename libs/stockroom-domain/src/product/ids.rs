use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a Product
///
/// ProductId wraps the repository-assigned integer so product ids cannot be
/// mixed up with quantities or other integers in the system. Ids start at 1
/// and are never reused by a repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Create a ProductId from a raw integer
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner integer value
    pub fn get(&self) -> u64 {
        self.0
    }

    /// The id following this one in assignment order
    ///
    /// Returns `None` once the id space is exhausted.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ProductId> for u64 {
    fn from(id: ProductId) -> Self {
        id.0
    }
}
