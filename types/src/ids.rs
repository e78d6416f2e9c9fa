use std::fmt;

use serde::{Deserialize, Serialize};

/// Position of one voter inside a preference profile.
///
/// Profiles are ordered; the index is the individual's identity, which is what
/// dictatorship rules and positional weights key on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Individual(usize);

impl Individual {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl From<usize> for Individual {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl fmt::Display for Individual {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
