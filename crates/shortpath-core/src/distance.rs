/// Path length from the start node, with an explicit "unreached" value.
///
/// Distances are sums of non-negative integer edge weights, so they are held
/// as `u64`. [`Distance::Infinite`] stands for a node the search has not
/// reached; it orders above every finite value so that comparisons read the
/// same way they would against a floating-point infinity.
use std::fmt;

use serde::{Serialize, Serializer};

/// Shortest known distance to a node.
///
/// The derived ordering places every [`Distance::Finite`] value below
/// [`Distance::Infinite`], and finite values compare numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Distance {
    /// A reached node, with the total weight of the best path found.
    Finite(u64),
    /// A node that no explored path reaches.
    Infinite,
}

impl Distance {
    /// The distance of the start node to itself.
    pub const ZERO: Distance = Distance::Finite(0);

    /// Returns `true` for [`Distance::Finite`].
    pub fn is_finite(self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns the finite value, or `None` for [`Distance::Infinite`].
    pub fn finite(self) -> Option<u64> {
        match self {
            Distance::Finite(d) => Some(d),
            Distance::Infinite => None,
        }
    }
}

impl From<Option<u64>> for Distance {
    fn from(value: Option<u64>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(d) => write!(f, "{d}"),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// Serializes as a bare number, or `null` when unreached.
impl Serialize for Distance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Distance::Finite(d) => serializer.serialize_u64(*d),
            Distance::Infinite => serializer.serialize_none(),
        }
    }
}
