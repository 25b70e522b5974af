use std::fmt;

/// Tentative or final shortest-path cost of a vertex.
///
/// `Infinite` orders after every finite value, so a plain comparison is
/// enough for heap ordering. Arithmetic is only defined on the finite case;
/// callers must match on `Finite` before adding an edge weight.
///
/// Edge weights are at most `i64::MAX` and a shortest path has fewer than
/// `usize::MAX` edges, so any path cost fits in the `u128` payload.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Distance {
    Finite(u128),
    #[default]
    Infinite,
}

impl Distance {
    pub const ZERO: Self = Self::Finite(0);

    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Self::Finite(_))
    }

    #[inline]
    pub fn finite(self) -> Option<u128> {
        match self {
            Self::Finite(d) => Some(d),
            Self::Infinite => None,
        }
    }

    /// `self + weight`, or `None` when `self` is infinite or the sum does not
    /// fit in a `u128`.
    #[inline]
    pub fn checked_add(self, weight: u64) -> Option<Self> {
        let d = self.finite()?;
        d.checked_add(u128::from(weight)).map(Self::Finite)
    }
}

impl From<u64> for Distance {
    fn from(d: u64) -> Self {
        Self::Finite(u128::from(d))
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finite(d) => write!(f, "{d}"),
            Self::Infinite => f.write_str("inf"),
        }
    }
}
