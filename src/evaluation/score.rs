use std::fmt::Display;
use std::ops::Neg;

/// The score represents the value of the position in centipawns, always from
/// White's perspective: positive favors White, negative favors Black.
///
/// [`Score::INFINITY`] and its negation are sentinels rather than evaluations:
/// they mark a line ending in checkmate (for White and for Black
/// respectively) and serve as the initial alpha-beta window bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    value: i32,
}

impl Score {
    /// Stalemate and positions with balanced material and placement.
    pub const DRAW: Self = Self { value: 0 };
    /// Checkmate for White. `-INFINITY` is checkmate for Black.
    pub const INFINITY: Self = Self {
        value: 1_000_000_000,
    };

    /// Creates a new score in centipawn units.
    ///
    /// # Panics
    ///
    /// The value must be strictly within `(-INFINITY, INFINITY)`.
    #[must_use]
    pub fn cp(value: i32) -> Self {
        assert!(value.abs() < Self::INFINITY.value);
        Self { value }
    }
}

impl Neg for Score {
    type Output = Self;

    /// Mirrors evaluation to the other side's perspective.
    fn neg(self) -> Self::Output {
        Self { value: -self.value }
    }
}

impl Display for Score {
    /// Formats the score in centipawn units like UCI does; the sentinels are
    /// printed as `+inf` and `-inf`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if *self == Self::INFINITY {
            write!(f, "+inf")
        } else if *self == -Self::INFINITY {
            write!(f, "-inf")
        } else {
            write!(f, "cp {}", self.value)
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn cp() {
        let cp = Score::cp(42);
        assert_eq!(cp, Score { value: 42 });

        assert!(Score::cp(42) < Score::cp(43));
        assert!(Score::cp(0) > Score::cp(-42));
        assert_eq!(Score::cp(0), Score::DRAW);
    }

    #[test]
    fn neg() {
        assert_eq!(-Score::cp(42), Score { value: -42 });
        assert_eq!(-(-Score::INFINITY), Score::INFINITY);
    }

    #[test]
    fn infinity_vs_cp() {
        assert!(Score::INFINITY > Score::cp(20_000));
        assert!(-Score::INFINITY < Score::cp(-20_000));
    }

    #[test]
    fn display() {
        assert_eq!(Score::cp(123).to_string(), "cp 123");
        assert_eq!(Score::cp(-5).to_string(), "cp -5");
        assert_eq!(Score::INFINITY.to_string(), "+inf");
        assert_eq!((-Score::INFINITY).to_string(), "-inf");
    }

    #[test]
    #[should_panic]
    fn cp_panic() {
        let _ = Score::cp(Score::INFINITY.value);
    }
}
