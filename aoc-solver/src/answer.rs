//! Numeric puzzle answers

use std::fmt;

/// The answer to one puzzle part.
///
/// Every puzzle day produces an integer per part. Most are counts or sums and
/// fit in `u64`; sequence extrapolation can go negative, so signed answers are
/// kept separately instead of forcing everything through `i128`.
///
/// # Example
///
/// ```
/// use aoc_solver::Answer;
///
/// let answer = Answer::from(288u64);
/// assert_eq!(answer, 288u64);
/// assert_eq!(answer.to_string(), "288");
///
/// let negative = Answer::from(-3i64);
/// assert_eq!(negative.to_string(), "-3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Answer {
    /// A non-negative answer (counts, sums, products, LCMs)
    Unsigned(u64),
    /// An answer that may be negative
    Signed(i64),
}

impl Answer {
    /// The answer as `i128`, wide enough for both variants
    pub fn as_i128(&self) -> i128 {
        match *self {
            Answer::Unsigned(value) => i128::from(value),
            Answer::Signed(value) => i128::from(value),
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Answer::Unsigned(value) => write!(f, "{}", value),
            Answer::Signed(value) => write!(f, "{}", value),
        }
    }
}

macro_rules! answer_from_unsigned {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Answer::Unsigned(value as u64)
                }
            }
        )*
    };
}

macro_rules! answer_from_signed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Answer {
                fn from(value: $ty) -> Self {
                    Answer::Signed(value as i64)
                }
            }
        )*
    };
}

answer_from_unsigned!(u8, u16, u32, u64, usize);
answer_from_signed!(i8, i16, i32, i64, isize);

impl PartialEq<u64> for Answer {
    fn eq(&self, other: &u64) -> bool {
        self.as_i128() == i128::from(*other)
    }
}

impl PartialEq<i64> for Answer {
    fn eq(&self, other: &i64) -> bool {
        self.as_i128() == i128::from(*other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Answer::from(6440u32).to_string(), "6440");
        assert_eq!(Answer::from(-2i32).to_string(), "-2");
    }

    #[test]
    fn test_compare_across_signedness() {
        assert_eq!(Answer::Signed(114), 114u64);
        assert_eq!(Answer::Unsigned(114), 114i64);
        assert_ne!(Answer::Signed(-1), u64::MAX);
    }
}
