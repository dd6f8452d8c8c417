#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// The axis a [Cardinal] direction runs along.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// One of the four grid-aligned directions a search expands towards.
///
/// Encoded so that the bit pattern mirrors the source algorithm: the low bit of
/// the discriminant selects the positive/negative half of an axis, and the
/// high bit selects the axis itself.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    North = 0x00,
    South = 0x01,
    East = 0x11,
    West = 0x10,
}

/// All four cardinals, in the fixed order the seeding step relies on.
pub const CARDINALS: [Cardinal; 4] = [
    Cardinal::North,
    Cardinal::South,
    Cardinal::East,
    Cardinal::West,
];

impl Cardinal {
    /// The axis this direction runs along: N/S are vertical movement on `Y`,
    /// E/W are horizontal movement on `X`.
    #[inline]
    #[must_use]
    pub fn axis(&self) -> Axis {
        if (*self as i32) & 0x10 == 0 {
            Axis::Y
        } else {
            Axis::X
        }
    }

    /// The signed unit displacement along this direction's axis.
    #[inline]
    #[must_use]
    pub fn step(&self) -> i32 {
        -1 + (((*self as i32) & 0x1) << 1)
    }

    /// The direction pointing the opposite way along the same axis.
    #[inline]
    #[must_use]
    pub fn opposite(&self) -> Self {
        Self::from_bits((*self as i32) ^ 0x1)
    }

    /// One of the two directions orthogonal to this one (flips the axis bit).
    #[inline]
    #[must_use]
    pub fn left_orthogonal(&self) -> Self {
        Self::from_bits((*self as i32) ^ 0x10)
    }

    /// The other direction orthogonal to this one (flips both bits).
    #[inline]
    #[must_use]
    pub fn right_orthogonal(&self) -> Self {
        Self::from_bits((*self as i32) ^ 0x11)
    }

    #[inline]
    fn from_bits(bits: i32) -> Self {
        match bits {
            0x00 => Self::North,
            0x01 => Self::South,
            0x11 => Self::East,
            0x10 => Self::West,
            _ => unreachable!("cardinal bit pattern out of range"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_axis() {
        assert_eq!(Cardinal::North.axis(), Axis::Y);
        assert_eq!(Cardinal::South.axis(), Axis::Y);
        assert_eq!(Cardinal::East.axis(), Axis::X);
        assert_eq!(Cardinal::West.axis(), Axis::X);
    }

    #[test]
    fn test_step() {
        assert_eq!(Cardinal::North.step(), -1);
        assert_eq!(Cardinal::South.step(), 1);
        assert_eq!(Cardinal::East.step(), 1);
        assert_eq!(Cardinal::West.step(), -1);
    }

    #[test]
    fn test_opposite() {
        assert_eq!(Cardinal::North.opposite(), Cardinal::South);
        assert_eq!(Cardinal::South.opposite(), Cardinal::North);
        assert_eq!(Cardinal::East.opposite(), Cardinal::West);
        assert_eq!(Cardinal::West.opposite(), Cardinal::East);
    }

    #[test]
    fn test_orthogonal() {
        assert_eq!(Cardinal::North.left_orthogonal(), Cardinal::West);
        assert_eq!(Cardinal::North.right_orthogonal(), Cardinal::East);
        assert_eq!(Cardinal::East.left_orthogonal(), Cardinal::South);
        assert_eq!(Cardinal::East.right_orthogonal(), Cardinal::North);
    }
}
