//! The two sides of a match.

use std::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the two sides in a match, index 0 or 1.
///
/// Serializes as the bare index (`0` or `1`) — this is the representation
/// the wire protocol uses for `yourIndex` and friends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Seat {
    Zero,
    One,
}

impl Seat {
    /// The opposing seat.
    pub fn rival(self) -> Seat {
        match self {
            Seat::Zero => Seat::One,
            Seat::One => Seat::Zero,
        }
    }

    /// Numeric index, 0 or 1.
    pub fn index(self) -> usize {
        match self {
            Seat::Zero => 0,
            Seat::One => 1,
        }
    }

    /// Draws a starting seat with a fair coin.
    pub fn random() -> Seat {
        if rand::rng().random_bool(0.5) {
            Seat::Zero
        } else {
            Seat::One
        }
    }
}

impl From<Seat> for u8 {
    fn from(seat: Seat) -> u8 {
        seat.index() as u8
    }
}

impl TryFrom<u8> for Seat {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Seat::Zero),
            1 => Ok(Seat::One),
            other => Err(format!("seat index out of range: {other}")),
        }
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seat-{}", self.index())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rival_flips_both_ways() {
        assert_eq!(Seat::Zero.rival(), Seat::One);
        assert_eq!(Seat::One.rival(), Seat::Zero);
        assert_eq!(Seat::Zero.rival().rival(), Seat::Zero);
    }

    #[test]
    fn test_try_from_rejects_out_of_range() {
        assert_eq!(Seat::try_from(0).unwrap(), Seat::Zero);
        assert_eq!(Seat::try_from(1).unwrap(), Seat::One);
        assert!(Seat::try_from(2).is_err());
    }

    #[test]
    fn test_random_eventually_draws_both_seats() {
        // A fair coin missing one side 200 times in a row is not a thing.
        let draws: Vec<Seat> = (0..200).map(|_| Seat::random()).collect();
        assert!(draws.contains(&Seat::Zero));
        assert!(draws.contains(&Seat::One));
    }

    #[test]
    fn test_display() {
        assert_eq!(Seat::Zero.to_string(), "seat-0");
        assert_eq!(Seat::One.to_string(), "seat-1");
    }
}
