use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::*;

/// A group of cards laid down in one turn.
///
/// Straights carry their length and top rank. The wraparound
/// straight swaps its bottom card for the deuce, so it covers
/// the deuce plus ranks 3..=high with high = length - 2 (as an index).
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Meld {
    Single(Rank),
    Pair(Rank),
    Triple(Rank),
    /// triple, pair
    FullHouse(Rank, Rank),
    /// quad (or ace triple), kicker
    Bomb(Rank, Option<Rank>),
    Straight {
        length: u8,
        high: Rank,
        wraparound: bool,
    },
    /// length, high
    DoubleStraight(u8, Rank),
    /// length, high
    TripleStraight(u8, Rank),
}

impl Meld {
    /// the wraparound straight of a given length
    pub fn wraparound(length: u8) -> Self {
        Self::Straight {
            length,
            high: Rank::from(length - 2),
            wraparound: true,
        }
    }

    /// the cards this meld consumes
    pub fn hand(&self) -> Hand {
        match *self {
            Self::Single(r) => Hand::of(r, 1),
            Self::Pair(r) => Hand::of(r, 2),
            Self::Triple(r) => Hand::of(r, 3),
            Self::FullHouse(t, p) => Hand::add(Hand::of(t, 3), Hand::of(p, 2)),
            Self::Bomb(r, kicker) => Hand::add(
                Hand::of(r, r.bomb().expect("bombable rank")),
                kicker.map_or(Hand::empty(), |k| Hand::of(k, 1)),
            ),
            Self::Straight {
                length,
                wraparound: true,
                ..
            } => Hand::add(
                Hand::of(Rank::Deuce, 1),
                Hand::run(Rank::Three, Rank::from(length - 2), 1),
            ),
            Self::Straight { length, high, .. } => Hand::run(Self::low(length, high), high, 1),
            Self::DoubleStraight(length, high) => Hand::run(Self::low(length, high), high, 2),
            Self::TripleStraight(length, high) => Hand::run(Self::low(length, high), high, 3),
        }
    }

    /// parameters within the catalogue, independent of any hand
    pub fn is_valid(&self) -> bool {
        match *self {
            Self::Single(_) | Self::Pair(_) => true,
            Self::Triple(r) => r != Rank::Ace,
            Self::FullHouse(t, p) => t != p,
            Self::Bomb(r, kicker) => r.bomb().is_some() && kicker != Some(r),
            Self::Straight {
                length,
                high,
                wraparound: true,
            } => (STRAIGHT_MIN..=STRAIGHT_MAX).contains(&length) && u8::from(high) == length - 2,
            Self::Straight { length, high, .. } => {
                (STRAIGHT_MIN..STRAIGHT_MAX).contains(&length) && Self::fits(length, high)
            }
            Self::DoubleStraight(length, high) => {
                (DOUBLE_STRAIGHT_MIN..=DOUBLE_STRAIGHT_MAX).contains(&length)
                    && Self::fits(length, high)
            }
            Self::TripleStraight(length, high) => {
                (TRIPLE_STRAIGHT_MIN..=TRIPLE_STRAIGHT_MAX).contains(&length)
                    && Self::fits(length, high)
            }
        }
    }

    /// a run of `length` ranks topping out at `high` stays below the deuce
    fn fits(length: u8, high: Rank) -> bool {
        high.sequential() && u8::from(high) + 1 >= length
    }
    fn low(length: u8, high: Rank) -> Rank {
        Rank::from(u8::from(high) + 1 - length)
    }
}

/// (u8, u8) encoding written to the exported table.
///
/// straights keep the (length, high) pair, with the wraparound
/// distinguished by high == length - 2, a top no ordinary straight
/// of that length can reach. other shapes use tags outside 5..=13.
impl From<Meld> for (u8, u8) {
    fn from(meld: Meld) -> Self {
        const RANKS: u8 = N_RANKS as u8;
        match meld {
            Meld::Single(r) => (1, u8::from(r)),
            Meld::Pair(r) => (2, u8::from(r)),
            Meld::Triple(r) => (3, u8::from(r)),
            Meld::FullHouse(t, p) => (4, u8::from(t) * RANKS + u8::from(p)),
            Meld::Straight { length, high, .. } => (length, u8::from(high)),
            Meld::Bomb(r, k) => (14, u8::from(r) * (RANKS + 1) + k.map_or(RANKS, u8::from)),
            Meld::DoubleStraight(length, high) => (20 + length, u8::from(high)),
            Meld::TripleStraight(length, high) => (30 + length, u8::from(high)),
        }
    }
}
impl TryFrom<(u8, u8)> for Meld {
    type Error = anyhow::Error;
    fn try_from((a, b): (u8, u8)) -> Result<Self, Self::Error> {
        const RANKS: u8 = N_RANKS as u8;
        let rank = |n: u8| {
            if n < RANKS {
                Ok(Rank::from(n))
            } else {
                Err(anyhow::anyhow!("rank index out of range: {}", n))
            }
        };
        let meld = match a {
            1 => Meld::Single(rank(b)?),
            2 => Meld::Pair(rank(b)?),
            3 => Meld::Triple(rank(b)?),
            4 => Meld::FullHouse(rank(b / RANKS)?, rank(b % RANKS)?),
            5..=13 => Meld::Straight {
                length: a,
                high: rank(b)?,
                wraparound: b + 2 == a,
            },
            14 => Meld::Bomb(
                rank(b / (RANKS + 1))?,
                match b % (RANKS + 1) {
                    RANKS => None,
                    k => Some(Rank::from(k)),
                },
            ),
            22..=28 => Meld::DoubleStraight(a - 20, rank(b)?),
            32..=35 => Meld::TripleStraight(a - 30, rank(b)?),
            _ => return Err(anyhow::anyhow!("unknown meld tag: {}", a)),
        };
        if meld.is_valid() {
            Ok(meld)
        } else {
            Err(anyhow::anyhow!("malformed meld: {:?}", meld))
        }
    }
}

impl std::fmt::Display for Meld {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let name = match self {
            Meld::Single(_) => "Single",
            Meld::Pair(_) => "Pair",
            Meld::Triple(_) => "Triple",
            Meld::FullHouse(..) => "FullHouse",
            Meld::Bomb(..) => "Bomb",
            Meld::Straight {
                wraparound: true, ..
            } => "Wraparound",
            Meld::Straight { .. } => "Straight",
            Meld::DoubleStraight(..) => "DoubleStraight",
            Meld::TripleStraight(..) => "TripleStraight",
        };
        write!(f, "{:<15}{}", name, self.hand())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumed_cards() {
        let fh = Meld::FullHouse(Rank::King, Rank::Three);
        assert_eq!(fh.hand(), Hand::try_from("KKK33").unwrap());
        let bomb = Meld::Bomb(Rank::Ace, Some(Rank::Deuce));
        assert_eq!(bomb.hand(), Hand::try_from("AAA2").unwrap());
        let quad = Meld::Bomb(Rank::Nine, None);
        assert_eq!(quad.hand(), Hand::try_from("9999").unwrap());
        let wheel = Meld::wraparound(5);
        assert_eq!(wheel.hand(), Hand::try_from("23456").unwrap());
        let straight = Meld::Straight {
            length: 5,
            high: Rank::Ace,
            wraparound: false,
        };
        assert_eq!(straight.hand(), Hand::try_from("TJQKA").unwrap());
        let sisters = Meld::DoubleStraight(3, Rank::Five);
        assert_eq!(sisters.hand(), Hand::try_from("334455").unwrap());
        let planes = Meld::TripleStraight(2, Rank::Ace);
        assert_eq!(planes.hand(), Hand::try_from("KKKAAA").unwrap());
    }

    #[test]
    fn sizes_match_hands() {
        let melds = [
            (Meld::Single(Rank::Deuce), 1),
            (Meld::Pair(Rank::Ace), 2),
            (Meld::Triple(Rank::Three), 3),
            (Meld::FullHouse(Rank::Ace, Rank::King), 5),
            (Meld::Bomb(Rank::Ace, None), 3),
            (Meld::Bomb(Rank::Four, Some(Rank::Three)), 5),
            (Meld::wraparound(13), 13),
            (Meld::DoubleStraight(8, Rank::Ace), 16),
            (Meld::TripleStraight(5, Rank::King), 15),
        ];
        for (meld, size) in melds {
            assert!(meld.is_valid());
            assert_eq!(meld.hand().size(), size);
        }
    }

    #[test]
    fn malformed() {
        assert!(!Meld::FullHouse(Rank::Six, Rank::Six).is_valid());
        assert!(!Meld::Bomb(Rank::Deuce, None).is_valid());
        assert!(!Meld::Bomb(Rank::Six, Some(Rank::Six)).is_valid());
        assert!(!Meld::Triple(Rank::Ace).is_valid());
        assert!(!Meld::DoubleStraight(2, Rank::Deuce).is_valid());
        assert!(!Meld::DoubleStraight(3, Rank::Four).is_valid());
        assert!(!Meld::TripleStraight(6, Rank::King).is_valid());
        assert!(!Meld::Straight {
            length: 13,
            high: Rank::Ace,
            wraparound: false
        }
        .is_valid());
    }

    #[test]
    fn encoding_keeps_straight_pairs() {
        let wheel = Meld::wraparound(7);
        assert_eq!(<(u8, u8)>::from(wheel), (7, 5));
        let straight = Meld::Straight {
            length: 7,
            high: Rank::Nine,
            wraparound: false,
        };
        assert_eq!(<(u8, u8)>::from(straight), (7, 6));
        assert_eq!(Meld::try_from((7u8, 5u8)).unwrap(), wheel);
        assert_eq!(Meld::try_from((7u8, 6u8)).unwrap(), straight);
        assert_eq!(<(u8, u8)>::from(Meld::wraparound(13)), (13, 11));
    }

    #[test]
    fn encoding_is_invertible() {
        let melds = [
            Meld::Single(Rank::Deuce),
            Meld::Pair(Rank::Three),
            Meld::Triple(Rank::King),
            Meld::FullHouse(Rank::Three, Rank::Ace),
            Meld::Bomb(Rank::Ace, None),
            Meld::Bomb(Rank::Three, Some(Rank::Deuce)),
            Meld::wraparound(5),
            Meld::DoubleStraight(2, Rank::Four),
            Meld::TripleStraight(3, Rank::Ace),
        ];
        for meld in melds {
            assert_eq!(Meld::try_from(<(u8, u8)>::from(meld)).unwrap(), meld);
        }
    }

    #[test]
    fn rejects_garbage() {
        assert!(Meld::try_from((0u8, 0u8)).is_err());
        assert!(Meld::try_from((1u8, 13u8)).is_err());
        assert!(Meld::try_from((4u8, 14u8)).is_err()); // FullHouse(4, 4)
        assert!(Meld::try_from((5u8, 2u8)).is_err()); // straight running below 3
        assert!(Meld::try_from((13u8, 12u8)).is_err());
        assert!(Meld::try_from((14u8, 12u8 * 14 + 13)).is_err()); // deuce bomb
    }
}
