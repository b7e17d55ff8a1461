use super::meld::Meld;
use crate::cards::hand::Hand;
use crate::cards::rank::Rank;
use crate::*;

/// Decides which melds a Hand can lay down, and lists them.
///
/// Each shape gets a predicate and an enumerator. Enumeration is
/// exhaustive and knows nothing about search strategy, but `melds`
/// lists long runs before short ones and big groups before small
/// ones, which is the order a solver wants to try them in.
pub struct Oracle(Hand);
impl From<Hand> for Oracle {
    fn from(h: Hand) -> Self {
        Self(h)
    }
}

impl Oracle {
    /// every legal meld, runs first, longest first
    pub fn melds(&self) -> Vec<Meld> {
        std::iter::empty()
            .chain(self.straights())
            .chain(self.triple_straights())
            .chain(self.double_straights())
            .chain(self.bombs())
            .chain(self.full_houses())
            .chain(self.triples())
            .chain(self.pairs())
            .chain(self.singles())
            .collect()
    }
    /// number of legal melds
    pub fn count(&self) -> usize {
        self.melds().len()
    }
    /// whether any straight of singles, pairs or triples is playable.
    /// the shortest member of each family exists whenever a longer one does.
    pub fn has_runs(&self) -> bool {
        self.can_play_wraparound(STRAIGHT_MIN)
            || Self::highs(STRAIGHT_MIN).any(|h| self.can_play_straight(STRAIGHT_MIN, h))
            || Self::highs(DOUBLE_STRAIGHT_MIN)
                .any(|h| self.can_play_double_straight(DOUBLE_STRAIGHT_MIN, h))
            || Self::highs(TRIPLE_STRAIGHT_MIN)
                .any(|h| self.can_play_triple_straight(TRIPLE_STRAIGHT_MIN, h))
    }

    pub fn can_play(&self, meld: &Meld) -> bool {
        meld.is_valid() && self.0.contains(meld.hand())
    }

    ///

    pub fn can_play_single(&self, r: Rank) -> bool {
        self.0.count(r) >= 1
    }
    pub fn can_play_pair(&self, r: Rank) -> bool {
        self.0.count(r) >= 2
    }
    /// three aces are the ace bomb, not a triple
    pub fn can_play_triple(&self, r: Rank) -> bool {
        r != Rank::Ace && self.0.count(r) >= 3
    }
    pub fn can_play_full_house(&self, triple: Rank, pair: Rank) -> bool {
        triple != pair && self.0.count(triple) >= 3 && self.0.count(pair) >= 2
    }
    pub fn can_play_bomb(&self, r: Rank, kicker: Option<Rank>) -> bool {
        r.bomb().is_some_and(|n| self.0.count(r) >= n)
            && kicker.is_none_or(|k| k != r && self.0.count(k) >= 1)
    }
    pub fn can_play_straight(&self, length: u8, high: Rank) -> bool {
        let meld = Meld::Straight {
            length,
            high,
            wraparound: false,
        };
        meld.is_valid() && self.holds_run(length, high, 1)
    }
    /// the deuce stands in for the bottom card of a run starting at 3
    pub fn can_play_wraparound(&self, length: u8) -> bool {
        (STRAIGHT_MIN..=STRAIGHT_MAX).contains(&length)
            && self.0.count(Rank::Deuce) >= 1
            && self.holds_run(length - 1, Rank::from(length - 2), 1)
    }
    pub fn can_play_double_straight(&self, length: u8, high: Rank) -> bool {
        Meld::DoubleStraight(length, high).is_valid() && self.holds_run(length, high, 2)
    }
    pub fn can_play_triple_straight(&self, length: u8, high: Rank) -> bool {
        Meld::TripleStraight(length, high).is_valid() && self.holds_run(length, high, 3)
    }

    ///

    pub fn singles(&self) -> impl Iterator<Item = Meld> + '_ {
        self.0.holding(1).map(Meld::Single)
    }
    pub fn pairs(&self) -> impl Iterator<Item = Meld> + '_ {
        self.0.holding(2).map(Meld::Pair)
    }
    pub fn triples(&self) -> impl Iterator<Item = Meld> + '_ {
        self.0
            .holding(3)
            .filter(|&r| self.can_play_triple(r))
            .map(Meld::Triple)
    }
    pub fn full_houses(&self) -> impl Iterator<Item = Meld> + '_ {
        self.0.holding(3).flat_map(move |t| {
            self.0
                .holding(2)
                .filter(move |&p| p != t)
                .map(move |p| Meld::FullHouse(t, p))
        })
    }
    /// bombs with each possible kicker, then bare
    pub fn bombs(&self) -> impl Iterator<Item = Meld> + '_ {
        Rank::all()
            .iter()
            .copied()
            .filter(|&r| self.can_play_bomb(r, None))
            .flat_map(move |r| {
                self.0
                    .ranks()
                    .filter(move |&k| k != r)
                    .map(move |k| Meld::Bomb(r, Some(k)))
                    .chain(std::iter::once(Meld::Bomb(r, None)))
            })
    }
    /// straights of singles from 13 cards down to 5, each
    /// length's wraparound after its ordinary straights
    pub fn straights(&self) -> impl Iterator<Item = Meld> + '_ {
        (STRAIGHT_MIN..=STRAIGHT_MAX).rev().flat_map(move |length| {
            Self::highs(length)
                .filter(move |&h| self.can_play_straight(length, h))
                .map(move |high| Meld::Straight {
                    length,
                    high,
                    wraparound: false,
                })
                .chain(
                    Some(length)
                        .filter(|&l| self.can_play_wraparound(l))
                        .map(Meld::wraparound),
                )
        })
    }
    pub fn double_straights(&self) -> impl Iterator<Item = Meld> + '_ {
        (DOUBLE_STRAIGHT_MIN..=DOUBLE_STRAIGHT_MAX)
            .rev()
            .flat_map(move |length| {
                Self::highs(length)
                    .filter(move |&h| self.can_play_double_straight(length, h))
                    .map(move |h| Meld::DoubleStraight(length, h))
            })
    }
    pub fn triple_straights(&self) -> impl Iterator<Item = Meld> + '_ {
        (TRIPLE_STRAIGHT_MIN..=TRIPLE_STRAIGHT_MAX)
            .rev()
            .flat_map(move |length| {
                Self::highs(length)
                    .filter(move |&h| self.can_play_triple_straight(length, h))
                    .map(move |h| Meld::TripleStraight(length, h))
            })
    }

    ///

    /// top ranks a run of this length can end on, stopping below the deuce
    fn highs(length: u8) -> impl Iterator<Item = Rank> {
        (length.saturating_sub(1)..u8::from(Rank::Deuce)).map(Rank::from)
    }
    /// n copies of each of the `length` ranks ending at `high`
    fn holds_run(&self, length: u8, high: Rank, n: u8) -> bool {
        let high = u8::from(high);
        length >= 1
            && high + 1 >= length
            && (high + 1 - length..=high)
                .map(Rank::from)
                .all(|r| self.0.count(r) >= n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::hands::HandIterator;
    use std::collections::HashSet;

    /// every well-formed meld, regardless of hand
    fn catalogue() -> Vec<Meld> {
        let ranks = Rank::all().iter().copied();
        let lengths = |lo: u8, hi: u8| lo..=hi;
        std::iter::empty()
            .chain(ranks.clone().map(Meld::Single))
            .chain(ranks.clone().map(Meld::Pair))
            .chain(ranks.clone().map(Meld::Triple))
            .chain(ranks.clone().flat_map(|t| {
                Rank::all()
                    .iter()
                    .map(move |&p| Meld::FullHouse(t, p))
            }))
            .chain(ranks.clone().flat_map(|r| {
                Rank::all()
                    .iter()
                    .map(move |&k| Meld::Bomb(r, Some(k)))
                    .chain(std::iter::once(Meld::Bomb(r, None)))
            }))
            .chain(lengths(STRAIGHT_MIN, STRAIGHT_MAX).flat_map(|l| {
                Rank::all().iter().flat_map(move |&h| {
                    [true, false].map(|wraparound| Meld::Straight {
                        length: l,
                        high: h,
                        wraparound,
                    })
                })
            }))
            .chain(lengths(DOUBLE_STRAIGHT_MIN, DOUBLE_STRAIGHT_MAX).flat_map(|l| {
                Rank::all()
                    .iter()
                    .map(move |&h| Meld::DoubleStraight(l, h))
            }))
            .chain(lengths(TRIPLE_STRAIGHT_MIN, TRIPLE_STRAIGHT_MAX).flat_map(|l| {
                Rank::all()
                    .iter()
                    .map(move |&h| Meld::TripleStraight(l, h))
            }))
            .filter(Meld::is_valid)
            .collect()
    }

    #[test]
    fn empty_hand_has_no_melds() {
        assert!(Oracle::from(Hand::empty()).melds().is_empty());
        assert!(!Oracle::from(Hand::empty()).has_runs());
    }

    #[test]
    fn enumeration_matches_catalogue() {
        let catalogue = catalogue();
        let hands = HandIterator::from(6)
            .step_by(7)
            .chain([
                Hand::full(),
                Hand::try_from("3456789TJQKA2").unwrap(),
                Hand::try_from("333444555666AAA2").unwrap(),
            ])
            .collect::<Vec<Hand>>();
        for hand in hands {
            let oracle = Oracle::from(hand);
            let melds = oracle.melds();
            let unique = melds.iter().copied().collect::<HashSet<Meld>>();
            let expected = catalogue
                .iter()
                .copied()
                .filter(|m| hand.contains(m.hand()))
                .collect::<HashSet<Meld>>();
            assert_eq!(melds.len(), unique.len(), "duplicate meld in {}", hand);
            assert_eq!(unique, expected, "melds of {}", hand);
            assert!(melds.iter().all(|m| oracle.can_play(m)));
        }
    }

    #[test]
    fn full_house_predicate() {
        for hand in HandIterator::from(5).chain(std::iter::once(Hand::full())) {
            let oracle = Oracle::from(hand);
            for &t in Rank::all() {
                for &p in Rank::all() {
                    assert_eq!(
                        oracle.can_play_full_house(t, p),
                        hand.count(t) >= 3 && hand.count(p) >= 2 && t != p
                    );
                }
            }
        }
    }

    #[test]
    fn wraparound_is_its_own_path() {
        let oracle = Oracle::from(Hand::try_from("23456").unwrap());
        assert!(oracle.can_play_wraparound(5));
        assert!(!oracle.can_play_straight(5, Rank::Six));
        assert!(!oracle.can_play_straight(5, Rank::Seven));
        assert_eq!(oracle.straights().collect::<Vec<_>>(), vec![Meld::wraparound(5)]);
        let oracle = Oracle::from(Hand::try_from("3456").unwrap());
        assert!(!oracle.can_play_wraparound(5));
        let oracle = Oracle::from(Hand::try_from("JQKA2").unwrap());
        assert!(oracle.straights().next().is_none());
    }

    #[test]
    fn thirteen_card_straight() {
        let oracle = Oracle::from(Hand::try_from("3456789TJQKA2").unwrap());
        assert_eq!(oracle.straights().next(), Some(Meld::wraparound(13)));
        assert!(oracle.can_play_straight(12, Rank::Ace));
        assert_eq!(oracle.straights().count(), (5..=12).map(|l| 13 - l).sum::<usize>() + 9);
    }

    #[test]
    fn ace_bombs_at_three() {
        let oracle = Oracle::from(Hand::try_from("AAA3").unwrap());
        assert!(oracle.can_play_bomb(Rank::Ace, None));
        assert!(oracle.can_play_bomb(Rank::Ace, Some(Rank::Three)));
        assert!(!oracle.can_play_bomb(Rank::Ace, Some(Rank::Ace)));
        assert!(!oracle.can_play_triple(Rank::Ace));
        assert!(oracle.triples().next().is_none());
        assert_eq!(
            oracle.bombs().collect::<Vec<_>>(),
            vec![
                Meld::Bomb(Rank::Ace, Some(Rank::Three)),
                Meld::Bomb(Rank::Ace, None)
            ]
        );
        let oracle = Oracle::from(Hand::try_from("3332").unwrap());
        assert!(!oracle.can_play_bomb(Rank::Three, None));
        assert!(!oracle.can_play_bomb(Rank::Deuce, None));
    }

    #[test]
    fn runs_of_groups() {
        let oracle = Oracle::from(Hand::try_from("333444555").unwrap());
        assert!(oracle.can_play_triple_straight(3, Rank::Five));
        assert!(oracle.can_play_double_straight(3, Rank::Five));
        assert!(!oracle.can_play_triple_straight(4, Rank::Six));
        assert_eq!(oracle.triple_straights().count(), 3);
        assert_eq!(oracle.double_straights().count(), 3);
        assert!(oracle.has_runs());
        assert!(!Oracle::from(Hand::try_from("3335557777").unwrap()).has_runs());
    }

    #[test]
    fn counts_legal_moves() {
        // 5 singles, 1 straight, nothing else
        assert_eq!(Oracle::from(Hand::try_from("34567").unwrap()).count(), 6);
        // singles 3 and K, pairs 3 and K, triple 3, full house 333KK
        assert_eq!(Oracle::from(Hand::try_from("333KK").unwrap()).count(), 6);
    }
}
