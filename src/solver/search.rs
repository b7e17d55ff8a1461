use super::extras::Extras;
use super::outcome::Outcome;
use super::shortcut::Shortcut;
use crate::cards::hand::Hand;
use crate::melds::meld::Meld;
use crate::melds::oracle::Oracle;
use std::collections::HashMap;

/// Fewest plays to empty a hand, memoized by composition.
///
/// The lowest rank held has to leave the hand in some meld, so only
/// melds that touch it are worth branching on. Every other ordering of
/// an optimal line reaches the same sub-hands, which the memo collapses.
///
/// The memo belongs to this instance. Parallel drivers give every
/// worker its own Solver and accept the duplicated work.
#[derive(Debug, Default)]
pub struct Solver {
    memo: HashMap<Hand, Outcome>,
    shortcut: Shortcut,
    nodes: usize,
}

impl From<Shortcut> for Solver {
    fn from(shortcut: Shortcut) -> Self {
        Self {
            shortcut,
            ..Self::default()
        }
    }
}

impl Solver {
    pub fn solve(&mut self, hand: Hand) -> Outcome {
        assert!(hand.is_valid(), "invalid hand {:?}", hand);
        self.search(hand)
    }

    /// compositions memoized so far
    pub fn cached(&self) -> usize {
        self.memo.len()
    }
    /// compositions expanded so far, counting each once
    pub fn nodes(&self) -> usize {
        self.nodes
    }
    pub fn clear(&mut self) {
        self.memo.clear();
        self.nodes = 0;
    }

    fn search(&mut self, hand: Hand) -> Outcome {
        if hand.is_empty() {
            return Outcome::empty();
        }
        if let Some(&outcome) = self.memo.get(&hand) {
            return outcome;
        }
        let outcome = self.expand(hand);
        self.nodes += 1;
        self.memo.insert(hand, outcome);
        outcome
    }

    fn expand(&mut self, hand: Hand) -> Outcome {
        let oracle = Oracle::from(hand);
        if self.shortcut == Shortcut::Extras && !oracle.has_runs() {
            return Extras::from(hand).outcome();
        }
        let lowest = hand.lowest().expect("non-empty hand");
        let candidates = oracle
            .melds()
            .into_iter()
            .filter(|m| m.hand().count(lowest) > 0)
            .collect::<Vec<Meld>>();
        if let Some(&meld) = candidates.iter().find(|m| m.hand() == hand) {
            return Outcome::from(meld);
        }
        let mut best = None::<Outcome>;
        for meld in candidates {
            let outcome = Outcome::after(meld, self.search(hand.remove(meld.hand())));
            if best.is_none_or(|b| outcome.plays() < b.plays()) {
                best = Some(outcome);
            }
            if outcome.plays() == 2 {
                break;
            }
        }
        best.expect("lowest rank is always playable as a single")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use crate::Plays;
    use crate::cards::hands::HandIterator;
    use crate::cards::rank::Rank;

    fn plays(s: &str) -> Plays {
        Solver::default().solve(Hand::try_from(s).unwrap()).plays()
    }

    /// unrestricted search over every legal meld, no cutoffs
    fn brute(hand: Hand, memo: &mut HashMap<Hand, Plays>) -> Plays {
        if hand.is_empty() {
            return 0;
        }
        if let Some(&n) = memo.get(&hand) {
            return n;
        }
        let n = Oracle::from(hand)
            .melds()
            .into_iter()
            .map(|m| 1 + brute(hand.remove(m.hand()), memo))
            .min()
            .expect("non-empty hand has a meld");
        memo.insert(hand, n);
        n
    }

    #[test]
    fn empty_hand() {
        let outcome = Solver::default().solve(Hand::empty());
        assert_eq!(outcome.plays(), 0);
        assert_eq!(outcome.witness(), None);
    }

    #[test]
    fn ground_truths() {
        for &r in Rank::all() {
            assert_eq!(Solver::default().solve(Hand::of(r, 1)).plays(), 1);
        }
        assert_eq!(plays("34567"), 1);
        assert_eq!(plays("3456789TJQKA"), 1);
        assert_eq!(plays("3456789TJQKA2"), 1);
        assert_eq!(plays("33"), 1);
        assert_eq!(plays("AAA3"), 1);
        assert_eq!(plays("3334"), 2);
        assert_eq!(plays("3335557777"), 2);
        assert_eq!(plays("3579J"), 5);
        assert_eq!(
            Solver::default()
                .solve(Hand::try_from("3456789TJQKA2").unwrap())
                .witness(),
            Some(Meld::wraparound(13))
        );
    }

    #[test]
    fn matches_brute_force() {
        let ref mut memo = HashMap::new();
        let mut solver = Solver::default();
        for hand in HandIterator::from(5) {
            assert_eq!(solver.solve(hand).plays(), brute(hand, memo), "{}", hand);
        }
    }

    #[test]
    fn bounded_by_size() {
        let mut solver = Solver::default();
        for hand in HandIterator::from(6).filter(|h| !h.is_empty()) {
            let plays = solver.solve(hand).plays() as usize;
            assert!(1 <= plays && plays <= hand.size());
        }
    }

    #[test]
    fn idempotent() {
        let hands = (0..8).map(|_| Hand::random()).collect::<Vec<Hand>>();
        let mut warm = Solver::default();
        let first = hands.iter().map(|&h| warm.solve(h)).collect::<Vec<_>>();
        let again = hands.iter().map(|&h| warm.solve(h)).collect::<Vec<_>>();
        let cold = hands
            .iter()
            .map(|&h| Solver::default().solve(h))
            .collect::<Vec<_>>();
        assert_eq!(first, again);
        assert_eq!(first, cold);
    }

    #[test]
    fn witness_leads_to_one_fewer_play() {
        let mut solver = Solver::default();
        for _ in 0..16 {
            let hand = Hand::random();
            let outcome = solver.solve(hand);
            let meld = outcome.witness().expect("non-empty hand");
            assert!(Oracle::from(hand).can_play(&meld));
            let rest = solver.solve(hand.remove(meld.hand()));
            assert_eq!(rest.plays() + 1, outcome.plays(), "{} after {}", hand, meld);
        }
    }

    #[test]
    fn witness_covers_lowest_rank() {
        let mut solver = Solver::default();
        for _ in 0..16 {
            let hand = Hand::random();
            let lowest = hand.lowest().expect("non-empty hand");
            let meld = solver.solve(hand).witness().expect("non-empty hand");
            assert!(meld.hand().count(lowest) > 0, "{} after {}", hand, meld);
        }
    }

    #[test]
    fn extras_never_undercuts() {
        let mut exact = Solver::default();
        let mut quick = Solver::from(Shortcut::Extras);
        for hand in HandIterator::from(5) {
            assert!(quick.solve(hand).plays() >= exact.solve(hand).plays());
        }
        let hand = Hand::try_from("3335557777").unwrap();
        assert_eq!(quick.solve(hand).plays(), 3);
        assert_eq!(exact.solve(hand).plays(), 2);
    }

    #[test]
    fn clearing_resets() {
        let mut solver = Solver::default();
        solver.solve(Hand::try_from("3344556").unwrap());
        assert!(solver.cached() > 0);
        assert!(solver.nodes() > 0);
        solver.clear();
        assert_eq!(solver.cached(), 0);
        assert_eq!(solver.nodes(), 0);
    }
}
