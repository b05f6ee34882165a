use super::hand::Hand;

/// Combinatorial iterator over all n-card hands from a deck.
///
/// Generates all C(k, n) combinations of n cards from the k available cards
/// (those not blocked by the mask). Uses bit-twiddling to generate successive
/// permutations without storing them in memory.
///
/// # Construction
///
/// Created from `(n, mask)` where `n` is the hand size and `mask` is a [`Hand`]
/// of cards to exclude (already dealt cards). Choosing zero cards yields the
/// empty hand exactly once.
///
/// # Performance
///
/// - Memory: O(1): only stores current state, not all combinations
/// - Time per `.next()`: O(1) amortized via Gosper's hack
/// - Deterministic ordering for reproducible iteration
pub struct HandIterator {
    next: u64,
    mask: u64,
    fresh: bool,
}

impl HandIterator {
    /// Total number of combinations under this mask.
    ///
    /// Computes C(available, hand_size) using the multiplicative formula.
    pub fn combinations(&self) -> usize {
        let n = 52 - Hand::from(self.mask).size();
        let k = Hand::from(self.next).size();
        (0..k).fold(1, |x, i| x * n.saturating_sub(i) / (i + 1))
    }
    /// Tests whether iteration is complete.
    fn exhausted(&self) -> bool {
        if self.next == 0 {
            !self.fresh
        } else {
            (64 - 52) > self.next.leading_zeros()
        }
    }
    /// Gosper's hack for next bit permutation with same popcount.
    ///
    /// See: https://graphics.stanford.edu/~seander/bithacks.html#NextBitPermutation
    fn permute(&self) -> u64 {
        let  x = /* 000_100                       */ self.next;
        let  a = /* 000_111 <- 000_100 || 000_110 */ x | (x - 1);
        let  b = /* 001_000 <-                    */ a + 1;
        let  c = /* 111_000 <-                    */ !   a;
        let  d = /* 001_000 <- 111_000 && 001_000 */ c & b;
        let  e = /* 000_111 <-                    */ d - 1;
        let  f = /*         << xxx                */ 1 + x.trailing_zeros();
        let  g = /* 000_000 <-                    */ e >> f;
        let  h = /* 001_000 <- 001_000 || 000_000 */ b | g;
        h
    }
    fn look(&self) -> Hand {
        Hand::from(self.next)
    }
    fn advance(&mut self) {
        if self.next == 0 {
            self.fresh = false;
            return;
        }
        loop {
            self.next = self.permute();
            if self.next & self.mask == 0 || self.exhausted() {
                break;
            }
        }
    }
}

impl Iterator for HandIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted() {
            None
        } else {
            let last = self.look();
            self.advance();
            Some(last)
        }
    }
}

/// size and mask are immutable and must be decided at construction
impl From<(usize, Hand)> for HandIterator {
    fn from((n, mask): (usize, Hand)) -> Self {
        debug_assert!(n <= 52);
        let mut this = Self {
            next: (1 << n) - 1,
            mask: u64::from(mask),
            fresh: true,
        };
        while this.next & this.mask > 0 && !this.exhausted() {
            this.next = this.permute();
        }
        this
    }
}

/// Iterator over the n-card subsets of a small hand.
///
/// Walks every submask of the hand in increasing order and keeps those
/// holding exactly n cards. A k-card hand costs 2^k steps no matter where
/// its cards sit in the deck, so picking from a hole or a board never
/// sweeps the other 40-odd cards the way [`HandIterator`] would.
pub struct SubsetIterator {
    next: u64,
    mask: u64,
    size: u32,
    done: bool,
}

impl Iterator for SubsetIterator {
    type Item = Hand;
    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let subset = self.next;
            self.next = self.next.wrapping_sub(self.mask) & self.mask;
            self.done = self.next == 0;
            if subset.count_ones() == self.size {
                return Some(Hand::from(subset));
            }
        }
        None
    }
}

/// n cards chosen from the cards of the hand
impl From<(usize, Hand)> for SubsetIterator {
    fn from((n, hand): (usize, Hand)) -> Self {
        Self {
            next: 0,
            mask: u64::from(hand),
            size: n as u32,
            done: false,
        }
    }
}
