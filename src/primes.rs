//! Prime generation and constant-time prime queries.
//!
//! The whole codec leans on one process-lifetime table of primes: position
//! exponent bases during composition, fresh variable codes during encoding,
//! and membership tests during decoding. [`Primes`] sieves the table once and
//! then answers every query without further arithmetic.

use bit_set::BitSet;

/// The first primes below a fixed bound, with O(1) indexed lookup and
/// O(1) membership tests.
///
/// Immutable after construction; safe to share read-only across threads.
#[derive(Debug, Clone)]
pub struct Primes {
    list: Vec<u64>,
    members: BitSet,
    bound: usize,
}

impl Primes {
    /// Sieve all primes strictly below `bound`, in ascending order.
    ///
    /// Uses an odd-only sieve: only odd candidates are represented, composites
    /// are marked starting at each prime's square stepping by twice the prime,
    /// and `2` is prepended explicitly.
    pub fn below(bound: usize) -> Self {
        let list = sieve(bound);
        let mut members = BitSet::with_capacity(bound);
        for &p in &list {
            members.insert(p as usize);
        }
        Self {
            list,
            members,
            bound,
        }
    }

    /// The `i`-th prime (0-based), if `i` is within the sieved range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<u64> {
        self.list.get(i).copied()
    }

    /// Whether `value` is one of the sieved primes.
    ///
    /// Values at or beyond the sieve bound are reported absent: the table is
    /// the universe, exactly like membership in the precomputed list.
    #[inline]
    pub fn contains(&self, value: u64) -> bool {
        value < self.bound as u64 && self.members.contains(value as usize)
    }

    /// Number of sieved primes.
    #[inline]
    pub fn len(&self) -> usize {
        self.list.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// How many sieved primes are `<= value`.
    ///
    /// Variable-code assignment starts at this offset past the constant-sign
    /// codes, so variable primes never collide with a constant code.
    pub fn count_at_most(&self, value: u64) -> usize {
        self.list.iter().take_while(|&&p| p <= value).count()
    }

    /// Iterate over the sieved primes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        self.list.iter().copied()
    }
}

/// Odd-only sieve of Eratosthenes returning all primes strictly below `bound`.
fn sieve(bound: usize) -> Vec<u64> {
    if bound <= 2 {
        return Vec::new();
    }
    if bound == 3 {
        return vec![2];
    }

    // Index i represents the odd candidate 2*i + 3; stepping the index by p
    // steps the candidate by 2*p.
    let len = (bound - 2) / 2;
    let mut composite = BitSet::with_capacity(len);
    let mut primes = vec![2u64];

    for i in 0..len {
        if composite.contains(i) {
            continue;
        }
        let p = 2 * i + 3;
        primes.push(p as u64);
        let mut j = (p * p - 3) / 2;
        while j < len {
            composite.insert(j);
            j += p;
        }
    }
    primes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes_below_thirty() {
        let primes = Primes::below(30);
        let expected = [2u64, 3, 5, 7, 11, 13, 17, 19, 23, 29];
        assert_eq!(primes.iter().collect::<Vec<_>>(), expected);
        assert_eq!(primes.len(), 10);
    }

    #[test]
    fn tiny_bounds() {
        assert!(Primes::below(0).is_empty());
        assert!(Primes::below(2).is_empty());
        assert_eq!(Primes::below(3).iter().collect::<Vec<_>>(), [2]);
    }

    #[test]
    fn membership_and_lookup() {
        let primes = Primes::below(100);
        assert!(primes.contains(2));
        assert!(primes.contains(97));
        assert!(!primes.contains(1));
        assert!(!primes.contains(91)); // 7 * 13
        assert!(!primes.contains(101)); // beyond the bound
        assert_eq!(primes.get(0), Some(2));
        assert_eq!(primes.get(24), Some(97));
        assert_eq!(primes.get(25), None);
    }

    #[test]
    fn offset_above_constant_codes() {
        let primes = Primes::below(100);
        // Primes <= 12 are 2, 3, 5, 7, 11; the next assignable prime is 13.
        assert_eq!(primes.count_at_most(12), 5);
        assert_eq!(primes.get(5), Some(13));
        // A prime bound value is counted inclusively.
        assert_eq!(primes.count_at_most(11), 5);
        assert_eq!(primes.count_at_most(10), 4);
    }
}
