// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit-level arithmetic on [`DigitSequence`].
//!
//! `reverse_and_add` is the hot path of every analysis: a run of a few
//! hundred steps on a 25-digit start ends up adding numbers of well over a
//! hundred digits. It makes a single linear pass over the digits and
//! allocates exactly one output buffer.

use super::DigitSequence;

impl DigitSequence {
    /// The digits in reverse order, as a number (leading zeros dropped).
    ///
    /// `reversed(1200) == 21`.
    pub fn reversed(&self) -> DigitSequence {
        let mut digits = self.digits().to_vec();
        digits.reverse();
        DigitSequence::normalized(digits)
    }

    /// Add the number to its own digit reversal.
    ///
    /// The result has either the same number of digits or exactly one more.
    ///
    /// ```
    /// use lychrel_check::digits::DigitSequence;
    ///
    /// let n = DigitSequence::parse("59").unwrap();
    /// assert_eq!(n.reverse_and_add().to_string(), "154");
    /// ```
    pub fn reverse_and_add(&self) -> DigitSequence {
        let digits = self.digits();
        let last = digits.len() - 1;
        let mut sum = Vec::with_capacity(digits.len() + 1);
        let mut carry = 0u8;

        // Position i counts from the least significant end; the reversal
        // places digits[i] there.
        for i in 0..=last {
            let value = digits[last - i] + digits[i] + carry;
            sum.push(value % 10);
            carry = value / 10;
        }
        if carry != 0 {
            sum.push(carry);
        }

        sum.reverse();
        DigitSequence::from_canonical(sum)
    }

    /// True if the digits read the same in both directions.
    ///
    /// Zero is not a palindrome: it is not a natural number, so it never
    /// takes part in delayed palindrome analysis.
    pub fn is_palindrome(&self) -> bool {
        if self.is_zero() {
            return false;
        }
        let digits = self.digits();
        digits
            .iter()
            .zip(digits.iter().rev())
            .take(digits.len() / 2)
            .all(|(a, b)| a == b)
    }
}

/// Add `n` to its reverse. See [`DigitSequence::reverse_and_add`].
pub fn reverse_and_add(n: &DigitSequence) -> DigitSequence {
    n.reverse_and_add()
}

/// Palindrome test. See [`DigitSequence::is_palindrome`].
pub fn is_palindrome(n: &DigitSequence) -> bool {
    n.is_palindrome()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> DigitSequence {
        DigitSequence::parse(s).unwrap()
    }

    #[test]
    fn test_reverse_and_add_chain_of_59() {
        let step1 = seq("59").reverse_and_add();
        assert_eq!(step1.to_string(), "154");
        let step2 = step1.reverse_and_add();
        assert_eq!(step2.to_string(), "605");
        let step3 = step2.reverse_and_add();
        assert_eq!(step3.to_string(), "1111");
        assert!(step3.is_palindrome());
    }

    #[test]
    fn test_reverse_and_add_small_values() {
        assert_eq!(reverse_and_add(&seq("1")).to_string(), "2");
        assert_eq!(reverse_and_add(&seq("5")).to_string(), "10");
        assert_eq!(reverse_and_add(&seq("10")).to_string(), "11");
        assert_eq!(reverse_and_add(&seq("196")).to_string(), "887");
        assert_eq!(reverse_and_add(&seq("0")).to_string(), "0");
    }

    #[test]
    fn test_reverse_and_add_matches_u64_arithmetic() {
        for n in 1u64..5000 {
            let reversed: u64 = n.to_string().chars().rev().collect::<String>().parse().unwrap();
            let expected = DigitSequence::from_u64(n + reversed);
            assert_eq!(DigitSequence::from_u64(n).reverse_and_add(), expected, "n = {}", n);
        }
    }

    #[test]
    fn test_reverse_and_add_length_grows_by_at_most_one() {
        for n in 1u64..3000 {
            let seq = DigitSequence::from_u64(n);
            let next = seq.reverse_and_add();
            assert!(next.len() == seq.len() || next.len() == seq.len() + 1, "n = {}", n);
        }
    }

    #[test]
    fn test_reverse_and_add_long_sequence() {
        let nines = DigitSequence::from_digits(&vec![9u8; 5000]).unwrap();
        let sum = nines.reverse_and_add();
        assert_eq!(sum.len(), 5001);
        assert_eq!(sum.digits()[0], 1);
        assert_eq!(sum.digits()[5000], 8);
        assert!(sum.digits()[1..5000].iter().all(|&d| d == 9));
    }

    #[test]
    fn test_reversed() {
        assert_eq!(seq("1200").reversed().to_string(), "21");
        assert_eq!(seq("196").reversed().to_string(), "691");
        assert_eq!(seq("7").reversed().to_string(), "7");
    }

    #[test]
    fn test_is_palindrome() {
        assert!(seq("1").is_palindrome());
        assert!(seq("11").is_palindrome());
        assert!(seq("121").is_palindrome());
        assert!(seq("1111").is_palindrome());
        assert!(!seq("196").is_palindrome());
        assert!(!seq("10").is_palindrome());
        assert!(!is_palindrome(&DigitSequence::zero()));
    }

    #[test]
    fn test_is_palindrome_invariant_under_reversal() {
        // Numbers without trailing zeros reverse to the same digit count.
        for n in (1u64..20000).filter(|n| n % 10 != 0) {
            let seq = DigitSequence::from_u64(n);
            assert_eq!(seq.is_palindrome(), seq.reversed().is_palindrome(), "n = {}", n);
        }
    }
}
