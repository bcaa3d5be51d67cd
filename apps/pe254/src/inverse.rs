//! Closed-form inversion of the digit-factorial sum f.
//!
//! Appending a '9' digit to a number raises its f-value by exactly
//! 9! = 362880, so any f-value V splits into V = suffix_len * 9! + r:
//! a short prefix realizing the residue r plus suffix_len trailing
//! nines. The numbers involved can run to millions of digits; the
//! suffix is therefore kept symbolic as a count.

use math::{BigInt, NINE_FACTORIAL};

use crate::error::Result;
use crate::prefix::PrefixTable;

/// A number represented as a literal digit prefix followed by a run of
/// trailing '9' digits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NNumber {
    pub prefix: &'static str,
    pub suffix_len: BigInt,
}

impl NNumber {
    /// Digit sum without materializing the suffix:
    /// digit_sum(prefix) + 9 * suffix_len.
    pub fn digit_sum(&self) -> BigInt {
        let prefix_sum: u64 = self.prefix.bytes().map(|b| (b - b'0') as u64).sum();
        let mut total = &self.suffix_len * 9;
        total += prefix_sum;
        total
    }

    /// Total number of digits, prefix included.
    pub fn digit_count(&self) -> BigInt {
        let mut total = self.suffix_len.clone();
        total += self.prefix.len() as u64;
        total
    }
}

/// The smallest number whose digit sum is i, as a digit string: for
/// (n9, d) = divmod(i, 9) that is d followed by n9 nines (no leading
/// digit when d = 0).
///
/// # Example
///
/// ```
/// use pe254::inverse::f_value_with_digit_sum;
///
/// assert_eq!(f_value_with_digit_sum(5), "5");
/// assert_eq!(f_value_with_digit_sum(20), "299");
/// assert_eq!(f_value_with_digit_sum(27), "999");
/// ```
pub fn f_value_with_digit_sum(i: u64) -> String {
    let (n9, d) = (i / 9, i % 9);
    let mut s = String::with_capacity(n9 as usize + 1);
    if d != 0 {
        s.push((b'0' + d as u8) as char);
    }
    for _ in 0..n9 {
        s.push('9');
    }
    s
}

/// The smallest number n with f(n) = f_value, decomposed into a prefix
/// from the table and a run of trailing nines.
pub fn reverse_f(table: &PrefixTable, f_value: &BigInt) -> Result<NNumber> {
    let (suffix_len, residue) = f_value.div_rem(NINE_FACTORIAL);
    let prefix = table.prefix_for(residue)?;
    Ok(NNumber { prefix, suffix_len })
}
