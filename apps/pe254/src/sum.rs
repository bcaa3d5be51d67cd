//! Summation of sg(i) over 1..=n, exact or modular.
//!
//! The modular summer never reconstructs f-values from scratch. Between
//! consecutive i the canonical f-value grows by a fixed power of ten
//! (which gains a factor 10 whenever i crosses a multiple of 9), so the
//! suffix length advances by a per-block constant plus a carry whenever
//! the residue mod 9! wraps. Tracking the suffix length and step modulo
//! m makes each iteration O(1) in the fast path.

use math::{BigInt, NINE_FACTORIAL};

use crate::error::{Error, Result};
use crate::inverse::f_value_with_digit_sum;
use crate::prefix::PrefixTable;
use crate::sg::{g, SG_TABLE};

/// Incremental state threaded through consecutive indices.
///
/// The full-precision fields mirror the modular ones and are only
/// advanced by the validating path, which checks them against direct
/// division each step.
struct SumState {
    /// Suffix length at the last processed index.
    suffix_len: BigInt,
    /// Whole-9! part of the current f-value step.
    suffix_step: BigInt,
    /// Current f-value step (a power of ten).
    value_step: BigInt,
    /// f-value step mod 9!.
    step_rem: u64,
    /// f-value residue mod 9! at the last processed index.
    residue: u64,
    /// suffix_len % m.
    suffix_len_mod: u64,
    /// suffix_step % m.
    suffix_step_mod: u64,
}

impl SumState {
    /// State positioned at the last table index (i = 200).
    fn at_table_end(m: u64) -> Result<SumState> {
        let i0 = SG_TABLE.len() as u64;
        // i0 is not a multiple of 9, so the f-value step from i0 to
        // i0 + 1 is exactly 10^(i0 / 9)
        debug_assert!(i0 % 9 != 0);
        let value_step = BigInt::pow10((i0 / 9) as usize);
        let f_value: BigInt = f_value_with_digit_sum(i0).parse()?;
        let (suffix_len, residue) = f_value.div_rem(NINE_FACTORIAL);
        let (suffix_step, step_rem) = value_step.div_rem(NINE_FACTORIAL);
        Ok(SumState {
            suffix_len_mod: suffix_len.rem(m),
            suffix_step_mod: suffix_step.rem(m),
            suffix_len,
            suffix_step,
            value_step,
            step_rem,
            residue,
        })
    }

    /// Advance from index i - 1 to i.
    fn advance(&mut self, i: u64, m: u64, validating: bool) {
        if i % 9 == 1 {
            // f-value gained a digit: the step becomes ten times larger
            let inc = 10 * self.step_rem / NINE_FACTORIAL;
            self.step_rem = 10 * self.step_rem % NINE_FACTORIAL;
            self.suffix_step_mod = mod_add(mod_mul10(self.suffix_step_mod, m), inc % m, m);
            if validating {
                self.suffix_step = &self.suffix_step * 10;
                self.suffix_step += inc;
                self.value_step = &self.value_step * 10;
            }
        }
        let carry = (self.residue + self.step_rem >= NINE_FACTORIAL) as u64;
        self.residue = (self.residue + self.step_rem) % NINE_FACTORIAL;
        self.suffix_len_mod = mod_add(
            self.suffix_len_mod,
            mod_add(self.suffix_step_mod, carry % m, m),
            m,
        );
        if validating {
            self.suffix_len += &self.suffix_step;
            self.suffix_len += carry;
        }
    }
}

fn mod_add(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

fn mod_mul10(a: u64, m: u64) -> u64 {
    (a as u128 * 10 % m as u128) as u64
}

/// Sum of sg(i) for i in 1..=n, full precision. Quadratic in n past the
/// table; meant for moderate n and for verifying the modular summer.
pub fn sum_sg(table: &PrefixTable, n: u64) -> Result<BigInt> {
    let mut sum = BigInt::zero();
    for &v in &SG_TABLE[..SG_TABLE.len().min(n as usize)] {
        sum += v;
    }
    for i in SG_TABLE.len() as u64 + 1..=n {
        let value = g(table, i)?.digit_sum();
        sum += &value;
    }
    Ok(sum)
}

/// Sum of sg(i) for i in 1..=n, modulo m. Incremental fast path.
pub fn sum_sg_mod(table: &PrefixTable, n: u64, m: u64) -> Result<u64> {
    run_sum(table, n, m, false)
}

/// Like [`sum_sg_mod`], but every step also recomputes the suffix
/// length and residue by direct division of the fully materialized
/// f-value and fails with [`Error::SuffixStepMismatch`] on any
/// disagreement with the incremental update.
pub fn sum_sg_mod_checked(table: &PrefixTable, n: u64, m: u64) -> Result<u64> {
    run_sum(table, n, m, true)
}

fn run_sum(table: &PrefixTable, n: u64, m: u64, validating: bool) -> Result<u64> {
    if m == 0 {
        return Err(Error::ZeroModulus);
    }
    let mut sum: u64 = 0;
    for &v in &SG_TABLE[..SG_TABLE.len().min(n as usize)] {
        sum = mod_add(sum, v % m, m);
    }
    if n <= SG_TABLE.len() as u64 {
        return Ok(sum);
    }

    let mut state = SumState::at_table_end(m)?;
    let mut f_value: Option<BigInt> = if validating {
        Some(f_value_with_digit_sum(SG_TABLE.len() as u64).parse()?)
    } else {
        None
    };

    for i in SG_TABLE.len() as u64 + 1..=n {
        state.advance(i, m, validating);

        let row = table.cycle_row(i);
        if row.residue != state.residue {
            return Err(Error::PrefixNotFound {
                residue: state.residue,
            });
        }

        if let Some(v) = f_value.as_mut() {
            *v += &state.value_step;
            let (suffix_len, residue) = v.div_rem(NINE_FACTORIAL);
            if suffix_len != state.suffix_len
                || residue != state.residue
                || suffix_len.rem(m) != state.suffix_len_mod
            {
                return Err(Error::SuffixStepMismatch {
                    i,
                    predicted: state.suffix_len.clone(),
                    actual: suffix_len,
                });
            }
            if table.prefix_for(residue)? != row.prefix {
                return Err(Error::PrefixNotFound { residue });
            }
        }

        let sg_mod = mod_add(
            (9 * state.suffix_len_mod as u128 % m as u128) as u64,
            row.prefix_digit_sum % m,
            m,
        );
        sum = mod_add(sum, sg_mod, m);
    }
    Ok(sum)
}
