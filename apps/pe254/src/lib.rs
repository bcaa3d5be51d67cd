//! Project Euler 254: Sums of Digit Factorials.
//!
//! f(n) is the sum of the factorials of the digits of n, sf(n) the digit
//! sum of f(n), g(i) the smallest n with sf(n) = i and sg(i) the digit
//! sum of g(i). The crate computes sums of sg(i) over 1..=n, optionally
//! modulo m, by inverting f symbolically instead of searching: g(i) is a
//! short prefix followed by a run of trailing '9' digits, and only the
//! prefix and the run length are ever materialized.

pub mod error;
pub mod inverse;
pub mod prefix;
pub mod sg;
pub mod sum;

pub use error::{Error, Result};
pub use inverse::{f_value_with_digit_sum, reverse_f, NNumber};
pub use prefix::PrefixTable;
pub use sg::{g, sf, sg, SgCache, SG_TABLE};
pub use sum::{sum_sg, sum_sg_mod, sum_sg_mod_checked};
