pub mod bigint;
pub mod digits;
pub mod factorial;

pub use bigint::{BigInt, ParseBigIntError};
pub use digits::{
    digit_factorial_sum, digit_factorial_sum_digits, digit_factorial_sum_str, digit_sum,
    digit_sum_str, digits,
};
pub use factorial::{factorial, DIGIT_FACTORIALS, NINE_FACTORIAL};
