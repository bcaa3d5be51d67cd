/// Factorials of the decimal digits, indexed by digit: 0!, 1!, ..., 9!.
pub const DIGIT_FACTORIALS: [u64; 10] = [1, 1, 2, 6, 24, 120, 720, 5040, 40320, 362880];

/// 9!, the amount each trailing '9' digit contributes to a digit-factorial sum.
pub const NINE_FACTORIAL: u64 = DIGIT_FACTORIALS[9];

/// Compute factorial of n (n!)
pub fn factorial(n: u64) -> u64 {
    match n {
        0 | 1 => 1,
        _ => n * factorial(n - 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), 1);
        assert_eq!(factorial(1), 1);
        assert_eq!(factorial(5), 120);
        assert_eq!(factorial(10), 3628800);
    }

    #[test]
    fn test_digit_factorials_match_factorial() {
        for (d, &value) in DIGIT_FACTORIALS.iter().enumerate() {
            assert_eq!(value, factorial(d as u64));
        }
        assert_eq!(NINE_FACTORIAL, 362880);
    }
}
