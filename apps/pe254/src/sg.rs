//! g(i) and sg(i): the smallest n whose digit-factorial sum has digit
//! sum i, and its own digit sum.

use std::collections::HashMap;

use math::{digit_factorial_sum, digit_sum, BigInt};

use crate::error::{Error, Result};
use crate::inverse::{f_value_with_digit_sum, reverse_f, NNumber};
use crate::prefix::PrefixTable;

/// sg(i) for i in 1..=200, 1-indexed. The closed-form construction is
/// not minimal for small i, so the sequence is bootstrapped from this
/// precomputed table.
pub static SG_TABLE: [u64; 200] = [
    1, 2, 5, 6, 7, 3, 4, 5, 6, 7, 8, 8, 9, 13, 9, 10, 11, 13, 14, 15, 16, 17, 18, 13, 14, 15, 9,
    10, 11, 12, 13, 14, 12, 13, 14, 15, 19, 28, 24, 25, 37, 31, 32, 45, 46, 50, 66, 67, 71, 84,
    89, 90, 114, 118, 134, 154, 158, 193, 231, 235, 247, 317, 321, 545, 843, 1052, 1339, 1574,
    1846, 2035, 2294, 2566, 5035, 7578, 9997, 12529, 15009, 17415, 19912, 22416, 24933, 49686,
    74498, 99334, 124135, 148899, 173672, 198536, 223324, 248145, 496173, 744212, 992162,
    1240190, 1488229, 1736179, 1984255, 2232318, 2480268, 4960419, 7440581, 9920765, 12400916,
    14881015, 17361186, 19841385, 22321571, 24801707, 49603317, 74404903, 99206450, 124008025,
    148809646, 173611193, 198412768, 223214413, 248015925, 496031816, 744047718, 992063594,
    1240079422, 1488095324, 1736111200, 1984127056, 2232142919, 2480158795, 4960317556,
    7440476328, 9920635039, 12400793737, 14880952509, 17361111207, 19841269933, 22321428666,
    24801587412, 49603174707, 74404761998, 99206349313, 124007936656, 148809523899,
    173611111214, 198412698494, 223214285824, 248015873187, 496031746194, 744047619212,
    992063492204, 1240079365211, 1488095238229, 1736111111221, 1984126984276, 2232142857318,
    2480158730310, 4960317460440, 7440476190581, 9920634920744, 12400793650874, 14880952381015,
    17361111111165, 19841269841406, 22321428571571, 24801587301686, 49603174603275,
    74404761904903, 99206349206429, 124007936508046, 148809523809646, 173611111111172,
    198412698412789, 223214285714413, 248015873015967, 496031746031837, 744047619047718,
    992063492063573, 1240079365079443, 1488095238095324, 1736111111111179, 1984126984127014,
    2232142857142919, 2480158730158837, 4960317460317577, 7440476190476328, 9920634920635018,
    12400793650793758, 14880952380952509, 17361111111111186, 19841269841269891,
    22321428571428666, 24801587301587391, 49603174603174665, 74404761904761998,
    99206349206349292, 124007936507936614, 148809523809523899, 173611111111111193,
    198412698412698515, 223214285714285824, 248015873015873166, 496031746031746152,
    744047619047619212,
];

/// Digit sum of the digit-factorial sum of n.
///
/// sf(342) = digit_sum(3! + 4! + 2!) = digit_sum(32) = 5.
pub fn sf(n: u64) -> u64 {
    digit_sum(digit_factorial_sum(n))
}

/// The smallest positive integer n with sf(n) = i, as a symbolic
/// prefix-plus-nines number.
///
/// Constructed by inverting the minimal f-value with digit sum i. The
/// construction yields the true minimum for i >= 63; below that the
/// literal [`SG_TABLE`] is authoritative and [`sg`] never calls here.
pub fn g(table: &PrefixTable, i: u64) -> Result<NNumber> {
    if i == 0 {
        return Err(Error::ZeroIndex);
    }
    let f_value: BigInt = f_value_with_digit_sum(i).parse()?;
    reverse_f(table, &f_value)
}

/// Digit sum of g(i).
///
/// sg(5) = 2 + 5 = 7 as g(5) = 25. Served from the literal table for
/// i <= 200, reconstructed through [`g`] beyond.
pub fn sg(table: &PrefixTable, i: u64) -> Result<BigInt> {
    if i == 0 {
        return Err(Error::ZeroIndex);
    }
    if i <= SG_TABLE.len() as u64 {
        return Ok(BigInt::from_u64(SG_TABLE[(i - 1) as usize]));
    }
    Ok(g(table, i)?.digit_sum())
}

/// Caller-owned memo for sg values, seeded with the literal table.
///
/// Memoization is an optimization only; [`sg`] is pure and can always be
/// called directly.
pub struct SgCache {
    values: HashMap<u64, BigInt>,
}

impl SgCache {
    pub fn new() -> Self {
        let values = SG_TABLE
            .iter()
            .enumerate()
            .map(|(idx, &v)| (idx as u64 + 1, BigInt::from_u64(v)))
            .collect();
        SgCache { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get_or_compute(&mut self, table: &PrefixTable, i: u64) -> Result<BigInt> {
        if let Some(v) = self.values.get(&i) {
            return Ok(v.clone());
        }
        let v = sg(table, i)?;
        self.values.insert(i, v.clone());
        Ok(v)
    }
}

impl Default for SgCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sf() {
        assert_eq!(sf(342), 5);
        assert_eq!(sf(25), 5); // f(25) = 2! + 5! = 122
        assert_eq!(sf(144), 13); // f(144) = 1! + 4! + 4! = 49
    }

    #[test]
    fn test_table_bootstrap() {
        assert_eq!(SG_TABLE[0], 1);
        assert_eq!(SG_TABLE[4], 7); // sg(5) = 7
        assert_eq!(SG_TABLE.len(), 200);
        assert_eq!(SG_TABLE[199], 744047619047619212);
    }

    #[test]
    fn test_sg_small() {
        let table = PrefixTable::new();
        assert_eq!(sg(&table, 1).unwrap(), BigInt::from_u64(1));
        assert_eq!(sg(&table, 5).unwrap(), BigInt::from_u64(7));
        assert_eq!(sg(&table, 0), Err(Error::ZeroIndex));
    }

    #[test]
    fn test_sg_beyond_table() {
        let table = PrefixTable::new();
        assert_eq!(
            sg(&table, 201).unwrap(),
            "992063492063492183".parse().unwrap()
        );
        assert_eq!(
            sg(&table, 342).unwrap(),
            "2480158730158730158730158730158837".parse().unwrap()
        );
        assert_eq!(
            sg(&table, 500).unwrap(),
            "1488095238095238095238095238095238095238095238095324"
                .parse()
                .unwrap()
        );
    }

    #[test]
    fn test_g_against_known_values() {
        let table = PrefixTable::new();
        let n = g(&table, 171).unwrap();
        assert_eq!(n.prefix, "123345555588888888");
        assert_eq!(n.suffix_len, "27557319223985".parse().unwrap());
        assert_eq!(n.digit_sum(), "248015873015967".parse().unwrap());
    }

    // The closed-form construction reproduces the literal table exactly
    // on [63, 200]; below 63 the table is the ground truth.
    #[test]
    fn test_reconstruction_matches_table_from_63() {
        let table = PrefixTable::new();
        for i in 63..=200u64 {
            let n = g(&table, i).unwrap();
            assert_eq!(
                n.digit_sum(),
                BigInt::from_u64(SG_TABLE[(i - 1) as usize]),
                "mismatch at i={}",
                i
            );
        }
    }

    #[test]
    fn test_reconstruction_not_minimal_below_63() {
        let table = PrefixTable::new();
        // g(3) would invert f-value 3 into 12, but sf(5) = 3 and 5 < 12:
        // the minimal-f-value inversion overshoots for tiny digit sums.
        let n = g(&table, 3).unwrap();
        assert_eq!(n.prefix, "12");
        assert!(n.suffix_len.is_zero());
        assert_ne!(n.digit_sum(), BigInt::from_u64(SG_TABLE[2]));
    }

    // Direct search over small n: the first n reaching each digit sum
    // must agree with the literal table.
    #[test]
    fn test_table_against_brute_force() {
        let mut first_seen: HashMap<u64, u64> = HashMap::new();
        for n in 1..2_000_000u64 {
            first_seen.entry(sf(n)).or_insert(n);
        }
        assert_eq!(first_seen[&5], 25); // g(5) = 25
        assert_eq!(first_seen[&1], 1);
        assert_eq!(first_seen[&13], 144);
        for (&i, &n) in &first_seen {
            if (1..=200).contains(&i) {
                assert_eq!(
                    digit_sum(n),
                    SG_TABLE[(i - 1) as usize],
                    "sg({}) disagrees with smallest n={}",
                    i,
                    n
                );
            }
        }
    }

    #[test]
    fn test_sg_cache() {
        let table = PrefixTable::new();
        let mut cache = SgCache::new();
        assert_eq!(cache.len(), 200);
        assert_eq!(cache.get_or_compute(&table, 5).unwrap(), BigInt::from_u64(7));
        let v = cache.get_or_compute(&table, 300).unwrap();
        assert_eq!(cache.get_or_compute(&table, 300).unwrap(), v);
        assert_eq!(cache.len(), 201);
    }
}
