//! Offline construction of the prefix tables embedded in src/prefix.rs.
//!
//! Enumerates the residues mod 9! reachable from canonical f-values
//! (residues repeat with period 162 once i >= 63, so one period past
//! that covers every i >= 1), derives the minimal prefix for each by
//! dynamic programming over the digit factorials 1!..8!, and prints
//! const tables in the src/prefix.rs format. The embedded table also
//! retains entries for residues outside the strictly reachable set;
//! they obey the same minimality invariant (checked by
//! `PrefixTable::validate`) and let `reverse_f` invert arbitrary
//! f-values, so regeneration yields a covering subset.
//!
//! Run once, offline; the runtime only consumes the embedded result.

use std::collections::BTreeMap;
use std::str::FromStr;

use math::{BigInt, DIGIT_FACTORIALS, NINE_FACTORIAL};
use pe254::f_value_with_digit_sum;

fn main() {
    let mut reachable: BTreeMap<u64, u64> = BTreeMap::new();
    for i in 1..=(62 + 162) {
        let v = BigInt::from_str(&f_value_with_digit_sum(i)).expect("canonical digit string");
        let (_, residue) = v.div_rem(NINE_FACTORIAL);
        reachable.entry(residue).or_insert(i);
    }

    let best = minimal_prefixes();
    let prefix_of = |residue: u64| -> String {
        let digits = best[residue as usize]
            .as_ref()
            .expect("every reachable residue has an exact digit-factorial decomposition");
        digits.iter().map(|d| (b'0' + d) as char).collect()
    };

    println!("pub static CYCLE: [(u32, u64, &str); 162] = [");
    for i in 181..=342u64 {
        let v = BigInt::from_str(&f_value_with_digit_sum(i)).expect("canonical digit string");
        let (_, residue) = v.div_rem(NINE_FACTORIAL);
        println!("    ({}, {}, \"{}\"),", i, residue, prefix_of(residue));
    }
    println!("];");
    println!();
    println!(
        "pub static PREFIX_ENTRIES: [(u64, &str); {}] = [",
        reachable.len()
    );
    for &residue in reachable.keys() {
        println!("    ({}, \"{}\"),", residue, prefix_of(residue));
    }
    println!("];");
}

/// best[v] holds the ascending digits of the smallest number whose
/// digit-factorial sum is exactly v, using digits 1..=8 only: a '9'
/// would contribute a whole 9! (the suffix's job), and a 0 never beats
/// a 1 (same factorial, but 0 cannot lead).
fn minimal_prefixes() -> Vec<Option<Vec<u8>>> {
    let limit = NINE_FACTORIAL as usize;
    let mut best: Vec<Option<Vec<u8>>> = vec![None; limit];
    best[0] = Some(Vec::new());
    for v in 1..limit {
        let mut cand: Option<Vec<u8>> = None;
        for d in 1..=8u8 {
            let w = DIGIT_FACTORIALS[d as usize] as usize;
            if w > v {
                break;
            }
            let Some(prev) = &best[v - w] else { continue };
            let mut digits = prev.clone();
            let pos = digits.iter().position(|&x| x > d).unwrap_or(digits.len());
            digits.insert(pos, d);
            let better = match &cand {
                None => true,
                Some(c) => (digits.len(), &digits) < (c.len(), c),
            };
            if better {
                cand = Some(digits);
            }
        }
        best[v] = cand;
    }
    best
}
