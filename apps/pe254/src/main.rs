use std::io::{self, BufRead};
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::Parser;

use pe254::{sum_sg, sum_sg_mod, sum_sg_mod_checked, PrefixTable};

#[derive(Parser)]
#[command(name = "pe254")]
#[command(about = "Sums of digit factorials (Project Euler 254)")]
struct Cli {
    /// Upper summation bound n for sum of sg(i) over 1..=n
    #[arg(short = 'n', long)]
    limit: Option<u64>,

    /// Modulus; omit to print the exact sum
    #[arg(short = 'm', long)]
    modulus: Option<u64>,

    /// Validate every incremental step against direct division
    #[arg(long)]
    checked: bool,

    /// Read queries from stdin: first line q, then q lines of "n m"
    #[arg(long)]
    stdin: bool,

    /// Dump the embedded prefix table as TSV
    #[arg(long)]
    tables: bool,

    /// Print timing and size diagnostics
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let table = PrefixTable::new();
    table.validate().context("embedded prefix table is corrupt")?;

    if cli.tables {
        dump_tables(&table);
        return Ok(());
    }
    if cli.stdin {
        return run_queries(&table, cli.checked);
    }
    let Some(n) = cli.limit else {
        bail!("pass --limit <N> (with optional --modulus <M>), --stdin or --tables");
    };

    let start = Instant::now();
    match cli.modulus {
        Some(m) => {
            let result = if cli.checked {
                sum_sg_mod_checked(&table, n, m)?
            } else {
                sum_sg_mod(&table, n, m)?
            };
            println!("{}", result);
        }
        None => {
            let sum = sum_sg(&table, n)?;
            if cli.verbose {
                println!("sum_sg({}) has {} digits", n, sum.digit_count());
            }
            println!("{}", sum);
        }
    }
    if cli.verbose {
        println!("computed in {:.2?}", start.elapsed());
    }
    Ok(())
}

/// HackerRank-style query loop.
fn run_queries(table: &PrefixTable, checked: bool) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    let q: u64 = lines
        .next()
        .context("missing query count")??
        .trim()
        .parse()
        .context("query count is not a number")?;
    for _ in 0..q {
        let line = lines.next().context("missing query line")??;
        let mut parts = line.split_whitespace();
        let n: u64 = parts
            .next()
            .context("missing n")?
            .parse()
            .context("n is not a number")?;
        let m: u64 = parts
            .next()
            .context("missing m")?
            .parse()
            .context("m is not a number")?;
        let result = if checked {
            sum_sg_mod_checked(table, n, m)?
        } else {
            sum_sg_mod(table, n, m)?
        };
        println!("{}", result);
    }
    Ok(())
}

fn dump_tables(table: &PrefixTable) {
    println!("prefix\tf(prefix)\tdigit_sum(prefix)\tlen(prefix)");
    for (residue, prefix) in table.entries() {
        let digit_sum: u64 = prefix.bytes().map(|b| (b - b'0') as u64).sum();
        println!("{}\t{}\t{}\t{}", prefix, residue, digit_sum, prefix.len());
    }
}
