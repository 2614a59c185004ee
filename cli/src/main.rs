// Unless explicitly stated otherwise all files in this repository are licensed under the Apache License Version 2.0.

//! Reads newline-separated keys, hashes each through a pseudo-random hash
//! family, and audits the distribution of the produced values.

use std::{
    error::Error,
    fs::File,
    io::{self, BufRead, BufReader},
    path::PathBuf,
};

use clap::Parser;
use randomhash::{Confidence, RandomHashFamily, UniformAudit, MAX_VALUE, MIN_VALUE};

#[derive(Parser, Debug)]
#[command(about = "Audit the uniformity of a pseudo-random hash family over a key file")]
struct Args {
    /// Number of hash functions in the family.
    #[arg(short = 'n', long, default_value_t = 100)]
    count: usize,

    /// Number of buckets for the uniformity audit.
    #[arg(short, long, default_value_t = 10)]
    buckets: usize,

    /// Seed for coefficient derivation; sampled from the wall clock when
    /// absent.
    #[arg(short, long)]
    seed: Option<u32>,

    /// Confidence level of the uniformity verdict (90 or 99).
    #[arg(long, default_value_t = 90)]
    confidence: u32,

    /// Input file of newline-separated keys; stdin when absent.
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let confidence = match args.confidence {
        90 => Confidence::P90,
        99 => Confidence::P99,
        other => return Err(format!("unsupported confidence level: {}", other).into()),
    };

    let family = match args.seed {
        Some(seed) => RandomHashFamily::with_seed(seed, args.count),
        None => RandomHashFamily::new(args.count),
    };
    let mut audit = UniformAudit::new(args.buckets, MIN_VALUE, MAX_VALUE)?;

    let reader: Box<dyn BufRead> = match &args.input {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    let mut keys = 0_u64;
    for line in reader.lines() {
        let line = line?;
        for hash in family.hashes(line.as_bytes()) {
            audit.update(hash)?;
        }
        keys += 1;
    }

    match &args.input {
        Some(path) => println!("input: {}", path.display()),
        None => println!("input: <stdin>"),
    }
    println!("number of keys: {}", keys);
    println!("number of hash functions: {}", family.len());
    println!("seed: {}", family.seed());
    print!("{}", audit.report());
    if confidence != Confidence::P90 {
        println!(
            "> is uniform (with {}% confidence)? {}",
            confidence.percent(),
            audit.is_likely_uniform_at(confidence)?
        );
    }

    Ok(())
}
