//! Basic allege usage example
//!
//! Run with `RUST_LOG=debug cargo run --example basic_usage --features tracing`
//! to see the debug events emitted for failed assertions.

use allege::{condition, not_empty, not_null, sequence, AllegeError, Iterable, Sequence};
use std::collections::HashMap;
use tracing_subscriber::EnvFilter;

struct Job<'a> {
    name: &'a str,
    args: Vec<&'a str>,
    env: HashMap<&'a str, &'a str>,
    retries: Option<u8>,
}

fn validate(job: &Job<'_>) -> Result<u8, AllegeError> {
    not_empty!(Some(job.name), "name")?;
    not_empty!(Some(&job.args), "args")?;
    let retries = not_null!(job.retries, "retries")?;
    condition!(retries <= 5, "retries must be at most 5, got {}", retries)?;
    Ok(retries)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("allege Basic Usage Example");
    println!("==========================");

    let good = Job { name: "backup", args: vec!["--all"], env: HashMap::new(), retries: Some(3) };
    println!("\nValid job:");
    println!("  retries = {}", validate(&good)?);

    // Maps are sized containers; this one is empty
    if let Err(err) = not_empty!(Some(&good.env), "env") {
        println!("  env check: {err}");
    }

    let broken = [
        Job { name: "", args: vec!["x"], env: HashMap::new(), retries: Some(1) },
        Job { name: "sync", args: Vec::new(), env: HashMap::new(), retries: Some(1) },
        Job { name: "sync", args: vec!["x"], env: HashMap::new(), retries: None },
        Job { name: "sync", args: vec!["x"], env: HashMap::new(), retries: Some(9) },
    ];
    println!("\nInvalid jobs:");
    for job in &broken {
        let err = validate(job).unwrap_err();
        println!("  {:?}: {err}", err.kind());
    }

    // Sequences
    println!("\nSequences:");
    let mut lines = ["# header", "row 1", "row 2"].into_iter();
    not_empty!(Some(Sequence::new(&mut lines)), "lines")?;
    println!("  after one-shot check, next line is {:?}", lines.next());

    let rows = vec!["row 1", "row 2"];
    for _ in 0..2 {
        not_empty!(Some(Iterable(&rows)), "rows")?;
    }
    println!("  repeatable check left {} rows", rows.len());

    let none_over = sequence((1..10).filter(|n| *n > 100));
    if let Err(err) = not_empty!(Some(none_over), "none_over") {
        println!("  {err}");
    }

    Ok(())
}
