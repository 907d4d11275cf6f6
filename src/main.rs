use anyhow::{Context, Result};
use clap::Parser;
use perfect_numbers::CLIArgs;

fn main() -> Result<()> {
    let args = CLIArgs::parse();
    let count = args.count.unwrap_or(4);
    let numbers = perfect_numbers::first_perfect_numbers(count)
        .with_context(|| format!("Failed to find the first {} perfect number(s).", count))?;

    let line = numbers
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", line);

    Ok(())
}
