//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates a puzzle (optionally from a fixed seed) and prints the seed,
//! the playable board, and the solution.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Regenerate a specific puzzle from its seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- \
//!     --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```

use clap::Parser;
use ninefold_generator::{PuzzleGenerator, PuzzleSeed};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Seed to regenerate a specific puzzle (64 hex characters).
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new();
    let generated = match args.seed {
        Some(seed) => generator.generate_with_seed(seed),
        None => generator.generate(),
    };

    println!("Seed:");
    println!("  {}", generated.seed);
    println!();
    println!("Puzzle ({} givens):", generated.givens.count());
    for line in generated.puzzle.to_string().lines() {
        println!("  {line}");
    }
    println!();
    println!("Solution:");
    for line in generated.solution.to_string().lines() {
        println!("  {line}");
    }
}
