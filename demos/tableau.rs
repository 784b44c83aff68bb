//! Example: inspect the filled cost tableau.
//!
//! Run with:
//! `cargo run --example tableau`
//!
//! Rows follow the source set-bit positions, columns the target ones; both
//! start with the sentinel 0.

use ghd::{CostParameters, GhdEngine, Result};

fn main() -> Result<()> {
    let source: [u8; 10] = [1, 1, 0, 0, 1, 0, 0, 0, 0, 0];
    let target: [u8; 10] = [1, 1, 0, 0, 0, 0, 0, 0, 0, 1];
    let costs = CostParameters::new(1.0, 1.0, 0.5)?;

    let run = GhdEngine::new().compute_with_tableau(&source, &target, source.len(), &costs)?;

    println!("source positions: {:?}", run.source.as_slice());
    println!("target positions: {:?}", run.target.as_slice());
    match &run.tableau {
        Some(tableau) => print!("{tableau}"),
        None => println!("degenerate input: {:?}", run.degenerate),
    }
    println!("GHD = {}", run.distance);
    Ok(())
}
