//! Example: the six reference vector pairs.
//!
//! Run with:
//! `cargo run --example six_pairs`

use ghd::{CostParameters, GhdEngine, Result};

fn main() -> Result<()> {
    let base: [u8; 10] = [1, 1, 0, 0, 1, 0, 0, 0, 0, 0];
    let near: [u8; 10] = [1, 1, 0, 0, 0, 1, 0, 0, 0, 0];
    let far: [u8; 10] = [1, 1, 0, 0, 0, 0, 0, 0, 0, 1];

    let unit = CostParameters::new(1.0, 1.0, 0.5)?;
    // Deletion costs 2.0 here, hence 6.0 for three bits.
    let heavy_delete = CostParameters::new(1.0, 2.0, 0.5)?;

    let pairs: [(&[u8], &[u8], CostParameters); 6] = [
        (&base, &near, unit),
        (&base, &far, unit),
        (&[0, 1, 1], &[1, 1, 0], unit),
        (&[1], &[0], unit),
        (&[1, 1, 1], &[0, 0, 0], unit),
        (&[0, 0, 0], &[1, 1, 1], heavy_delete),
    ];

    let engine = GhdEngine::new();
    for (k, (source, target, costs)) in pairs.iter().enumerate() {
        let d = engine.compute(source, target, source.len(), costs)?;
        println!("Test{}: GHD = {d}", k + 1);
    }
    Ok(())
}
