use std::path::PathBuf;

use anyhow::{Context, Result};
use renewables::StateRenewable;

const STATES: [&str; 50] = [
    "Alabama", "Alaska", "Arizona", "Arkansas", "California", "Colorado", "Connecticut",
    "Delaware", "Florida", "Georgia", "Hawaii", "Idaho", "Illinois", "Indiana", "Iowa",
    "Kansas", "Kentucky", "Louisiana", "Maine", "Maryland", "Massachusetts", "Michigan",
    "Minnesota", "Mississippi", "Missouri", "Montana", "Nebraska", "Nevada", "New Hampshire",
    "New Jersey", "New Mexico", "New York", "North Carolina", "North Dakota", "Ohio",
    "Oklahoma", "Oregon", "Pennsylvania", "Rhode Island", "South Carolina", "South Dakota",
    "Tennessee", "Texas", "Utah", "Vermont", "Virginia", "Washington", "West Virginia",
    "Wisconsin", "Wyoming",
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5)).rotate_left(7).wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    /// Uniform in `[lo, hi)`.
    fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        lo + unit * (hi - lo)
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

fn main() -> Result<()> {
    let output_path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data.csv"));

    let mut rng = SimpleRng::new(42);

    // (name, total TWh, % renewable, renewable TWh, Mt CO2 / TWh)
    let rows: Vec<(&str, f64, f64, f64, f64)> = STATES
        .iter()
        .map(|&name| {
            let total = round2(rng.range(5.0, 480.0));
            let percent = round2(rng.range(1.0, 95.0));
            let renewable = round2(total * percent / 100.0);
            // Cleaner grids tend to emit less per TWh.
            let co2 = round2((0.9 - percent / 120.0).max(0.0) * rng.range(0.6, 1.1));
            (name, total, percent, renewable, co2)
        })
        .collect();

    let national: f64 = rows.iter().map(|r| r.3).sum();

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;
    for &(name, total, percent, renewable, co2) in &rows {
        let share = round2(renewable / national * 100.0);
        writer.serialize(StateRenewable::new(name, total, percent, renewable, share, co2))?;
    }
    writer.flush().context("flushing CSV")?;

    println!("Wrote {} states to {}", rows.len(), output_path.display());
    Ok(())
}
