use std::error::Error;
use std::fs;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const SAMPLES_PER_FILE: usize = 2000;
// every Nth sample is an outlier, to exercise the >= 1200 filter
const OUTLIER_EVERY: usize = 250;

fn write_samples(
    path: &str,
    center: i64,
    spread: i64,
    rng: &mut ChaCha8Rng,
) -> Result<(), Box<dyn Error>> {
    let mut tokens = Vec::with_capacity(SAMPLES_PER_FILE);
    for i in 0..SAMPLES_PER_FILE {
        let value = if i % OUTLIER_EVERY == 0 {
            rng.gen_range(1200..2400)
        } else {
            center + rng.gen_range(-spread..=spread)
        };
        tokens.push(value.to_string());
    }
    fs::write(path, tokens.join(", "))?;
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    write_samples("async_read_out.txt", 640, 180, &mut rng)?;
    write_samples("box_async_read_out.txt", 780, 220, &mut rng)?;
    println!("wrote async_read_out.txt and box_async_read_out.txt");
    Ok(())
}
