use std::error::Error;

use plotters::prelude::BLUE;

use latency_density::kde::GaussianKde;
use latency_density::loader::load_samples;
use latency_density::plot::{self, DensitySeries, PINK};
use latency_density::stats::Summary;

const BW_ADJUST: f64 = 0.5;
const CURVE_POINTS: usize = 512;
const OUTPUT_PATH: &str = "test.png";

fn main() -> Result<(), Box<dyn Error>> {
    let async_read_time = load_samples("async_read_out.txt")?;
    let async_read = Summary::of(&async_read_time);
    println!(
        "async_read_avg: {} async_read_std: {}",
        async_read.mean, async_read.std_dev
    );

    let box_async_read_time = load_samples("box_async_read_out.txt")?;
    let box_async_read = Summary::of(&box_async_read_time);
    println!(
        "box_async_read_avg: {} box_async_read_std: {}",
        box_async_read.mean, box_async_read.std_dev
    );

    let series = [
        DensitySeries {
            label: "async_read",
            color: PINK,
            curve: GaussianKde::new(&async_read_time, BW_ADJUST).curve(CURVE_POINTS),
        },
        // same legend label as above, kept as the original chart has it
        DensitySeries {
            label: "async_read",
            color: BLUE,
            curve: GaussianKde::new(&box_async_read_time, BW_ADJUST).curve(CURVE_POINTS),
        },
    ];
    plot::render_density_chart(OUTPUT_PATH, &series)?;
    plot::show(OUTPUT_PATH)?;

    Ok(())
}
