pub fn mean(data: &[f64]) -> Option<f64> {
    let count = data.len();

    (count > 0).then(|| data.iter().sum::<f64>() / count as f64)
}

/// Population standard deviation: the variance divides by the full
/// sample count, not count minus one.
pub fn std_deviation(data: &[f64]) -> Option<f64> {
    let data_mean = mean(data)?;
    let variance = data
        .iter()
        .map(|value| {
            let diff = data_mean - *value;

            diff * diff
        })
        .sum::<f64>()
        / data.len() as f64;

    Some(variance.sqrt())
}

/// Mean and population standard deviation of one latency dataset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
}

impl Summary {
    /// Summarizes a filtered sample sequence. An empty sequence yields
    /// NaN for both fields, like the numerical routines this mirrors.
    pub fn of(samples: &[i64]) -> Summary {
        let values: Vec<f64> = samples.iter().map(|&v| v as f64).collect();
        Summary {
            mean: mean(&values).unwrap_or(f64::NAN),
            std_dev: std_deviation(&values).unwrap_or(f64::NAN),
        }
    }
}
