use std::error::Error;
use std::fs;
use std::path::Path;

/// Samples at or above this value are treated as scheduler hiccups and dropped.
pub const OUTLIER_CUTOFF: i64 = 1200;

/// Reads a `", "`-separated list of integer latency samples from a file,
/// dropping every value at or above [`OUTLIER_CUTOFF`].
pub fn load_samples(path: impl AsRef<Path>) -> Result<Vec<i64>, Box<dyn Error>> {
    let text = fs::read_to_string(path)?;

    let mut samples = Vec::new();
    for token in text.split(", ") {
        let value: i64 = token.trim().parse()?;
        if value < OUTLIER_CUTOFF {
            samples.push(value);
        }
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::load_samples;

    fn write_fixture(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "latency_density_{}_{name}",
            std::process::id()
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_filters_values_at_cutoff_and_above() {
        let path = write_fixture("filter.txt", "100, 200, 1300, 50");
        let samples = load_samples(&path).unwrap();
        assert_eq!(samples, vec![100, 200, 50]);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_all_outliers_yield_empty_sequence() {
        let path = write_fixture("all_outliers.txt", "1200, 4000, 2317");
        let samples = load_samples(&path).unwrap();
        assert!(samples.is_empty());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_trailing_newline_is_tolerated() {
        let path = write_fixture("newline.txt", "5, 6, 7\n");
        let samples = load_samples(&path).unwrap();
        assert_eq!(samples, vec![5, 6, 7]);
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_non_integer_token_fails() {
        let path = write_fixture("malformed.txt", "12a, 5");
        assert!(load_samples(&path).is_err());
        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_fails() {
        let path = std::env::temp_dir().join("latency_density_no_such_file.txt");
        assert!(load_samples(&path).is_err());
    }
}
