//! Descriptive statistics over integer score samples.

pub trait SliceExt {
    fn total(&self) -> u64;
    fn mean(&self) -> Option<f64>;
    fn stdev(&self) -> Option<f64>;
    fn running_mean(&self) -> Vec<f64>;
}
impl SliceExt for [u32] {
    fn total(&self) -> u64 {
        self.iter().map(|&value| value as u64).sum()
    }

    fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.total() as f64 / self.len() as f64)
        }
    }

    /// Population standard deviation.
    fn stdev(&self) -> Option<f64> {
        let mean = self.mean()?;
        let sum_sq: f64 = self
            .iter()
            .map(|&value| (value as f64 - mean).powi(2))
            .sum();
        Some((sum_sq / self.len() as f64).sqrt())
    }

    /// The mean of each prefix, in sample order.
    fn running_mean(&self) -> Vec<f64> {
        let mut sum = 0u64;
        self.iter()
            .enumerate()
            .map(|(index, &value)| {
                sum += value as u64;
                sum as f64 / (index + 1) as f64
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::*;
    use courtside_testing::assert_slice_f64_relative;

    use super::*;

    #[test]
    fn empty() {
        let samples: [u32; 0] = [];
        assert_eq!(0, samples.total());
        assert_eq!(None, samples.mean());
        assert_eq!(None, samples.stdev());
        assert!(samples.running_mean().is_empty());
    }

    #[test]
    fn mean_and_stdev() {
        let samples: [u32; 4] = [110, 105, 100, 105];
        assert_eq!(420, samples.total());
        assert_f64_near!(105.0, samples.mean().unwrap());
        assert_float_relative_eq!(3.535_533_905_932_737_6, samples.stdev().unwrap(), 1e-9);
    }

    #[test]
    fn running_mean() {
        let samples: [u32; 3] = [215, 210, 200];
        assert_slice_f64_relative(&[215.0, 212.5, 208.333_333_333_333_3], &samples.running_mean(), 1e-9);
    }
}
