/// Point-in-time snapshot of an [`Estimator`](crate::Estimator), see
/// [`Estimator::stats`](crate::Estimator::stats).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "with_serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    /// Maximum number of retained samples.
    pub capacity: usize,
    /// Probability of keeping a sample during thinning.
    pub sample_rate: f64,
    /// Current probability of retaining a newly added value.
    pub rate: f64,
    /// Number of retained samples.
    pub size: usize,
    /// Estimated number of distinct values.
    pub estimate: f64,
}

impl Stats {
    /// Return how many times the sample set has been thinned since the
    /// estimator was created or last cleared.
    pub fn thinning_rounds(&self) -> u32 {
        // `rate` is an exact power of `sample_rate` up to rounding
        (self.rate.ln() / self.sample_rate.ln()).round() as u32
    }
}
