use rand::Rng;
use rand::distributions::Uniform;
use rand_distr::{Distribution, Normal};
use serde::Serialize;

use crate::types::{DEFAULT_SAMPLE_SIZE, MAX_SCHEDULE_POINTS, Valuation};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DemandError {
    #[error("sample size must be positive")]
    InvalidSampleSize,
    #[error("invalid uniform range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },
    #[error("invalid mean {0}")]
    InvalidMean(f64),
    #[error("invalid standard deviation {0}")]
    InvalidStdDev(f64),
    #[error("demand sample is empty")]
    EmptySample,
    #[error("valuation {0} is not a finite number")]
    NonFiniteValuation(f64),
    #[error("demand has not been generated")]
    DemandNotGenerated,
}

/// One point of the cumulative demand schedule: `quantity` consumers value a
/// seat at `price` or more.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DemandPoint {
    pub price: i64,
    pub quantity: usize,
}

/// A population of consumers, each with a private willingness to pay.
///
/// Every generation call resamples the whole population; nothing accumulates
/// across calls.
#[derive(Debug, Clone)]
pub struct DemandCurve {
    sample_size: usize,
    valuations: Option<Vec<Valuation>>,
}

impl Default for DemandCurve {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            valuations: None,
        }
    }
}

impl DemandCurve {
    pub fn new(sample_size: usize) -> Result<Self, DemandError> {
        if sample_size == 0 {
            return Err(DemandError::InvalidSampleSize);
        }
        Ok(Self {
            sample_size,
            valuations: None,
        })
    }

    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    pub fn is_generated(&self) -> bool {
        self.valuations.is_some()
    }

    pub fn valuations(&self) -> Result<&[Valuation], DemandError> {
        self.valuations.as_deref().ok_or(DemandError::DemandNotGenerated)
    }

    pub fn sorted_valuations(&self) -> Result<Vec<Valuation>, DemandError> {
        let mut sorted = self.valuations()?.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        Ok(sorted)
    }

    pub fn generate_uniform(&mut self, min: f64, max: f64) -> Result<(), DemandError> {
        self.generate_uniform_with(&mut rand::thread_rng(), min, max)
    }

    pub fn generate_uniform_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        min: f64,
        max: f64,
    ) -> Result<(), DemandError> {
        if !(max - min).is_finite() || min > max {
            return Err(DemandError::InvalidRange { min, max });
        }
        let values = if min == max {
            vec![min; self.sample_size]
        } else {
            let dist = Uniform::new_inclusive(min, max);
            dist.sample_iter(rng).take(self.sample_size).collect()
        };
        self.valuations = Some(values);
        Ok(())
    }

    pub fn generate_normal(&mut self, mean: f64, std_dev: f64) -> Result<(), DemandError> {
        self.generate_normal_with(&mut rand::thread_rng(), mean, std_dev)
    }

    /// Draws from N(mean, std_dev). Valuations can come out negative.
    pub fn generate_normal_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        mean: f64,
        std_dev: f64,
    ) -> Result<(), DemandError> {
        if !mean.is_finite() {
            return Err(DemandError::InvalidMean(mean));
        }
        if !std_dev.is_finite() || std_dev < 0.0 {
            return Err(DemandError::InvalidStdDev(std_dev));
        }
        let dist = Normal::new(mean, std_dev).map_err(|_| DemandError::InvalidStdDev(std_dev))?;
        let values = (0..self.sample_size).map(|_| dist.sample(rng)).collect();
        self.valuations = Some(values);
        Ok(())
    }

    /// Installs an explicit sample; the sample size follows its length.
    pub fn set_valuations(&mut self, valuations: Vec<Valuation>) -> Result<(), DemandError> {
        if valuations.is_empty() {
            return Err(DemandError::EmptySample);
        }
        if let Some(bad) = valuations.iter().find(|v| !v.is_finite()) {
            return Err(DemandError::NonFiniteValuation(*bad));
        }
        self.sample_size = valuations.len();
        self.valuations = Some(valuations);
        Ok(())
    }

    /// Cumulative demand at whole prices from `floor(min)` up to, but not
    /// including, `floor(max)`. Wide ranges are stepped so the schedule holds at
    /// most [`MAX_SCHEDULE_POINTS`] points.
    pub fn schedule(&self) -> Result<Vec<DemandPoint>, DemandError> {
        let sorted = self.sorted_valuations()?;
        let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
            return Err(DemandError::EmptySample);
        };
        let low = first.floor() as i64;
        let high = last.floor() as i64;
        let width = (high - low).max(0) as u64;
        let step = width.div_ceil(MAX_SCHEDULE_POINTS as u64).max(1) as usize;
        let points = (low..high)
            .step_by(step)
            .map(|price| {
                let below = sorted.partition_point(|v| *v < price as f64);
                DemandPoint {
                    price,
                    quantity: sorted.len() - below,
                }
            })
            .collect();
        Ok(points)
    }
}
