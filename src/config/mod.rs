use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Deserialize;
use tracing::info;

use crate::airline::{Airline, AirlineError, checked_capacity};
use crate::demand::{DemandCurve, DemandError};
use crate::market::Market;
use crate::types::{DEFAULT_AIRLINE_NAME, Price};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to load scenario: {0}")]
    Load(#[from] config::ConfigError),
    #[error("invalid airline {name}: {source}")]
    Airline { name: String, source: AirlineError },
    #[error("invalid demand: {0}")]
    Demand(#[from] DemandError),
}

/// A full simulation run: the carriers, the consumer population and how to
/// report the outcome.
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioConfig {
    pub demand: DemandConfig,
    pub airlines: Vec<AirlineConfig>,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DemandConfig {
    pub sample_size: usize,
    pub distribution: DistributionConfig,
    #[serde(default)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionConfig {
    Uniform { min: f64, max: f64 },
    Normal { mean: f64, std_dev: f64 },
}

#[derive(Debug, Clone, Deserialize)]
pub struct AirlineConfig {
    #[serde(default)]
    pub name: Option<String>,
    pub capacity: i64,
    pub price: Price,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: ReportFormat,
    #[serde(default)]
    pub schedule: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    #[default]
    Table,
    Json,
}

impl ScenarioConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let builder = config::Config::builder().add_source(config::File::from(path.as_ref()));
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Builds the airlines in file order and draws the demand sample.
    pub fn build_market(&self) -> Result<Market, ConfigError> {
        let demand = self.demand.generate()?;
        let mut market = Market::with_demand(demand);
        for entry in &self.airlines {
            market.add_airline(entry.build()?);
        }
        info!(
            airlines = market.airline_count(),
            consumers = self.demand.sample_size,
            seeded = self.demand.seed.is_some(),
            "scenario built"
        );
        Ok(market)
    }
}

impl DemandConfig {
    pub fn generate(&self) -> Result<DemandCurve, DemandError> {
        let mut demand = DemandCurve::new(self.sample_size)?;
        match self.seed {
            Some(seed) => self.distribution.sample_into(&mut demand, &mut StdRng::seed_from_u64(seed))?,
            None => self.distribution.sample_into(&mut demand, &mut rand::thread_rng())?,
        }
        Ok(demand)
    }
}

impl DistributionConfig {
    fn sample_into<R: rand::Rng + ?Sized>(
        self,
        demand: &mut DemandCurve,
        rng: &mut R,
    ) -> Result<(), DemandError> {
        match self {
            Self::Uniform { min, max } => demand.generate_uniform_with(rng, min, max),
            Self::Normal { mean, std_dev } => demand.generate_normal_with(rng, mean, std_dev),
        }
    }
}

impl AirlineConfig {
    pub fn build(&self) -> Result<Airline, ConfigError> {
        let name = self.name.as_deref().unwrap_or(DEFAULT_AIRLINE_NAME);
        checked_capacity(self.capacity)
            .and_then(|capacity| Airline::new(name, capacity, self.price))
            .map_err(|source| ConfigError::Airline {
                name: name.to_string(),
                source,
            })
    }
}
