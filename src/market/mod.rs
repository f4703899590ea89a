pub mod clearing;
pub mod report;

use crate::airline::{Airline, AirlineError};
use crate::demand::{DemandCurve, DemandError};

pub use report::{AirlineReport, ClearingReport, Sale};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MarketError {
    #[error("market has no airlines")]
    EmptyMarket,
    #[error(transparent)]
    Demand(#[from] DemandError),
    #[error(transparent)]
    Airline(#[from] AirlineError),
}

/// Airlines competing on price for one demand population.
///
/// The market owns both sides and hands out shared references only, so inventory
/// is mutated nowhere but in [`Market::clear_market`].
#[derive(Debug, Clone, Default)]
pub struct Market {
    airlines: Vec<Airline>,
    demand: DemandCurve,
}

impl Market {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demand(demand: DemandCurve) -> Self {
        Self {
            airlines: Vec::new(),
            demand,
        }
    }

    pub fn add_airline(&mut self, airline: Airline) {
        self.airlines.push(airline);
    }

    pub fn set_demand(&mut self, demand: DemandCurve) {
        self.demand = demand;
    }

    pub fn airlines(&self) -> &[Airline] {
        &self.airlines
    }

    pub fn airline_count(&self) -> usize {
        self.airlines.len()
    }

    pub fn demand(&self) -> &DemandCurve {
        &self.demand
    }

    /// Regenerating through this handle is seen by the next clearing.
    pub fn demand_mut(&mut self) -> &mut DemandCurve {
        &mut self.demand
    }

    /// Matches the demand sample against airline inventory, cheapest fare first.
    ///
    /// Validation happens before any airline is touched: a failed call leaves
    /// every airline exactly as it was. On success the airlines are left in
    /// ascending price order.
    pub fn clear_market(&mut self) -> Result<ClearingReport, MarketError> {
        if self.airlines.is_empty() {
            return Err(MarketError::EmptyMarket);
        }
        let sorted = self.demand.sorted_valuations()?;
        clearing::allocate(&mut self.airlines, &sorted)
    }
}
