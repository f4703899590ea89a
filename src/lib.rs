pub mod airline;
pub mod config;
pub mod demand;
pub mod market;
pub mod types;

pub mod metrics;

pub use airline::{Airline, AirlineError};
pub use demand::{DemandCurve, DemandError, DemandPoint};
pub use market::{AirlineReport, ClearingReport, Market, MarketError, Sale};
pub use types::{ConsumerIndex, Price, Seats, Valuation};
