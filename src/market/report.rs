use std::fmt;

use serde::Serialize;

use crate::airline::Airline;
use crate::types::{ConsumerIndex, Price, Seats, Valuation};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AirlineReport {
    pub name: String,
    pub capacity: Seats,
    pub seats_sold: Seats,
    pub seats_left: Seats,
    pub price: Price,
}

impl From<&Airline> for AirlineReport {
    fn from(airline: &Airline) -> Self {
        Self {
            name: airline.name().to_string(),
            capacity: airline.capacity(),
            seats_sold: airline.seats_sold(),
            seats_left: airline.seats_left(),
            price: airline.price(),
        }
    }
}

/// One ticket: which airline (by position in price order) sold it to which
/// consumer (by position in the ascending demand sample).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sale {
    pub airline: usize,
    pub consumer: ConsumerIndex,
    pub valuation: Valuation,
    pub price: Price,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClearingReport {
    pub consumers: usize,
    /// Ascending by price.
    pub rows: Vec<AirlineReport>,
    pub sales: Vec<Sale>,
}

impl ClearingReport {
    pub fn tickets_sold(&self) -> Seats {
        self.rows.iter().map(|row| row.seats_sold).sum()
    }

    pub fn revenue(&self) -> f64 {
        self.rows
            .iter()
            .map(|row| row.price * row.seats_sold as f64)
            .sum()
    }

    pub fn unserved(&self) -> usize {
        self.consumers - self.sales.len()
    }

    pub fn row(&self, name: &str) -> Option<&AirlineReport> {
        self.rows.iter().find(|row| row.name == name)
    }
}

impl fmt::Display for ClearingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--------------------")?;
        writeln!(f, "No of consumers: {}", self.consumers)?;
        writeln!(f)?;
        writeln!(
            f,
            "{:<15} {:>13} {:>13} {:>13} {:>13}",
            "Airline", "Capacity", "Sold", "Seats left", "Ticket price"
        )?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<15} {:>13} {:>13} {:>13} {:>13.2}",
                row.name, row.capacity, row.seats_sold, row.seats_left, row.price
            )?;
        }
        write!(f, "--------------------")
    }
}
