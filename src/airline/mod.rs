use crate::types::{DEFAULT_AIRLINE_NAME, Price, Seats};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AirlineError {
    #[error("invalid capacity {0}: must be non-negative")]
    InvalidCapacity(i64),
    #[error("invalid price {0}: must be a non-negative number")]
    InvalidPrice(Price),
    #[error("airline {0} has no seats left")]
    OutOfInventory(String),
}

/// Converts a capacity read from untyped input (scenario files, CLI) into seats.
pub fn checked_capacity(raw: i64) -> Result<Seats, AirlineError> {
    Seats::try_from(raw).map_err(|_| AirlineError::InvalidCapacity(raw))
}

/// A carrier with a posted fare and a fixed number of seats.
///
/// `seats_left` only moves down through [`Airline::sell_ticket`] and only returns to
/// `capacity` through [`Airline::reset_inventory`] or [`Airline::set_capacity`].
#[derive(Debug, Clone, PartialEq)]
pub struct Airline {
    name: String,
    capacity: Seats,
    price: Price,
    seats_left: Seats,
}

impl Default for Airline {
    fn default() -> Self {
        Self {
            name: DEFAULT_AIRLINE_NAME.to_string(),
            capacity: 0,
            price: 0.0,
            seats_left: 0,
        }
    }
}

impl Airline {
    pub fn new(name: impl Into<String>, capacity: Seats, price: Price) -> Result<Self, AirlineError> {
        let mut airline = Self {
            name: name.into(),
            ..Self::default()
        };
        airline.set_capacity(capacity);
        airline.set_price(price)?;
        Ok(airline)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn capacity(&self) -> Seats {
        self.capacity
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn seats_left(&self) -> Seats {
        self.seats_left
    }

    pub fn seats_sold(&self) -> Seats {
        self.capacity - self.seats_left
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Replaces the capacity and refills the plane; sales made under the old
    /// capacity are discarded.
    pub fn set_capacity(&mut self, capacity: Seats) {
        self.capacity = capacity;
        self.seats_left = capacity;
    }

    pub fn set_price(&mut self, price: Price) -> Result<(), AirlineError> {
        if price.is_nan() || price < 0.0 {
            return Err(AirlineError::InvalidPrice(price));
        }
        // -0.0 would sort ahead of 0.0 under total_cmp.
        self.price = if price == 0.0 { 0.0 } else { price };
        Ok(())
    }

    pub fn sell_ticket(&mut self) -> Result<(), AirlineError> {
        if self.seats_left == 0 {
            return Err(AirlineError::OutOfInventory(self.name.clone()));
        }
        self.seats_left -= 1;
        Ok(())
    }

    pub fn reset_inventory(&mut self) {
        self.seats_left = self.capacity;
    }
}
