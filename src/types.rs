/// Posted fare of an airline.
pub type Price = f64;
/// A consumer's maximum willingness to pay.
pub type Valuation = f64;
pub type Seats = u64;
/// Position of a consumer in the ascending-sorted demand sample.
pub type ConsumerIndex = usize;

pub const DEFAULT_AIRLINE_NAME: &str = "airline";
pub const DEFAULT_SAMPLE_SIZE: usize = 100;
/// Upper bound on the length of a demand schedule.
pub const MAX_SCHEDULE_POINTS: usize = 1_000;
