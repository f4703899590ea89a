use tracing::{debug, info, instrument, warn};

use crate::airline::Airline;
use crate::market::MarketError;
use crate::market::report::{AirlineReport, ClearingReport, Sale};
use crate::metrics;
use crate::types::Valuation;

/// Bertrand allocation of an ascending demand sample to `airlines`.
///
/// Inventory is reset, airlines are stably sorted by price, then each airline in
/// turn sells to the cheapest remaining consumers who value a seat strictly above
/// its fare.
#[instrument(skip_all, fields(airlines = airlines.len(), consumers = sorted.len()))]
pub(crate) fn allocate(
    airlines: &mut [Airline],
    sorted: &[Valuation],
) -> Result<ClearingReport, MarketError> {
    for airline in airlines.iter_mut() {
        airline.reset_inventory();
    }

    // slice::sort_by is stable: equal fares keep insertion order.
    airlines.sort_by(|a, b| a.price().total_cmp(&b.price()));

    if sorted.first().is_some_and(|v| *v < 0.0) {
        warn!("demand sample contains negative valuations");
    }

    // Everything before `next` is either sold or valued at or below a fare no
    // higher than every fare still to come, so it can never transact again.
    let mut next = 0usize;
    let mut sales = Vec::new();
    for (position, airline) in airlines.iter_mut().enumerate() {
        let price = airline.price();
        while next < sorted.len() && sorted[next] <= price {
            next += 1;
        }
        while airline.seats_left() > 0 && next < sorted.len() {
            airline.sell_ticket()?;
            sales.push(Sale {
                airline: position,
                consumer: next,
                valuation: sorted[next],
                price,
            });
            next += 1;
        }
        debug!(
            airline = airline.name(),
            price,
            sold = airline.seats_sold(),
            seats_left = airline.seats_left(),
            "airline served"
        );
    }

    let rows: Vec<AirlineReport> = airlines.iter().map(AirlineReport::from).collect();
    let report = ClearingReport {
        consumers: sorted.len(),
        rows,
        sales,
    };
    metrics::record_clearing(&report);
    info!(
        tickets_sold = report.tickets_sold(),
        revenue = report.revenue(),
        unserved = report.unserved(),
        "market cleared"
    );
    Ok(report)
}
