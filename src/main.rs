fn main() -> anyhow::Result<()> {
    let mut market = bertrand_airlines::Market::new();

    market.add_airline(bertrand_airlines::Airline::new("British Airways", 100, 50.0)?);
    market.add_airline(bertrand_airlines::Airline::new("Air France", 120, 45.0)?);
    market.add_airline(bertrand_airlines::Airline::new("Ryanair", 80, 35.0)?);

    let mut demand = bertrand_airlines::DemandCurve::new(200)?;
    demand.generate_uniform(20.0, 70.0)?;
    market.set_demand(demand);

    let report = market.clear_market()?;
    println!("{report}");
    Ok(())
}
