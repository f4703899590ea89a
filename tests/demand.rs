use rand::SeedableRng;
use rand::rngs::StdRng;

use bertrand_airlines::{DemandCurve, DemandError, DemandPoint};

#[test]
fn valuations_before_generation_fail() {
    let demand = DemandCurve::new(10).unwrap();
    assert!(!demand.is_generated());
    assert_eq!(demand.valuations(), Err(DemandError::DemandNotGenerated));
    assert_eq!(demand.schedule(), Err(DemandError::DemandNotGenerated));
}

#[test]
fn zero_sample_size_is_rejected() {
    assert!(matches!(DemandCurve::new(0), Err(DemandError::InvalidSampleSize)));
}

#[test]
fn uniform_stays_in_range() {
    let mut demand = DemandCurve::new(500).unwrap();
    demand.generate_uniform(20.0, 80.0).unwrap();
    let values = demand.valuations().unwrap();
    assert_eq!(values.len(), 500);
    assert!(values.iter().all(|v| (20.0..=80.0).contains(v)));
}

#[test]
fn uniform_with_equal_bounds_is_constant() {
    let mut demand = DemandCurve::new(25).unwrap();
    demand.generate_uniform(42.0, 42.0).unwrap();
    let values = demand.valuations().unwrap();
    assert_eq!(values.len(), 25);
    assert!(values.iter().all(|v| *v == 42.0));
}

#[test]
fn uniform_rejects_inverted_range() {
    let mut demand = DemandCurve::new(5).unwrap();
    assert_eq!(
        demand.generate_uniform(10.0, 5.0),
        Err(DemandError::InvalidRange { min: 10.0, max: 5.0 })
    );
    assert!(!demand.is_generated());
}

#[test]
fn normal_rejects_negative_std_dev() {
    let mut demand = DemandCurve::new(5).unwrap();
    assert_eq!(demand.generate_normal(50.0, -1.0), Err(DemandError::InvalidStdDev(-1.0)));
}

#[test]
fn normal_with_zero_std_dev_is_the_mean() {
    let mut demand = DemandCurve::new(8).unwrap();
    demand.generate_normal(50.0, 0.0).unwrap();
    assert!(demand.valuations().unwrap().iter().all(|v| *v == 50.0));
}

#[test]
fn generation_resamples_instead_of_appending() {
    let mut demand = DemandCurve::new(300).unwrap();
    demand.generate_normal(50.0, 12.0).unwrap();
    demand.generate_uniform(1.0, 2.0).unwrap();
    let values = demand.valuations().unwrap();
    assert_eq!(values.len(), 300);
    assert!(values.iter().all(|v| (1.0..=2.0).contains(v)));
}

#[test]
fn seeded_generation_is_reproducible() {
    let mut a = DemandCurve::new(50).unwrap();
    let mut b = DemandCurve::new(50).unwrap();
    a.generate_normal_with(&mut StdRng::seed_from_u64(9), 50.0, 12.0).unwrap();
    b.generate_normal_with(&mut StdRng::seed_from_u64(9), 50.0, 12.0).unwrap();
    assert_eq!(a.valuations().unwrap(), b.valuations().unwrap());
}

#[test]
fn explicit_valuations_set_sample_size() {
    let mut demand = DemandCurve::default();
    demand.set_valuations(vec![30.0, 10.0, 20.0]).unwrap();
    assert_eq!(demand.sample_size(), 3);
    assert_eq!(demand.sorted_valuations().unwrap(), vec![10.0, 20.0, 30.0]);
    assert_eq!(demand.valuations().unwrap(), &[30.0, 10.0, 20.0]);

    assert_eq!(demand.set_valuations(Vec::new()), Err(DemandError::EmptySample));
    assert!(matches!(
        demand.set_valuations(vec![1.0, f64::INFINITY]),
        Err(DemandError::NonFiniteValuation(_))
    ));
    assert_eq!(demand.sample_size(), 3);
}

#[test]
fn schedule_counts_consumers_at_or_above_each_price() {
    let mut demand = DemandCurve::default();
    demand.set_valuations(vec![10.0, 11.5, 12.0, 14.9]).unwrap();
    let schedule = demand.schedule().unwrap();
    assert_eq!(
        schedule,
        vec![
            DemandPoint { price: 10, quantity: 4 },
            DemandPoint { price: 11, quantity: 3 },
            DemandPoint { price: 12, quantity: 2 },
            DemandPoint { price: 13, quantity: 1 },
        ]
    );
}

#[test]
fn normal_rejects_negative_std_dev_without_sampling() {
    let mut demand = DemandCurve::new(5).unwrap();
    assert_eq!(demand.generate_normal(50.0, -3.0), Err(DemandError::InvalidStdDev(-3.0)));
    assert!(matches!(
        demand.generate_normal(50.0, f64::NAN),
        Err(DemandError::InvalidStdDev(_))
    ));
    assert!(!demand.is_generated());
}

#[test]
fn wide_schedule_is_stepped() {
    let mut demand = DemandCurve::default();
    demand.set_valuations(vec![0.0, 5e7]).unwrap();
    let schedule = demand.schedule().unwrap();
    assert_eq!(schedule.len(), 1_000);
    assert_eq!(schedule[0], DemandPoint { price: 0, quantity: 2 });
    assert_eq!(schedule[1], DemandPoint { price: 50_000, quantity: 1 });
    assert!(schedule.windows(2).all(|w| w[0].price < w[1].price));
    assert!(schedule.iter().all(|p| p.price < 50_000_000));
}
