use serde::{Deserialize, Serialize};

use super::super::domain::{Appliance, CounterLength, KitchenSpec};
use super::super::sharing::allocate_shared;

/// Kitchen section result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KitchenPoints {
    pub counter_points: f64,
    pub appliance_points: f64,
    pub raw_points: f64,
    pub shared: bool,
    pub sharer_count: Option<u32>,
    pub final_points: f64,
}

pub fn counter_points(length: Option<CounterLength>) -> f64 {
    match length {
        Some(CounterLength::TwoMetresOrMore) => 7.0,
        Some(CounterLength::OneToTwoMetres) => 4.0,
        Some(CounterLength::UnderOneMetre) | Some(CounterLength::Unknown) | None => 0.0,
    }
}

pub fn appliance_points(appliances: &[Appliance]) -> f64 {
    appliances.iter().map(Appliance::points).sum()
}

/// Score the kitchen. `sharers` is `Some` only when the points are divided among households.
pub fn score(spec: &KitchenSpec, sharers: Option<u32>) -> KitchenPoints {
    let counter_points = counter_points(spec.counter_length);
    let appliance_points = appliance_points(&spec.appliances);
    let raw_points = counter_points + appliance_points;

    let final_points = match sharers {
        Some(count) => allocate_shared(raw_points, count),
        None => raw_points,
    };

    KitchenPoints {
        counter_points,
        appliance_points,
        raw_points,
        shared: sharers.is_some(),
        sharer_count: sharers,
        final_points,
    }
}
