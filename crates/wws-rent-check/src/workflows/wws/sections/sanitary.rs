use serde::{Deserialize, Serialize};

use super::super::domain::{HeatingType, SanitaryFacility, SanitarySpec, ToiletType};
use super::super::sharing::allocate_shared;

const TOILET_IN_BATHROOM_PENALTY: f64 = 1.0;
const THERMOSTAT_VALVE_POINTS: f64 = 0.25;

/// Sanitary section result, including heating and thermostat contributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SanitaryPoints {
    pub toilet_points: f64,
    pub washing_points: f64,
    pub heating_points: f64,
    pub thermostat_bonus: f64,
    pub raw_points: f64,
    pub shared: bool,
    pub sharer_count: Option<u32>,
    pub final_points: f64,
}

/// The bathroom penalty applies only to a toilet that scores; a missing or unrecognized toilet
/// has nothing to deduct from.
pub fn toilet_points(toilet: Option<ToiletType>, in_bathroom: bool) -> f64 {
    let points = toilet.map(ToiletType::points).unwrap_or(0.0);
    if in_bathroom && points > 0.0 {
        points - TOILET_IN_BATHROOM_PENALTY
    } else {
        points
    }
}

pub fn washing_points(facilities: &[SanitaryFacility]) -> f64 {
    facilities.iter().map(SanitaryFacility::points).sum()
}

pub fn heating_points(heating: Option<HeatingType>, heated_rooms: u32) -> f64 {
    let per_room = match heating {
        Some(HeatingType::Central) => 2.0,
        Some(HeatingType::Gas) => 1.0,
        Some(HeatingType::Electric)
        | Some(HeatingType::Unheated)
        | Some(HeatingType::Unknown)
        | None => 0.0,
    };
    per_room * f64::from(heated_rooms)
}

pub fn thermostat_bonus(enabled: bool, valve_count: u32) -> f64 {
    if enabled {
        THERMOSTAT_VALVE_POINTS * f64::from(valve_count)
    } else {
        0.0
    }
}

pub fn score(spec: &SanitarySpec, sharers: Option<u32>) -> SanitaryPoints {
    let toilet_points = toilet_points(spec.toilet, spec.toilet_in_bathroom);
    let washing_points = washing_points(&spec.facilities);
    let heating_points = heating_points(spec.heating, spec.heated_rooms);
    let thermostat_bonus = thermostat_bonus(spec.thermostat_valves, spec.thermostat_valve_count);
    let raw_points = toilet_points + washing_points + heating_points + thermostat_bonus;

    let final_points = match sharers {
        Some(count) => allocate_shared(raw_points, count),
        None => raw_points,
    };

    SanitaryPoints {
        toilet_points,
        washing_points,
        heating_points,
        thermostat_bonus,
        raw_points,
        shared: sharers.is_some(),
        sharer_count: sharers,
        final_points,
    }
}
