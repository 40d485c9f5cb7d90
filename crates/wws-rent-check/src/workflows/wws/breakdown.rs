use serde::{Deserialize, Serialize};

use super::domain::{HousingType, HousingUnit};
use super::schedule::RentSchedule;
use super::scorer::scorer_for;
use super::sections::{
    EnergyPoints, KitchenPoints, OutdoorPoints, SanitaryPoints, SurfacePoints, WozPoints,
};

/// Finalized points per section and the aggregated total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointBreakdown {
    pub housing_type: HousingType,
    pub kitchen: KitchenPoints,
    pub sanitary: SanitaryPoints,
    pub surface: SurfacePoints,
    pub energy: EnergyPoints,
    pub outdoor: OutdoorPoints,
    pub woz: WozPoints,
    pub total_points: f64,
}

impl PointBreakdown {
    /// Sum of the finalized kitchen, sanitary, surface, energy and outdoor points.
    pub fn points_without_woz(&self) -> f64 {
        sum_without_woz(
            &self.kitchen,
            &self.sanitary,
            &self.surface,
            &self.energy,
            &self.outdoor,
        )
    }
}

fn sum_without_woz(
    kitchen: &KitchenPoints,
    sanitary: &SanitaryPoints,
    surface: &SurfacePoints,
    energy: &EnergyPoints,
    outdoor: &OutdoorPoints,
) -> f64 {
    kitchen.final_points + sanitary.final_points + surface.total + energy.points + outdoor.total
}

/// Score all six sections of a validated unit against `schedule`.
///
/// The five independent sections run first; WOZ needs their finalized sum for its cap. The
/// total is floored at zero.
pub fn score_unit(unit: &HousingUnit, schedule: &RentSchedule) -> PointBreakdown {
    let scorer = scorer_for(unit.housing_type);

    let kitchen = scorer.kitchen(&unit.kitchen);
    let sanitary = scorer.sanitary(&unit.sanitary);
    let surface = scorer.surface(unit);
    let energy = scorer.energy(unit, schedule);
    let outdoor = scorer.outdoor(&unit.outdoor);

    let other_points = sum_without_woz(&kitchen, &sanitary, &surface, &energy, &outdoor);
    let woz = scorer.woz(unit, schedule, other_points);

    let total_points = (other_points + woz.capped_points).max(0.0);

    PointBreakdown {
        housing_type: unit.housing_type,
        kitchen,
        sanitary,
        surface,
        energy,
        outdoor,
        woz,
        total_points,
    }
}
