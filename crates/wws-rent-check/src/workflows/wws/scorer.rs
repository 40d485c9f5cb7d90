use tracing::warn;

use super::domain::{HousingType, HousingUnit, KitchenSpec, OutdoorSpec, SanitarySpec};
use super::schedule::RentSchedule;
use super::sections::{
    energy, kitchen, outdoor, sanitary, surface, woz, EnergyPoints, KitchenPoints, OutdoorPoints,
    SanitaryPoints, SurfacePoints, WozPoints,
};
use super::sharing::sharers_for;

/// Section rules for one housing type. The implementation is picked once per assessment via
/// [`scorer_for`], so no section re-checks the housing type.
pub trait SectionScorer: Send + Sync {
    fn housing_type(&self) -> HousingType;
    fn kitchen(&self, spec: &KitchenSpec) -> KitchenPoints;
    fn sanitary(&self, spec: &SanitarySpec) -> SanitaryPoints;
    fn surface(&self, unit: &HousingUnit) -> SurfacePoints;
    fn energy(&self, unit: &HousingUnit, schedule: &RentSchedule) -> EnergyPoints;
    fn outdoor(&self, spec: &OutdoorSpec) -> OutdoorPoints;
    /// `other_points` is the sum of the five finalized sections above.
    fn woz(&self, unit: &HousingUnit, schedule: &RentSchedule, other_points: f64) -> WozPoints;
}

/// Self-contained dwellings: nothing is shared, every section is scored in full and the
/// WOZ value counts.
#[derive(Debug, Default, Clone, Copy)]
pub struct IndependentScorer;

impl SectionScorer for IndependentScorer {
    fn housing_type(&self) -> HousingType {
        HousingType::Independent
    }

    fn kitchen(&self, spec: &KitchenSpec) -> KitchenPoints {
        kitchen::score(spec, None)
    }

    fn sanitary(&self, spec: &SanitarySpec) -> SanitaryPoints {
        sanitary::score(spec, None)
    }

    fn surface(&self, unit: &HousingUnit) -> SurfacePoints {
        surface::score_private(&unit.surface)
    }

    fn energy(&self, unit: &HousingUnit, schedule: &RentSchedule) -> EnergyPoints {
        energy::score(unit.energy.label, &schedule.energy_points)
    }

    fn outdoor(&self, spec: &OutdoorSpec) -> OutdoorPoints {
        outdoor::score_private(spec)
    }

    fn woz(&self, unit: &HousingUnit, schedule: &RentSchedule, other_points: f64) -> WozPoints {
        woz::score(
            &unit.woz,
            schedule.woz_rate_per_point,
            schedule.woz_cap_ratio,
            other_points,
        )
    }
}

/// Rooms in shared housing: shared facilities are divided among households, the energy
/// label is not scored and the WOZ formula does not apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct NonIndependentScorer;

impl SectionScorer for NonIndependentScorer {
    fn housing_type(&self) -> HousingType {
        HousingType::NonIndependent
    }

    fn kitchen(&self, spec: &KitchenSpec) -> KitchenPoints {
        kitchen::score(spec, sharers_for(spec.shared, spec.sharer_count))
    }

    fn sanitary(&self, spec: &SanitarySpec) -> SanitaryPoints {
        sanitary::score(spec, sharers_for(spec.shared, spec.sharer_count))
    }

    fn surface(&self, unit: &HousingUnit) -> SurfacePoints {
        let points = surface::score_with_shared(&unit.surface, surface::resolve_sharers(unit));
        if let (Some(source), Some(count)) = (points.sharer_source, points.sharer_count) {
            if source.is_inferred() {
                warn!(
                    ?source,
                    sharers = count,
                    "shared floor area divided by an inferred sharer count"
                );
            }
        }
        points
    }

    fn energy(&self, unit: &HousingUnit, _schedule: &RentSchedule) -> EnergyPoints {
        energy::unscored(unit.energy.label)
    }

    fn outdoor(&self, spec: &OutdoorSpec) -> OutdoorPoints {
        outdoor::score_with_shared(spec)
    }

    fn woz(&self, _unit: &HousingUnit, _schedule: &RentSchedule, _other: f64) -> WozPoints {
        woz::not_applied()
    }
}

static INDEPENDENT: IndependentScorer = IndependentScorer;
static NON_INDEPENDENT: NonIndependentScorer = NonIndependentScorer;

pub fn scorer_for(housing_type: HousingType) -> &'static dyn SectionScorer {
    match housing_type {
        HousingType::Independent => &INDEPENDENT,
        HousingType::NonIndependent => &NON_INDEPENDENT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::wws::domain::{CounterLength, EnergyLabel, WozSpec};

    #[test]
    fn scorer_matches_housing_type() {
        assert_eq!(
            scorer_for(HousingType::Independent).housing_type(),
            HousingType::Independent
        );
        assert_eq!(
            scorer_for(HousingType::NonIndependent).housing_type(),
            HousingType::NonIndependent
        );
    }

    #[test]
    fn independent_units_ignore_shared_flags() {
        let spec = KitchenSpec {
            counter_length: Some(CounterLength::TwoMetresOrMore),
            appliances: Vec::new(),
            shared: true,
            sharer_count: Some(4),
        };

        let points = IndependentScorer.kitchen(&spec);

        assert_eq!(points.final_points, 7.0);
        assert!(!points.shared);
    }

    #[test]
    fn non_independent_units_skip_energy_and_woz() {
        let mut unit = HousingUnit::new(HousingType::NonIndependent);
        unit.energy.label = Some(EnergyLabel::APlus4);
        unit.woz = WozSpec {
            assessed_value: Some(400_000.0),
        };
        let schedule = RentSchedule::provisional_2025();

        assert_eq!(NonIndependentScorer.energy(&unit, &schedule).points, 0.0);
        let woz = NonIndependentScorer.woz(&unit, &schedule, 100.0);
        assert!(!woz.applied);
        assert_eq!(woz.capped_points, 0.0);
    }
}
