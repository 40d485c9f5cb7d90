//! WWS (woningwaarderingsstelsel) rent check.
//!
//! A housing unit is validated once, scored section by section by the scorer that matches its
//! housing type, and the aggregated points are mapped onto the maximum bare rent published in
//! the effective [`RentSchedule`]. The computation is pure; the only fallible steps are the
//! housing-type validation and the schedule lookup.

pub mod breakdown;
pub mod domain;
pub mod lookup;
pub mod overpayment;
pub mod router;
pub mod schedule;
pub mod scorer;
pub mod sections;
pub mod service;
pub(crate) mod sharing;
pub mod validation;

#[cfg(test)]
mod tests;

pub use breakdown::{score_unit, PointBreakdown};
pub use domain::{
    Appliance, ApplianceKind, AssessmentRequest, CounterLength, EnergyLabel, EnergySpec,
    HeatingType, HousingType, HousingUnit, KitchenSpec, OutdoorSpec, SanitaryFacility,
    SanitaryFacilityKind, SanitarySpec, SurfaceSpec, ToiletType, WozSpec,
};
pub use lookup::{lookup_rent, MaxRent, RentCategory, RentCeiling};
pub use overpayment::{evaluate_overpayment, RentResult, RentStatus};
pub use router::{assessment_router, AssessmentPayload};
pub use schedule::{ConfigurationError, RentFormula, RentSchedule, ScheduleCatalog};
pub use scorer::{scorer_for, IndependentScorer, NonIndependentScorer, SectionScorer};
pub use service::{Assessment, AssessmentError, RentCheckService};
pub use validation::{validate, ValidationError};
