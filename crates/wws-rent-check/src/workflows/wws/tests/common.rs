use std::sync::Arc;

use axum::response::Response;
use chrono::NaiveDate;
use serde_json::Value;

use crate::workflows::wws::domain::{
    Appliance, ApplianceKind, AssessmentRequest, CounterLength, EnergyLabel, EnergySpec,
    HeatingType, HousingType, HousingUnit, KitchenSpec, OutdoorSpec, SanitaryFacility,
    SanitaryFacilityKind, SanitarySpec, SurfaceSpec, ToiletType, WozSpec,
};
use crate::workflows::wws::schedule::{RentFormula, RentSchedule, ScheduleCatalog};
use crate::workflows::wws::service::RentCheckService;

pub(super) const EPSILON: f64 = 1e-9;

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub(super) fn assessment_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 10, 1).expect("valid date")
}

pub(super) fn schedule() -> RentSchedule {
    RentSchedule::provisional_2025()
}

/// Schedule with a non-zero base rent so the formula terms are distinguishable.
pub(super) fn schedule_with_base() -> RentSchedule {
    RentSchedule {
        rent_formula: RentFormula {
            base_rent: 100.0,
            points_rate: 5.0,
            upper_bound: 900.07,
        },
        ..RentSchedule::provisional_2025()
    }
}

pub(super) fn service() -> RentCheckService {
    RentCheckService::new(Arc::new(ScheduleCatalog::provisional()))
}

/// Scenario A: counter ≥2m, 20 m² private, label C, 5 m² balcony, modest WOZ value.
pub(super) fn independent_unit() -> HousingUnit {
    HousingUnit {
        kitchen: KitchenSpec {
            counter_length: Some(CounterLength::TwoMetresOrMore),
            ..KitchenSpec::default()
        },
        surface: SurfaceSpec {
            private_area: 20.0,
            ..SurfaceSpec::default()
        },
        energy: EnergySpec {
            label: Some(EnergyLabel::C),
        },
        outdoor: OutdoorSpec {
            private_area: 5.0,
            ..OutdoorSpec::default()
        },
        woz: WozSpec {
            assessed_value: Some(70_730.0),
        },
        ..HousingUnit::new(HousingType::Independent)
    }
}

/// Student room sharing kitchen and bathroom with three other households.
pub(super) fn shared_room() -> HousingUnit {
    HousingUnit {
        kitchen: KitchenSpec {
            counter_length: Some(CounterLength::TwoMetresOrMore),
            appliances: vec![
                Appliance::standard(ApplianceKind::HobCeramic),
                Appliance::standard(ApplianceKind::Fridge),
                Appliance::standard(ApplianceKind::OvenCombi),
                Appliance::standard(ApplianceKind::ExtractorHood),
                Appliance::standard(ApplianceKind::Freezer),
                Appliance::standard(ApplianceKind::HobGas),
            ],
            shared: true,
            sharer_count: Some(4),
        },
        sanitary: SanitarySpec {
            toilet: Some(ToiletType::Standard),
            toilet_in_bathroom: false,
            facilities: vec![
                SanitaryFacility::standard(SanitaryFacilityKind::Washbasin),
                SanitaryFacility::standard(SanitaryFacilityKind::Shower),
            ],
            heating: Some(HeatingType::Central),
            heated_rooms: 1,
            thermostat_valves: true,
            thermostat_valve_count: 1,
            shared: true,
            sharer_count: Some(4),
        },
        surface: SurfaceSpec {
            private_area: 16.0,
            shared_area: 40.0,
            sharer_count: Some(4),
        },
        energy: EnergySpec {
            label: Some(EnergyLabel::A),
        },
        outdoor: OutdoorSpec {
            private_area: 0.0,
            shared_area: 20.0,
            sharer_count: Some(4),
        },
        woz: WozSpec {
            assessed_value: Some(450_000.0),
        },
        current_rent: Some(650.0),
        ..HousingUnit::new(HousingType::NonIndependent)
    }
}

pub(super) fn request(housing_type: &str) -> AssessmentRequest {
    AssessmentRequest {
        housing_type: Some(housing_type.to_string()),
        ..AssessmentRequest::default()
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
