use std::sync::Arc;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::breakdown::{score_unit, PointBreakdown};
use super::domain::{AssessmentRequest, HousingType, HousingUnit};
use super::lookup::lookup_rent;
use super::overpayment::{evaluate_overpayment, RentResult, RentStatus};
use super::schedule::{ConfigurationError, ScheduleCatalog};
use super::validation::{validate, ValidationError};

/// Service running the full pipeline: validation, section scoring, rent lookup and the
/// overpayment check.
#[derive(Debug, Clone)]
pub struct RentCheckService {
    catalog: Arc<ScheduleCatalog>,
}

impl RentCheckService {
    pub fn new(catalog: Arc<ScheduleCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &ScheduleCatalog {
        &self.catalog
    }

    /// Validate and assess a raw request using the schedule effective on `as_of`.
    pub fn assess(
        &self,
        request: AssessmentRequest,
        as_of: NaiveDate,
    ) -> Result<Assessment, AssessmentError> {
        let unit = validate(request)?;
        self.assess_unit(&unit, as_of)
    }

    pub fn assess_unit(
        &self,
        unit: &HousingUnit,
        as_of: NaiveDate,
    ) -> Result<Assessment, AssessmentError> {
        let schedule = self.catalog.effective_on(as_of)?;

        let breakdown = score_unit(unit, schedule);
        let ceiling = lookup_rent(breakdown.total_points, schedule);
        let rent = evaluate_overpayment(ceiling, unit.current_rent);
        let status = rent.status();

        debug!(
            housing_type = unit.housing_type.label(),
            schedule = %schedule.label,
            total_points = breakdown.total_points,
            category = ?rent.category,
            "wws assessment computed"
        );
        if let Some(amount) = rent.overpayment_amount {
            info!(
                total_points = breakdown.total_points,
                max_rent = %rent.max_rent,
                overpayment = amount,
                "current rent exceeds the legal maximum"
            );
        }

        Ok(Assessment {
            housing_type: unit.housing_type,
            as_of,
            schedule_label: schedule.label.clone(),
            schedule_effective_from: schedule.effective_from,
            breakdown,
            rent,
            status,
            address: unit.address.clone(),
        })
    }
}

impl Default for RentCheckService {
    fn default() -> Self {
        Self::new(Arc::new(ScheduleCatalog::provisional()))
    }
}

/// Complete assessment handed to callers and downstream letter generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessment {
    pub housing_type: HousingType,
    pub as_of: NaiveDate,
    pub schedule_label: String,
    pub schedule_effective_from: NaiveDate,
    pub breakdown: PointBreakdown,
    pub rent: RentResult,
    pub status: RentStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

/// Error raised by the rent check service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}
