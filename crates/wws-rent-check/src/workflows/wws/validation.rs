use super::domain::{AssessmentRequest, HousingType, HousingUnit};

/// Raised when the housing-type discriminant is missing or not recognized. Every section
/// branches on it, so the assessment cannot start without it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("housing type required (field `housing_type`)")]
    MissingHousingType,
    #[error("housing type required (field `housing_type`): unrecognized value {0:?}")]
    UnrecognizedHousingType(String),
}

impl ValidationError {
    pub const fn field(&self) -> &'static str {
        "housing_type"
    }
}

/// Resolve the housing type and hand back a unit ready for scoring. Optional attributes are
/// passed through untouched; missing ones contribute zero downstream.
pub fn validate(request: AssessmentRequest) -> Result<HousingUnit, ValidationError> {
    let AssessmentRequest {
        housing_type,
        kitchen,
        sanitary,
        surface,
        energy,
        outdoor,
        woz,
        current_rent,
        address,
    } = request;

    let raw = housing_type
        .filter(|value| !value.trim().is_empty())
        .ok_or(ValidationError::MissingHousingType)?;
    let housing_type =
        HousingType::parse(&raw).ok_or(ValidationError::UnrecognizedHousingType(raw))?;

    Ok(HousingUnit {
        housing_type,
        kitchen,
        sanitary,
        surface,
        energy,
        outdoor,
        woz,
        current_rent,
        address,
    })
}
