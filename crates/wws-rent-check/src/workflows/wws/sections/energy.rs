use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::super::domain::EnergyLabel;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnergyPoints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<EnergyLabel>,
    pub points: f64,
}

/// Look the label up in the schedule's table. Unknown, absent or unlisted labels score zero.
pub fn score(label: Option<EnergyLabel>, table: &BTreeMap<EnergyLabel, f64>) -> EnergyPoints {
    let points = match label {
        Some(EnergyLabel::Unknown) | None => 0.0,
        Some(known) => table.get(&known).copied().unwrap_or(0.0),
    };
    EnergyPoints { label, points }
}

/// Shared housing is not scored on its energy label.
pub fn unscored(label: Option<EnergyLabel>) -> EnergyPoints {
    EnergyPoints { label, points: 0.0 }
}
