use serde::{Deserialize, Serialize};

use super::super::domain::WozSpec;
use super::super::sharing::round2;

/// WOZ section result. `cap` is the ceiling derived from the other five sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WozPoints {
    pub raw_points: f64,
    pub cap: f64,
    pub capped_points: f64,
    pub applied: bool,
}

/// Shared housing does not use the independent WOZ formula.
pub fn not_applied() -> WozPoints {
    WozPoints {
        raw_points: 0.0,
        cap: 0.0,
        capped_points: 0.0,
        applied: false,
    }
}

/// Convert the assessed value into points and cap them at `cap_ratio` of the points scored
/// by the other sections.
///
/// The cap is applied unconditionally. Regulation lifts it above a rent level around
/// €879.66, but without the exact rule that exception is left out.
pub fn score(spec: &WozSpec, rate_per_point: f64, cap_ratio: f64, other_points: f64) -> WozPoints {
    let cap = other_points * cap_ratio;

    let value = match spec.assessed_value {
        Some(value) if value > 0.0 && rate_per_point > 0.0 => value,
        _ => {
            return WozPoints {
                raw_points: 0.0,
                cap,
                capped_points: 0.0,
                applied: true,
            }
        }
    };

    let raw_points = value / rate_per_point;
    let capped_points = round2(raw_points.min(cap));

    WozPoints {
        raw_points,
        cap,
        capped_points,
        applied: true,
    }
}
