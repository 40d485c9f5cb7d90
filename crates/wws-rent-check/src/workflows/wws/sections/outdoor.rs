use serde::{Deserialize, Serialize};

use super::super::domain::OutdoorSpec;
use super::super::sharing::allocate_shared;

const BASE_POINTS: f64 = 2.0;
const POINTS_PER_SQUARE_METRE: f64 = 0.35;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutdoorPoints {
    pub private_points: f64,
    pub shared_points: f64,
    pub total: f64,
}

/// Points for a single outdoor space of `area` m²: a fixed base plus a per-m² amount.
pub fn space_points(area: f64) -> f64 {
    if area > 0.0 {
        BASE_POINTS + POINTS_PER_SQUARE_METRE * area
    } else {
        0.0
    }
}

pub fn score_private(spec: &OutdoorSpec) -> OutdoorPoints {
    let private_points = space_points(spec.private_area);
    OutdoorPoints {
        private_points,
        shared_points: 0.0,
        total: private_points,
    }
}

/// Private space plus this household's share of a common garden or roof terrace. Shared
/// space without a sharer count scores nothing.
pub fn score_with_shared(spec: &OutdoorSpec) -> OutdoorPoints {
    let private_points = space_points(spec.private_area);
    let shared_points = match spec.sharer_count {
        Some(count) if count > 0 => allocate_shared(space_points(spec.shared_area), count),
        _ => 0.0,
    };

    OutdoorPoints {
        private_points,
        shared_points,
        total: private_points + shared_points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn private_space_earns_base_plus_area() {
        let spec = OutdoorSpec {
            private_area: 5.0,
            ..OutdoorSpec::default()
        };
        let points = score_private(&spec);
        assert!((points.total - 3.75).abs() < 1e-9);
    }

    #[test]
    fn no_space_scores_zero() {
        assert_eq!(score_private(&OutdoorSpec::default()).total, 0.0);
        assert_eq!(score_with_shared(&OutdoorSpec::default()).total, 0.0);
    }

    #[test]
    fn shared_space_is_divided() {
        let spec = OutdoorSpec {
            private_area: 0.0,
            shared_area: 40.0,
            sharer_count: Some(4),
        };
        let points = score_with_shared(&spec);
        assert_eq!(points.shared_points, 4.0);
    }

    #[test]
    fn shared_space_without_sharers_is_ignored() {
        let spec = OutdoorSpec {
            private_area: 0.0,
            shared_area: 40.0,
            sharer_count: None,
        };
        assert_eq!(score_with_shared(&spec).shared_points, 0.0);
    }
}
