use serde::{Deserialize, Serialize};

use super::super::domain::{HousingUnit, SurfaceSpec};

const POINTS_PER_SQUARE_METRE: f64 = 1.0;

/// Where the divisor for shared floor area came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SharerSource {
    /// Supplied on the surface section itself.
    Explicit,
    /// Borrowed from the kitchen sharer count.
    KitchenProxy,
    /// Borrowed from the sanitary sharer count.
    SanitaryProxy,
    /// Nothing supplied; the tenant is assumed to be the only user.
    Assumed,
}

impl SharerSource {
    pub const fn is_inferred(self) -> bool {
        !matches!(self, SharerSource::Explicit)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfacePoints {
    pub private_points: f64,
    pub shared_points: f64,
    pub total: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharer_count: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sharer_source: Option<SharerSource>,
}

/// Resolve the households sharing the common floor area. The surface section's own count
/// wins; otherwise the kitchen and then sanitary counts stand in, which assumes the same
/// households share every facility.
pub fn resolve_sharers(unit: &HousingUnit) -> (u32, SharerSource) {
    let positive = |count: Option<u32>| count.filter(|value| *value > 0);

    if let Some(count) = positive(unit.surface.sharer_count) {
        return (count, SharerSource::Explicit);
    }
    if let Some(count) = positive(unit.kitchen.sharer_count) {
        return (count, SharerSource::KitchenProxy);
    }
    if let Some(count) = positive(unit.sanitary.sharer_count) {
        return (count, SharerSource::SanitaryProxy);
    }
    (1, SharerSource::Assumed)
}

pub fn private_points(spec: &SurfaceSpec) -> f64 {
    spec.private_area.max(0.0) * POINTS_PER_SQUARE_METRE
}

/// Private floor area only.
pub fn score_private(spec: &SurfaceSpec) -> SurfacePoints {
    let private_points = private_points(spec);
    SurfacePoints {
        private_points,
        shared_points: 0.0,
        total: private_points,
        sharer_count: None,
        sharer_source: None,
    }
}

/// Private floor area plus this household's share of the common floor area.
pub fn score_with_shared(spec: &SurfaceSpec, sharers: (u32, SharerSource)) -> SurfacePoints {
    let private_points = private_points(spec);
    if spec.shared_area <= 0.0 {
        return score_private(spec);
    }

    let (count, source) = sharers;
    let shared_points = spec.shared_area / f64::from(count.max(1)) * POINTS_PER_SQUARE_METRE;

    SurfacePoints {
        private_points,
        shared_points,
        total: private_points + shared_points,
        sharer_count: Some(count),
        sharer_source: Some(source),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::wws::domain::HousingType;

    fn shared_unit() -> HousingUnit {
        let mut unit = HousingUnit::new(HousingType::NonIndependent);
        unit.surface = SurfaceSpec {
            private_area: 14.0,
            shared_area: 30.0,
            sharer_count: None,
        };
        unit
    }

    #[test]
    fn explicit_surface_sharers_take_precedence() {
        let mut unit = shared_unit();
        unit.surface.sharer_count = Some(5);
        unit.kitchen.sharer_count = Some(3);

        assert_eq!(resolve_sharers(&unit), (5, SharerSource::Explicit));
    }

    #[test]
    fn falls_back_to_kitchen_then_sanitary() {
        let mut unit = shared_unit();
        unit.sanitary.sharer_count = Some(4);
        assert_eq!(resolve_sharers(&unit), (4, SharerSource::SanitaryProxy));

        unit.kitchen.sharer_count = Some(3);
        assert_eq!(resolve_sharers(&unit), (3, SharerSource::KitchenProxy));

        let bare = shared_unit();
        assert_eq!(resolve_sharers(&bare), (1, SharerSource::Assumed));
    }

    #[test]
    fn shared_area_is_divided_among_sharers() {
        let unit = shared_unit();
        let points = score_with_shared(&unit.surface, (3, SharerSource::KitchenProxy));

        assert_eq!(points.private_points, 14.0);
        assert_eq!(points.shared_points, 10.0);
        assert_eq!(points.total, 24.0);
        assert_eq!(points.sharer_source, Some(SharerSource::KitchenProxy));
    }

    #[test]
    fn no_shared_area_means_private_only() {
        let spec = SurfaceSpec {
            private_area: 20.0,
            ..SurfaceSpec::default()
        };
        let points = score_with_shared(&spec, (2, SharerSource::Explicit));

        assert_eq!(points.total, 20.0);
        assert_eq!(points.sharer_source, None);
    }
}
