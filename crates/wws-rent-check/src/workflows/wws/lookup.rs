use std::fmt;

use serde::{Deserialize, Serialize};

use super::schedule::RentSchedule;
use super::sharing::round2;

/// Rent sector a unit falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RentCategory {
    Social,
    /// Accepted in stored payloads; [`lookup_rent`] never yields it, since the point lookup
    /// has a single cliff between `Social` and `Liberalized`.
    MidRange,
    Liberalized,
}

impl RentCategory {
    pub const fn label(self) -> &'static str {
        match self {
            RentCategory::Social => "Social Sector",
            RentCategory::MidRange => "Mid-range",
            RentCategory::Liberalized => "Liberalized Sector (Market Price)",
        }
    }
}

/// Maximum legal bare rent. Above the liberalization threshold there is no ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxRent {
    Capped(f64),
    Uncapped,
}

impl MaxRent {
    pub fn amount(self) -> Option<f64> {
        match self {
            MaxRent::Capped(amount) => Some(amount),
            MaxRent::Uncapped => None,
        }
    }
}

impl fmt::Display for MaxRent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaxRent::Capped(amount) => write!(f, "€{amount:.2}"),
            MaxRent::Uncapped => write!(f, "market rate, no legal ceiling"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RentCeiling {
    pub category: RentCategory,
    pub max_rent: MaxRent,
}

/// Map a point total onto the sector and maximum rent of `schedule`.
pub fn lookup_rent(total_points: f64, schedule: &RentSchedule) -> RentCeiling {
    if total_points >= schedule.liberalization_threshold {
        return RentCeiling {
            category: RentCategory::Liberalized,
            max_rent: MaxRent::Uncapped,
        };
    }

    let amount = round2(schedule.rent_formula.max_rent(total_points));
    RentCeiling {
        category: RentCategory::Social,
        max_rent: MaxRent::Capped(amount),
    }
}
