use serde::{Deserialize, Serialize};

use super::lookup::{MaxRent, RentCategory, RentCeiling};
use super::sharing::round2;

/// Headline verdict shown alongside the rent result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RentStatus {
    /// No statutory ceiling applies.
    MarketRate,
    Overpaying,
    FairPrice,
}

impl RentStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RentStatus::MarketRate => "Liberalized Sector",
            RentStatus::Overpaying => "Overpaying",
            RentStatus::FairPrice => "Fair Price",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentResult {
    pub max_rent: MaxRent,
    pub category: RentCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_rent: Option<f64>,
    pub is_overpaying: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overpayment_amount: Option<f64>,
}

impl RentResult {
    pub fn status(&self) -> RentStatus {
        if matches!(self.max_rent, MaxRent::Uncapped) {
            RentStatus::MarketRate
        } else if self.is_overpaying {
            RentStatus::Overpaying
        } else {
            RentStatus::FairPrice
        }
    }
}

/// Compare the tenant's current rent with the ceiling. Without a current rent, or without a
/// ceiling, the tenant is never overpaying.
pub fn evaluate_overpayment(ceiling: RentCeiling, current_rent: Option<f64>) -> RentResult {
    let overpayment_amount = match (ceiling.max_rent, current_rent) {
        (MaxRent::Capped(max_rent), Some(current)) if current > max_rent => {
            Some(round2(current - max_rent))
        }
        _ => None,
    };

    RentResult {
        max_rent: ceiling.max_rent,
        category: ceiling.category,
        current_rent,
        is_overpaying: overpayment_amount.is_some(),
        overpayment_amount,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn social(max_rent: f64) -> RentCeiling {
        RentCeiling {
            category: RentCategory::Social,
            max_rent: MaxRent::Capped(max_rent),
        }
    }

    #[test]
    fn flags_rent_above_the_ceiling() {
        let result = evaluate_overpayment(social(899.41), Some(949.41));

        assert!(result.is_overpaying);
        assert_eq!(result.overpayment_amount, Some(50.0));
        assert_eq!(result.status(), RentStatus::Overpaying);
    }

    #[test]
    fn rent_at_the_ceiling_is_fair() {
        let result = evaluate_overpayment(social(700.0), Some(700.0));

        assert!(!result.is_overpaying);
        assert_eq!(result.overpayment_amount, None);
        assert_eq!(result.status(), RentStatus::FairPrice);
    }

    #[test]
    fn missing_rent_is_never_overpaying() {
        let result = evaluate_overpayment(social(700.0), None);
        assert!(!result.is_overpaying);
        assert_eq!(result.current_rent, None);
    }

    #[test]
    fn uncapped_rent_is_never_overpaying() {
        let ceiling = RentCeiling {
            category: RentCategory::Liberalized,
            max_rent: MaxRent::Uncapped,
        };
        let result = evaluate_overpayment(ceiling, Some(5_000.0));

        assert!(!result.is_overpaying);
        assert_eq!(result.overpayment_amount, None);
        assert_eq!(result.status(), RentStatus::MarketRate);
    }
}
